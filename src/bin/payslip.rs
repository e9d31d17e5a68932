//! CLI tool to build a payslip from flags and print it.
//!
//! Usage:
//!   payslip --employee-name "Budi" --basic-salary 5000000 --earning "Bonus=250000"
//!   payslip --empty --earning "Gaji=1000" --format email -o out/slip.txt
//!   payslip --set company-name="PT Maju Jaya" --edit earnings:2:value=350000
//!
//! Starts from the default earnings and deductions unless `--empty` is given.
//! Edits run last, so they can address items added on the same command line.

use clap::{Parser, ValueEnum};
use payslip_rs::{
    Collection, EmailDraft, HeaderAssignment, HeaderField, LineItemEdit, NewLineItem,
    PayslipDocument, Preview,
};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Plain-text payslip preview
    Preview,
    /// Email subject and body
    Email,
    /// `mailto:` link with subject and body encoded
    Mailto,
}

/// Build a payslip and print its preview, email draft or mailto link.
#[derive(Parser)]
#[command(name = "payslip")]
struct Cli {
    #[arg(long)]
    company_name: Option<String>,

    #[arg(long)]
    company_address: Option<String>,

    #[arg(long)]
    employee_name: Option<String>,

    #[arg(long)]
    employee_id: Option<String>,

    #[arg(long)]
    position: Option<String>,

    /// Pay period start (YYYY-MM-DD)
    #[arg(long)]
    pay_period_start: Option<String>,

    /// Pay period end (YYYY-MM-DD)
    #[arg(long)]
    pay_period_end: Option<String>,

    /// Pay date (YYYY-MM-DD)
    #[arg(long)]
    pay_date: Option<String>,

    /// Set a header field by name, NAME=VALUE (repeatable, applied after the
    /// dedicated header flags)
    #[arg(long = "set", value_name = "NAME=VALUE")]
    assignments: Vec<HeaderAssignment>,

    /// Basic salary; non-numeric values count as 0
    #[arg(long)]
    basic_salary: Option<String>,

    /// Add an earning, LABEL=AMOUNT (repeatable)
    #[arg(long = "earning", value_name = "LABEL=AMOUNT")]
    earnings: Vec<NewLineItem>,

    /// Add a commission, LABEL=AMOUNT (repeatable)
    #[arg(long = "commission", value_name = "LABEL=AMOUNT")]
    commissions: Vec<NewLineItem>,

    /// Add a deduction, LABEL=AMOUNT (repeatable)
    #[arg(long = "deduction", value_name = "LABEL=AMOUNT")]
    deductions: Vec<NewLineItem>,

    /// Edit an existing item by 1-based position, COLLECTION:POSITION:FIELD=VALUE
    /// (repeatable)
    #[arg(long = "edit", value_name = "COLLECTION:POSITION:FIELD=VALUE")]
    edits: Vec<LineItemEdit>,

    /// Start without the default earnings and deductions
    #[arg(long)]
    empty: bool,

    #[arg(short, long, value_enum, default_value_t = Format::Preview)]
    format: Format,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Log document edits and show totals on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn build_document(cli: &Cli) -> PayslipDocument {
    let mut doc = if cli.empty {
        PayslipDocument::new()
    } else {
        PayslipDocument::seeded()
    };

    let header_values = [
        (HeaderField::CompanyName, &cli.company_name),
        (HeaderField::CompanyAddress, &cli.company_address),
        (HeaderField::EmployeeName, &cli.employee_name),
        (HeaderField::EmployeeId, &cli.employee_id),
        (HeaderField::Position, &cli.position),
        (HeaderField::PayPeriodStart, &cli.pay_period_start),
        (HeaderField::PayPeriodEnd, &cli.pay_period_end),
        (HeaderField::PayDate, &cli.pay_date),
    ];
    for (field, value) in header_values {
        if let Some(value) = value {
            doc.set_header(field, value.as_str());
        }
    }
    for assignment in &cli.assignments {
        doc.set_header(assignment.field, assignment.value.as_str());
    }

    if let Some(salary) = &cli.basic_salary {
        doc.set_basic_salary(salary);
    }

    let additions = [
        (Collection::Earnings, &cli.earnings),
        (Collection::Commissions, &cli.commissions),
        (Collection::Deductions, &cli.deductions),
    ];
    for (collection, items) in additions {
        for item in items {
            doc.add_item(collection, item.label.clone(), item.value);
        }
    }

    for edit in &cli.edits {
        apply_edit(&mut doc, edit);
    }

    doc
}

fn apply_edit(doc: &mut PayslipDocument, edit: &LineItemEdit) {
    let target = doc
        .store
        .items(edit.collection)
        .get(edit.position - 1)
        .map(|item| item.id());

    match target {
        Some(id) => {
            doc.update_item(edit.collection, id, edit.field, &edit.value);
        }
        None => tracing::warn!(
            collection = %edit.collection,
            position = edit.position,
            "no item at position, edit ignored"
        ),
    }
}

fn render(doc: &PayslipDocument, format: Format) -> String {
    match format {
        Format::Preview => Preview::from_document(doc).to_string(),
        Format::Email => {
            let draft = EmailDraft::compose(doc);
            format!("Subject: {}\n\n{}", draft.subject, draft.body)
        }
        Format::Mailto => format!("{}\n", EmailDraft::compose(doc).mailto_link()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let doc = build_document(&cli);
    let output = render(&doc, cli.format);

    if let Some(out_path) = &cli.output {
        if let Some(parent) = Path::new(out_path.as_str()).parent()
            && !parent.as_os_str().is_empty()
            && fs::create_dir_all(parent).is_err()
        {
            eprintln!("Error creating output directory for '{out_path}'");
            process::exit(1);
        }
        if let Err(e) = fs::write(out_path, &output) {
            eprintln!("Error writing output file '{out_path}': {e}");
            process::exit(1);
        }
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {e}");
        process::exit(1);
    }

    if cli.verbose {
        let totals = doc.totals();
        eprintln!(
            "Items:    {} earnings, {} commissions, {} deductions",
            doc.store.items(Collection::Earnings).len(),
            doc.store.items(Collection::Commissions).len(),
            doc.store.items(Collection::Deductions).len()
        );
        eprintln!("Net pay:  {}", totals.net_salary);
    }
}
