//! Read-only projection of a document for display.
//!
//! The preview is rebuilt in full from the document on every change; there is
//! no incremental diffing.

use crate::document::{HeaderField, PayslipDocument};
use crate::format::{format_date, format_rupiah};
use crate::line_item::Collection;
use std::fmt;

/// Label of the basic salary row, always first among earnings.
pub const BASIC_SALARY_LABEL: &str = "Gaji Pokok";

/// One displayed `(label, amount)` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub label: String,
    pub amount: String,
}

/// Header values ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewHeader {
    pub company_name: String,
    pub company_address: String,
    pub employee_name: String,
    pub employee_id: String,
    pub position: String,
    pub pay_period_start: String,
    pub pay_period_end: String,
    pub pay_date: String,
}

/// Formatted totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTotals {
    pub total_earnings: String,
    pub total_commissions: String,
    pub total_deductions: String,
    pub net_salary: String,
}

/// Everything the preview pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub header: PreviewHeader,
    pub earnings: Vec<PreviewRow>,
    pub commissions: Vec<PreviewRow>,
    pub deductions: Vec<PreviewRow>,
    pub totals: PreviewTotals,
}

fn header_text(doc: &PayslipDocument, field: HeaderField) -> String {
    let raw = doc.header.get(field);
    if field.is_date() {
        format_date(raw)
    } else {
        raw.to_string()
    }
}

fn rows(doc: &PayslipDocument, collection: Collection) -> Vec<PreviewRow> {
    doc.store
        .items(collection)
        .iter()
        .map(|item| PreviewRow {
            label: item.label.clone(),
            amount: format_rupiah(item.value),
        })
        .collect()
}

impl Preview {
    pub fn from_document(doc: &PayslipDocument) -> Self {
        let header = PreviewHeader {
            company_name: header_text(doc, HeaderField::CompanyName),
            company_address: header_text(doc, HeaderField::CompanyAddress),
            employee_name: header_text(doc, HeaderField::EmployeeName),
            employee_id: header_text(doc, HeaderField::EmployeeId),
            position: header_text(doc, HeaderField::Position),
            pay_period_start: header_text(doc, HeaderField::PayPeriodStart),
            pay_period_end: header_text(doc, HeaderField::PayPeriodEnd),
            pay_date: header_text(doc, HeaderField::PayDate),
        };

        let mut earnings = vec![PreviewRow {
            label: BASIC_SALARY_LABEL.to_string(),
            amount: format_rupiah(doc.basic_salary()),
        }];
        earnings.extend(rows(doc, Collection::Earnings));

        let totals = doc.totals();
        Self {
            header,
            earnings,
            commissions: rows(doc, Collection::Commissions),
            deductions: rows(doc, Collection::Deductions),
            totals: PreviewTotals {
                total_earnings: format_rupiah(totals.total_earnings),
                total_commissions: format_rupiah(totals.total_commissions),
                total_deductions: format_rupiah(totals.total_deductions),
                net_salary: format_rupiah(totals.net_salary),
            },
        }
    }

    /// Rows of one section; earnings include the basic salary row.
    pub fn section(&self, collection: Collection) -> &[PreviewRow] {
        match collection {
            Collection::Earnings => &self.earnings,
            Collection::Commissions => &self.commissions,
            Collection::Deductions => &self.deductions,
        }
    }

    /// Formatted total of one section, with its caption.
    pub fn section_total(&self, collection: Collection) -> (&'static str, &str) {
        match collection {
            Collection::Earnings => ("Total Pendapatan", &self.totals.total_earnings),
            Collection::Commissions => ("Total Komisi", &self.totals.total_commissions),
            Collection::Deductions => ("Total Potongan", &self.totals.total_deductions),
        }
    }
}

/// Width of the plain-text payslip.
const TEXT_WIDTH: usize = 48;

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, amount: &str) -> fmt::Result {
    let used = label.chars().count() + amount.chars().count();
    let pad = TEXT_WIDTH.saturating_sub(used).max(1);
    writeln!(f, "{label}{:pad$}{amount}", "")
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(TEXT_WIDTH);
        let thin = "-".repeat(TEXT_WIDTH);
        let h = &self.header;

        writeln!(f, "{rule}")?;
        writeln!(f, "SLIP GAJI")?;
        writeln!(f, "{}", h.company_name)?;
        if !h.company_address.is_empty() {
            writeln!(f, "{}", h.company_address)?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "Nama Karyawan : {}", h.employee_name)?;
        writeln!(f, "ID Karyawan   : {}", h.employee_id)?;
        writeln!(f, "Jabatan       : {}", h.position)?;
        writeln!(f, "Periode       : {} s/d {}", h.pay_period_start, h.pay_period_end)?;
        writeln!(f, "Tanggal Bayar : {}", h.pay_date)?;

        for collection in Collection::ALL {
            writeln!(f, "{thin}")?;
            writeln!(f, "{}", collection.title().to_uppercase())?;
            for row in self.section(collection) {
                write_row(f, &row.label, &row.amount)?;
            }
            let (caption, total) = self.section_total(collection);
            write_row(f, caption, total)?;
        }

        writeln!(f, "{rule}")?;
        write_row(f, "Gaji Diterima", &self.totals.net_salary)?;
        writeln!(f, "{rule}")
    }
}
