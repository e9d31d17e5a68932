//! Plain-text email draft of a payslip and its `mailto:` link.
//!
//! The draft is handed to the host's mail client; nothing is sent from here.

use crate::document::PayslipDocument;
use crate::format::{format_date, format_rupiah};
use crate::line_item::Collection;
use crate::preview::BASIC_SALARY_LABEL;
use std::fmt;

const SEPARATOR: &str = "----------------------------------";

/// Subject and body of a payslip email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailDraft {
    /// Left blank for the user to fill in.
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// Compose a draft from the current document state.
    pub fn compose(doc: &PayslipDocument) -> Self {
        let header = &doc.header;
        let subject = format!(
            "Slip Gaji {} - Periode {} s/d {}",
            header.employee_name,
            format_date(&header.pay_period_start),
            format_date(&header.pay_period_end)
        );

        Self {
            recipient: String::new(),
            subject,
            body: Body(doc).to_string(),
        }
    }

    /// `mailto:` link carrying the subject and body.
    pub fn mailto_link(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Plain-text email body of a document.
struct Body<'a>(&'a PayslipDocument);

impl Body<'_> {
    fn write_items(&self, f: &mut fmt::Formatter<'_>, collection: Collection) -> fmt::Result {
        for item in self.0.store.items(collection) {
            writeln!(f, "{}: {}", item.label, format_rupiah(item.value))?;
        }
        Ok(())
    }
}

impl fmt::Display for Body<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let header = &doc.header;
        let totals = doc.totals();

        writeln!(f, "SLIP GAJI KARYAWAN")?;
        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "Perusahaan: {}\n", header.company_name)?;
        writeln!(f, "Nama Karyawan: {}", header.employee_name)?;
        writeln!(f, "ID Karyawan: {}", header.employee_id)?;
        writeln!(f, "Jabatan: {}", header.position)?;
        writeln!(
            f,
            "Periode: {} s/d {}",
            format_date(&header.pay_period_start),
            format_date(&header.pay_period_end)
        )?;
        writeln!(f, "{SEPARATOR}\n")?;

        writeln!(f, "PENDAPATAN")?;
        writeln!(
            f,
            "{}: {}",
            BASIC_SALARY_LABEL,
            format_rupiah(doc.basic_salary())
        )?;
        self.write_items(f, Collection::Earnings)?;
        writeln!(f, "TOTAL PENDAPATAN: {}\n", format_rupiah(totals.total_earnings))?;

        if !doc.store.items(Collection::Commissions).is_empty() {
            writeln!(f, "KOMISI")?;
            self.write_items(f, Collection::Commissions)?;
            writeln!(f, "TOTAL KOMISI: {}\n", format_rupiah(totals.total_commissions))?;
        }

        writeln!(f, "POTONGAN")?;
        self.write_items(f, Collection::Deductions)?;
        writeln!(f, "TOTAL POTONGAN: {}\n", format_rupiah(totals.total_deductions))?;

        writeln!(f, "{SEPARATOR}")?;
        writeln!(f, "GAJI DITERIMA: {}", format_rupiah(totals.net_salary))?;
        writeln!(f, "{SEPARATOR}")
    }
}

/// Percent-encode everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
