//! The payslip document: header fields plus the line-item store.

use crate::error::PayslipError;
use crate::line_item::{Collection, Field, LineItemId};
use crate::store::{LineItemStore, Totals};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Free-text fields shown at the top of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    CompanyName,
    CompanyAddress,
    EmployeeName,
    EmployeeId,
    Position,
    PayPeriodStart,
    PayPeriodEnd,
    PayDate,
}

impl HeaderField {
    pub const ALL: [HeaderField; 8] = [
        HeaderField::CompanyName,
        HeaderField::CompanyAddress,
        HeaderField::EmployeeName,
        HeaderField::EmployeeId,
        HeaderField::Position,
        HeaderField::PayPeriodStart,
        HeaderField::PayPeriodEnd,
        HeaderField::PayDate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HeaderField::CompanyName => "company-name",
            HeaderField::CompanyAddress => "company-address",
            HeaderField::EmployeeName => "employee-name",
            HeaderField::EmployeeId => "employee-id",
            HeaderField::Position => "position",
            HeaderField::PayPeriodStart => "pay-period-start",
            HeaderField::PayPeriodEnd => "pay-period-end",
            HeaderField::PayDate => "pay-date",
        }
    }

    /// Form label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            HeaderField::CompanyName => "Nama Perusahaan",
            HeaderField::CompanyAddress => "Alamat Perusahaan",
            HeaderField::EmployeeName => "Nama Karyawan",
            HeaderField::EmployeeId => "ID Karyawan",
            HeaderField::Position => "Jabatan",
            HeaderField::PayPeriodStart => "Periode Awal",
            HeaderField::PayPeriodEnd => "Periode Akhir",
            HeaderField::PayDate => "Tanggal Pembayaran",
        }
    }

    /// True for fields holding a `YYYY-MM-DD` date.
    pub fn is_date(&self) -> bool {
        matches!(
            self,
            HeaderField::PayPeriodStart | HeaderField::PayPeriodEnd | HeaderField::PayDate
        )
    }
}

impl FromStr for HeaderField {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        HeaderField::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| PayslipError::UnknownHeaderField(s.to_string()))
    }
}

/// A `NAME=VALUE` header assignment, e.g. `company-name=PT Maju Jaya`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderAssignment {
    pub field: HeaderField,
    pub value: String,
}

impl FromStr for HeaderAssignment {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| PayslipError::InvalidAssignment(s.to_string()))?;
        Ok(Self {
            field: name.parse()?,
            value: value.to_string(),
        })
    }
}

/// Header values as entered; dates are kept as raw input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub company_name: String,
    pub company_address: String,
    pub employee_name: String,
    pub employee_id: String,
    pub position: String,
    pub pay_period_start: String,
    pub pay_period_end: String,
    pub pay_date: String,
}

impl Header {
    pub fn get(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::CompanyName => &self.company_name,
            HeaderField::CompanyAddress => &self.company_address,
            HeaderField::EmployeeName => &self.employee_name,
            HeaderField::EmployeeId => &self.employee_id,
            HeaderField::Position => &self.position,
            HeaderField::PayPeriodStart => &self.pay_period_start,
            HeaderField::PayPeriodEnd => &self.pay_period_end,
            HeaderField::PayDate => &self.pay_date,
        }
    }

    pub fn set(&mut self, field: HeaderField, value: impl Into<String>) {
        let slot = match field {
            HeaderField::CompanyName => &mut self.company_name,
            HeaderField::CompanyAddress => &mut self.company_address,
            HeaderField::EmployeeName => &mut self.employee_name,
            HeaderField::EmployeeId => &mut self.employee_id,
            HeaderField::Position => &mut self.position,
            HeaderField::PayPeriodStart => &mut self.pay_period_start,
            HeaderField::PayPeriodEnd => &mut self.pay_period_end,
            HeaderField::PayDate => &mut self.pay_date,
        };
        *slot = value.into();
    }
}

/// A complete payslip owned by one editing session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayslipDocument {
    pub header: Header,
    pub store: LineItemStore,
}

impl PayslipDocument {
    /// Empty header and empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty header with the default earnings and deductions.
    pub fn seeded() -> Self {
        Self {
            header: Header::default(),
            store: LineItemStore::seeded(),
        }
    }

    pub fn set_header(&mut self, field: HeaderField, value: impl Into<String>) {
        self.header.set(field, value);
    }

    pub fn basic_salary(&self) -> Decimal {
        self.store.basic_salary()
    }

    pub fn set_basic_salary(&mut self, text: &str) {
        self.store.set_basic_salary(text);
    }

    pub fn add_item(
        &mut self,
        collection: Collection,
        label: impl Into<String>,
        value: Decimal,
    ) -> LineItemId {
        self.store.add(collection, label, value)
    }

    pub fn update_item(
        &mut self,
        collection: Collection,
        id: LineItemId,
        field: Field,
        new_value: &str,
    ) -> bool {
        self.store.update(collection, id, field, new_value)
    }

    pub fn remove_item(&mut self, collection: Collection, id: LineItemId) {
        self.store.remove(collection, id);
    }

    pub fn totals(&self) -> Totals {
        self.store.totals()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_header_set_and_get() {
        let mut doc = PayslipDocument::new();
        for field in HeaderField::ALL {
            doc.set_header(field, field.label());
        }
        for field in HeaderField::ALL {
            assert_eq!(doc.header.get(field), field.label());
        }
    }

    #[test]
    fn test_parse_header_field() {
        assert_eq!(
            "company-name".parse::<HeaderField>(),
            Ok(HeaderField::CompanyName)
        );
        assert_eq!("pay_date".parse::<HeaderField>(), Ok(HeaderField::PayDate));
        assert_eq!(
            "salary".parse::<HeaderField>(),
            Err(PayslipError::UnknownHeaderField("salary".to_string()))
        );
    }

    #[test]
    fn test_parse_header_assignment() {
        let assignment: HeaderAssignment = "company-name=PT A=B".parse().unwrap();
        assert_eq!(assignment.field, HeaderField::CompanyName);
        assert_eq!(assignment.value, "PT A=B");

        let assignment: HeaderAssignment = "pay_date=".parse().unwrap();
        assert_eq!(assignment.field, HeaderField::PayDate);
        assert!(assignment.value.is_empty());

        assert_eq!(
            "company-name".parse::<HeaderAssignment>(),
            Err(PayslipError::InvalidAssignment("company-name".to_string()))
        );
        assert_eq!(
            "salary=1".parse::<HeaderAssignment>(),
            Err(PayslipError::UnknownHeaderField("salary".to_string()))
        );
    }

    #[test]
    fn test_date_fields() {
        let dates: Vec<_> = HeaderField::ALL
            .into_iter()
            .filter(HeaderField::is_date)
            .collect();
        assert_eq!(
            dates,
            vec![
                HeaderField::PayPeriodStart,
                HeaderField::PayPeriodEnd,
                HeaderField::PayDate
            ]
        );
    }

    #[test]
    fn test_document_delegates_to_store() {
        let mut doc = PayslipDocument::seeded();
        doc.set_basic_salary("4000000");
        let id = doc.add_item(Collection::Commissions, "Target", dec!(100000));
        assert!(doc.update_item(Collection::Commissions, id, Field::Value, "125000"));

        let totals = doc.totals();
        assert_eq!(totals.total_earnings, dec!(5000000));
        assert_eq!(totals.total_commissions, dec!(125000));
        assert_eq!(totals.net_salary, dec!(4875000));

        doc.remove_item(Collection::Commissions, id);
        assert!(doc.store.items(Collection::Commissions).is_empty());
    }

    #[test]
    fn test_seeded_header_is_empty() {
        let doc = PayslipDocument::seeded();
        assert_eq!(doc.header, Header::default());
        assert_eq!(doc.store.items(Collection::Earnings).len(), 3);
        assert_eq!(doc.store.items(Collection::Deductions).len(), 2);
    }
}
