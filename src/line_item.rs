//! Line items and the names used to address them.

use crate::error::PayslipError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Identifier of a line item, unique within the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineItemId(u64);

impl LineItemId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for LineItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id source. Ids are never reused, even after removal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn next_id(&mut self) -> LineItemId {
        self.next += 1;
        LineItemId(self.next)
    }
}

/// A labeled amount in one of the payslip collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    id: LineItemId,
    pub label: String,
    pub value: Decimal,
}

impl LineItem {
    pub(crate) fn new(id: LineItemId, label: String, value: Decimal) -> Self {
        Self { id, label, value }
    }

    pub fn id(&self) -> LineItemId {
        self.id
    }
}

/// The three line-item collections of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Earnings,
    Commissions,
    Deductions,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Earnings,
        Collection::Commissions,
        Collection::Deductions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Earnings => "earnings",
            Collection::Commissions => "commissions",
            Collection::Deductions => "deductions",
        }
    }

    /// Section heading used on the payslip.
    pub fn title(&self) -> &'static str {
        match self {
            Collection::Earnings => "Pendapatan",
            Collection::Commissions => "Komisi",
            Collection::Deductions => "Potongan",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Collection {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "earnings" | "earning" => Ok(Collection::Earnings),
            "commissions" | "commission" => Ok(Collection::Commissions),
            "deductions" | "deduction" => Ok(Collection::Deductions),
            _ => Err(PayslipError::UnknownCollection(s.to_string())),
        }
    }
}

/// Editable field of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Label,
    Value,
}

impl FromStr for Field {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" => Ok(Field::Label),
            "value" => Ok(Field::Value),
            _ => Err(PayslipError::UnknownField(s.to_string())),
        }
    }
}

/// A `LABEL=AMOUNT` pair, as given on the command line.
///
/// The split happens at the last `=`, so labels may contain `=`. The amount
/// is coerced like any form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub label: String,
    pub value: Decimal,
}

impl FromStr for NewLineItem {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (label, amount) = s
            .rsplit_once('=')
            .ok_or_else(|| PayslipError::InvalidLineItem(s.to_string()))?;
        Ok(Self {
            label: label.trim().to_string(),
            value: crate::amount::coerce_amount(amount),
        })
    }
}

/// An edit of an existing item addressed by 1-based position, written
/// `COLLECTION:POSITION:FIELD=VALUE`, e.g. `earnings:2:value=350000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemEdit {
    pub collection: Collection,
    pub position: usize,
    pub field: Field,
    pub value: String,
}

impl FromStr for LineItemEdit {
    type Err = PayslipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PayslipError::InvalidEdit(s.to_string());

        let (target, value) = s.split_once('=').ok_or_else(invalid)?;
        let mut parts = target.splitn(3, ':');
        let (Some(collection), Some(position), Some(field)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let position = position.trim().parse::<usize>().map_err(|_| invalid())?;
        if position == 0 {
            return Err(invalid());
        }

        Ok(Self {
            collection: collection.parse()?,
            position,
            field: field.parse()?,
            value: value.to_string(),
        })
    }
}
