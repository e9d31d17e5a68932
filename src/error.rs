//! Error types for payslip-rs.
//!
//! The store itself never fails; these errors only arise when names or
//! arguments arrive as text (CLI flags, form field identifiers).

use thiserror::Error;

/// Errors raised while interpreting textual input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayslipError {
    /// Collection name is not one of earnings, commissions, deductions.
    #[error("unknown collection '{0}' (expected earnings, commissions or deductions)")]
    UnknownCollection(String),

    /// Line item field name is not label or value.
    #[error("unknown line item field '{0}' (expected label or value)")]
    UnknownField(String),

    /// Header field name is not recognized.
    #[error("unknown header field '{0}'")]
    UnknownHeaderField(String),

    /// A `LABEL=AMOUNT` argument could not be split.
    #[error("invalid line item '{0}' (expected LABEL=AMOUNT)")]
    InvalidLineItem(String),

    /// A `NAME=VALUE` header assignment could not be split.
    #[error("invalid header assignment '{0}' (expected NAME=VALUE)")]
    InvalidAssignment(String),

    /// A line item edit is malformed or names position 0.
    #[error("invalid edit '{0}' (expected COLLECTION:POSITION:FIELD=VALUE)")]
    InvalidEdit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PayslipError::UnknownCollection("bonuses".to_string());
        assert_eq!(
            err.to_string(),
            "unknown collection 'bonuses' (expected earnings, commissions or deductions)"
        );

        let err = PayslipError::InvalidLineItem("Lembur".to_string());
        assert_eq!(
            err.to_string(),
            "invalid line item 'Lembur' (expected LABEL=AMOUNT)"
        );

        let err = PayslipError::InvalidEdit("earnings:0:value=1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid edit 'earnings:0:value=1' (expected COLLECTION:POSITION:FIELD=VALUE)"
        );
    }
}
