//! # payslip-rs
//!
//! A payslip editor core: company and employee header fields, variable-length
//! lists of earnings, commissions and deductions, and the derived totals and
//! net pay.
//!
//! ## Overview
//!
//! - **Store**: three ordered line-item collections plus the basic salary,
//!   with add, update-by-id and remove-by-id
//! - **Coercion**: amounts arrive as text; anything non-numeric counts as 0
//! - **Preview**: a formatted read-only view, rebuilt from the document
//! - **Email**: a plain-text draft and its `mailto:` link
//!
//! ## Example
//!
//! ```
//! use payslip_rs::{Collection, PayslipDocument};
//! use rust_decimal_macros::dec;
//!
//! let mut doc = PayslipDocument::seeded();
//! doc.add_item(Collection::Earnings, "Bonus", dec!(250000));
//!
//! let totals = doc.totals();
//! assert_eq!(totals.total_earnings, dec!(1250000));
//! assert_eq!(totals.net_salary, dec!(1000000));
//! ```

pub mod amount;
pub mod document;
pub mod email;
pub mod error;
pub mod format;
pub mod line_item;
pub mod preview;
pub mod store;

pub use amount::coerce_amount;
pub use document::{Header, HeaderAssignment, HeaderField, PayslipDocument};
pub use email::EmailDraft;
pub use error::PayslipError;
pub use format::{format_date, format_rupiah};
pub use line_item::{Collection, Field, LineItem, LineItemEdit, LineItemId, NewLineItem};
pub use preview::{Preview, PreviewRow};
pub use store::{LineItemStore, Totals};
