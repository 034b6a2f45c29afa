//! Billing domain types
//!
//! Taxes, priced items and accounting rules as they appear in a firm's
//! configuration file.

pub mod accounting;
pub mod item;
pub mod tax;

pub use accounting::Accounting;
pub use item::Item;
pub use tax::{Tax, UnitPrice};
