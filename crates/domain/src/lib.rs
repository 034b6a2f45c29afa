//! # Drako Domain
//!
//! Billing configuration model for Drako.
//!
//! This crate contains:
//! - Billing types (Tax, UnitPrice, Item, Accounting)
//! - The firm-wide [`Config`] and its validation
//! - Domain error types and Result definitions
//! - Default constants
//!
//! ## Architecture
//! - Depends only on `drako-common` for calendar deltas and validation
//! - No I/O: loading files lives in `drako-infra`

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
