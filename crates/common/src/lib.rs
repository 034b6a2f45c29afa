//! Common utilities shared across Drako crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors, validation, calendar deltas and ranges (default)
//! - `observability`: tracing events from the time module (not included by
//!   default)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod time;
#[cfg(feature = "foundation")]
pub mod validation;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "foundation")]
pub use time::{range, Delta, DeltaBuilder, DeltaParseError, DeltaRange, Instant, Unit};
#[cfg(feature = "foundation")]
pub use validation::{
    FieldError, ValidationContext, ValidationError, ValidationResult, Validator,
};
