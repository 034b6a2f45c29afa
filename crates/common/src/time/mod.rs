//! Calendar time utilities
//!
//! This module provides calendar-aware time handling:
//! - **[`unit`]**: the seven canonical calendar units
//! - **[`parse`]**: free-form delta strings (`"3D"`, `"1 month, 2 weeks"`)
//! - **[`delta`]**: [`Delta`], a span kept in calendar units
//! - **[`instant`]**: the [`Instant`] trait and its chrono implementations
//! - **[`range`]**: half-open ranges stepping by multiples of a delta
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use drako_common::time::{range, Delta};
//!
//! let step: Delta = "1 M".parse().unwrap();
//! assert_eq!(step.to_string(), "1 month");
//!
//! let jan31 = NaiveDate::from_ymd_opt(2017, 1, 31).unwrap();
//! let jul31 = NaiveDate::from_ymd_opt(2017, 7, 31).unwrap();
//! let month_ends: Vec<_> = range(jan31, step, jan31, jul31).collect();
//! assert_eq!(month_ends.len(), 6);
//! assert_eq!(month_ends[2], NaiveDate::from_ymd_opt(2017, 3, 31).unwrap());
//! ```

pub mod delta;
pub mod instant;
pub mod parse;
pub mod range;
pub mod unit;

// Re-export commonly used items
pub use delta::{Delta, DeltaBuilder};
pub use instant::Instant;
pub use parse::{DeltaParseError, UNIT_TOKENS};
pub use range::{range, DeltaRange};
pub use unit::Unit;
