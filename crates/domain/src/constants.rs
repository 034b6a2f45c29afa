//! Domain constants
//!
//! Defaults applied when a configuration file leaves a field out.

use drako_common::time::{Delta, Unit};

// Item defaults
pub const DEFAULT_TAXES_INCLUDED: bool = true;
pub const DEFAULT_MIN_QUANTITY: u32 = 1;
pub const DEFAULT_UNIT_PRICE: (u32, u32, i64) = (1, 1, 0);

// Invoice line templates
pub const DEFAULT_SINGLE_LINE: &str = "{label}";
pub const DEFAULT_GROUPED_LINE: &str = "{count} {label}";
pub const DEFAULT_REFUND_LINE: &str = "{label}";

// Accounting defaults ("M", "0 D", "1 Y", "1 Y", "10 Y")
pub const DEFAULT_FREEZE_INTERVAL: Delta = Delta::of(Unit::Month, 1);
pub const DEFAULT_ROLLOVER: Delta = Delta::ZERO;
pub const DEFAULT_LOSS_CUTOFF: Delta = Delta::of(Unit::Year, 1);
pub const DEFAULT_ANONYMIZATION_CUTOFF: Delta = Delta::of(Unit::Year, 1);
pub const DEFAULT_PURGE_CUTOFF: Delta = Delta::of(Unit::Year, 10);

// Template placeholders
pub const PLACEHOLDER_LABEL: &str = "{label}";
pub const PLACEHOLDER_COUNT: &str = "{count}";
pub const PLACEHOLDER_UNIT: &str = "{unit}";
pub const PLACEHOLDER_REFERENCE: &str = "{reference}";
