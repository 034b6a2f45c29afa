//! Canonical calendar units
//!
//! The seven units a [`Delta`](super::Delta) is made of, in the order they
//! are displayed and applied.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse::DeltaParseError;

/// A calendar unit
///
/// Months and years have no fixed length; the remaining units do, but they
/// are still kept apart so that "7 days" and "1 week" stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Calendar year, applied as twelve months
    Year,
    /// Calendar month, clamped to the last day of shorter months
    Month,
    /// Seven days
    Week,
    /// 86 400 seconds
    Day,
    /// 3 600 seconds
    Hour,
    /// 60 seconds
    Minute,
    /// One second
    Second,
}

impl Unit {
    /// All units in canonical order (largest first)
    pub const ALL: [Unit; 7] = [
        Unit::Year,
        Unit::Month,
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Position of this unit in [`Unit::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical keyword name, e.g. `"months"`
    pub const fn plural(self) -> &'static str {
        match self {
            Unit::Year => "years",
            Unit::Month => "months",
            Unit::Week => "weeks",
            Unit::Day => "days",
            Unit::Hour => "hours",
            Unit::Minute => "minutes",
            Unit::Second => "seconds",
        }
    }

    /// Singular name, e.g. `"month"`
    pub const fn singular(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Week => "week",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
        }
    }

    /// Name to display next to `count`
    pub const fn label(self, count: i64) -> &'static str {
        if count <= 1 {
            self.singular()
        } else {
            self.plural()
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// Parses the canonical keyword names only (`"years"` .. `"seconds"`).
///
/// Free-form spellings such as `"Y"` or `"month"` belong to the duration
/// string parser, not to the keyword interface.
impl FromStr for Unit {
    type Err = DeltaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .into_iter()
            .find(|unit| unit.plural() == s)
            .ok_or_else(|| DeltaParseError::UnknownUnit(s.to_string()))
    }
}
