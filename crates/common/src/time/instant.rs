//! Points in time that can be shifted by calendar units
//!
//! [`Instant`] is the seam between deltas and concrete date types. The
//! chrono implementations below follow the relative-delta policy:
//!
//! 1. years and months are combined into a month offset and applied first,
//!    clamping the day to the end of the target month (Jan 31 + 1 month is
//!    Feb 28 or 29);
//! 2. weeks, days, hours, minutes and seconds are then added as an exact
//!    span.

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

use super::unit::Unit;

const SECONDS_PER_DAY: i64 = 86_400;

/// A totally ordered point in time supporting calendar shifts
pub trait Instant: Ord + Clone + Sized {
    /// Return this instant moved by `offsets`
    ///
    /// `offsets` is usually [`Delta::effective`](super::Delta::effective).
    /// Returns `None` when the result is not representable.
    fn shift(&self, offsets: &[(Unit, i64)]) -> Option<Self>;
}

/// Offsets regrouped into the calendar part and the exact part
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SplitOffsets {
    months: i64,
    days: i64,
    seconds: i64,
}

impl SplitOffsets {
    fn from_units(offsets: &[(Unit, i64)]) -> Option<Self> {
        let mut split = Self::default();
        for &(unit, count) in offsets {
            match unit {
                Unit::Year => split.months = split.months.checked_add(count.checked_mul(12)?)?,
                Unit::Month => split.months = split.months.checked_add(count)?,
                Unit::Week => split.days = split.days.checked_add(count.checked_mul(7)?)?,
                Unit::Day => split.days = split.days.checked_add(count)?,
                Unit::Hour => split.seconds = split.seconds.checked_add(count.checked_mul(3_600)?)?,
                Unit::Minute => split.seconds = split.seconds.checked_add(count.checked_mul(60)?)?,
                Unit::Second => split.seconds = split.seconds.checked_add(count)?,
            }
        }
        Some(split)
    }

    fn apply_months<T, A, S>(&self, value: T, add: A, sub: S) -> Option<T>
    where
        A: FnOnce(T, Months) -> Option<T>,
        S: FnOnce(T, Months) -> Option<T>,
    {
        let months = Months::new(u32::try_from(self.months.unsigned_abs()).ok()?);
        match self.months {
            0 => Some(value),
            m if m > 0 => add(value, months),
            _ => sub(value, months),
        }
    }

    fn exact(&self) -> Option<TimeDelta> {
        TimeDelta::try_days(self.days)?.checked_add(&TimeDelta::try_seconds(self.seconds)?)
    }
}

/// Dates ignore the sub-day part of an offset beyond whole days.
impl Instant for NaiveDate {
    fn shift(&self, offsets: &[(Unit, i64)]) -> Option<Self> {
        let split = SplitOffsets::from_units(offsets)?;
        let date =
            split.apply_months(*self, NaiveDate::checked_add_months, NaiveDate::checked_sub_months)?;
        let days = split.days.checked_add(split.seconds / SECONDS_PER_DAY)?;
        date.checked_add_signed(TimeDelta::try_days(days)?)
    }
}

impl Instant for NaiveDateTime {
    fn shift(&self, offsets: &[(Unit, i64)]) -> Option<Self> {
        let split = SplitOffsets::from_units(offsets)?;
        let moved = split.apply_months(
            *self,
            NaiveDateTime::checked_add_months,
            NaiveDateTime::checked_sub_months,
        )?;
        moved.checked_add_signed(split.exact()?)
    }
}

/// Month arithmetic happens on the local date; it yields `None` when the
/// local result does not exist or is ambiguous in `Tz`.
impl<Tz: TimeZone> Instant for DateTime<Tz> {
    fn shift(&self, offsets: &[(Unit, i64)]) -> Option<Self> {
        let split = SplitOffsets::from_units(offsets)?;
        let moved = split.apply_months(
            self.clone(),
            DateTime::<Tz>::checked_add_months,
            DateTime::<Tz>::checked_sub_months,
        )?;
        moved.checked_add_signed(split.exact()?)
    }
}
