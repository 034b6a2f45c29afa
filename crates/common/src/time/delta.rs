//! Calendar-aware deltas
//!
//! A [`Delta`] keeps a count per calendar unit instead of collapsing
//! everything into seconds. A month stays a month: how long it lasts is only
//! decided when the delta is applied to a concrete [`Instant`].

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::instant::Instant;
use super::parse::{parse_occurrences, DeltaParseError};
use super::unit::Unit;

/// A span of time expressed in calendar units
///
/// All seven units are always present; zero means "absent". Values are
/// immutable, arithmetic returns new deltas.
///
/// # Examples
///
/// ```
/// use drako_common::time::{Delta, Unit};
///
/// let delta: Delta = "1 month, 2 weeks".parse().unwrap();
/// assert_eq!(delta.get(Unit::Month), 1);
/// assert_eq!(delta.get(Unit::Week), 2);
///
/// assert_eq!(Delta::parse("3D").unwrap() + Delta::parse("2W").unwrap(), Delta::parse("2W 3D").unwrap());
/// assert_eq!((Delta::parse("3 D").unwrap() * 2).to_string(), "6 days");
/// assert!(Delta::parse("").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Delta {
    counts: [i64; 7],
}

impl Delta {
    /// The empty delta
    pub const ZERO: Delta = Delta { counts: [0; 7] };

    /// Parse a free-form delta string
    ///
    /// See [`parse_occurrences`] for the grammar. When a unit appears more
    /// than once the last occurrence wins.
    pub fn parse(input: &str) -> Result<Self, DeltaParseError> {
        Self::builder().parse(input).map(DeltaBuilder::build)
    }

    /// Start building a delta from strings and/or explicit unit counts
    pub fn builder() -> DeltaBuilder {
        DeltaBuilder::default()
    }

    /// Build a delta holding `count` of a single unit
    pub const fn of(unit: Unit, count: i64) -> Self {
        let mut counts = [0; 7];
        counts[unit.index()] = count;
        Delta { counts }
    }

    /// Count for one unit
    pub const fn get(&self, unit: Unit) -> i64 {
        self.counts[unit.index()]
    }

    /// Count of years
    pub const fn years(&self) -> i64 {
        self.get(Unit::Year)
    }

    /// Count of months
    pub const fn months(&self) -> i64 {
        self.get(Unit::Month)
    }

    /// Count of weeks
    pub const fn weeks(&self) -> i64 {
        self.get(Unit::Week)
    }

    /// Count of days
    pub const fn days(&self) -> i64 {
        self.get(Unit::Day)
    }

    /// Count of hours
    pub const fn hours(&self) -> i64 {
        self.get(Unit::Hour)
    }

    /// Count of minutes
    pub const fn minutes(&self) -> i64 {
        self.get(Unit::Minute)
    }

    /// Count of seconds
    pub const fn seconds(&self) -> i64 {
        self.get(Unit::Second)
    }

    /// True when every unit count is zero
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Non-zero `(unit, count)` pairs in canonical order
    ///
    /// This is the view handed to [`Instant::shift`] and used for display.
    pub fn effective(&self) -> Vec<(Unit, i64)> {
        Unit::ALL
            .into_iter()
            .map(|unit| (unit, self.get(unit)))
            .filter(|(_, count)| *count != 0)
            .collect()
    }

    /// Checked pointwise sum
    pub fn checked_add(&self, rhs: &Delta) -> Option<Delta> {
        let mut counts = [0; 7];
        for (slot, (a, b)) in counts.iter_mut().zip(self.counts.iter().zip(rhs.counts.iter())) {
            *slot = a.checked_add(*b)?;
        }
        Some(Delta { counts })
    }

    /// Checked pointwise multiplication by a scalar
    pub fn checked_mul(&self, factor: i64) -> Option<Delta> {
        let mut counts = [0; 7];
        for (slot, count) in counts.iter_mut().zip(self.counts.iter()) {
            *slot = count.checked_mul(factor)?;
        }
        Some(Delta { counts })
    }

    /// Shift `instant` by this delta
    pub fn apply<I: Instant>(&self, instant: &I) -> Option<I> {
        instant.shift(&self.effective())
    }

    /// Compare two deltas by applying both to the same anchor
    ///
    /// Deltas are not totally ordered on their own ("1 month" vs "30 days"
    /// depends on the month). Returns `None` when either shift leaves the
    /// anchor's representable range.
    ///
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use chrono::NaiveDate;
    /// use drako_common::time::Delta;
    ///
    /// let month = Delta::parse("1M").unwrap();
    /// let thirty_days = Delta::parse("30D").unwrap();
    ///
    /// let february = NaiveDate::from_ymd_opt(2017, 2, 1).unwrap();
    /// let march = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
    /// assert_eq!(month.cmp_at(&thirty_days, &february), Some(Ordering::Less));
    /// assert_eq!(month.cmp_at(&thirty_days, &march), Some(Ordering::Greater));
    /// ```
    pub fn cmp_at<I: Instant>(&self, other: &Delta, anchor: &I) -> Option<Ordering> {
        let lhs = self.apply(anchor)?;
        let rhs = other.apply(anchor)?;
        Some(lhs.cmp(&rhs))
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (unit, count) in self.effective() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", count, unit.label(count))?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Delta {
    type Err = DeltaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Pointwise sum.
///
/// # Panics
/// On `i64` overflow in debug builds, like integer addition. Use
/// [`Delta::checked_add`] when counts come from untrusted input.
impl Add for Delta {
    type Output = Delta;

    fn add(self, rhs: Delta) -> Delta {
        let mut counts = self.counts;
        for (slot, count) in counts.iter_mut().zip(rhs.counts.iter()) {
            *slot += count;
        }
        Delta { counts }
    }
}

/// Pointwise scaling. `0` yields the empty delta, a negative factor a
/// backward delta.
impl Mul<i64> for Delta {
    type Output = Delta;

    fn mul(self, factor: i64) -> Delta {
        let mut counts = self.counts;
        for slot in &mut counts {
            *slot *= factor;
        }
        Delta { counts }
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        self * -1
    }
}

impl Sum for Delta {
    fn sum<I: Iterator<Item = Delta>>(iter: I) -> Delta {
        iter.fold(Delta::ZERO, Add::add)
    }
}

/// Serializes as the [`Display`](fmt::Display) string
///
/// The string grammar has no sign, so a delta with a negative count fails
/// to serialize instead of being written with its sign dropped.
impl Serialize for Delta {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.counts.iter().any(|count| *count < 0) {
            return Err(serde::ser::Error::custom(format!(
                "delta '{self}' has a negative count and no string form"
            )));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Delta {
    fn deserialize<D>(deserializer: D) -> Result<Delta, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Delta::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Builder merging parsed strings and explicit unit counts
///
/// Steps apply in call order and each one overwrites the units it names, so
/// keyword counts given after [`DeltaBuilder::parse`] take precedence.
///
/// ```
/// use drako_common::time::{Delta, Unit};
///
/// let delta = Delta::builder()
///     .parse("1 month, 2 weeks")
///     .unwrap()
///     .with(Unit::Week, 3)
///     .with_named("days", 4)
///     .unwrap()
///     .build();
/// assert_eq!(delta.to_string(), "1 month 3 weeks 4 days");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeltaBuilder {
    counts: [i64; 7],
}

impl DeltaBuilder {
    /// Merge the occurrences found in a free-form string
    pub fn parse(mut self, input: &str) -> Result<Self, DeltaParseError> {
        for (unit, count) in parse_occurrences(input)? {
            self.counts[unit.index()] = count;
        }
        Ok(self)
    }

    /// Set the count for `unit`
    pub fn with(mut self, unit: Unit, count: i64) -> Self {
        self.counts[unit.index()] = count;
        self
    }

    /// Set a count by canonical keyword name (`"years"` .. `"seconds"`)
    pub fn with_named(self, name: &str, count: i64) -> Result<Self, DeltaParseError> {
        let unit = name.parse::<Unit>()?;
        Ok(self.with(unit, count))
    }

    /// Finish with the counts accumulated so far
    pub fn build(self) -> Delta {
        Delta { counts: self.counts }
    }
}
