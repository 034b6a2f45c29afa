//! Calendar-aware ranges
//!
//! Walks a base instant forward by successive multiples of a [`Delta`] and
//! yields the points falling in a half-open window `[start, end)`.
//!
//! Each candidate is `base` shifted by `step * i`, never the previous
//! candidate shifted by `step`. Repeated shifting would carry month-end
//! truncation forward (Jan 31, Feb 28, Mar 28, ...), scaling does not
//! (Jan 31, Feb 28, Mar 31, ...).

use std::iter::FusedIterator;

#[cfg(feature = "observability")]
use tracing::{debug, warn};

use super::delta::Delta;
use super::instant::Instant;

/// Iterator returned by [`range`]
#[derive(Debug, Clone)]
pub struct DeltaRange<I> {
    base: I,
    step: Delta,
    start: I,
    end: I,
    index: i64,
    last: Option<I>,
    done: bool,
}

/// Yield `base + step * i` for `i = 0, 1, 2, ...` restricted to `[start, end)`
///
/// Candidates before `start` are skipped, so `base` may lie before the
/// window. The first candidate at or past `end` stops the sequence without
/// being yielded. An inverted window (`start > end`) yields nothing.
///
/// The output is strictly increasing. A candidate that does not move past
/// the last yielded point is dropped; this happens when the instant type is
/// coarser than the step, e.g. `12h` over [`NaiveDate`](chrono::NaiveDate)
/// truncates every other multiple onto the same day.
///
/// # Caller contract
///
/// - `step` must not be empty. An empty step never advances; this is
///   checked by a debug assertion and yields nothing in release builds.
/// - `step` must move towards `end`. A backward step never reaches `end`
///   and the iterator does not terminate on its own (it stops only if the
///   shifted instant leaves the representable range).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use drako_common::time::{range, Delta};
///
/// let jan31 = NaiveDate::from_ymd_opt(2017, 1, 31).unwrap();
/// let mar1 = NaiveDate::from_ymd_opt(2017, 3, 1).unwrap();
///
/// let dates: Vec<_> = range(jan31, Delta::parse("2W 3D").unwrap(), jan31, mar1).collect();
/// assert_eq!(dates, vec![jan31, NaiveDate::from_ymd_opt(2017, 2, 17).unwrap()]);
/// ```
pub fn range<I: Instant>(base: I, step: Delta, start: I, end: I) -> DeltaRange<I> {
    debug_assert!(!step.is_empty(), "range step must not be empty");
    let done = if step.is_empty() {
        #[cfg(feature = "observability")]
        warn!("Empty range step, yielding nothing");
        true
    } else {
        start > end
    };
    DeltaRange { base, step, start, end, index: 0, last: None, done }
}

impl<I: Instant> DeltaRange<I> {
    /// The step this range advances by
    pub fn step(&self) -> Delta {
        self.step
    }

    fn candidate(&self) -> Option<I> {
        self.step.checked_mul(self.index)?.apply(&self.base)
    }
}

impl<I: Instant> Iterator for DeltaRange<I> {
    type Item = I;

    fn next(&mut self) -> Option<I> {
        while !self.done {
            let Some(candidate) = self.candidate() else {
                #[cfg(feature = "observability")]
                debug!(index = self.index, step = %self.step, "Range left the representable range");
                self.done = true;
                break;
            };

            match self.index.checked_add(1) {
                Some(next) => self.index = next,
                None => self.done = true,
            }

            if candidate < self.start {
                continue;
            }
            if candidate >= self.end {
                self.done = true;
                break;
            }
            if self.last.as_ref().is_some_and(|last| candidate <= *last) {
                continue;
            }
            self.last = Some(candidate.clone());
            return Some(candidate);
        }
        None
    }
}

impl<I: Instant> FusedIterator for DeltaRange<I> {}

#[cfg(test)]
mod tests {
    //! Unit tests for time::range.
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn delta(s: &str) -> Delta {
        Delta::parse(s).unwrap()
    }

    #[test]
    fn test_monthly_range_keeps_month_ends() {
        let jan31 = date(2017, 1, 31);
        let dates: Vec<_> = range(jan31, delta("1 M"), jan31, date(2017, 7, 31)).collect();
        assert_eq!(
            dates,
            vec![
                date(2017, 1, 31),
                date(2017, 2, 28),
                date(2017, 3, 31),
                date(2017, 4, 30),
                date(2017, 5, 31),
                date(2017, 6, 30),
            ]
        );
    }

    #[test]
    fn test_compound_step() {
        let jan31 = date(2017, 1, 31);
        let dates: Vec<_> = range(jan31, delta("2W 3D"), jan31, date(2017, 3, 1)).collect();
        assert_eq!(dates, vec![date(2017, 1, 31), date(2017, 2, 17)]);
    }

    #[test]
    fn test_base_before_start_is_skipped() {
        let dates: Vec<_> =
            range(date(2017, 1, 1), delta("1W"), date(2017, 1, 20), date(2017, 2, 10)).collect();
        assert_eq!(dates, vec![date(2017, 1, 22), date(2017, 1, 29), date(2017, 2, 5)]);
    }

    #[test]
    fn test_end_is_exclusive_and_start_inclusive() {
        let start = date(2017, 1, 1);
        let dates: Vec<_> = range(start, delta("1D"), start, date(2017, 1, 3)).collect();
        assert_eq!(dates, vec![date(2017, 1, 1), date(2017, 1, 2)]);
    }

    #[test]
    fn test_inverted_window_is_empty() {
        let mut iter = range(date(2017, 1, 1), delta("1D"), date(2017, 2, 1), date(2017, 1, 1));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty_window_is_empty() {
        let point = date(2017, 1, 1);
        assert_eq!(range(point, delta("1D"), point, point).count(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "range step must not be empty")]
    fn test_empty_step_is_a_caller_error() {
        let point = date(2017, 1, 1);
        let _ = range(point, Delta::ZERO, point, date(2017, 2, 1));
    }

    #[test]
    fn test_skipping_can_reach_end() {
        // every candidate before start, then the next one lands past end
        let dates: Vec<_> =
            range(date(2017, 1, 1), delta("1M"), date(2017, 1, 10), date(2017, 1, 20)).collect();
        assert!(dates.is_empty());
    }

    #[test]
    fn test_sub_day_step_over_dates_yields_each_day_once() {
        let start = date(2017, 1, 1);
        let dates: Vec<_> = range(start, delta("12h"), start, date(2017, 1, 3)).collect();
        assert_eq!(dates, vec![date(2017, 1, 1), date(2017, 1, 2)]);

        let dates: Vec<_> = range(start, delta("5h"), start, date(2017, 1, 5)).collect();
        assert_eq!(dates, vec![date(2017, 1, 1), date(2017, 1, 2), date(2017, 1, 3), date(2017, 1, 4)]);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_range_is_fused() {
        let point = date(2017, 1, 1);
        let mut iter = range(point, delta("1D"), point, date(2017, 1, 2));
        assert_eq!(iter.next(), Some(point));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_range_is_lazy() {
        let start = date(2017, 1, 1);
        let first_three: Vec<_> =
            range(start, delta("1D"), start, NaiveDate::MAX).take(3).collect();
        assert_eq!(first_three, vec![date(2017, 1, 1), date(2017, 1, 2), date(2017, 1, 3)]);
    }

    #[test]
    fn test_range_stops_when_shift_overflows() {
        let base = date(262_000, 1, 1);
        let count = range(base, delta("100Y"), base, NaiveDate::MAX).count();
        assert!(count > 0);
        assert!(count < 100);
    }

    #[test]
    fn test_utc_range() {
        let base = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 1, 1, 6, 0, 0).unwrap();
        let hours: Vec<_> = range(base, delta("2h"), base, end).collect();
        assert_eq!(hours.len(), 3);
        assert_eq!(hours[2], Utc.with_ymd_and_hms(2017, 1, 1, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_range_restarts_by_cloning() {
        let start = date(2017, 1, 1);
        let iter = range(start, delta("1D"), start, date(2017, 1, 4));
        assert_eq!(iter.clone().count(), 3);
        assert_eq!(iter.count(), 3);
    }
}
