//! Accounting rules

use std::cmp::Ordering;

use chrono::NaiveDate;
use drako_common::time::Delta;
use drako_common::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ANONYMIZATION_CUTOFF, DEFAULT_FREEZE_INTERVAL, DEFAULT_LOSS_CUTOFF,
    DEFAULT_PURGE_CUTOFF, DEFAULT_ROLLOVER,
};

/// Accounting rules for a firm
///
/// Cutoffs are ages: records older than `loss_cutoff` are written off, then
/// anonymized past `anonymization_cutoff` and purged past `purge_cutoff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accounting {
    /// Period after which invoices can no longer change
    pub freeze_interval: Delta,
    pub rollover: Delta,
    pub loss_cutoff: Delta,
    pub anonymization_cutoff: Delta,
    pub purge_cutoff: Delta,
}

impl Default for Accounting {
    fn default() -> Self {
        Self {
            freeze_interval: DEFAULT_FREEZE_INTERVAL,
            rollover: DEFAULT_ROLLOVER,
            loss_cutoff: DEFAULT_LOSS_CUTOFF,
            anonymization_cutoff: DEFAULT_ANONYMIZATION_CUTOFF,
            purge_cutoff: DEFAULT_PURGE_CUTOFF,
        }
    }
}

impl Accounting {
    /// Check that cutoffs are ordered when measured from `anchor`
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use drako_common::time::Delta;
    /// use drako_domain::Accounting;
    ///
    /// let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// assert!(Accounting::default().validate(anchor).is_ok());
    ///
    /// let rules = Accounting { purge_cutoff: Delta::parse("6 M").unwrap(), ..Accounting::default() };
    /// assert!(rules.validate(anchor).is_err());
    /// ```
    pub fn validate(&self, anchor: NaiveDate) -> ValidationResult<()> {
        let mut validator = Validator::new();
        self.validate_into(anchor, &mut validator);
        validator.finalize()
    }

    pub(crate) fn validate_into(&self, anchor: NaiveDate, validator: &mut Validator) {
        let ordered = [
            ("loss_cutoff", self.loss_cutoff, "anonymization_cutoff", self.anonymization_cutoff),
            ("anonymization_cutoff", self.anonymization_cutoff, "purge_cutoff", self.purge_cutoff),
        ];

        for (lower_name, lower, upper_name, upper) in ordered {
            match lower.cmp_at(&upper, &anchor) {
                Some(Ordering::Less | Ordering::Equal) => {}
                Some(Ordering::Greater) => validator.add_error_with_code(
                    lower_name,
                    format!("must not exceed {upper_name} ({lower} > {upper})"),
                    "cutoff_order",
                ),
                None => validator.add_error_with_code(
                    lower_name,
                    format!("cannot be compared with {upper_name} from {anchor}"),
                    "out_of_range",
                ),
            }
        }
    }
}
