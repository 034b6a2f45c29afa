//! Priced items
//!
//! An [`Item`] is anything that can be sold to a customer. Recurring items
//! carry calendar deltas (`"1 M"`, `"1 Y"`) that drive billing schedules.

use drako_common::time::Delta;
use drako_common::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

use super::tax::UnitPrice;
use crate::config::Config;
use crate::constants::{
    DEFAULT_GROUPED_LINE, DEFAULT_MIN_QUANTITY, DEFAULT_REFUND_LINE, DEFAULT_SINGLE_LINE,
    DEFAULT_TAXES_INCLUDED, PLACEHOLDER_COUNT, PLACEHOLDER_LABEL, PLACEHOLDER_REFERENCE,
    PLACEHOLDER_UNIT,
};

/// An item that can be priced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub reference: String,
    pub label: String,

    #[serde(default = "default_taxes_included")]
    pub taxes_included: bool,

    /// Names of the taxes applied, each declared in [`Config::taxes`]
    #[serde(default)]
    pub taxes: Vec<String>,

    #[serde(default)]
    pub unit: String,

    #[serde(default = "default_min_quantity")]
    pub min_quantity: u32,

    #[serde(default)]
    pub unit_price: UnitPrice,

    /// Billing period for recurring items, empty for one-off sales
    #[serde(default)]
    pub recurring: Delta,

    /// Period over which usage is aggregated before billing
    #[serde(default)]
    pub aggregate: Delta,

    /// Slide of the aggregation window, empty for fixed windows
    #[serde(default)]
    pub slide: Delta,

    #[serde(default)]
    pub interval: Delta,

    // Invoice line templates
    #[serde(default = "default_single_line")]
    pub single_line: String,

    #[serde(default = "default_grouped_line")]
    pub grouped_line: String,

    #[serde(default = "default_refund_line")]
    pub refund_line: String,
}

fn default_taxes_included() -> bool {
    DEFAULT_TAXES_INCLUDED
}

fn default_min_quantity() -> u32 {
    DEFAULT_MIN_QUANTITY
}

fn default_single_line() -> String {
    DEFAULT_SINGLE_LINE.to_string()
}

fn default_grouped_line() -> String {
    DEFAULT_GROUPED_LINE.to_string()
}

fn default_refund_line() -> String {
    DEFAULT_REFUND_LINE.to_string()
}

impl Item {
    /// Create an item with every optional field at its default
    pub fn new(reference: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            label: label.into(),
            taxes_included: DEFAULT_TAXES_INCLUDED,
            taxes: Vec::new(),
            unit: String::new(),
            min_quantity: DEFAULT_MIN_QUANTITY,
            unit_price: UnitPrice::default(),
            recurring: Delta::ZERO,
            aggregate: Delta::ZERO,
            slide: Delta::ZERO,
            interval: Delta::ZERO,
            single_line: default_single_line(),
            grouped_line: default_grouped_line(),
            refund_line: default_refund_line(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        !self.recurring.is_empty()
    }

    /// Usage windows overlap instead of being laid end to end
    pub fn has_sliding_aggregate(&self) -> bool {
        !self.slide.is_empty()
    }

    pub fn has_aggregate_period(&self) -> bool {
        !self.aggregate.is_empty()
    }

    /// Invoice line for a single unit
    pub fn render_single_line(&self) -> String {
        self.render(&self.single_line, 1)
    }

    /// Invoice line for `count` units grouped together
    ///
    /// ```
    /// use drako_domain::Item;
    ///
    /// let mut item = Item::new("hosting", "Hosting");
    /// item.unit = "month".to_string();
    /// item.grouped_line = "{count} {unit} of {label}".to_string();
    /// assert_eq!(item.render_grouped_line(3), "3 month of Hosting");
    /// ```
    pub fn render_grouped_line(&self, count: u64) -> String {
        self.render(&self.grouped_line, count)
    }

    pub fn render_refund_line(&self) -> String {
        self.render(&self.refund_line, 1)
    }

    fn render(&self, template: &str, count: u64) -> String {
        template
            .replace(PLACEHOLDER_LABEL, &self.label)
            .replace(PLACEHOLDER_UNIT, &self.unit)
            .replace(PLACEHOLDER_REFERENCE, &self.reference)
            .replace(PLACEHOLDER_COUNT, &count.to_string())
    }

    /// Check this item against the taxes declared in `config`
    pub fn validate(&self, config: &Config) -> ValidationResult<()> {
        let mut validator = Validator::new();
        self.validate_into(&config.tax_names(), &mut validator);
        validator.finalize()
    }

    pub(crate) fn validate_into(&self, known_taxes: &[&str], validator: &mut Validator) {
        validator.validate_not_empty("reference", &self.reference);
        validator.validate_known("taxes", self.taxes.iter().map(String::as_str), known_taxes);
        validator.validate_min("unit_price.base_quantity", self.unit_price.base_quantity, 1);

        if self.has_sliding_aggregate() && !self.has_aggregate_period() {
            validator.add_error_with_code(
                "slide",
                "a sliding aggregate requires an aggregate period",
                "missing_aggregate",
            );
        }
    }
}
