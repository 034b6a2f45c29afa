//! Firm-wide billing configuration
//!
//! A [`Config`] is read from a document of the shape
//!
//! ```toml
//! [[taxes]]
//! name = "VAT"
//! base_points = 2000
//!
//! [[items]]
//! reference = "hosting"
//! label = "Hosting"
//! taxes = ["VAT"]
//! recurring = "1 M"
//!
//! [accounting]
//! purge_cutoff = "10 Y"
//! ```
//!
//! Items are listed in the document and keyed by reference in memory.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use drako_common::validation::{ValidationResult, Validator};
use serde::{Deserialize, Serialize};

use crate::errors::{DrakoError, Result};
use crate::types::{Accounting, Item, Tax};

/// Full configuration for a firm
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub taxes: Vec<Tax>,

    #[serde(default, with = "items_by_reference")]
    pub items: BTreeMap<String, Item>,

    #[serde(default)]
    pub accounting: Accounting,
}

impl Config {
    /// Look up a tax by name
    pub fn tax(&self, name: &str) -> Option<&Tax> {
        self.taxes.iter().find(|tax| tax.name == name)
    }

    /// Look up an item by reference
    pub fn item(&self, reference: &str) -> Option<&Item> {
        self.items.get(reference)
    }

    /// Look up an item, failing with [`DrakoError::NotFound`]
    pub fn require_item(&self, reference: &str) -> Result<&Item> {
        self.item(reference).ok_or_else(|| DrakoError::NotFound(format!("item '{reference}'")))
    }

    /// Add an item, rejecting a reference that is already taken
    pub fn insert_item(&mut self, item: Item) -> Result<()> {
        if self.items.contains_key(&item.reference) {
            return Err(DrakoError::Config(format!(
                "duplicate item reference '{}'",
                item.reference
            )));
        }
        self.items.insert(item.reference.clone(), item);
        Ok(())
    }

    pub fn tax_names(&self) -> Vec<&str> {
        self.taxes.iter().map(|tax| tax.name.as_str()).collect()
    }

    /// Items billed on a recurring schedule
    pub fn recurring_items(&self) -> impl Iterator<Item = &Item> {
        self.items.values().filter(|item| item.is_recurring())
    }

    /// Validate accounting rules and every item
    ///
    /// `anchor` is the date cutoffs are compared from, usually today. All
    /// failures are collected; item fields are reported as
    /// `items.<reference>.<field>`.
    pub fn validate(&self, anchor: NaiveDate) -> ValidationResult<()> {
        let mut validator = Validator::new();

        let mut seen = Vec::with_capacity(self.taxes.len());
        for tax in &self.taxes {
            validator.validate_not_empty("taxes.name", &tax.name);
            if seen.contains(&tax.name.as_str()) {
                validator.add_error_with_code(
                    "taxes",
                    format!("duplicate tax '{}'", tax.name),
                    "duplicate",
                );
            }
            seen.push(tax.name.as_str());
        }

        validator.validate_nested("accounting", |v| self.accounting.validate_into(anchor, v));

        let known_taxes = self.tax_names();
        for (reference, item) in &self.items {
            validator.validate_nested(&format!("items.{reference}"), |v| {
                item.validate_into(&known_taxes, v);
            });
        }

        validator.finalize()
    }
}

mod items_by_reference {
    use std::collections::BTreeMap;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Item;

    pub fn serialize<S>(items: &BTreeMap<String, Item>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(items.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BTreeMap<String, Item>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let list = Vec::<Item>::deserialize(deserializer)?;
        let mut items = BTreeMap::new();
        for item in list {
            let reference = item.reference.clone();
            if items.insert(reference.clone(), item).is_some() {
                return Err(D::Error::custom(format!("duplicate item reference '{reference}'")));
            }
        }
        Ok(items)
    }
}
