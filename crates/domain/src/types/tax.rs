//! Taxes and unit prices

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_UNIT_PRICE;

/// A named tax
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tax {
    pub name: String,

    /// Rate in basis points (2000 = 20%)
    pub base_points: u32,
}

impl Tax {
    pub fn new(name: impl Into<String>, base_points: u32) -> Self {
        Self { name: name.into(), base_points }
    }
}

/// Price of `base_quantity` units, for a quantity step of `quantity`
///
/// Written as a three element array in configuration files:
/// `unit_price = [quantity, base_quantity, price]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(u32, u32, i64)", into = "(u32, u32, i64)")]
pub struct UnitPrice {
    pub quantity: u32,
    pub base_quantity: u32,

    /// Price in minor currency units
    pub price: i64,
}

impl Default for UnitPrice {
    fn default() -> Self {
        DEFAULT_UNIT_PRICE.into()
    }
}

impl From<(u32, u32, i64)> for UnitPrice {
    fn from((quantity, base_quantity, price): (u32, u32, i64)) -> Self {
        Self { quantity, base_quantity, price }
    }
}

impl From<UnitPrice> for (u32, u32, i64) {
    fn from(value: UnitPrice) -> Self {
        (value.quantity, value.base_quantity, value.price)
    }
}
