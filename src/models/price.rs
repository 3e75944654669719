//! Price quote models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::Amount;

/// Quote for buying bitcoin, fees included.
///
/// `fees` is a list of single-entry maps keyed by fee label; this
/// matches the wire format and is preserved as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BuyPrice {
    pub subtotal: Amount,
    pub fees: Vec<HashMap<String, Amount>>,
    pub total: Amount,
}

/// Quote for selling bitcoin, fees included.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SellPrice {
    pub subtotal: Amount,
    pub fees: Vec<HashMap<String, Amount>>,
    pub total: Amount,
    pub amount: Decimal,
    pub currency: String,
}
