//! Transfer models shared by buys, sells, and the transfer listing.

use std::collections::HashMap;

use serde::Deserialize;

use super::{Amount, CentsAmount};

/// A fiat-to-bitcoin transfer (buy or sell) as reported by the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub id: String,
    /// Transfer direction: `"Buy"` or `"Sell"`.
    #[serde(rename = "type")]
    pub tpe: String,
    pub code: String,
    pub created_at: String,
    /// Fee breakdown keyed by fee label (e.g., `"coinbase"`, `"bank"`).
    pub fees: HashMap<String, CentsAmount>,
    /// Transfer state: `"Pending"`, `"Complete"`, ...
    pub status: String,
    #[serde(deserialize_with = "super::serde_helpers::null_as_default")]
    pub payout_date: String,
    #[serde(deserialize_with = "super::serde_helpers::null_as_default")]
    pub transaction_id: String,
    pub btc: Amount,
    pub subtotal: Amount,
    pub total: Amount,
    pub description: String,
}

/// Response to a buy or sell order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransferResponse {
    pub success: bool,
    /// Human-readable reasons when `success` is false.
    pub errors: Vec<String>,
    pub transfer: Transfer,
}

/// One page of the transfer listing.
///
/// Each element is a single-entry map keyed by `"transfer"`; this
/// matches the wire format and is preserved as-is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransfersPage {
    pub transfers: Vec<HashMap<String, Transfer>>,
    pub total_count: u32,
    pub num_pages: u32,
    pub current_page: u32,
}
