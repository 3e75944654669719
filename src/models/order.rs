//! Merchant order models.

use serde::Deserialize;

use super::CentsAmount;

/// One page of received merchant orders.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub total_count: u32,
    pub num_pages: u32,
    pub current_page: u32,
}

/// A merchant order created through a payment button.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: String,
    pub created_at: String,
    /// Order state: `"new"`, `"completed"`, `"expired"`, ...
    pub status: String,
    pub total_btc: CentsAmount,
    pub total_native: CentsAmount,
    /// Merchant-supplied custom string, passed through verbatim.
    pub custom: String,
    pub button: OrderButton,
    pub transaction: OrderTransaction,
}

/// The payment button the order was placed through.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderButton {
    #[serde(rename = "type")]
    pub tpe: String,
    pub name: String,
    pub description: String,
    pub id: String,
}

/// The on-chain transaction paying for the order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderTransaction {
    pub id: String,
    pub hash: String,
    pub confirmations: u32,
}
