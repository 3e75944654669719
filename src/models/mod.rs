//! Typed response models for the Coinbase v1 REST API.
//!
//! Shared money types live here; per-resource shapes live in the
//! submodules. Wire field names are part of the remote API's contract
//! and must not change. Every struct decodes leniently: unknown fields
//! are ignored and absent fields fall back to their zero values, the
//! same tolerance the API's other clients rely on.

pub mod address;
pub mod contact;
pub mod order;
pub mod price;
mod serde_helpers;
pub mod transfer;
pub mod user;

use rust_decimal::Decimal;
use serde::Deserialize;

/// A monetary value: a decimal amount plus an ISO-4217-like currency code.
///
/// The wire format carries the amount as a decimal string
/// (e.g., `"1.50000000"`); the parsed [`Decimal`] preserves its scale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Amount {
    pub amount: Decimal,
    pub currency: String,
}

/// A monetary value as an integer count of the currency's smallest unit.
///
/// Used by fee breakdowns and order totals, distinct from the
/// decimal-string [`Amount`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CentsAmount {
    pub cents: i64,
    pub currency_iso: String,
}
