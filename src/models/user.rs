//! Account user models.

use serde::Deserialize;

use super::Amount;

/// Response from the `users` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsersResponse {
    pub users: Vec<UserEntry>,
}

/// A listing element; the API wraps each record under a `user` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserEntry {
    pub user: User,
}

/// The authenticated account's user record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub time_zone: String,
    /// Currency the user sees totals in (e.g., `"USD"`).
    pub native_currency: String,
    pub balance: Amount,
    pub buy_level: u32,
    pub sell_level: u32,
    pub buy_limit: Amount,
    pub sell_limit: Amount,
}
