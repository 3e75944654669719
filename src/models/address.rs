//! Receive address models.

use serde::Deserialize;

/// Response from `account/receive_address` and
/// `account/generate_receive_address`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReceiveAddress {
    pub success: bool,
    /// The bitcoin receive address.
    pub address: String,
    /// Callback URL invoked when the address receives funds, if any.
    #[serde(deserialize_with = "super::serde_helpers::null_as_default")]
    pub callback_url: String,
}

/// One page of the account's address listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressBook {
    pub addresses: Vec<AddressEntry>,
    pub total_count: u32,
    pub num_pages: u32,
    pub current_page: u32,
}

/// A listing element; the API wraps each record under an `address` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressEntry {
    pub address: AddressRecord,
}

/// A single receive address in the listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub address: String,
    #[serde(deserialize_with = "super::serde_helpers::null_as_default")]
    pub callback_url: String,
    #[serde(deserialize_with = "super::serde_helpers::null_as_default")]
    pub label: String,
    pub created_at: String,
}
