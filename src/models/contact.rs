//! Contact models.

use serde::Deserialize;

/// One page of the account's previous transaction contacts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactsPage {
    pub contacts: Vec<Contact>,
    pub total_count: u32,
    pub num_pages: u32,
    pub current_page: u32,
}

/// A contact the account has transacted with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
}
