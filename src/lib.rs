//! Coinbase v1 REST API client library.
//!
//! Provides typed models and async functions for the wallet and exchange
//! endpoints: account balance, receive addresses, buys and sells, price
//! quotes, transfers, orders, contacts, currencies, and users.

pub mod auth;
pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod transport;

pub use client::Client;
pub use error::{Result, ToshiError};
pub use transport::{HttpTransport, Transport, TransportError};
