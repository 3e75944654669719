//! Typed endpoint methods for the Coinbase v1 REST API.
//!
//! Every method follows the same shape: serialize parameters, make one
//! HTTP round trip through the [`Transport`], decode the JSON body into
//! the endpoint's result model. Nothing is cached or retried, and no
//! method touches shared mutable state, so one client can serve many
//! concurrent callers.
//!
//! Parameter conventions, part of the wire contract:
//! - numeric parameters equal to zero mean "unspecified" and are omitted
//!   from the request entirely, never sent as a literal `0`;
//! - empty string parameters are likewise omitted;
//! - boolean flags are sent as the literal string `"true"` when set and
//!   omitted otherwise;
//! - bitcoin quantities are sent with exactly eight fractional digits.

use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::info;

use crate::config::AppConfig;
use crate::credentials::ApiCredentials;
use crate::error::Result;
use crate::models::Amount;
use crate::models::address::{AddressBook, ReceiveAddress};
use crate::models::contact::ContactsPage;
use crate::models::order::OrdersPage;
use crate::models::price::{BuyPrice, SellPrice};
use crate::models::transfer::{TransferResponse, TransfersPage};
use crate::models::user::UsersResponse;
use crate::transport::{HttpTransport, Transport};

/// Coinbase v1 API client, generic over its [`Transport`].
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client for the given base URL.
    ///
    /// Pass `None` for credentials to use unauthenticated mode (public
    /// price endpoints only).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, credentials: Option<ApiCredentials>) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(
            base_url,
            credentials,
        )?))
    }

    /// Creates a client from a loaded [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let credentials = ApiCredentials::from_config(&config.coinbase);
        Self::new(&config.coinbase.api_url, credentials)
    }
}

impl<T: Transport> Client<T> {
    /// Wraps an existing transport. Useful for tests and for callers
    /// that configure the transport themselves.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches the account's current balance.
    ///
    /// GET `account/balance`
    pub async fn account_balance(&self) -> Result<Amount> {
        let body = self.transport.get("account/balance", &[]).await?;
        decode(&body)
    }

    /// Fetches the account's current receive address.
    ///
    /// GET `account/receive_address`
    pub async fn receive_address(&self) -> Result<ReceiveAddress> {
        let body = self.transport.get("account/receive_address", &[]).await?;
        decode(&body)
    }

    /// Generates a fresh receive address.
    ///
    /// POST `account/generate_receive_address`
    ///
    /// When `callback_url` is empty the request body carries no address
    /// object at all; the server then creates the address without a
    /// payment callback.
    pub async fn generate_receive_address(&self, callback_url: &str) -> Result<ReceiveAddress> {
        let params = if callback_url.is_empty() {
            json!({})
        } else {
            json!({ "address": { "callback_url": callback_url } })
        };
        let body = self
            .transport
            .post_json("account/generate_receive_address", &params)
            .await?;
        decode(&body)
    }

    /// Lists the account's receive addresses.
    ///
    /// GET `addresses`
    ///
    /// `page` and `limit` are omitted when zero; `query` filters by
    /// address or label substring and is omitted when empty.
    pub async fn addresses(&self, page: u32, limit: u32, query: &str) -> Result<AddressBook> {
        let mut params = paging_params(page, limit);
        if !query.is_empty() {
            params.push(("query", query.to_string()));
        }
        let body = self.transport.get("addresses", &params).await?;
        decode(&body)
    }

    /// Buys bitcoin at the current market rate.
    ///
    /// POST `buys`
    ///
    /// `agree_btc_amount_varies` acknowledges that the delivered amount
    /// may differ from `quantity` when the order takes time to fill; the
    /// flag is sent as `"true"` or not at all.
    pub async fn buy(
        &self,
        quantity: Decimal,
        agree_btc_amount_varies: bool,
    ) -> Result<TransferResponse> {
        let qty = format_qty(quantity);
        info!(%qty, "placing buy order");

        let mut form = vec![("qty", qty)];
        if agree_btc_amount_varies {
            form.push(("agree_btc_amount_varies", "true".to_string()));
        }
        let body = self.transport.post_form("buys", &form).await?;
        decode(&body)
    }

    /// Sells bitcoin at the current market rate.
    ///
    /// POST `sells`
    pub async fn sell(&self, quantity: Decimal) -> Result<TransferResponse> {
        let qty = format_qty(quantity);
        info!(%qty, "placing sell order");

        let form = vec![("qty", qty)];
        let body = self.transport.post_form("sells", &form).await?;
        decode(&body)
    }

    /// Lists contacts the account has previously transacted with.
    ///
    /// GET `contacts`
    pub async fn contacts(&self) -> Result<ContactsPage> {
        let body = self.transport.get("contacts", &[]).await?;
        decode(&body)
    }

    /// Lists all supported currencies as `[name, ISO code]` pairs.
    ///
    /// GET `currencies`
    pub async fn currencies(&self) -> Result<Vec<Vec<String>>> {
        let body = self.transport.get("currencies", &[]).await?;
        decode(&body)
    }

    /// Fetches current exchange rates, keyed like `"btc_to_usd"`.
    ///
    /// GET `currencies/exchange_rates`
    pub async fn exchange_rates(&self) -> Result<HashMap<String, String>> {
        let body = self.transport.get("currencies/exchange_rates", &[]).await?;
        decode(&body)
    }

    /// Lists received merchant orders.
    ///
    /// GET `orders`
    pub async fn orders(&self) -> Result<OrdersPage> {
        let body = self.transport.get("orders", &[]).await?;
        decode(&body)
    }

    /// Quotes the total price to buy one bitcoin.
    ///
    /// GET `prices/buy`
    pub async fn buy_price(&self) -> Result<BuyPrice> {
        let body = self.transport.get("prices/buy", &[]).await?;
        decode(&body)
    }

    /// Quotes the total proceeds of selling one bitcoin.
    ///
    /// GET `prices/sell`
    pub async fn sell_price(&self) -> Result<SellPrice> {
        let body = self.transport.get("prices/sell", &[]).await?;
        decode(&body)
    }

    /// Fetches the current spot exchange rate.
    ///
    /// GET `prices/spot_rate`
    pub async fn spot_rate(&self) -> Result<Amount> {
        let body = self.transport.get("prices/spot_rate", &[]).await?;
        decode(&body)
    }

    /// Fetches historical spot prices.
    ///
    /// GET `prices/historical`
    ///
    /// The endpoint's payload is not a stable JSON document, so the body
    /// is returned as raw text; only transport failures are reported.
    pub async fn historical_prices(&self, page: u32) -> Result<String> {
        let params = paging_params(page, 0);
        let body = self.transport.get("prices/historical", &params).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Lists the account's buy and sell transfers.
    ///
    /// GET `transfers`
    pub async fn transfers(&self, page: u32, limit: u32) -> Result<TransfersPage> {
        let params = paging_params(page, limit);
        let body = self.transport.get("transfers", &params).await?;
        decode(&body)
    }

    /// Fetches the authenticated account's user records.
    ///
    /// GET `users`
    pub async fn users(&self) -> Result<UsersResponse> {
        let body = self.transport.get("users", &[]).await?;
        decode(&body)
    }
}

/// Decodes a response body, mapping any structural mismatch to
/// [`ToshiError::Decode`](crate::ToshiError::Decode). No partial result
/// survives a failure.
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Builds pagination parameters. Zero means "unspecified": the
/// parameter is left out rather than sent as `0`.
fn paging_params(page: u32, limit: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if page != 0 {
        params.push(("page", page.to_string()));
    }
    if limit != 0 {
        params.push(("limit", limit.to_string()));
    }
    params
}

/// Serializes a bitcoin quantity with exactly eight fractional digits,
/// rounding half to even when the input carries more precision.
fn format_qty(quantity: Decimal) -> String {
    let rounded = quantity.round_dp_with_strategy(8, RoundingStrategy::MidpointNearestEven);
    format!("{rounded:.8}")
}
