//! Application configuration loaded from environment variables.
//!
//! Credentials **must** be provided via environment variables:
//! - `COINBASE_API_KEY` — API key for Coinbase authentication
//! - `COINBASE_API_SECRET` — API secret for Coinbase authentication
//!
//! An optional `COINBASE_API_URL` overrides the default endpoint.

/// Default REST API base URL.
const DEFAULT_API_URL: &str = "https://coinbase.com/api/v1";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub coinbase: CoinbaseConfig,
}

/// Coinbase-specific configuration values.
#[derive(Debug)]
pub struct CoinbaseConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

/// Loads the application configuration from environment variables.
///
/// The API base URL defaults to `https://coinbase.com/api/v1` and can be
/// overridden with `COINBASE_API_URL`. API credentials are optional
/// (unauthenticated mode, public price endpoints only) but when one is
/// set both must be present.
///
/// # Errors
///
/// Returns [`ToshiError::Config`](crate::ToshiError::Config) if only
/// one of the two credential variables is set.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url =
        non_empty_var("COINBASE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let api_key = non_empty_var("COINBASE_API_KEY");
    let api_secret = non_empty_var("COINBASE_API_SECRET");

    match (&api_key, &api_secret) {
        (Some(_), None) => {
            return Err(crate::ToshiError::Config(
                "COINBASE_API_KEY is set but COINBASE_API_SECRET is missing".to_string(),
            ));
        }
        (None, Some(_)) => {
            return Err(crate::ToshiError::Config(
                "COINBASE_API_SECRET is set but COINBASE_API_KEY is missing".to_string(),
            ));
        }
        _ => {}
    }

    Ok(AppConfig {
        coinbase: CoinbaseConfig {
            api_url,
            api_key,
            api_secret,
        },
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
