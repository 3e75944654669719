//! API credential handling.
//!
//! The secret is wrapped in [`Zeroizing`] so it is wiped from memory
//! when dropped rather than lingering in freed allocations. `Debug`
//! output redacts it.

use zeroize::Zeroizing;

use crate::config::CoinbaseConfig;

/// An API key / secret pair for request signing.
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    api_secret: Zeroizing<String>,
}

impl ApiCredentials {
    /// Creates credentials from a key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: Zeroizing::new(api_secret.into()),
        }
    }

    /// Builds credentials from a loaded [`CoinbaseConfig`], or `None`
    /// when the config carries no credentials (unauthenticated mode).
    pub fn from_config(config: &CoinbaseConfig) -> Option<Self> {
        match (&config.api_key, &config.api_secret) {
            (Some(key), Some(secret)) => Some(Self::new(key.clone(), secret.clone())),
            _ => None,
        }
    }

    /// Returns the API key (safe to log).
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API secret for signing. Never log this.
    pub(crate) fn expose_secret(&self) -> &str {
        &self.api_secret
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let credentials = ApiCredentials::new("my-key", "my-secret");
        let output = format!("{credentials:?}");
        assert!(output.contains("my-key"));
        assert!(!output.contains("my-secret"));
    }

    #[test]
    fn from_config_requires_both_values() {
        let config = CoinbaseConfig {
            api_url: "https://coinbase.com/api/v1".to_string(),
            api_key: Some("key".to_string()),
            api_secret: None,
        };
        assert!(ApiCredentials::from_config(&config).is_none());

        let config = CoinbaseConfig {
            api_url: "https://coinbase.com/api/v1".to_string(),
            api_key: Some("key".to_string()),
            api_secret: Some("secret".to_string()),
        };
        let credentials = ApiCredentials::from_config(&config).unwrap();
        assert_eq!(credentials.api_key(), "key");
        assert_eq!(credentials.expose_secret(), "secret");
    }
}
