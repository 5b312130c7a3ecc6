use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::client::{CeculaClient, CeculaClientBuilder, CeculaError};
use crate::domain::ApiKey;

/// Client configuration, as embedded in a host application's config file.
///
/// Keys are camelCase, so `{"apiKey": "..."}` is the minimal valid value. The API key is
/// held as a secret and redacted from `Debug` output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Bearer credential sent with every request.
    pub api_key: SecretString,
    /// API root; defaults to `https://app.cecula.com/api`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds; no timeout when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Overrides the `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Configuration with only an API key; every other setting uses its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: None,
            timeout_secs: None,
            user_agent: None,
        }
    }

    /// Validate the configuration and turn it into a builder.
    pub fn into_builder(self) -> Result<CeculaClientBuilder, CeculaError> {
        let api_key = ApiKey::new(self.api_key.expose_secret())?;
        let mut builder = CeculaClient::builder(api_key);
        if let Some(base_url) = self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(builder)
    }
}
