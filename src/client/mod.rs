//! Client layer: orchestrates transport calls and maps outcomes to [`ApiResponse`].

mod config;
mod error;
mod http;

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use crate::domain::{ApiKey, ApiResponse, SendSms, SendTemplateSms};
use crate::logging::{FailureEntry, Logger, SuccessEntry, TracingLogger};
use crate::transport::endpoint;

pub use config::ClientConfig;
pub use error::CeculaError;

use http::{HttpMethod, HttpRequest, HttpTransport, ReqwestTransport};

const DEFAULT_BASE_URL: &str = "https://app.cecula.com/api";

/// Headers attached to every request, built once per client.
#[derive(Debug, Clone)]
struct AuthHeaders {
    api_key: ApiKey,
}

impl AuthHeaders {
    fn bearer(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    fn to_vec(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Authorization", format!("Bearer {}", self.api_key.expose())),
            ("Accept", "application/json".to_owned()),
        ]
    }
}

#[derive(Clone)]
/// Builder for [`CeculaClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or logger.
pub struct CeculaClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    logger: Arc<dyn Logger>,
}

impl CeculaClientBuilder {
    /// Create a builder with the default base URL, no timeout/user-agent override and the
    /// [`TracingLogger`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            logger: Arc::new(TracingLogger),
        }
    }

    /// Override the API base URL (default `https://app.cecula.com/api`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Replace the logger that receives one entry per call.
    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Build a [`CeculaClient`].
    ///
    /// Fails when the base URL is not an absolute URL or the HTTP client cannot be created.
    pub fn build(self) -> Result<CeculaClient, CeculaError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| CeculaError::Transport(Box::new(err)))?;

        Ok(CeculaClient {
            base_url,
            headers: AuthHeaders::bearer(self.api_key),
            http: Arc::new(ReqwestTransport { client }),
            logger: self.logger,
        })
    }
}

impl std::fmt::Debug for CeculaClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CeculaClientBuilder")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Check that `base_url` is an absolute hierarchical URL without query or fragment, and strip
/// trailing slashes so endpoint paths can be appended with a single `/`.
fn normalize_base_url(base_url: &str) -> Result<String, CeculaError> {
    let invalid = |reason: &str| CeculaError::InvalidBaseUrl(format!("{base_url}: {reason}"));

    let parsed = url::Url::parse(base_url).map_err(|err| invalid(&err.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(invalid("cannot be a base"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("must not contain a query or fragment"));
    }
    Ok(base_url.trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level Cecula messaging client.
///
/// Every operation returns an [`ApiResponse`]; failures (network errors, timeouts, non-2xx
/// statuses) come back as [`ApiResponse::Failure`] instead of an `Err`. Each call logs exactly
/// one entry to the client's [`Logger`].
pub struct CeculaClient {
    base_url: String,
    headers: AuthHeaders,
    http: Arc<dyn HttpTransport>,
    logger: Arc<dyn Logger>,
}

impl CeculaClient {
    /// Create a client using the default base URL and logger.
    ///
    /// For more customization, use [`CeculaClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            headers: AuthHeaders::bearer(api_key),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> CeculaClientBuilder {
        CeculaClientBuilder::new(api_key)
    }

    /// Create a client from a [`ClientConfig`] value.
    pub fn from_config(config: ClientConfig) -> Result<Self, CeculaError> {
        config.into_builder()?.build()
    }

    /// Base URL that endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send an SMS (`POST sms/a2p/send`).
    ///
    /// Unset options are sent as `broadcastTime: null` and `flash: 0`.
    pub async fn send_sms(&self, request: SendSms) -> ApiResponse {
        let body = crate::transport::encode_send_sms_body(&request)
            .map_err(|err| CeculaError::Encode(Box::new(err)));
        self.post(endpoint::SEND_SMS, body).await
    }

    /// Send an SMS built from a stored template (`POST sms/a2p/template/send`).
    ///
    /// An unset `flash` is sent as `0`.
    pub async fn send_template_sms(&self, request: SendTemplateSms) -> ApiResponse {
        let body = crate::transport::encode_send_template_sms_body(&request)
            .map_err(|err| CeculaError::Encode(Box::new(err)));
        self.post(endpoint::SEND_TEMPLATE_SMS, body).await
    }

    /// Fetch the account balance (`GET sms/check-balance`).
    pub async fn get_balance(&self) -> ApiResponse {
        self.get(endpoint::CHECK_BALANCE).await
    }

    /// List the sender identities registered on the account (`GET sms/identities`).
    pub async fn get_sender_names(&self) -> ApiResponse {
        self.get(endpoint::IDENTITIES).await
    }

    async fn post(&self, endpoint: &str, body: Result<Value, CeculaError>) -> ApiResponse {
        let result = match body {
            Ok(body) => self.send(HttpMethod::Post, endpoint, Some(body)).await,
            Err(err) => Err(err),
        };
        self.finish(endpoint, result)
    }

    async fn get(&self, endpoint: &str) -> ApiResponse {
        let result = self.send(HttpMethod::Get, endpoint, None).await;
        self.finish(endpoint, result)
    }

    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<(u16, Value), CeculaError> {
        let request = HttpRequest {
            method,
            url: format!("{}/{}", self.base_url, endpoint),
            headers: self.headers.to_vec(),
            body,
        };

        let response = self
            .http
            .execute(request)
            .await
            .map_err(CeculaError::Transport)?;

        if !(200..=299).contains(&response.status) {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(CeculaError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok((
            response.status,
            crate::transport::decode_json_body(&response.body),
        ))
    }

    /// Log the outcome and fold it into the response envelope.
    fn finish(&self, endpoint: &str, result: Result<(u16, Value), CeculaError>) -> ApiResponse {
        match result {
            Ok((status, data)) => {
                self.logger.info(&SuccessEntry {
                    endpoint,
                    response_status: status,
                    response_data: &data,
                });
                ApiResponse::Success { status, data }
            }
            Err(err) => {
                let status = err.code();
                let message = err.message();
                self.logger.error(&FailureEntry {
                    endpoint,
                    error_code: status,
                    error_message: &message,
                });
                ApiResponse::Failure { status, message }
            }
        }
    }
}

impl std::fmt::Debug for CeculaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CeculaClient")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}
