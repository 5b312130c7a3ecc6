//! Typed Rust client for the Cecula A2P SMS messaging HTTP API.
//!
//! The crate is split into a domain layer of request/response types, a transport layer for
//! the JSON wire format, and a small client layer that performs the calls. Every operation
//! returns an [`ApiResponse`] envelope rather than a `Result`, and logs one entry per call
//! through the client's [`Logger`].
//!
//! ```rust,no_run
//! use cecula::{ApiKey, CeculaClient, MessageText, SendOptions, SendSms, SenderName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CeculaClient::new(ApiKey::new("...")?);
//!     let request = SendSms::new(
//!         "+2348031234567",
//!         MessageText::new("hello"),
//!         SenderName::new("CECULA"),
//!         SendOptions::default(),
//!     );
//!     let response = client.send_sms(request).await;
//!     println!("{}", response.to_json());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod logging;
mod transport;

pub use client::{CeculaClient, CeculaClientBuilder, CeculaError, ClientConfig};
pub use domain::{
    ApiKey, ApiResponse, BroadcastTime, Flash, MessageText, PhoneNumber, Recipient, Recipients,
    RemoteFailure, SendOptions, SendSms, SendTemplateSms, SenderName, TemplateId,
    TemplateOptions, ValidationError,
};
pub use logging::{
    FailureEntry, JsonLinesLogger, LOG_TARGET, Logger, SuccessEntry, TracingLogger,
};
