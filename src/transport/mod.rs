//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod response;
mod send_sms;

pub use response::{decode_json_body, http_failure_message};
pub use send_sms::{encode_send_sms_body, encode_send_template_sms_body};

/// Endpoint paths, relative to the client's base URL.
pub mod endpoint {
    pub const SEND_SMS: &str = "sms/a2p/send";
    pub const SEND_TEMPLATE_SMS: &str = "sms/a2p/template/send";
    pub const CHECK_BALANCE: &str = "sms/check-balance";
    pub const IDENTITIES: &str = "sms/identities";
}
