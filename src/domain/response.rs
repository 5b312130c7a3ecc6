use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Uniform result of every [`CeculaClient`](crate::CeculaClient) operation.
///
/// Serializes to `{"status": <code>, "data": <body>}` on success and
/// `{"status": <code>, "message": <text>}` on failure. A failure `status` is the HTTP status
/// when the server answered, or `0` when no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success { status: u16, data: Value },
    Failure { status: u16, message: String },
}

impl ApiResponse {
    pub fn status(&self) -> u16 {
        match self {
            Self::Success { status, .. } | Self::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Decoded response body; `None` for failures.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Success { data, .. } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Failure message; `None` for successes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message.as_str()),
        }
    }

    /// The envelope as a JSON value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Success { status, data } => serde_json::json!({
                "status": status,
                "data": data,
            }),
            Self::Failure { status, message } => serde_json::json!({
                "status": status,
                "message": message,
            }),
        }
    }

    /// Split the envelope into the decoded body or a [`RemoteFailure`].
    pub fn into_result(self) -> Result<Value, RemoteFailure> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Failure { status, message } => Err(RemoteFailure { status, message }),
        }
    }
}

/// Failure half of an [`ApiResponse`], usable with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    pub status: u16,
    pub message: String,
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remote call failed ({}): {}", self.status, self.message)
    }
}

impl std::error::Error for RemoteFailure {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_serializes_with_data() {
        let response = ApiResponse::Success {
            status: 200,
            data: json!({ "balance": 42 }),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": 200, "data": { "balance": 42 } })
        );
        assert_eq!(response.to_json(), serde_json::to_value(&response).unwrap());
        assert!(response.is_success());
        assert_eq!(response.message(), None);
    }

    #[test]
    fn failure_serializes_with_message() {
        let response = ApiResponse::Failure {
            status: 500,
            message: "Server Error".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "status": 500, "message": "Server Error" })
        );
        assert_eq!(response.status(), 500);
        assert_eq!(response.data(), None);
    }

    #[test]
    fn success_with_null_body_keeps_data_key() {
        let response = ApiResponse::Success {
            status: 204,
            data: Value::Null,
        };
        assert_eq!(response.to_json(), json!({ "status": 204, "data": null }));
    }

    #[test]
    fn into_result_splits_envelope() {
        let ok = ApiResponse::Success {
            status: 200,
            data: json!([1, 2]),
        };
        assert_eq!(ok.into_result().unwrap(), json!([1, 2]));

        let err = ApiResponse::Failure {
            status: 0,
            message: "connection refused".to_owned(),
        }
        .into_result()
        .unwrap_err();
        assert_eq!(err.status, 0);
        assert_eq!(err.to_string(), "remote call failed (0): connection refused");
    }
}
