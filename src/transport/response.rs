use serde_json::Value;

/// Decode a successful response body.
///
/// Empty bodies and bodies that are not valid JSON both decode to `null`.
pub fn decode_json_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or(Value::Null)
}

/// Human-readable message for a non-2xx response.
///
/// Prefers the server's own body, then the canonical reason phrase.
pub fn http_failure_message(status: u16, body: Option<&str>) -> String {
    if let Some(body) = body.map(str::trim).filter(|body| !body.is_empty()) {
        return body.to_owned();
    }

    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_json_body_parses_objects_and_arrays() {
        assert_eq!(
            decode_json_body(r#"{ "balance": 42 }"#),
            json!({ "balance": 42 })
        );
        assert_eq!(decode_json_body(r#"["CECULA"]"#), json!(["CECULA"]));
    }

    #[test]
    fn decode_json_body_maps_empty_and_invalid_to_null() {
        assert_eq!(decode_json_body(""), Value::Null);
        assert_eq!(decode_json_body("  \n"), Value::Null);
        assert_eq!(decode_json_body("<html>oops</html>"), Value::Null);
    }

    #[test]
    fn http_failure_message_prefers_body() {
        assert_eq!(
            http_failure_message(500, Some(" Server Error \n")),
            "Server Error"
        );
    }

    #[test]
    fn http_failure_message_falls_back_to_reason_phrase() {
        assert_eq!(http_failure_message(404, None), "Not Found");
        assert_eq!(http_failure_message(503, Some("   ")), "Service Unavailable");
        assert_eq!(http_failure_message(599, None), "HTTP 599");
    }
}
