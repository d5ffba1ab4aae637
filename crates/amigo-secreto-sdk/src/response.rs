//! HTTP Response representation for handlers

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an outgoing HTTP response.
///
/// # Quick Reference
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `ok(body)` | 200 | Successful lookup |
/// | `bad_request(msg)` | 400 | Invalid input |
/// | `not_found_msg(msg)` | 404 | No matching record |
/// | `method_not_allowed(allow)` | 405 | Wrong HTTP method |
/// | `internal_error(msg)` | 500 | Server error |
///
/// Error bodies always have the shape `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,

    /// Response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Response body
    #[serde(default)]
    pub body: Option<String>,
}

impl Response {
    /// Create a new response with the given status code (no body).
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Create a 200 OK response with JSON body.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"message": "Success"}))
    /// Response::ok(&record) // anything that implements Serialize
    /// ```
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a JSON response with a custom status code.
    pub fn json<T: Serialize>(status: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status,
            headers,
            body: serde_json::to_string(&body).ok(),
        }
    }

    /// Create an error response with the standard `{"error": ...}` body.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::json(status, serde_json::json!({"error": message.into()}))
    }

    /// Create a 400 Bad Request response.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(400, message)
    }

    /// Create a 404 Not Found response with a custom message.
    pub fn not_found_msg(message: impl Into<String>) -> Self {
        Self::error(404, message)
    }

    /// Create a 405 Method Not Allowed response advertising the accepted methods.
    pub fn method_not_allowed(allow: impl Into<String>) -> Self {
        Self::error(405, "Method not allowed").with_header("Allow", allow)
    }

    /// Create a 413 Payload Too Large response.
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::error(413, message)
    }

    /// Create a 500 Internal Server Error response.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::error(500, message)
    }

    /// Add a header to the response (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Get a header value (case-insensitive lookup).
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Parse the body back into JSON. An empty body is `null`.
    pub fn json_body(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(self.body.as_deref().unwrap_or("null"))
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::new(200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_sets_json_content_type() {
        let response = Response::ok(json!({"codigo_acceso": "XYZ9"}));
        assert_eq!(response.status, 200);
        assert_eq!(
            response.header("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body.as_deref(), Some(r#"{"codigo_acceso":"XYZ9"}"#));
    }

    #[test]
    fn test_error_shapes() {
        assert_eq!(
            Response::not_found_msg("not found").json_body().unwrap(),
            json!({"error": "not found"})
        );
        assert_eq!(Response::payload_too_large("payload too large").status, 413);
        assert_eq!(Response::internal_error("internal error").status, 500);
    }

    #[test]
    fn test_method_not_allowed() {
        let response = Response::method_not_allowed("POST");
        assert_eq!(response.status, 405);
        assert_eq!(response.header("Allow").map(String::as_str), Some("POST"));
    }

    #[test]
    fn test_empty_body_is_null() {
        assert!(Response::new(204).json_body().unwrap().is_null());
    }
}
