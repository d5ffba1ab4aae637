//! HTTP Request representation for handlers

use crate::error::HandlerError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents an incoming HTTP request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// HTTP method (GET, POST, PUT, DELETE, etc.)
    pub method: String,

    /// Request path (e.g., "/api/buscar")
    pub path: String,

    /// HTTP headers
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request body as text
    #[serde(default)]
    pub body: Option<String>,

    /// Client IP address
    #[serde(default)]
    pub client_ip: Option<String>,

    /// Request ID for tracing
    #[serde(default)]
    pub request_id: String,
}

impl Request {
    /// Create a request with the given method and path and no body.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a header (builder pattern).
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Parse the body as JSON into a typed struct.
    ///
    /// An absent body is parsed as JSON `null`.
    ///
    /// # Example
    /// ```ignore
    /// #[derive(Deserialize)]
    /// struct Lookup { codigo: String }
    ///
    /// let lookup: Lookup = req.json()?;
    /// ```
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> Result<T, HandlerError> {
        let body = self.body.as_deref().unwrap_or("null");
        serde_json::from_str(body)
            .map_err(|e| HandlerError::BadRequest(format!("Invalid JSON: {}", e)))
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            path: "/".to_string(),
            headers: HashMap::new(),
            body: None,
            client_ip: None,
            request_id: String::new(),
        }
    }
}
