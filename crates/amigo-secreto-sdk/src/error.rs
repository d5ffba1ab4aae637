//! Error types for Amigo Secreto handlers

use thiserror::Error;

/// Body message used for every internal failure. Details stay in the logs.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal error";

/// Errors that can occur in a handler
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("IPC error: {0}")]
    IpcError(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed {
        /// Methods the endpoint accepts, sent back in the `Allow` header
        allow: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HandlerError {
    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::BadRequest(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::MethodNotAllowed { .. } => 405,
            _ => 500,
        }
    }

    /// Convert to a Response.
    ///
    /// Client errors carry their message; server errors always answer with
    /// the generic [`INTERNAL_ERROR_MESSAGE`].
    pub fn to_response(&self) -> crate::Response {
        match self {
            HandlerError::BadRequest(message) => crate::Response::bad_request(message.as_str()),
            HandlerError::NotFound(message) => crate::Response::not_found_msg(message.as_str()),
            HandlerError::MethodNotAllowed { allow } => {
                crate::Response::method_not_allowed(allow.as_str())
            }
            _ => crate::Response::internal_error(INTERNAL_ERROR_MESSAGE),
        }
    }

    /// Whether the error comes from the server side rather than the caller.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}
