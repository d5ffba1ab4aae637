//! Amigo Secreto SDK - Types and utilities for writing request handlers
//!
//! Handlers receive a [`Request`], answer with a [`Response`] and report
//! failures through [`HandlerError`]. The same types are used by the worker
//! binaries (over the IPC protocol in [`ipc`]) and by the HTTP gateway.

pub mod request;
pub mod response;
pub mod ipc;
pub mod error;

pub mod prelude {
    //! Common imports for Amigo Secreto handlers
    pub use crate::request::Request;
    pub use crate::response::Response;
    pub use crate::error::HandlerError;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use request::Request;
pub use response::Response;
pub use error::HandlerError;
