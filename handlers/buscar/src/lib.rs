//! Access-code lookup handler.
//!
//! Given `{"codigo": "..."}` in a `POST` body, returns the first record in the
//! backing store whose `codigo_acceso` matches case-insensitively.

pub mod config;
pub mod handler;
pub mod store;

pub use config::DatastoreConfig;
pub use handler::{handle, respond};
pub use store::{Datastore, Record, StoreError};
