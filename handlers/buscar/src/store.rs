//! Read-only JSON file datastore.
//!
//! The whole file is read and parsed on every lookup. Nothing is cached and
//! nothing is ever written back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Field holding a record's access code
pub const ACCESS_CODE_FIELD: &str = "codigo_acceso";

/// Errors raised while loading the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read datastore {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse datastore {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One entry of the dataset.
///
/// Only `codigo_acceso` is interpreted; every other field is passed through
/// untouched and in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's access code, if it has one and it is a string.
    pub fn access_code(&self) -> Option<&str> {
        self.0.get(ACCESS_CODE_FIELD).and_then(Value::as_str)
    }

    /// Compare against an already uppercased lookup key.
    ///
    /// A record without a string access code never matches.
    pub fn matches_code(&self, key: &str) -> bool {
        self.access_code()
            .map(|code| code.to_uppercase() == key)
            .unwrap_or(false)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// First record in dataset order whose access code matches `key`.
pub fn find_by_code<'a>(records: &'a [Record], key: &str) -> Option<&'a Record> {
    records.iter().find(|record| record.matches_code(key))
}

/// Handle to the backing JSON file
#[derive(Debug, Clone)]
pub struct Datastore {
    path: PathBuf,
}

impl Datastore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the full dataset.
    ///
    /// The file must hold a JSON array of objects. Parsing happens on the whole
    /// buffer, so a malformed file never yields a partial dataset.
    pub async fn load(&self) -> Result<Vec<Record>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load the dataset and return the first record matching `key`.
    pub async fn lookup(&self, key: &str) -> Result<Option<Record>, StoreError> {
        let records = self.load().await?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "Dataset loaded");
        Ok(find_by_code(&records, key).cloned())
    }
}
