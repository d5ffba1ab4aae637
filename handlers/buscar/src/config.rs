//! Handler configuration

use std::env;
use std::path::PathBuf;

/// Environment variable holding the backing store path
pub const DATASTORE_PATH_VAR: &str = "AMIGO_DATASTORE_PATH";

/// File used when no path is configured
pub const DEFAULT_DATASTORE_PATH: &str = "db_amigo_secreto.json";

/// Location of the backing store, loaded from environment variables
#[derive(Debug, Clone)]
pub struct DatastoreConfig {
    /// Path to the JSON array of records
    pub path: PathBuf,
}

impl DatastoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            path: env::var(DATASTORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASTORE_PATH)),
        }
    }
}

impl Default for DatastoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
