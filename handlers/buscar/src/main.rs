//! IPC worker for the lookup handler.
//!
//! Reads framed requests on stdin and writes framed responses on stdout.
//! Logs go to stderr.

use handler_buscar::{respond, Datastore, DatastoreConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,handler_buscar=debug".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DatastoreConfig::from_env();
    tracing::info!(path = %config.path.display(), "Starting lookup handler");

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create Tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    let store = Datastore::new(config.path);
    if let Err(e) = amigo_secreto_sdk::ipc::serve(|req| rt.block_on(respond(&store, req))) {
        tracing::error!("Failed to read request: {}", e);
        std::process::exit(1);
    }
}
