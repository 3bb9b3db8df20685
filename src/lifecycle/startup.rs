//! Startup orchestration.
//!
//! Config is already loaded and validated by the caller. From here: build
//! application state, bind the listener, and serve until a signal arrives.
//! Any failure before serving is fatal.

use thiserror::Error;
use tokio::net::TcpListener;

use crate::chirps::FilterError;
use crate::config::ChirpyConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to build chirp filter: {0}")]
    Filter(#[from] FilterError),
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build the server, bind, and run until SIGINT/SIGTERM.
pub async fn start(config: ChirpyConfig) -> Result<(), StartupError> {
    let address = config.listener.bind_address.clone();
    let server = HttpServer::new(config)?;

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.wait();
    tokio::spawn(async move {
        signals::wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    server
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)
}
