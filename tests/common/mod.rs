//! Shared utilities for end-to-end tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use chirpy::config::ChirpyConfig;
use chirpy::http::HttpServer;
use chirpy::lifecycle::Shutdown;

/// A running server plus the handle that stops it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn stop(&self) {
        self.shutdown.trigger();
    }
}

/// Write a small static site into `root`.
pub fn write_static_site(root: &Path) {
    std::fs::write(root.join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
    std::fs::create_dir_all(root.join("assets")).unwrap();
    std::fs::write(root.join("assets/logo.svg"), "<svg></svg>").unwrap();
}

/// Start the server on `addr` with `config`, serving `static_root`.
pub async fn start_server(
    addr: SocketAddr,
    static_root: &Path,
    mut config: ChirpyConfig,
) -> TestServer {
    config.listener.bind_address = addr.to_string();
    config.static_files.root = static_root.to_string_lossy().into_owned();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    let server_shutdown = shutdown.wait();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;

    let client = reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}
