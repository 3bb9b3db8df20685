//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Mount the static fileserver under `/app` with hit counting
//! - Wire up middleware (tracing, request ID, panics, timeout, body limit)
//! - Serve on a listener until shutdown is signalled

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware, Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin;
use crate::api;
use crate::chirps::{ChirpValidator, FilterError};
use crate::config::{AdminConfig, ChirpyConfig};
use crate::health;
use crate::http::error::panic_response;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::http::response::LogNonOkResponse;
use crate::observability::metrics::{count_fileserver_hit, FileserverHits};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub validator: Arc<ChirpValidator>,
    pub hits: Arc<FileserverHits>,
    pub admin: Arc<AdminConfig>,
}

impl AppState {
    pub fn new(config: &ChirpyConfig) -> Result<Self, FilterError> {
        Ok(Self {
            validator: Arc::new(ChirpValidator::from_config(&config.chirps)?),
            hits: Arc::new(FileserverHits::new()),
            admin: Arc::new(config.admin.clone()),
        })
    }
}

/// HTTP server for the chirpy service.
pub struct HttpServer {
    router: Router,
    config: ChirpyConfig,
    hits: Arc<FileserverHits>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ChirpyConfig) -> Result<Self, FilterError> {
        let state = AppState::new(&config)?;
        let hits = state.hits.clone();

        tracing::debug!(
            banned_words = state.validator.banned_word_count(),
            max_length = config.chirps.max_length,
            static_root = %config.static_files.root,
            "Application state initialized"
        );

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            hits,
        })
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ChirpyConfig, state: AppState) -> Router {
        let fileserver = Router::new()
            .nest_service("/app", ServeDir::new(&config.static_files.root))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                count_fileserver_hit,
            ));

        let mut router = Router::new()
            .merge(health::router())
            .merge(api::router())
            .merge(admin::setup_admin_router(state.clone()))
            .merge(fileserver)
            .with_state(state);

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ));
        }

        router
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(propagate_request_id_layer())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            request_id = %request_id_of(request),
                        )
                    })
                    .on_response(LogNonOkResponse),
            )
            .layer(set_request_id_layer())
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            static_root = %self.config.static_files.root,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ChirpyConfig {
        &self.config
    }

    /// Shared handle to the fileserver hit counter.
    pub fn hits(&self) -> Arc<FileserverHits> {
        self.hits.clone()
    }

    /// A clone of the fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
