//! Chirpy: a small chirp-validation HTTP service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server (tracing, request ID, limits)
//!                         │
//!          ┌──────────────┼───────────────┬──────────────────┐
//!          ▼              ▼               ▼                  ▼
//!      health         api handlers     admin handlers     /app fileserver
//!     (readiness)         │           (metrics, reset)         │
//!                         ▼               ▲                  │
//!                  chirps::validator      └── FileserverHits ◀┘
//!                         │
//!                         ▼
//!                  chirps::filter
//!
//!     Failures ─▶ http::error (ApiError → status + JSON envelope)
//! ```

// Core
pub mod chirps;
pub mod config;
pub mod http;

// Endpoints
pub mod admin;
pub mod api;
pub mod health;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::ChirpyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
