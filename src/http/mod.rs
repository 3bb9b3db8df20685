//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID assigned / propagated)
//!     → health, api, admin handlers or the /app fileserver
//!     → error.rs (ApiError → status + JSON envelope)
//!     → response.rs (non-OK responses logged at WARN)
//!     → Send to client
//! ```

pub mod error;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, ErrorResponse};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
