//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (fileserver hit counter)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → GET /admin/metrics
//! ```

pub mod logging;
pub mod metrics;

pub use metrics::FileserverHits;
