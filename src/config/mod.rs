//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ChirpyConfig (validated, immutable)
//!     → handed to HttpServer at start-up
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_str, ConfigError};
pub use schema::{
    AdminConfig, ChirpConfig, ChirpyConfig, ListenerConfig, LogFormat, ObservabilityConfig,
    SecurityConfig, StaticFilesConfig, TimeoutConfig,
};
pub use validation::ValidationError;
