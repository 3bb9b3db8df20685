//! Chirp validation subsystem.
//!
//! # Data Flow
//! ```text
//! raw request bytes
//!     → validator.rs (JSON parse, shape check, length check)
//!     → filter.rs (banned-word masking)
//!     → ChirpResponse { cleanedBody }
//! ```

pub mod filter;
pub mod validator;

pub use filter::{FilterError, WordFilter, MASK};
pub use validator::{ChirpError, ChirpRequest, ChirpResponse, ChirpValidator};
