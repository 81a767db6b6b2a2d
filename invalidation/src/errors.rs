//! Error types for per-key invalidation settings
//!
//! Settings construction never fails; these errors only come out of the
//! strict parsing entry points.

use thiserror::Error;

/// Invalidation settings errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidationError {
    #[error("Unknown unauthorized request strategy: {0}")]
    UnknownStrategy(String),
}
