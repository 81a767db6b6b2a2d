//! Per-key cache invalidation settings
//!
//! This crate resolves how API Gateway handles per-key cache invalidation
//! requests: whether authorization is required and what happens to requests
//! that lack it.

#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod prelude;
pub mod settings;
pub mod strategy;

pub use errors::InvalidationError;
pub use settings::{InvalidationSettingsRef, PerKeyInvalidationSettings};
pub use strategy::UnauthorizedRequestStrategy;

// Re-export the input fragment this crate reads
pub use descriptor::PerKeyInvalidationSection;
