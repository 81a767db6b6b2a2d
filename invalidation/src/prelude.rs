//! Convenience re-exports for common invalidation usage

pub use crate::errors::InvalidationError;
pub use crate::settings::{InvalidationSettingsRef, PerKeyInvalidationSettings};
pub use crate::strategy::UnauthorizedRequestStrategy;

pub use descriptor::PerKeyInvalidationSection;
