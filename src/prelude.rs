//! Convenience re-exports for common gateway-caching usage
//!
//! # Example
//!
//! ```rust
//! use gateway_caching::prelude::*;
//!
//! let settings = GlobalCachingSettings::new(&DeploymentDescriptor::default(), None);
//! assert!(!settings.is_configured());
//! ```

// Settings tree
pub use crate::core::{GlobalCachingSettings, StageOptions};
pub use crate::endpoint::EndpointCachingSettings;
pub use crate::errors::CachingSettingsError;
pub use crate::logging::{LoggingLevel, LoggingLevelSetting, LoggingSettings};

// Per-key invalidation
pub use invalidation::prelude::*;

// Input model
pub use descriptor::{DeploymentDescriptor, DescriptorError, FunctionEvent, HttpTrigger, Route};

// Common external dependencies
pub use serde::{Deserialize, Serialize};
pub use serde_json;
