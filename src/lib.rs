//! # Gateway Caching
//!
//! Normalized API Gateway caching settings for serverless deployments. The
//! settings are resolved from the loosely-typed deployment descriptor: global
//! defaults from `custom.apiGateway`, then one entry per HTTP-triggered function
//! event that inherits from them.
//!
//! ## Quick Start
//!
//! ```rust
//! use gateway_caching::prelude::*;
//! use serde_json::json;
//!
//! let descriptor = DeploymentDescriptor::from_json_value(json!({
//!     "service": {
//!         "custom": { "apiGateway": { "cachingEnabled": true, "ttlInSeconds": 300 } },
//!         "provider": { "stage": "dev", "region": "eu-west-1" },
//!         "functions": {
//!             "getCat": {
//!                 "events": [{
//!                     "http": {
//!                         "path": "/cats/{pawId}",
//!                         "method": "get",
//!                         "caching": {
//!                             "enabled": true,
//!                             "cacheKeyParameters": [{ "name": "request.path.pawId" }]
//!                         }
//!                     }
//!                 }]
//!             }
//!         }
//!     }
//! })).unwrap();
//!
//! let settings = GlobalCachingSettings::new(&descriptor, Some(&StageOptions::new(Some("prod"), None)));
//!
//! assert_eq!(settings.stage.as_deref(), Some("prod"));
//! let endpoint = &settings.endpoint_settings[0];
//! assert!(endpoint.caching_enabled);
//! assert_eq!(endpoint.cache_ttl_in_seconds, Some(300));
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod defaults;
pub mod endpoint;
pub mod errors;
pub mod logging;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::{GlobalCachingSettings, StageOptions};
pub use endpoint::EndpointCachingSettings;
pub use errors::CachingSettingsError;
pub use logging::{LoggingLevel, LoggingLevelSetting, LoggingSettings};

// Re-export member crates used in the public API
pub use descriptor;
pub use invalidation;
