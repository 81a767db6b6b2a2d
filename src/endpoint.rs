//! Endpoint caching settings
//!
//! One entry per HTTP-triggered function event, inheriting from the global
//! settings wherever the endpoint leaves a value unset.

use crate::core::GlobalCachingSettings;
use crate::defaults::or_fallback;
use descriptor::{CacheKeyParameter, HttpTrigger};
use invalidation::{InvalidationSettingsRef, PerKeyInvalidationSettings};
use serde::Serialize;
use std::sync::Arc;

/// Resolved caching settings for a single endpoint
///
/// An endpoint without a `caching` block only carries its identity, route and
/// `caching_enabled = false`; every other caching field stays unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointCachingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_function_name: Option<String>,
    pub function_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub caching_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_key_parameters: Option<Vec<CacheKeyParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_key_invalidation: Option<InvalidationSettingsRef>,
}

impl EndpointCachingSettings {
    pub fn new(
        custom_function_name: Option<&str>,
        function_name: &str,
        http: &HttpTrigger,
        global: &GlobalCachingSettings,
    ) -> Self {
        let route = http.route();
        let mut settings = Self {
            custom_function_name: custom_function_name.map(str::to_string),
            function_name: function_name.to_string(),
            path: route.path,
            method: route.method,
            caching_enabled: false,
            data_encrypted: None,
            cache_ttl_in_seconds: None,
            cache_key_parameters: None,
            per_key_invalidation: None,
        };

        let Some(caching) = http.caching() else {
            trace_log!(
                "No caching block for {} {:?} {:?}",
                function_name,
                settings.method,
                settings.path
            );
            return settings;
        };

        // A globally disabled cache wins over the endpoint's own flag
        settings.caching_enabled =
            global.caching_enabled == Some(true) && caching.enabled == Some(true);
        settings.data_encrypted = or_fallback(caching.data_encrypted, global.data_encrypted);
        settings.cache_ttl_in_seconds =
            or_fallback(caching.ttl_in_seconds, global.cache_ttl_in_seconds);
        settings.cache_key_parameters = caching.cache_key_parameters.clone();
        settings.per_key_invalidation = match &caching.per_key_invalidation {
            Some(fragment) => Some(InvalidationSettingsRef::Owned(
                PerKeyInvalidationSettings::new(Some(fragment)),
            )),
            None => global
                .per_key_invalidation
                .as_ref()
                .map(|shared| InvalidationSettingsRef::Shared(Arc::clone(shared))),
        };

        settings
    }

    /// True when this endpoint uses the global per-key invalidation settings
    pub fn inherits_per_key_invalidation(&self, global: &GlobalCachingSettings) -> bool {
        match (&self.per_key_invalidation, &global.per_key_invalidation) {
            (Some(own), Some(shared)) => own.shares_with(shared),
            _ => false,
        }
    }
}
