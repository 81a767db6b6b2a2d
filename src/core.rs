//! Global caching settings
//!
//! Root of the settings tree: process-wide defaults resolved from
//! `custom.apiGateway`, plus one [`EndpointCachingSettings`] per HTTP-triggered
//! function event.

use crate::defaults::{
    DEFAULT_CACHE_CLUSTER_SIZE, DEFAULT_DATA_ENCRYPTED, DEFAULT_METRICS_ENABLED,
    DEFAULT_THROTTLING_BURST_LIMIT, DEFAULT_THROTTLING_RATE_LIMIT, DEFAULT_TTL, Truthy,
    or_default, or_fallback,
};
use crate::endpoint::EndpointCachingSettings;
use crate::errors::CachingSettingsError;
use crate::logging::LoggingSettings;
use descriptor::{ClusterSize, DeploymentDescriptor};
use invalidation::PerKeyInvalidationSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Explicit stage/region overrides, typically from the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOptions {
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

impl StageOptions {
    pub fn new(stage: Option<&str>, region: Option<&str>) -> Self {
        Self {
            stage: stage.map(str::to_string),
            region: region.map(str::to_string),
        }
    }
}

/// Resolved API Gateway caching settings
///
/// When the descriptor has no `custom.apiGateway` section the settings stay
/// empty: every field is unset and there are no endpoints. `caching_enabled`
/// doubles as the "was configured" sentinel, see [`Self::is_configured`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalCachingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_gateway_is_shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttling_burst_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throttling_rate_limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_cluster_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl_in_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_encrypted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_key_invalidation: Option<Arc<PerKeyInvalidationSettings>>,
    pub endpoint_settings: Vec<EndpointCachingSettings>,
}

impl GlobalCachingSettings {
    /// Resolve settings from a deployment descriptor
    pub fn new(descriptor: &DeploymentDescriptor, options: Option<&StageOptions>) -> Self {
        let Some(api_gateway) = descriptor.api_gateway() else {
            debug_log!("No custom.apiGateway section, caching settings left empty");
            return Self::default();
        };

        let logging = LoggingSettings::normalize(api_gateway.logging.as_ref());
        let provider = descriptor.provider();
        let stage = options.and_then(|options| options.stage.clone());
        let region = options.and_then(|options| options.region.clone());

        let mut settings = Self {
            caching_enabled: api_gateway.caching_enabled,
            api_gateway_is_shared: api_gateway.api_gateway_is_shared,
            logging_enabled: logging.enabled,
            logging: Some(logging),
            throttling_burst_limit: Some(or_default(
                api_gateway.throttling_burst_limit,
                DEFAULT_THROTTLING_BURST_LIMIT,
            )),
            throttling_rate_limit: Some(or_default(
                api_gateway.throttling_rate_limit,
                DEFAULT_THROTTLING_RATE_LIMIT,
            )),
            metrics_enabled: Some(or_default(
                api_gateway.metrics_enabled,
                DEFAULT_METRICS_ENABLED,
            )),
            stage: or_fallback(stage, provider.and_then(|provider| provider.stage.clone())),
            region: or_fallback(region, provider.and_then(|provider| provider.region.clone())),
            cache_cluster_size: Some(
                api_gateway
                    .cluster_size
                    .as_ref()
                    .filter(|size| size.is_truthy())
                    .map_or_else(|| DEFAULT_CACHE_CLUSTER_SIZE.to_string(), ClusterSize::to_string),
            ),
            cache_ttl_in_seconds: Some(or_default(api_gateway.ttl_in_seconds, DEFAULT_TTL)),
            data_encrypted: Some(or_default(
                api_gateway.data_encrypted,
                DEFAULT_DATA_ENCRYPTED,
            )),
            per_key_invalidation: Some(Arc::new(PerKeyInvalidationSettings::new(
                api_gateway.per_key_invalidation.as_ref(),
            ))),
            endpoint_settings: Vec::new(),
        };

        let mut endpoint_settings = Vec::new();
        for (function_key, function) in descriptor.functions() {
            for event in &function.events {
                let Some(http) = event.http.as_ref().filter(|_| event.is_http_endpoint()) else {
                    trace_log!("Skipping non-HTTP event on {}", function_key);
                    continue;
                };
                endpoint_settings.push(EndpointCachingSettings::new(
                    function.name.as_deref(),
                    function_key,
                    http,
                    &settings,
                ));
            }
        }

        debug_log!(
            "Resolved caching settings for stage {:?}: {} endpoint(s)",
            settings.stage,
            endpoint_settings.len()
        );
        settings.endpoint_settings = endpoint_settings;
        settings
    }

    /// Load a service document from disk and resolve its settings
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        options: Option<&StageOptions>,
    ) -> Result<Self, CachingSettingsError> {
        let descriptor = DeploymentDescriptor::from_file(path)?;
        Ok(Self::new(&descriptor, options))
    }

    /// Load the service document located through the environment and resolve its settings
    pub fn load(options: Option<&StageOptions>) -> Result<Self, CachingSettingsError> {
        let descriptor = DeploymentDescriptor::load()?;
        Ok(Self::new(&descriptor, options))
    }

    /// Whether a `custom.apiGateway` section declared `cachingEnabled` at all
    pub fn is_configured(&self) -> bool {
        self.caching_enabled.is_some()
    }

    /// Endpoints declared by the function with the given key, in declaration order
    pub fn endpoints_for_function<'a>(
        &'a self,
        function_key: &'a str,
    ) -> impl Iterator<Item = &'a EndpointCachingSettings> + 'a {
        self.endpoint_settings
            .iter()
            .filter(move |endpoint| endpoint.function_name == function_key)
    }
}
