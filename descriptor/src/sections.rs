//! Global custom sections
//!
//! The `custom.apiGateway` block and the provider defaults, read verbatim.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The `custom` section; only the `apiGateway` block is read
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_gateway: Option<ApiGatewaySection>,
}

/// Process-wide API Gateway caching settings as declared
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewaySection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caching_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_gateway_is_shared: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling_burst_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttling_rate_limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_size: Option<ClusterSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_in_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_encrypted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_key_invalidation: Option<PerKeyInvalidationSection>,
}

/// Stage logging block; the level is kept as the raw string
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_trace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_level: Option<String>,
}

/// Per-key cache invalidation fragment, global or per endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerKeyInvalidationSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_authorization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_unauthorized_requests: Option<String>,
}

/// Provider defaults for stage and region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Cache cluster size in GB, written as a string (`"0.5"`) or a bare number (`0.5`).
///
/// The declared form is kept: a numeric `0` is unset while the string `"0"` is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClusterSize {
    Text(String),
    Number(f64),
}

impl ClusterSize {
    /// False for an empty string and for a numeric zero or NaN
    pub fn is_set(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
        }
    }
}

impl From<&str> for ClusterSize {
    fn from(size: &str) -> Self {
        Self::Text(size.to_string())
    }
}

impl From<f64> for ClusterSize {
    fn from(size: f64) -> Self {
        Self::Number(size)
    }
}

impl fmt::Display for ClusterSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cluster_size_accepts_string_and_number() {
        let size: ClusterSize = serde_json::from_value(json!("0.5")).unwrap();
        assert_eq!(size, ClusterSize::Text("0.5".to_string()));
        assert_eq!(size.to_string(), "0.5");

        let size: ClusterSize = serde_json::from_value(json!(6.1)).unwrap();
        assert_eq!(size, ClusterSize::Number(6.1));
        assert_eq!(size.to_string(), "6.1");

        let size: ClusterSize = serde_json::from_value(json!(118)).unwrap();
        assert_eq!(size.to_string(), "118");
    }

    #[test]
    fn test_cluster_size_zero_values() {
        let size: ClusterSize = serde_json::from_value(json!(0)).unwrap();
        assert!(!size.is_set());

        let size: ClusterSize = serde_json::from_value(json!(0.0)).unwrap();
        assert!(!size.is_set());

        assert!(!ClusterSize::from("").is_set());
        assert!(ClusterSize::from("0").is_set());
        assert!(ClusterSize::from(0.5).is_set());
    }

    #[test]
    fn test_cluster_size_keeps_declared_form() {
        let size: ClusterSize = serde_json::from_value(json!(0.5)).unwrap();
        assert_eq!(serde_json::to_value(&size).unwrap(), json!(0.5));

        let size: ClusterSize = serde_json::from_value(json!("1.6")).unwrap();
        assert_eq!(serde_json::to_value(&size).unwrap(), json!("1.6"));
    }

    #[test]
    fn test_api_gateway_section_camel_case() {
        let section: ApiGatewaySection = serde_json::from_value(json!({
            "cachingEnabled": true,
            "apiGatewayIsShared": false,
            "throttlingBurstLimit": 200,
            "throttlingRateLimit": 100,
            "metricsEnabled": true,
            "clusterSize": "1.6",
            "ttlInSeconds": 300,
            "dataEncrypted": true,
            "logging": { "enabled": true, "dataTrace": true, "loggingLevel": "INFO" },
            "perKeyInvalidation": {
                "requireAuthorization": true,
                "handleUnauthorizedRequests": "Fail"
            }
        }))
        .unwrap();

        assert_eq!(section.caching_enabled, Some(true));
        assert_eq!(section.api_gateway_is_shared, Some(false));
        assert_eq!(section.throttling_burst_limit, Some(200));
        assert_eq!(section.throttling_rate_limit, Some(100));
        assert_eq!(section.metrics_enabled, Some(true));
        assert_eq!(section.cluster_size, Some(ClusterSize::from("1.6")));
        assert_eq!(section.ttl_in_seconds, Some(300));
        assert_eq!(section.data_encrypted, Some(true));

        let logging = section.logging.unwrap();
        assert_eq!(logging.logging_level.as_deref(), Some("INFO"));

        let per_key = section.per_key_invalidation.unwrap();
        assert_eq!(per_key.require_authorization, Some(true));
        assert_eq!(per_key.handle_unauthorized_requests.as_deref(), Some("Fail"));
    }

    #[test]
    fn test_nulls_read_as_unset() {
        let section: ApiGatewaySection = serde_json::from_value(json!({
            "cachingEnabled": null,
            "logging": null,
            "ttlInSeconds": null
        }))
        .unwrap();
        assert_eq!(section, ApiGatewaySection::default());
    }
}
