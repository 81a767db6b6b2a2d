//! # Deployment Descriptor Model
//!
//! This crate provides the loosely-typed input model for API Gateway caching:
//! the parts of a serverless deployment descriptor that the settings builder reads.
//! Every field is optional, unknown fields are ignored, and nothing here applies
//! defaults. Defaulting is the job of the settings crates built on top.
//!
//! ## Quick Start
//!
//! ### In-memory descriptor
//! ```rust
//! use descriptor::DeploymentDescriptor;
//! use serde_json::json;
//!
//! let descriptor = DeploymentDescriptor::from_json_value(json!({
//!     "service": {
//!         "custom": { "apiGateway": { "cachingEnabled": true } },
//!         "provider": { "stage": "dev", "region": "eu-west-1" },
//!         "functions": {
//!             "getUser": { "events": [{ "http": "GET /users/{id}" }] }
//!         }
//!     }
//! })).unwrap();
//!
//! assert!(descriptor.api_gateway().is_some());
//! ```
//!
//! ### Service document on disk
//! ```toml
//! [provider]
//! stage = "dev"
//! region = "eu-west-1"
//!
//! [custom.apiGateway]
//! cachingEnabled = true
//! clusterSize = "0.5"
//! ttlInSeconds = 300
//!
//! [[functions.getUser.events]]
//! http = { path = "/users/{id}", method = "get", caching = { enabled = true } }
//! ```
//!
//! Load it:
//! ```rust,no_run
//! use descriptor::DeploymentDescriptor;
//!
//! // Path from GATEWAY_CACHING_DESCRIPTOR (.env supported) or ./serverless.json
//! let descriptor = DeploymentDescriptor::load()?;
//!
//! // Or an explicit file
//! let descriptor = DeploymentDescriptor::from_file("config/serverless.toml")?;
//! # Ok::<(), descriptor::DescriptorError>(())
//! ```

pub mod functions;
pub mod sections;

pub use functions::{
    CacheKeyParameter, CachingSection, FunctionDeclaration, FunctionEvent, Functions,
    HttpTrigger, Route, StructuredRoute,
};
pub use sections::{
    ApiGatewaySection, ClusterSize, CustomSection, LoggingSection, PerKeyInvalidationSection,
    Provider,
};

use serde::{Deserialize, Deserializer, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_DESCRIPTOR_PATH: &str = "./serverless.json";
const DESCRIPTOR_PATH_VAR: &str = "GATEWAY_CACHING_DESCRIPTOR";

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Unsupported descriptor format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid descriptor: {0}")]
    Invalid(String),
}

/// Serialization formats a service document can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DescriptorError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(DescriptorError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// The in-memory deployment descriptor, shaped like the framework's `serverless` object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeploymentDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<Service>,
}

/// The service section: custom settings, provider defaults and function declarations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Functions>,
}

impl DeploymentDescriptor {
    /// Wrap a service document
    pub fn from_service(service: Service) -> Self {
        Self {
            service: Some(service),
        }
    }

    /// Build from an in-memory tree of the form `{ "service": { ... } }`
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse a service document (top level holds `custom`, `provider`, `functions`)
    pub fn from_document(content: &str, format: DocumentFormat) -> Result<Self, DescriptorError> {
        let service: Service = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        };
        Ok(Self::from_service(service))
    }

    /// Load a service document from a `.json` or `.toml` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DescriptorError> {
        let format = DocumentFormat::from_path(&path)?;
        let content = std::fs::read_to_string(path)?;
        Self::from_document(&content, format)
    }

    /// Load the service document named in .env / the environment, or the default path
    pub fn load() -> Result<Self, DescriptorError> {
        // A missing .env file only means the environment is used as-is
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        if let Ok(path) = env::var(DESCRIPTOR_PATH_VAR) {
            Self::from_file(path)
        } else if Path::new(DEFAULT_DESCRIPTOR_PATH).exists() {
            Self::from_file(DEFAULT_DESCRIPTOR_PATH)
        } else {
            Err(DescriptorError::Invalid(format!(
                "Descriptor path must be specified as {} (environment or .env) or in {}",
                DESCRIPTOR_PATH_VAR, DEFAULT_DESCRIPTOR_PATH
            )))
        }
    }

    /// The `service.custom.apiGateway` fragment, if declared
    pub fn api_gateway(&self) -> Option<&ApiGatewaySection> {
        self.service
            .as_ref()?
            .custom
            .as_ref()?
            .api_gateway
            .as_ref()
    }

    /// The `service.provider` section, if declared
    pub fn provider(&self) -> Option<&Provider> {
        self.service.as_ref()?.provider.as_ref()
    }

    /// Declared functions in document order
    pub fn functions(&self) -> impl Iterator<Item = (&str, &FunctionDeclaration)> {
        self.service
            .as_ref()
            .and_then(|service| service.functions.as_ref())
            .into_iter()
            .flat_map(|functions| functions.iter())
    }
}

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
