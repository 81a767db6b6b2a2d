//! Function and event declarations
//!
//! Functions are kept in declaration order. Each function carries a list of
//! heterogeneous events; only the `http` trigger is modelled, every other event
//! kind is passed through untouched.

use crate::null_as_default;
use crate::sections::PerKeyInvalidationSection;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Function declarations keyed by function key, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Functions(Vec<(String, FunctionDeclaration)>);

impl Functions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, declaration: FunctionDeclaration) {
        self.0.push((key.into(), declaration));
    }

    pub fn get(&self, key: &str) -> Option<&FunctionDeclaration> {
        self.0
            .iter()
            .find(|(function_key, _)| function_key == key)
            .map(|(_, declaration)| declaration)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionDeclaration)> {
        self.0
            .iter()
            .map(|(key, declaration)| (key.as_str(), declaration))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FunctionDeclaration)> for Functions {
    fn from_iter<I: IntoIterator<Item = (String, FunctionDeclaration)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

struct FunctionsVisitor;

impl<'de> Visitor<'de> for FunctionsVisitor {
    type Value = Functions;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of function keys to function declarations")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut functions = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, declaration)) =
            access.next_entry::<String, Option<FunctionDeclaration>>()?
        {
            functions.push((key, declaration.unwrap_or_default()));
        }
        Ok(Functions(functions))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Functions::default())
    }
}

impl<'de> Deserialize<'de> for Functions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(FunctionsVisitor)
    }
}

impl Serialize for Functions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, declaration) in &self.0 {
            map.serialize_entry(key, declaration)?;
        }
        map.end()
    }
}

/// One declared function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Deployed (custom) function name, when it differs from the key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<FunctionEvent>,
}

/// One trigger declared on a function
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpTrigger>,
    /// Other event kinds (`schedule`, `sqs`, ...) retained verbatim
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl FunctionEvent {
    /// An event is an API Gateway endpoint when it has a non-empty `http` trigger
    pub fn is_http_endpoint(&self) -> bool {
        match &self.http {
            Some(HttpTrigger::Compact(route)) => !route.is_empty(),
            Some(HttpTrigger::Structured(_)) => true,
            None => false,
        }
    }
}

/// An `http` trigger, either `"METHOD /path"` or a structured route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HttpTrigger {
    Compact(String),
    Structured(StructuredRoute),
}

/// The structured `http` form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caching: Option<CachingSection>,
    /// Remaining route options (`cors`, `authorizer`, ...)
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Method and path of an endpoint, unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub method: Option<String>,
    pub path: Option<String>,
}

impl HttpTrigger {
    /// Resolve the trigger into its method and path.
    ///
    /// The compact form is split on single spaces and only the first two pieces
    /// are used, so `"GET  /x"` yields an empty path and trailing text is dropped.
    pub fn route(&self) -> Route {
        match self {
            HttpTrigger::Compact(route) => {
                let mut parts = route.split(' ');
                Route {
                    method: parts.next().map(str::to_string),
                    path: parts.next().map(str::to_string),
                }
            }
            HttpTrigger::Structured(route) => Route {
                method: route.method.clone(),
                path: route.path.clone(),
            },
        }
    }

    /// The endpoint's caching block; the compact form never has one
    pub fn caching(&self) -> Option<&CachingSection> {
        match self {
            HttpTrigger::Compact(_) => None,
            HttpTrigger::Structured(route) => route.caching.as_ref(),
        }
    }
}

/// Endpoint-level caching block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachingSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_encrypted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_in_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_key_parameters: Option<Vec<CacheKeyParameter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_key_invalidation: Option<PerKeyInvalidationSection>,
}

/// A cache key parameter descriptor, passed through to provisioning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheKeyParameter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
