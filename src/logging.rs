//! Stage logging settings
//!
//! Normalizes the declared `logging` block. Two long-standing behaviors are kept
//! as-is for compatibility with existing deployments:
//!
//! - `enabled` is passed through untouched, unset included. It is never
//!   defaulted to `false`.
//! - A missing or unrecognized `loggingLevel` is reset to the boolean `false`
//!   (the `dataTrace` default) rather than to `OFF`. See [`LoggingLevelSetting::Reset`].

use crate::defaults::or_default;
use descriptor::LoggingSection;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Execution log level for the API Gateway stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoggingLevel {
    #[default]
    Off,
    Error,
    Info,
}

impl LoggingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Error => "ERROR",
            Self::Info => "INFO",
        }
    }
}

impl FromStr for LoggingLevel {
    type Err = ();

    /// Exact, case-sensitive match against `OFF`, `ERROR`, `INFO`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OFF" => Ok(Self::Off),
            "ERROR" => Ok(Self::Error),
            "INFO" => Ok(Self::Info),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LoggingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized `loggingLevel` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingLevelSetting {
    Level(LoggingLevel),
    /// Missing or invalid level. Serializes as `false`, not `"OFF"`.
    Reset,
}

impl LoggingLevelSetting {
    /// The level provisioning should apply; a reset level behaves like `OFF`
    pub fn effective_level(&self) -> LoggingLevel {
        match self {
            Self::Level(level) => *level,
            Self::Reset => LoggingLevel::Off,
        }
    }
}

impl Serialize for LoggingLevelSetting {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Level(level) => serializer.serialize_str(level.as_str()),
            Self::Reset => serializer.serialize_bool(DEFAULT_DATA_TRACE),
        }
    }
}

const DEFAULT_LOGGING_ENABLED: bool = false;
const DEFAULT_DATA_TRACE: bool = false;
const DEFAULT_LOGGING_LEVEL: LoggingLevel = LoggingLevel::Off;

/// Normalized stage logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub data_trace: bool,
    pub logging_level: LoggingLevelSetting,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: Some(DEFAULT_LOGGING_ENABLED),
            data_trace: DEFAULT_DATA_TRACE,
            logging_level: LoggingLevelSetting::Level(DEFAULT_LOGGING_LEVEL),
        }
    }
}

impl LoggingSettings {
    /// Normalize a declared logging block; an absent block yields the defaults
    pub fn normalize(section: Option<&LoggingSection>) -> Self {
        let Some(section) = section else {
            return Self::default();
        };

        let logging_level = match section.logging_level.as_deref().map(str::parse::<LoggingLevel>) {
            Some(Ok(level)) => LoggingLevelSetting::Level(level),
            _ => {
                debug_log!(
                    "Missing or invalid logging level {:?}, resetting",
                    section.logging_level
                );
                LoggingLevelSetting::Reset
            }
        };

        Self {
            enabled: section.enabled,
            data_trace: or_default(section.data_trace, DEFAULT_DATA_TRACE),
            logging_level,
        }
    }
}
