//! Unauthorized invalidation request strategies

use crate::errors::InvalidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What API Gateway does with an invalidation request that lacks authorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnauthorizedRequestStrategy {
    /// Drop the invalidation and serve the request normally
    Ignore,
    /// Drop the invalidation and add a `Warning` header to the response
    #[default]
    IgnoreWithWarning,
    /// Reject the request with 403 Forbidden
    Fail,
}

impl UnauthorizedRequestStrategy {
    /// Resolve a configured token, falling back to the default for anything unrecognized.
    ///
    /// Never fails: an unknown strategy must not break settings construction.
    pub fn select(token: Option<&str>) -> Self {
        match token {
            None | Some("") => Self::default(),
            Some(token) => token.parse().unwrap_or_else(|_err: InvalidationError| {
                debug_log!("{}, using {}", _err, Self::default());
                Self::default()
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "Ignore",
            Self::IgnoreWithWarning => "IgnoreWithWarning",
            Self::Fail => "Fail",
        }
    }
}

impl FromStr for UnauthorizedRequestStrategy {
    type Err = InvalidationError;

    /// Strict, case-insensitive parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "ignorewithwarning" => Ok(Self::IgnoreWithWarning),
            "fail" => Ok(Self::Fail),
            _ => Err(InvalidationError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for UnauthorizedRequestStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_known_tokens_case_insensitive() {
        assert_eq!(UnauthorizedRequestStrategy::select(Some("ignore")), UnauthorizedRequestStrategy::Ignore);
        assert_eq!(UnauthorizedRequestStrategy::select(Some("IGNORE")), UnauthorizedRequestStrategy::Ignore);
        assert_eq!(
            UnauthorizedRequestStrategy::select(Some("IgnoreWithWarning")),
            UnauthorizedRequestStrategy::IgnoreWithWarning
        );
        assert_eq!(UnauthorizedRequestStrategy::select(Some("Fail")), UnauthorizedRequestStrategy::Fail);
        assert_eq!(UnauthorizedRequestStrategy::select(Some("fAiL")), UnauthorizedRequestStrategy::Fail);
    }

    #[test]
    fn test_select_falls_back_to_ignore_with_warning() {
        for token in [None, Some(""), Some("reject"), Some("ignore "), Some("ignore-with-warning"), Some("403")] {
            assert_eq!(
                UnauthorizedRequestStrategy::select(token),
                UnauthorizedRequestStrategy::IgnoreWithWarning,
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("Ignore".parse::<UnauthorizedRequestStrategy>(), Ok(UnauthorizedRequestStrategy::Ignore));
        assert_eq!(
            "Deny".parse::<UnauthorizedRequestStrategy>(),
            Err(InvalidationError::UnknownStrategy("Deny".to_string()))
        );
    }

    #[test]
    fn test_display_and_serialize_names() {
        assert_eq!(UnauthorizedRequestStrategy::Fail.to_string(), "Fail");
        assert_eq!(
            serde_json::to_value(UnauthorizedRequestStrategy::IgnoreWithWarning).unwrap(),
            serde_json::json!("IgnoreWithWarning")
        );
    }
}
