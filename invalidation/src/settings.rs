//! Per-key invalidation settings
//!
//! One instance is built for the global scope. Endpoints that declare their own
//! `perKeyInvalidation` block get a fresh instance; all others share the global
//! one through an `Arc`, which keeps it immutable once built.

use crate::strategy::UnauthorizedRequestStrategy;
use descriptor::PerKeyInvalidationSection;
use serde::{Serialize, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// Resolved per-key invalidation policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerKeyInvalidationSettings {
    /// `Some(true)` by default. An explicit fragment keeps its own value, unset included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_authorization: Option<bool>,
    /// Only resolved when authorization is required
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle_unauthorized_requests: Option<UnauthorizedRequestStrategy>,
}

impl PerKeyInvalidationSettings {
    pub fn new(fragment: Option<&PerKeyInvalidationSection>) -> Self {
        let Some(fragment) = fragment else {
            return Self::default();
        };

        let handle_unauthorized_requests = if fragment.require_authorization == Some(true) {
            Some(UnauthorizedRequestStrategy::select(
                fragment.handle_unauthorized_requests.as_deref(),
            ))
        } else {
            debug_log!("Authorization not required, leaving unauthorized request strategy unset");
            None
        };

        Self {
            require_authorization: fragment.require_authorization,
            handle_unauthorized_requests,
        }
    }

    pub fn requires_authorization(&self) -> bool {
        self.require_authorization.unwrap_or(false)
    }
}

impl Default for PerKeyInvalidationSettings {
    fn default() -> Self {
        Self {
            require_authorization: Some(true),
            handle_unauthorized_requests: Some(UnauthorizedRequestStrategy::default()),
        }
    }
}

/// Per-key invalidation settings either owned by an endpoint or shared with the global scope
#[derive(Debug, Clone)]
pub enum InvalidationSettingsRef {
    Owned(PerKeyInvalidationSettings),
    Shared(Arc<PerKeyInvalidationSettings>),
}

impl InvalidationSettingsRef {
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }

    /// True when this is a handle to exactly `settings`, not merely an equal copy
    pub fn shares_with(&self, settings: &Arc<PerKeyInvalidationSettings>) -> bool {
        match self {
            Self::Shared(shared) => Arc::ptr_eq(shared, settings),
            Self::Owned(_) => false,
        }
    }
}

impl Deref for InvalidationSettingsRef {
    type Target = PerKeyInvalidationSettings;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(settings) => settings,
            Self::Shared(settings) => settings.as_ref(),
        }
    }
}

impl PartialEq for InvalidationSettingsRef {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl Serialize for InvalidationSettingsRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (**self).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fragment(require: Option<bool>, handle: Option<&str>) -> PerKeyInvalidationSection {
        PerKeyInvalidationSection {
            require_authorization: require,
            handle_unauthorized_requests: handle.map(str::to_string),
        }
    }

    #[test]
    fn test_absent_fragment_defaults() {
        let settings = PerKeyInvalidationSettings::new(None);
        assert_eq!(settings.require_authorization, Some(true));
        assert_eq!(
            settings.handle_unauthorized_requests,
            Some(UnauthorizedRequestStrategy::IgnoreWithWarning)
        );
        assert!(settings.requires_authorization());
    }

    #[test]
    fn test_authorization_not_required_leaves_strategy_unset() {
        let settings = PerKeyInvalidationSettings::new(Some(&fragment(Some(false), Some("Fail"))));
        assert_eq!(settings.require_authorization, Some(false));
        assert_eq!(settings.handle_unauthorized_requests, None);
        assert!(!settings.requires_authorization());
    }

    #[test]
    fn test_empty_fragment_keeps_unset_authorization() {
        let settings = PerKeyInvalidationSettings::new(Some(&fragment(None, None)));
        assert_eq!(settings.require_authorization, None);
        assert_eq!(settings.handle_unauthorized_requests, None);
        assert!(!settings.requires_authorization());
    }

    #[test]
    fn test_authorization_required_selects_strategy() {
        let settings = PerKeyInvalidationSettings::new(Some(&fragment(Some(true), Some("Ignore"))));
        assert_eq!(settings.handle_unauthorized_requests, Some(UnauthorizedRequestStrategy::Ignore));

        let settings = PerKeyInvalidationSettings::new(Some(&fragment(Some(true), Some("bogus"))));
        assert_eq!(
            settings.handle_unauthorized_requests,
            Some(UnauthorizedRequestStrategy::IgnoreWithWarning)
        );

        let settings = PerKeyInvalidationSettings::new(Some(&fragment(Some(true), None)));
        assert_eq!(
            settings.handle_unauthorized_requests,
            Some(UnauthorizedRequestStrategy::IgnoreWithWarning)
        );
    }

    #[test]
    fn test_shared_reference_identity() {
        let global = Arc::new(PerKeyInvalidationSettings::default());
        let shared = InvalidationSettingsRef::Shared(Arc::clone(&global));
        let owned = InvalidationSettingsRef::Owned(PerKeyInvalidationSettings::default());

        assert!(shared.is_shared());
        assert!(shared.shares_with(&global));
        assert!(!owned.is_shared());
        assert!(!owned.shares_with(&global));

        // Equal contents, different identity
        assert_eq!(shared, owned);
        let other = Arc::new(PerKeyInvalidationSettings::default());
        assert!(!shared.shares_with(&other));
    }

    #[test]
    fn test_serialize_skips_unset_strategy() {
        let settings = PerKeyInvalidationSettings::new(Some(&fragment(Some(false), None)));
        assert_eq!(
            serde_json::to_value(InvalidationSettingsRef::Owned(settings)).unwrap(),
            json!({ "requireAuthorization": false })
        );
        assert_eq!(
            serde_json::to_value(PerKeyInvalidationSettings::default()).unwrap(),
            json!({ "requireAuthorization": true, "handleUnauthorizedRequests": "IgnoreWithWarning" })
        );
    }
}
