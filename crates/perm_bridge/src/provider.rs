//! Provider-side port types.
//!
//! A permissions backend that wants to answer queries for the host registers
//! an object implementing [`PermissionProvider`] with the host's service
//! registry. The adapter never knows the backend's concrete type; it only
//! holds the capability interface defined here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which permissions backend the adapter is currently hooked into.
///
/// Serializes in snake_case (`"none"` / `"external"`) so hosts can surface it
/// in status payloads and config dumps.
///
/// The enum is non-exhaustive: matches outside this crate must keep a
/// fallback arm, and that arm should deny rather than grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ProviderType {
    /// No supported provider is hooked; queries answer from caller defaults.
    None,
    /// An external permissions provider is hooked and answers all queries.
    External,
}

impl ProviderType {
    /// Human-readable backend name, for status lines and host consoles.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderType::None => "None",
            ProviderType::External => "External",
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The entity whose permissions are being queried, e.g. a connected user.
pub trait Subject {
    /// Stable identifier the provider keys its records on.
    fn name(&self) -> &str;

    /// Host-convention privilege flag (e.g. operator status).
    ///
    /// Used as the fallback answer for permission checks when no provider is
    /// hooked. It carries no weight once a provider answers.
    fn is_privileged(&self) -> bool;
}

/// Capability interface an external permissions backend exposes.
///
/// Implementations must be cheap to call: the adapter delegates every query
/// straight through with no caching, no retries and no timeout handling.
pub trait PermissionProvider: Send + Sync {
    /// Whether the backend considers itself active.
    ///
    /// Checked once during [`setup`](crate::adapter::PermissionsAdapter::setup);
    /// a provider reporting `false` is never hooked.
    fn is_enabled(&self) -> bool;

    /// Whether `subject` holds the permission `key`.
    fn has(&self, subject: &dyn Subject, key: &str) -> bool;

    /// Names of the groups `subject` belongs to, in backend order.
    fn groups_for(&self, subject: &dyn Subject) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(ProviderType::None.display_name(), "None");
        assert_eq!(ProviderType::External.display_name(), "External");
        assert_eq!(ProviderType::External.to_string(), "External");
    }

    #[test]
    fn test_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ProviderType::None).unwrap(),
            serde_json::json!("none")
        );
        assert_eq!(
            serde_json::to_value(ProviderType::External).unwrap(),
            serde_json::json!("external")
        );
    }

    #[test]
    fn test_deserializes_snake_case() {
        let parsed: ProviderType = serde_json::from_str("\"external\"").unwrap();
        assert_eq!(parsed, ProviderType::External);
    }
}
