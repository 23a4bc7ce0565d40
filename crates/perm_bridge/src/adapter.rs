//! Provider discovery and query delegation.
//!
//! [`PermissionsAdapter`] is the consumer-facing API. It is constructed once
//! against the host's [`ServiceRegistry`](crate::registry::ServiceRegistry)
//! port; [`setup`](PermissionsAdapter::setup) detects and hooks an external
//! permissions provider, and the query methods delegate to the hooked
//! provider or answer from caller defaults.
//!
//! # Discovery
//!
//! `setup()` walks the registry in three steps, any of which may come up
//! empty without that being an error:
//!
//! 1. **Plugin lookup** - is the provider plugin installed?
//! 2. **Plugin enabled** - does the host have it enabled?
//! 3. **Service registered and enabled** - has the backend published a
//!    permission service that reports itself active?
//!
//! Only when all three hold does the adapter hook the provider. Calling
//! `setup()` again re-runs discovery from scratch, so hosts can re-detect
//! after a config reload.
//!
//! # Example
//!
//! ```rust
//! use perm_bridge::adapter::PermissionsAdapter;
//! use perm_bridge::provider::{PermissionProvider, ProviderType, Subject};
//! use perm_bridge::registry::MemoryRegistry;
//! use std::sync::Arc;
//!
//! struct User {
//!     name: String,
//!     operator: bool,
//! }
//!
//! impl Subject for User {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//!     fn is_privileged(&self) -> bool {
//!         self.operator
//!     }
//! }
//!
//! struct Grants;
//!
//! impl PermissionProvider for Grants {
//!     fn is_enabled(&self) -> bool {
//!         true
//!     }
//!     fn has(&self, subject: &dyn Subject, key: &str) -> bool {
//!         subject.name() == "alice" && key == "build.place"
//!     }
//!     fn groups_for(&self, _subject: &dyn Subject) -> Vec<String> {
//!         vec!["builder".to_string()]
//!     }
//! }
//!
//! # fn main() -> Result<(), perm_bridge::error::BridgeError> {
//! let registry = Arc::new(MemoryRegistry::new());
//! registry.register_plugin("Vault", true)?;
//! registry.register_permission_service(Arc::new(Grants))?;
//!
//! let mut adapter = PermissionsAdapter::new(registry);
//! assert_eq!(adapter.setup(), ProviderType::External);
//!
//! let alice = User { name: "alice".into(), operator: false };
//! // The provider's verdict is final; the fallback default is ignored.
//! assert!(adapter.has_permission_or(&alice, "build.place", false));
//! assert_eq!(adapter.groups(&alice), vec!["builder".to_string()]);
//! # Ok(())
//! # }
//! ```

use crate::provider::{PermissionProvider, ProviderType, Subject};
use crate::registry::ServiceRegistry;
use std::sync::Arc;
use tracing::info;

/// Plugin name looked up during discovery unless the host configures another
/// via [`PermissionsAdapter::with_plugin_name`].
pub const DEFAULT_PROVIDER_PLUGIN: &str = "Vault";

/// Hooked provider handle, tagged by backend.
///
/// The handle lives inside the variant, so a hooked state without a handle is
/// unrepresentable and queries never observe half-initialized state.
enum ActiveProvider {
    None,
    External(Arc<dyn PermissionProvider>),
}

impl ActiveProvider {
    fn provider_type(&self) -> ProviderType {
        match self {
            ActiveProvider::None => ProviderType::None,
            ActiveProvider::External(_) => ProviderType::External,
        }
    }
}

/// Adapter between the host and an optional external permissions provider.
///
/// Queries delegate to the hooked provider when one is active; otherwise
/// permission checks answer from a caller-supplied default and group queries
/// answer with an empty list. See the [module docs](self) for the discovery
/// walk and a full example.
///
/// `setup()` takes `&mut self` while queries take `&self`, so within one
/// thread the borrow checker rules out re-detection racing a query. Hosts
/// sharing the adapter across threads must add their own synchronization.
pub struct PermissionsAdapter {
    registry: Arc<dyn ServiceRegistry>,
    plugin_name: String,
    active: ActiveProvider,
}

impl PermissionsAdapter {
    /// Create an adapter over the host's registry, looking up the
    /// conventionally named provider plugin ([`DEFAULT_PROVIDER_PLUGIN`]).
    ///
    /// The adapter starts unhooked; call [`setup`](Self::setup) to run
    /// discovery.
    pub fn new(registry: Arc<dyn ServiceRegistry>) -> Self {
        Self::with_plugin_name(registry, DEFAULT_PROVIDER_PLUGIN)
    }

    /// Create an adapter that looks up a differently named provider plugin.
    pub fn with_plugin_name(
        registry: Arc<dyn ServiceRegistry>,
        plugin_name: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            plugin_name: plugin_name.into(),
            active: ActiveProvider::None,
        }
    }

    /// Detect and hook an external permissions provider.
    ///
    /// Resets any previous hook first, so repeated calls re-run discovery
    /// against the registry's current state. Absence of a provider at any
    /// step is a normal outcome, reported through the returned
    /// [`ProviderType`] and a status log line; nothing here errors.
    pub fn setup(&mut self) -> ProviderType {
        self.active = ActiveProvider::None;

        if let Some(plugin) = self.registry.find_plugin(&self.plugin_name) {
            if self.registry.is_plugin_enabled(plugin.as_ref()) {
                match self.registry.permission_service() {
                    Some(provider) if provider.is_enabled() => {
                        info!(
                            plugin = %self.plugin_name,
                            "hooked into external permissions provider"
                        );
                        self.active = ActiveProvider::External(provider);
                        return self.active.provider_type();
                    }
                    Some(_) => {
                        info!(
                            plugin = %self.plugin_name,
                            "permission service is disabled, permissions falling back to defaults"
                        );
                        return ProviderType::None;
                    }
                    None => {}
                }
            }
        }

        // No recognized provider: installed-but-disabled plugin, missing
        // service and missing plugin all land here.
        info!(
            plugin = %self.plugin_name,
            "no supported permissions provider found, permissions falling back to defaults"
        );
        ProviderType::None
    }

    /// Whether the adapter is currently hooked into a provider.
    pub fn is_enabled(&self) -> bool {
        self.active.provider_type() != ProviderType::None
    }

    /// The backend the adapter is currently hooked into.
    pub fn active_provider_type(&self) -> ProviderType {
        self.active.provider_type()
    }

    /// Check whether `subject` holds the permission `key`.
    ///
    /// When no provider is hooked the answer is the subject's host-convention
    /// privilege flag ([`Subject::is_privileged`]). Equivalent to
    /// `has_permission_or(subject, key, subject.is_privileged())`.
    pub fn has_permission(&self, subject: &dyn Subject, key: &str) -> bool {
        self.has_permission_or(subject, key, subject.is_privileged())
    }

    /// Check whether `subject` holds the permission `key`, with an explicit
    /// fallback.
    ///
    /// `default` answers only when no provider is hooked; a hooked provider's
    /// verdict is final and `default` is ignored.
    pub fn has_permission_or(&self, subject: &dyn Subject, key: &str, default: bool) -> bool {
        match &self.active {
            ActiveProvider::External(provider) => provider.has(subject, key),
            ActiveProvider::None => default,
        }
    }

    /// Names of the groups `subject` belongs to, in the order the backend
    /// reports them. Empty when no provider is hooked.
    pub fn groups(&self, subject: &dyn Subject) -> Vec<String> {
        match &self.active {
            ActiveProvider::External(provider) => provider.groups_for(subject),
            ActiveProvider::None => Vec::new(),
        }
    }
}
