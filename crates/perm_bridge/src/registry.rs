//! Host-side registry port.
//!
//! The adapter discovers providers through [`ServiceRegistry`], a port to the
//! host's plugin and service machinery. Production hosts implement the trait
//! over whatever registry they already have; [`MemoryRegistry`] is a small
//! in-memory implementation for embedders without one, and for tests.
//!
//! # Example
//!
//! ```rust
//! use perm_bridge::registry::{MemoryRegistry, ServiceRegistry};
//!
//! let registry = MemoryRegistry::new();
//! registry.register_plugin("Vault", true)?;
//!
//! let plugin = registry.find_plugin("Vault").expect("just registered");
//! assert!(registry.is_plugin_enabled(plugin.as_ref()));
//! assert!(registry.permission_service().is_none());
//! # Ok::<(), perm_bridge::error::BridgeError>(())
//! ```

use crate::error::BridgeError;
use crate::provider::PermissionProvider;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Handle to a plugin known to the host.
///
/// Opaque to the adapter: discovery only needs the name and the enabled flag.
pub trait Plugin: Send + Sync {
    /// Plugin name as registered with the host.
    fn name(&self) -> &str;

    /// Whether the host currently has the plugin enabled.
    fn is_enabled(&self) -> bool;
}

/// Port to the host's plugin and service registry.
pub trait ServiceRegistry: Send + Sync {
    /// Look up a plugin by name. `None` when not installed.
    fn find_plugin(&self, name: &str) -> Option<Arc<dyn Plugin>>;

    /// Whether the host currently has `plugin` enabled.
    fn is_plugin_enabled(&self, plugin: &dyn Plugin) -> bool;

    /// The registered permission service, if any backend has published one.
    fn permission_service(&self) -> Option<Arc<dyn PermissionProvider>>;
}

struct MemoryPlugin {
    name: String,
    enabled: AtomicBool,
}

impl Plugin for MemoryPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[derive(Default)]
struct Inner {
    plugins: HashMap<String, Arc<MemoryPlugin>>,
    service: Option<Arc<dyn PermissionProvider>>,
}

/// In-memory [`ServiceRegistry`] implementation.
///
/// Interior mutability lets the embedder keep mutating the registry (install
/// a plugin, flip its enabled flag, publish a service) while the adapter
/// holds it behind `Arc<dyn ServiceRegistry>`; changes become visible to the
/// adapter on its next `setup()`.
#[derive(Default)]
pub struct MemoryRegistry {
    inner: RwLock<Inner>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a plugin under `name` with the given enabled flag.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::PluginAlreadyRegistered`] when the name is
    /// already taken.
    pub fn register_plugin(
        &self,
        name: impl Into<String>,
        enabled: bool,
    ) -> Result<(), BridgeError> {
        let name = name.into();
        let mut inner = self.write();
        if inner.plugins.contains_key(&name) {
            return Err(BridgeError::PluginAlreadyRegistered { name });
        }
        let plugin = Arc::new(MemoryPlugin {
            name: name.clone(),
            enabled: AtomicBool::new(enabled),
        });
        inner.plugins.insert(name, plugin);
        Ok(())
    }

    /// Enable or disable a registered plugin. Unknown names are ignored.
    pub fn set_plugin_enabled(&self, name: &str, enabled: bool) {
        if let Some(plugin) = self.read().plugins.get(name) {
            plugin.enabled.store(enabled, Ordering::Relaxed);
        }
    }

    /// Publish the permission service backends answer queries through.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::ServiceAlreadyRegistered`] when a service is
    /// already published.
    pub fn register_permission_service(
        &self,
        provider: Arc<dyn PermissionProvider>,
    ) -> Result<(), BridgeError> {
        let mut inner = self.write();
        if inner.service.is_some() {
            return Err(BridgeError::ServiceAlreadyRegistered);
        }
        inner.service = Some(provider);
        Ok(())
    }
}

impl ServiceRegistry for MemoryRegistry {
    fn find_plugin(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.read()
            .plugins
            .get(name)
            .map(|plugin| Arc::clone(plugin) as Arc<dyn Plugin>)
    }

    fn is_plugin_enabled(&self, plugin: &dyn Plugin) -> bool {
        self.read()
            .plugins
            .get(plugin.name())
            .map(|entry| entry.is_enabled())
            .unwrap_or(false)
    }

    fn permission_service(&self) -> Option<Arc<dyn PermissionProvider>> {
        self.read().service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Subject;

    struct NullProvider;

    impl PermissionProvider for NullProvider {
        fn is_enabled(&self) -> bool {
            true
        }

        fn has(&self, _subject: &dyn Subject, _key: &str) -> bool {
            false
        }

        fn groups_for(&self, _subject: &dyn Subject) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_find_plugin_missing() {
        let registry = MemoryRegistry::new();
        assert!(registry.find_plugin("Vault").is_none());
    }

    #[test]
    fn test_register_and_find_plugin() {
        let registry = MemoryRegistry::new();
        registry.register_plugin("Vault", true).unwrap();

        let plugin = registry.find_plugin("Vault").unwrap();
        assert_eq!(plugin.name(), "Vault");
        assert!(plugin.is_enabled());
        assert!(registry.is_plugin_enabled(plugin.as_ref()));
    }

    #[test]
    fn test_duplicate_plugin_rejected() {
        let registry = MemoryRegistry::new();
        registry.register_plugin("Vault", true).unwrap();

        let err = registry.register_plugin("Vault", false).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::PluginAlreadyRegistered { name } if name == "Vault"
        ));
    }

    #[test]
    fn test_set_plugin_enabled_flips_flag() {
        let registry = MemoryRegistry::new();
        registry.register_plugin("Vault", true).unwrap();

        registry.set_plugin_enabled("Vault", false);
        let plugin = registry.find_plugin("Vault").unwrap();
        assert!(!plugin.is_enabled());
        assert!(!registry.is_plugin_enabled(plugin.as_ref()));

        // Flipping back is visible through a handle taken earlier.
        registry.set_plugin_enabled("Vault", true);
        assert!(plugin.is_enabled());
    }

    #[test]
    fn test_set_plugin_enabled_unknown_name_ignored() {
        let registry = MemoryRegistry::new();
        registry.set_plugin_enabled("Vault", true);
        assert!(registry.find_plugin("Vault").is_none());
    }

    #[test]
    fn test_permission_service_roundtrip() {
        let registry = MemoryRegistry::new();
        assert!(registry.permission_service().is_none());

        registry
            .register_permission_service(Arc::new(NullProvider))
            .unwrap();
        assert!(registry.permission_service().is_some());
    }

    #[test]
    fn test_second_service_rejected() {
        let registry = MemoryRegistry::new();
        registry
            .register_permission_service(Arc::new(NullProvider))
            .unwrap();

        let err = registry
            .register_permission_service(Arc::new(NullProvider))
            .unwrap_err();
        assert!(matches!(err, BridgeError::ServiceAlreadyRegistered));
    }
}
