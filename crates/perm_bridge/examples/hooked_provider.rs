//! Hooked provider example: a host with a registered permissions backend.
//!
//! This example shows how to:
//! - Implement `PermissionProvider` for a toy grants table
//! - Register the provider plugin and service with a `MemoryRegistry`
//! - Run `setup()` and watch the adapter hook the provider
//! - Delegate permission and group queries to the backend
//!
//! # Usage
//!
//! ```bash
//! cargo run --example hooked_provider --package perm_bridge
//! ```

use perm_bridge::prelude::*;
use std::sync::Arc;

struct User {
    name: String,
    operator: bool,
}

impl Subject for User {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_privileged(&self) -> bool {
        self.operator
    }
}

/// Toy backend granting build rights to alice only.
struct BuildPerms;

impl PermissionProvider for BuildPerms {
    fn is_enabled(&self) -> bool {
        true
    }

    fn has(&self, subject: &dyn Subject, key: &str) -> bool {
        subject.name() == "alice" && key.starts_with("build.")
    }

    fn groups_for(&self, subject: &dyn Subject) -> Vec<String> {
        if subject.name() == "alice" {
            vec!["admin".to_string(), "builder".to_string()]
        } else {
            Vec::new()
        }
    }
}

fn main() -> Result<(), BridgeError> {
    tracing_subscriber::fmt::init();

    println!("=== Perm Bridge Hooked Provider Example ===\n");

    // The host registers the provider plugin and its permission service.
    let registry = Arc::new(MemoryRegistry::new());
    registry.register_plugin(DEFAULT_PROVIDER_PLUGIN, true)?;
    registry.register_permission_service(Arc::new(BuildPerms))?;

    let mut adapter = PermissionsAdapter::new(registry);
    let detected = adapter.setup();
    println!("Detected provider: {}\n", detected);

    let alice = User {
        name: "alice".into(),
        operator: false,
    };
    let bob = User {
        name: "bob".into(),
        operator: true,
    };

    // The backend's verdict is final; privilege flags and explicit defaults
    // carry no weight once hooked.
    println!(
        "alice may place blocks: {}",
        adapter.has_permission(&alice, "build.place")
    );
    println!(
        "bob may place blocks:   {}",
        adapter.has_permission(&bob, "build.place")
    );
    println!(
        "bob may place blocks (default allow): {}",
        adapter.has_permission_or(&bob, "build.place", true)
    );

    println!("\nalice groups: {:?}", adapter.groups(&alice));
    println!("bob groups:   {:?}", adapter.groups(&bob));

    Ok(())
}
