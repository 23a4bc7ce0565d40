//! Fallback example: a host with no permissions provider installed.
//!
//! This example shows how to:
//! - Construct a `PermissionsAdapter` over an empty registry
//! - Run `setup()` and observe that no provider gets hooked
//! - Answer permission checks from the subject's privilege flag
//!
//! # Usage
//!
//! ```bash
//! cargo run --example fallback_defaults --package perm_bridge
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

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Perm Bridge Fallback Example ===\n");

    // An empty registry: no provider plugin, no permission service.
    let registry = Arc::new(MemoryRegistry::new());
    let mut adapter = PermissionsAdapter::new(registry);

    let detected = adapter.setup();
    println!("Detected provider: {}", detected);
    println!("Adapter enabled:   {}\n", adapter.is_enabled());

    let console = User {
        name: "console".into(),
        operator: true,
    };
    let visitor = User {
        name: "visitor".into(),
        operator: false,
    };

    // With nothing hooked, checks answer from the privilege flag...
    println!(
        "console may broadcast: {}",
        adapter.has_permission(&console, "server.broadcast")
    );
    println!(
        "visitor may broadcast: {}",
        adapter.has_permission(&visitor, "server.broadcast")
    );

    // ...unless the caller supplies an explicit default.
    println!(
        "visitor may chat (default allow): {}",
        adapter.has_permission_or(&visitor, "chat.send", true)
    );

    // Group queries come back empty without a provider.
    println!("console groups: {:?}", adapter.groups(&console));
}
