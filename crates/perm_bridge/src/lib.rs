//! Perm Bridge - permissions provider bridge for plugin-hosting applications
//!
//! This crate lets a host application answer permission and group-membership
//! questions about its subjects (connected users) through an optional external
//! permissions provider, falling back to a simple host convention when no
//! provider is installed.
//!
//! # Overview
//!
//! Hosts that support plugins usually delegate permissions to a dedicated
//! provider plugin when one is present, and treat "no provider installed" as a
//! perfectly normal configuration. Perm Bridge captures that pattern:
//!
//! - [`PermissionsAdapter`](adapter::PermissionsAdapter) discovers a provider
//!   through the host's service registry and delegates queries to it.
//! - When nothing is hooked, permission checks answer from a caller-supplied
//!   default (by convention the subject's privilege flag) and group queries
//!   answer with an empty list.
//!
//! # Architecture
//!
//! The crate is organized into a few small modules:
//! - `adapter`: provider discovery and query delegation
//! - `provider`: the capability interface a permissions backend exposes, and
//!   the subject being queried
//! - `registry`: the host-side registry port, plus an in-memory registry for
//!   embedders and tests
//! - `error`: error types for registry bookkeeping
//!
//! The host's registry and the provider backend are both ports: the adapter
//! only ever talks to the [`ServiceRegistry`](registry::ServiceRegistry) and
//! [`PermissionProvider`](provider::PermissionProvider) traits, so it holds no
//! global state and is testable with fakes.
//!
//! # Example
//!
//! ```rust
//! use perm_bridge::prelude::*;
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
//! let registry = Arc::new(MemoryRegistry::new());
//! let mut adapter = PermissionsAdapter::new(registry);
//!
//! // No provider plugin installed: discovery leaves the adapter unhooked.
//! assert_eq!(adapter.setup(), ProviderType::None);
//! assert!(!adapter.is_enabled());
//!
//! // Unhooked checks answer from the subject's privilege flag.
//! let alice = User { name: "alice".into(), operator: true };
//! assert!(adapter.has_permission(&alice, "build.place"));
//! assert!(adapter.groups(&alice).is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Provider discovery and query delegation
///
/// This module provides `PermissionsAdapter`, the consumer-facing API:
/// `setup()` detects and hooks a provider, `has_permission`/`groups` delegate
/// to it or fall back to defaults.
pub mod adapter;

/// Error types and utilities
///
/// This module defines the `BridgeError` enum. Only registry bookkeeping can
/// fail; permission queries themselves are infallible.
pub mod error;

/// Provider-side port types
///
/// The `PermissionProvider` capability interface a permissions backend
/// registers with the host, the `Subject` being queried, and the
/// `ProviderType` tag reporting which backend is active.
pub mod provider;

/// Host-side registry port
///
/// The `ServiceRegistry` and `Plugin` traits the adapter discovers providers
/// through, plus `MemoryRegistry`, an in-memory implementation for embedders
/// and tests.
pub mod registry;

// Prelude module for common imports
pub mod prelude {
    //! Common imports for perm_bridge users
    //!
    //! Use `use perm_bridge::prelude::*;` to import commonly used types.

    pub use crate::adapter::{DEFAULT_PROVIDER_PLUGIN, PermissionsAdapter};
    pub use crate::error::BridgeError;
    pub use crate::provider::{PermissionProvider, ProviderType, Subject};
    pub use crate::registry::{MemoryRegistry, Plugin, ServiceRegistry};
}
