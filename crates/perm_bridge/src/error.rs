//! Error types for the Perm Bridge crate.
//!
//! The error surface is deliberately small. A missing or disabled provider is
//! a normal state answered with caller defaults, not an error, so permission
//! queries are infallible. Only [`MemoryRegistry`](crate::registry::MemoryRegistry)
//! bookkeeping can fail.

use thiserror::Error;

/// Errors surfaced by registry bookkeeping.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A plugin with this name is already registered.
    #[error("plugin already registered: {name}")]
    PluginAlreadyRegistered {
        /// The name that collided.
        name: String,
    },

    /// A permission service has already been published.
    ///
    /// The in-memory registry holds at most one service; hosts swap backends
    /// by building a fresh registry and running `setup()` again.
    #[error("a permission service is already registered")]
    ServiceAlreadyRegistered,
}
