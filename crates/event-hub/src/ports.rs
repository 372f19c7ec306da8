//! # Ports
//!
//! The two seams of the hub: the listener capability implemented by every
//! plugin, and the plugin host that loads, starts, stops, and enumerates
//! plugin bundles. The hub core depends only on these traits; process
//! specific loaders (dynamic libraries, subprocess plugins, compiled-in
//! registries) live behind them.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use event_types::TriggerKind;

/// Error raised by a listener while handling a delivered event.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listener's downstream transport was unavailable.
    #[error("listener transport unavailable: {0}")]
    Transport(String),
    /// The listener rejected the event payload.
    #[error("listener rejected event: {0}")]
    Rejected(String),
}

/// The capability every plugin must expose.
///
/// The hub pushes configuration to each listener once at start (server
/// address first, then per-kind topics), then delivers serialized events of
/// each kind. Implementations are shared across threads and manage their
/// own interior mutability.
///
/// A listener failure on any `handle_*` call is isolated by the hub: it is
/// logged and counted, and never suppresses delivery to other listeners.
pub trait EventListener: Send + Sync {
    /// Receive the configured server address. Pushed once, before topics.
    fn set_server_address(&self, address: &str);

    /// Receive a topic assignment for one trigger kind.
    ///
    /// An empty topic clears a previous assignment.
    fn set_topic(&self, kind: TriggerKind, topic: &str);

    /// Handle a serialized block event.
    fn handle_block_event(&self, payload: &str) -> Result<(), ListenerError>;

    /// Handle a serialized transaction event.
    fn handle_transaction_event(&self, payload: &str) -> Result<(), ListenerError>;

    /// Handle a serialized contract log event.
    fn handle_contract_log_event(&self, payload: &str) -> Result<(), ListenerError>;

    /// Handle a serialized contract event.
    fn handle_contract_event(&self, payload: &str) -> Result<(), ListenerError>;
}

/// Plugin host failures.
#[derive(Debug, Error)]
pub enum HostError {
    /// The bundle could not be read.
    #[error("plugin bundle unreadable: {0}")]
    Unreadable(PathBuf),
    /// The bundle was read but is not a valid plugin.
    #[error("plugin bundle malformed: {0}")]
    Malformed(String),
    /// `start_plugins` was called while plugins were already running.
    #[error("plugin host already started")]
    AlreadyStarted,
    /// Underlying I/O failure.
    #[error("plugin host i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// The external collaborator that loads, starts, stops, and enumerates
/// plugin bundles.
pub trait PluginHost: Send + Sync {
    /// Load the bundle at `bundle` and return its plugin id.
    ///
    /// An empty id signals a malformed bundle and is treated as a failure
    /// by the hub.
    fn load_plugin(&self, bundle: &Path) -> Result<String, HostError>;

    /// Start all loaded plugins.
    fn start_plugins(&self) -> Result<(), HostError>;

    /// Stop all running plugins.
    fn stop_plugins(&self);

    /// Enumerate loaded instances implementing the listener capability.
    fn extensions(&self) -> Vec<Arc<dyn EventListener>>;
}

/// Constructor for a plugin host bound to a bundle path.
///
/// The hub builds its host lazily, on the first load attempt.
pub type PluginHostFactory = Box<dyn Fn(&Path) -> Box<dyn PluginHost> + Send + Sync>;
