//! # Event Hub Service
//!
//! The loader/dispatcher at the center of the subscription runtime. It owns
//! the plugin-host lifecycle, applies trigger configuration to every loaded
//! listener, and fans serialized events out to all of them.
//!
//! ## Dispatch Semantics
//!
//! Delivery is best-effort: a failing listener is logged and skipped, never
//! allowed to suppress delivery to the rest. Events are fanned out to every
//! listener regardless of the per-kind enable flags; the flags and topics
//! are metadata pushed to listeners, which filter on their side. An event
//! that cannot be encoded is dropped and counted, never delivered as an
//! empty payload.
//!
//! ## Concurrency
//!
//! Every operation is synchronous on the calling thread. Configuration runs
//! under the state write lock before events are expected; dispatch holds
//! the read lock, so it never observes a partially updated listener list.
//! Within one kind, a single posting thread yields the same relative event
//! order at every listener.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use event_types::{
    BlockTrigger, ContractEventTrigger, ContractLogTrigger, TransactionTrigger, Trigger,
    TriggerKind,
};

use crate::config::{ConfigError, EventPluginConfig};
use crate::ports::{EventListener, HostError, PluginHost, PluginHostFactory};
use crate::stats::{DispatchStats, DispatchStatsSnapshot};

/// Load-time failures surfaced by [`EventHub::start`].
///
/// All of these leave the hub in its prior (unloaded) state; the node keeps
/// running without listeners.
#[derive(Debug, Error)]
pub enum HubError {
    /// The configuration is unusable.
    #[error("invalid event plugin configuration: {0}")]
    Config(#[from] ConfigError),

    /// The configured bundle path does not exist on the filesystem.
    #[error("plugin path does not exist: {}", path.display())]
    PluginPathInvalid {
        /// The missing path.
        path: PathBuf,
    },

    /// The host could not load or start the bundle.
    #[error("failed to load plugin bundle {}: {source}", path.display())]
    PluginLoadFailed {
        /// The bundle that failed to load.
        path: PathBuf,
        /// The host's failure.
        #[source]
        source: HostError,
    },

    /// The bundle loaded but exposed no listener capability.
    #[error("no event listener registered by plugin bundle {}", path.display())]
    NoListenersRegistered {
        /// The bundle that registered nothing.
        path: PathBuf,
    },
}

/// Per-kind enable flags, readable without taking the state lock.
#[derive(Debug, Default)]
struct TriggerFlags {
    block: AtomicBool,
    transaction: AtomicBool,
    contract_event: AtomicBool,
    contract_log: AtomicBool,
}

impl TriggerFlags {
    fn cell(&self, kind: TriggerKind) -> &AtomicBool {
        match kind {
            TriggerKind::Block => &self.block,
            TriggerKind::Transaction => &self.transaction,
            TriggerKind::ContractEvent => &self.contract_event,
            TriggerKind::ContractLog => &self.contract_log,
        }
    }

    fn get(&self, kind: TriggerKind) -> bool {
        self.cell(kind).load(Ordering::Relaxed)
    }

    fn set(&self, kind: TriggerKind, enabled: bool) {
        self.cell(kind).store(enabled, Ordering::Relaxed);
    }
}

/// Mutable hub state behind the lock.
#[derive(Default)]
struct HubState {
    /// Plugin host handle, built lazily on the first load attempt.
    host: Option<Box<dyn PluginHost>>,
    /// Fan-out targets. Populated by a successful load, read-only after.
    listeners: Vec<Arc<dyn EventListener>>,
    /// Opaque connection string pushed to every listener.
    server_address: String,
}

/// The loader/dispatcher service.
///
/// Construct with [`EventHub::new`] and pass the instance around, or
/// install a process-wide instance with [`EventHub::init_global`].
pub struct EventHub {
    host_factory: PluginHostFactory,
    state: RwLock<HubState>,
    flags: TriggerFlags,
    stats: DispatchStats,
}

static GLOBAL: OnceLock<EventHub> = OnceLock::new();

impl EventHub {
    /// Create a hub with an injected plugin-host constructor.
    ///
    /// Prefer this over the global instance wherever the hub can be passed
    /// explicitly, tests in particular.
    #[must_use]
    pub fn new(host_factory: PluginHostFactory) -> Self {
        Self {
            host_factory,
            state: RwLock::new(HubState::default()),
            flags: TriggerFlags::default(),
            stats: DispatchStats::default(),
        }
    }

    /// Install the process-wide hub instance.
    ///
    /// The first caller's factory wins; concurrent callers block until the
    /// instance is built, then observe the same instance. Construction runs
    /// exactly once.
    pub fn init_global(host_factory: PluginHostFactory) -> &'static EventHub {
        GLOBAL.get_or_init(|| EventHub::new(host_factory))
    }

    /// The process-wide hub, if [`EventHub::init_global`] has run.
    #[must_use]
    pub fn global() -> Option<&'static EventHub> {
        GLOBAL.get()
    }

    /// Load the configured plugin bundle and push the trigger configuration
    /// to every listener it registers.
    ///
    /// On failure the hub keeps its prior (unloaded) state: no partial
    /// listener list is retained and dispatch stays a no-op. The node is
    /// expected to keep running in that degraded mode.
    ///
    /// Start is single-shot per process. Retrying after a failed start is
    /// permitted (the lazily built host handle is reused); a second call
    /// after success re-runs loading against the running host, which
    /// reports [`HostError::AlreadyStarted`].
    pub fn start(&self, config: &EventPluginConfig) -> Result<(), HubError> {
        config.validate()?;

        info!(path = %config.plugin_path.display(), "loading event plugin bundle");
        self.load_plugins(config)?;
        self.apply_trigger_configs(config);
        info!(path = %config.plugin_path.display(), "event plugin bundle loaded");

        Ok(())
    }

    /// Ask the plugin host to stop all plugins.
    ///
    /// The listener list, topics, and enable flags are kept: they reflect
    /// configuration intent, not runtime activity, and stay queryable after
    /// stop. A no-op when no host was ever created.
    pub fn stop_plugins(&self) {
        let state = self.state.read();
        match state.host.as_ref() {
            None => info!("no plugin host was created, nothing to stop"),
            Some(host) => {
                host.stop_plugins();
                info!("event plugins stopped");
            }
        }
    }

    /// Whether the given trigger kind was enabled by configuration.
    ///
    /// Lock-free; the node runtime queries this on its hot path before
    /// building payloads. The flag is informational and does not gate
    /// dispatch.
    #[must_use]
    pub fn trigger_enabled(&self, kind: TriggerKind) -> bool {
        self.flags.get(kind)
    }

    /// Point-in-time dispatch counters.
    #[must_use]
    pub fn stats(&self) -> DispatchStatsSnapshot {
        self.stats.snapshot()
    }

    /// Fan a block event out to every loaded listener.
    pub fn post_block_trigger(&self, trigger: BlockTrigger) {
        self.post(Trigger::Block(trigger));
    }

    /// Fan a transaction event out to every loaded listener.
    pub fn post_transaction_trigger(&self, trigger: TransactionTrigger) {
        self.post(Trigger::Transaction(trigger));
    }

    /// Fan a contract log event out to every loaded listener.
    pub fn post_contract_log_trigger(&self, trigger: ContractLogTrigger) {
        self.post(Trigger::ContractLog(trigger));
    }

    /// Fan a contract event out to every loaded listener.
    pub fn post_contract_event_trigger(&self, trigger: ContractEventTrigger) {
        self.post(Trigger::ContractEvent(trigger));
    }

    /// Fan any event out to every loaded listener, sequentially, in
    /// listener order.
    ///
    /// A no-op when no listeners are loaded. Enable flags are not
    /// consulted; listeners filter by their assigned topics.
    pub fn post(&self, trigger: Trigger) {
        let state = self.state.read();
        if state.listeners.is_empty() {
            return;
        }

        let kind = trigger.kind();
        let payload = match serde_json::to_string(&trigger) {
            Ok(payload) => payload,
            Err(err) => {
                error!(kind = %kind, error = %err, "failed to encode event, dropping");
                self.stats.record_dropped();
                return;
            }
        };

        for (index, listener) in state.listeners.iter().enumerate() {
            let delivery = match kind {
                TriggerKind::Block => listener.handle_block_event(&payload),
                TriggerKind::Transaction => listener.handle_transaction_event(&payload),
                TriggerKind::ContractLog => listener.handle_contract_log_event(&payload),
                TriggerKind::ContractEvent => listener.handle_contract_event(&payload),
            };

            if let Err(err) = delivery {
                warn!(
                    kind = %kind,
                    listener = index,
                    error = %err,
                    "listener failed to handle event"
                );
                self.stats.record_listener_fault();
            }
        }

        self.stats.record_dispatched();
    }

    /// Load and start the bundle, then install its listeners.
    fn load_plugins(&self, config: &EventPluginConfig) -> Result<(), HubError> {
        let path = config.plugin_path.as_path();
        if !path.exists() {
            error!(path = %path.display(), "plugin path does not exist");
            return Err(HubError::PluginPathInvalid {
                path: path.to_path_buf(),
            });
        }

        let mut state = self.state.write();

        // Bind the host to the bundle path on first use; kept across retries.
        let host = state
            .host
            .get_or_insert_with(|| (self.host_factory)(path));

        let plugin_id = host
            .load_plugin(path)
            .map_err(|source| HubError::PluginLoadFailed {
                path: path.to_path_buf(),
                source,
            })?;
        if plugin_id.is_empty() {
            error!(path = %path.display(), "host returned an empty plugin id");
            return Err(HubError::PluginLoadFailed {
                path: path.to_path_buf(),
                source: HostError::Malformed("empty plugin id".to_string()),
            });
        }

        host.start_plugins()
            .map_err(|source| HubError::PluginLoadFailed {
                path: path.to_path_buf(),
                source,
            })?;

        let listeners = host.extensions();
        if listeners.is_empty() {
            error!(path = %path.display(), "no event listener registered");
            return Err(HubError::NoListenersRegistered {
                path: path.to_path_buf(),
            });
        }

        debug!(
            plugin_id = %plugin_id,
            listeners = listeners.len(),
            "plugin bundle started"
        );

        state.listeners = listeners;
        state.server_address = config.server_address.clone();
        Ok(())
    }

    /// Push the server address, then the per-kind topic assignments, to
    /// every listener.
    fn apply_trigger_configs(&self, config: &EventPluginConfig) {
        let state = self.state.read();

        // Address goes out once, before any topic, unconditionally.
        for listener in &state.listeners {
            listener.set_server_address(&state.server_address);
        }

        for entry in &config.trigger_configs {
            let Some(kind) = TriggerKind::from_name(&entry.trigger_name) else {
                debug!(name = %entry.trigger_name, "ignoring unrecognized trigger name");
                continue;
            };

            // A disabled entry clears the topic explicitly.
            let topic = if entry.enabled { entry.topic.as_str() } else { "" };
            for listener in &state.listeners {
                listener.set_topic(kind, topic);
            }
            self.flags.set(kind, entry.enabled);

            debug!(kind = %kind, enabled = entry.enabled, topic, "trigger configured");
        }
    }
}
