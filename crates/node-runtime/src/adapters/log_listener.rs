//! # Tracing Event Listener
//!
//! A listener that records its configuration pushes and logs every
//! delivered payload through `tracing`. Stands in for a broker-publishing
//! plugin in the demo binary and in tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use event_hub::{EventListener, ListenerError};
use event_types::TriggerKind;

/// Listener backed by the node's own log output.
#[derive(Debug, Default)]
pub struct TracingEventListener {
    server_address: RwLock<String>,
    topics: RwLock<HashMap<TriggerKind, String>>,
    delivered: AtomicU64,
}

impl TracingEventListener {
    /// Create a listener with no address or topics assigned yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The server address pushed by the hub, empty until configured.
    #[must_use]
    pub fn server_address(&self) -> String {
        self.server_address.read().clone()
    }

    /// The topic currently assigned for a kind, if any.
    #[must_use]
    pub fn topic(&self, kind: TriggerKind) -> Option<String> {
        self.topics.read().get(&kind).cloned()
    }

    /// Total events delivered to this listener.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    fn deliver(&self, kind: TriggerKind, payload: &str) -> Result<(), ListenerError> {
        let delivered = self.delivered.fetch_add(1, Ordering::Relaxed) + 1;
        let topic = self.topics.read().get(&kind).cloned().unwrap_or_default();
        debug!(kind = %kind, topic = %topic, delivered, payload, "event received");
        Ok(())
    }
}

impl EventListener for TracingEventListener {
    fn set_server_address(&self, address: &str) {
        debug!(address, "server address assigned");
        *self.server_address.write() = address.to_string();
    }

    fn set_topic(&self, kind: TriggerKind, topic: &str) {
        debug!(kind = %kind, topic, "topic assigned");
        let mut topics = self.topics.write();
        if topic.is_empty() {
            topics.remove(&kind);
        } else {
            topics.insert(kind, topic.to_string());
        }
    }

    fn handle_block_event(&self, payload: &str) -> Result<(), ListenerError> {
        self.deliver(TriggerKind::Block, payload)
    }

    fn handle_transaction_event(&self, payload: &str) -> Result<(), ListenerError> {
        self.deliver(TriggerKind::Transaction, payload)
    }

    fn handle_contract_log_event(&self, payload: &str) -> Result<(), ListenerError> {
        self.deliver(TriggerKind::ContractLog, payload)
    }

    fn handle_contract_event(&self, payload: &str) -> Result<(), ListenerError> {
        self.deliver(TriggerKind::ContractEvent, payload)
    }
}
