//! # Event Hub - Plugin Loader and Event Dispatcher
//!
//! The core of the event subscription runtime for a blockchain node. The
//! hub loads a plugin bundle through an abstract [`PluginHost`], pushes the
//! server address and per-kind topic assignments to every listener the
//! bundle registers, and fans serialized chain events out to all of them as
//! the node produces blocks, transactions, and contract activity.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   post_*()   ┌──────────────┐  handle_*(json)  ┌──────────┐
//! │ Node Runtime │ ───────────→ │  Event Hub   │ ───────────────→ │ Listener │
//! └──────────────┘              │              │ ───────────────→ │ Listener │
//!                               └──────┬───────┘                  └──────────┘
//!                                      │ load / start / stop / enumerate
//!                                      ▼
//!                               ┌──────────────┐
//!                               │ Plugin Host  │  (port; process-specific)
//!                               └──────────────┘
//! ```
//!
//! ## Delivery Contract
//!
//! Best-effort, at-least-once per loaded listener, sequential fan-out in
//! listener order. No guaranteed delivery, no replay, no cross-kind
//! ordering, no backpressure on slow listeners.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod hub;
pub mod ports;
pub mod stats;

// Re-export main types
pub use config::{ConfigError, EventPluginConfig, TriggerConfig};
pub use hub::{EventHub, HubError};
pub use ports::{EventListener, HostError, ListenerError, PluginHost, PluginHostFactory};
pub use stats::DispatchStatsSnapshot;
