//! # Node Runtime
//!
//! Node-facing wiring for the chain event hub.
//!
//! ## Modular Structure
//!
//! - `adapters/` - Implementations of the event-hub ports: the compiled-in
//!   registry plugin host and the tracing event listener
//! - `config` - Node configuration with environment overrides
//! - `logging` - tracing-subscriber bootstrap
//!
//! The `event-node` binary in this crate is the demo driver: it wires a
//! registry host with a tracing listener, starts the hub, and produces a
//! run of block events.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::{ListenerFactory, RegistryPluginHost, TracingEventListener};
pub use config::NodeConfig;
