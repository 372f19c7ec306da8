//! # Event Types
//!
//! Payload records and the trigger-kind enumeration for the chain event hub.
//!
//! ## Clusters
//!
//! - **Kinds**: [`TriggerKind`] — the fixed four-category enumeration
//! - **Payloads**: [`BlockTrigger`], [`TransactionTrigger`],
//!   [`ContractLogTrigger`], [`ContractEventTrigger`]
//! - **Routing**: [`Trigger`] — kind-tagged wrapper used on the dispatch path
//!
//! These types are shared between the hub core and listener plugins; the
//! serialized form of each payload record is a versioned wire contract.

// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod kind;
pub mod triggers;

pub use kind::TriggerKind;
pub use triggers::{
    BlockTrigger, ContractEventTrigger, ContractLogTrigger, TransactionTrigger, Trigger,
};
