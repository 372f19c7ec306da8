//! # Trigger Payload Records
//!
//! One value object per chain occurrence. A record is constructed by the
//! node runtime at the moment the event happens, posted to the hub once,
//! and discarded; the hub never retains a reference.
//!
//! ## Wire Contract
//!
//! Every record encodes as a flat JSON document with camelCase keys.
//! Field names and types are a versioned contract with listener plugins
//! and must stay stable across releases.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::kind::TriggerKind;

/// A block was appended to the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTrigger {
    /// Unix timestamp of the block, in milliseconds.
    pub timestamp: u64,
    /// Height of the block in the chain.
    pub block_number: u64,
    /// Hex-encoded hash of the block.
    pub block_hash: String,
    /// Hex-encoded hash of the parent block.
    pub parent_hash: String,
    /// Number of transactions contained in the block.
    pub transaction_size: u64,
    /// Height of the latest solidified (irreversible) block.
    pub latest_solidified_block_number: u64,
    /// Transaction ids contained in the block, in execution order.
    pub transaction_list: Vec<String>,
}

/// A transaction was executed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionTrigger {
    /// Unix timestamp of the enclosing block, in milliseconds.
    pub timestamp: u64,
    /// Height of the enclosing block.
    pub block_number: u64,
    /// Hex-encoded hash of the enclosing block.
    pub block_hash: String,
    /// Hex-encoded transaction id.
    pub transaction_id: String,
    /// Position of the transaction within its block.
    pub transaction_index: u64,
    /// Execution energy consumed.
    pub energy_usage: u64,
    /// Bandwidth consumed.
    pub net_usage: u64,
}

/// A smart contract emitted a raw log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractLogTrigger {
    /// Unique id of this occurrence: transaction id + log index.
    pub unique_id: String,
    /// Hex-encoded id of the emitting transaction.
    pub transaction_id: String,
    /// Address of the contract that emitted the log.
    pub contract_address: String,
    /// Address of the account that called the contract.
    pub caller_address: String,
    /// Address that originated the outer transaction.
    pub origin_address: String,
    /// Address that created the contract.
    pub creator_address: String,
    /// Height of the enclosing block.
    pub block_number: u64,
    /// Unix timestamp of the enclosing block, in milliseconds.
    pub timestamp: u64,
    /// Raw log topics, hex-encoded.
    pub topic_list: Vec<String>,
    /// Raw log payload, hex-encoded.
    pub data: String,
}

/// A smart contract emitted an event decoded against its ABI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractEventTrigger {
    /// Unique id of this occurrence: transaction id + event index.
    pub unique_id: String,
    /// Hex-encoded id of the emitting transaction.
    pub transaction_id: String,
    /// Address of the contract that emitted the event.
    pub contract_address: String,
    /// Address of the account that called the contract.
    pub caller_address: String,
    /// Address that originated the outer transaction.
    pub origin_address: String,
    /// Address that created the contract.
    pub creator_address: String,
    /// Height of the enclosing block.
    pub block_number: u64,
    /// Unix timestamp of the enclosing block, in milliseconds.
    pub timestamp: u64,
    /// ABI signature of the event, e.g. `Transfer(address,address,uint256)`.
    pub event_signature: String,
    /// Decoded event arguments by parameter name.
    ///
    /// Ordered map so a given payload has exactly one encoding.
    pub topic_map: BTreeMap<String, String>,
    /// Non-indexed event data, hex-encoded.
    pub data: String,
}

/// A chain event on the dispatch path, tagged by kind.
///
/// Serializing a `Trigger` encodes the inner record only; the enum tag
/// never appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Trigger {
    /// Block appended.
    Block(BlockTrigger),
    /// Transaction executed.
    Transaction(TransactionTrigger),
    /// Contract log emitted.
    ContractLog(ContractLogTrigger),
    /// Contract event emitted.
    ContractEvent(ContractEventTrigger),
}

impl Trigger {
    /// The category this event belongs to.
    #[must_use]
    pub fn kind(&self) -> TriggerKind {
        match self {
            Self::Block(_) => TriggerKind::Block,
            Self::Transaction(_) => TriggerKind::Transaction,
            Self::ContractLog(_) => TriggerKind::ContractLog,
            Self::ContractEvent(_) => TriggerKind::ContractEvent,
        }
    }
}

impl From<BlockTrigger> for Trigger {
    fn from(trigger: BlockTrigger) -> Self {
        Self::Block(trigger)
    }
}

impl From<TransactionTrigger> for Trigger {
    fn from(trigger: TransactionTrigger) -> Self {
        Self::Transaction(trigger)
    }
}

impl From<ContractLogTrigger> for Trigger {
    fn from(trigger: ContractLogTrigger) -> Self {
        Self::ContractLog(trigger)
    }
}

impl From<ContractEventTrigger> for Trigger {
    fn from(trigger: ContractEventTrigger) -> Self {
        Self::ContractEvent(trigger)
    }
}
