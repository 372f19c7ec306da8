//! # Trigger Kinds
//!
//! The fixed enumeration of chain event categories a listener can be
//! assigned a topic for. Configuration refers to kinds by name; matching is
//! case-insensitive and names outside the enumeration are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four categories of chain events distributed by the hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// A block was appended to the chain.
    Block,
    /// A transaction was executed.
    Transaction,
    /// A smart contract emitted a decoded event.
    ContractEvent,
    /// A smart contract emitted a raw log entry.
    ContractLog,
}

impl TriggerKind {
    /// All kinds, in configuration-table order.
    pub const ALL: [TriggerKind; 4] = [
        TriggerKind::Block,
        TriggerKind::Transaction,
        TriggerKind::ContractEvent,
        TriggerKind::ContractLog,
    ];

    /// Resolve a configured trigger name, case-insensitively.
    ///
    /// Returns `None` for names outside the fixed enumeration; callers skip
    /// such entries rather than failing the whole configuration.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "block" => Some(Self::Block),
            "transaction" => Some(Self::Transaction),
            "contractevent" => Some(Self::ContractEvent),
            "contractlog" => Some(Self::ContractLog),
            _ => None,
        }
    }

    /// Canonical lowercase name used in configuration and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Transaction => "transaction",
            Self::ContractEvent => "contractevent",
            Self::ContractLog => "contractlog",
        }
    }
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
