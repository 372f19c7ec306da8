//! # Event Plugin Configuration
//!
//! Passive configuration data consumed once at hub start: where the plugin
//! bundle lives, the opaque server address forwarded to listeners, and the
//! ordered per-trigger subscription entries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One subscription entry: which trigger kind, whether it is enabled, and
/// under what topic listeners should route it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Trigger kind name, matched case-insensitively against the fixed
    /// enumeration. Unrecognized names are ignored.
    pub trigger_name: String,
    /// Whether listeners should receive a topic for this kind.
    pub enabled: bool,
    /// Opaque topic tag forwarded to listeners, uninterpreted by the hub.
    pub topic: String,
}

impl TriggerConfig {
    /// Create a subscription entry.
    #[must_use]
    pub fn new(trigger_name: impl Into<String>, enabled: bool, topic: impl Into<String>) -> Self {
        Self {
            trigger_name: trigger_name.into(),
            enabled,
            topic: topic.into(),
        }
    }
}

/// Complete configuration for the event plugin hub.
///
/// Built once before [`crate::EventHub::start`]; immutable thereafter from
/// the hub's perspective. Kinds absent from `trigger_configs` keep their
/// previous state (default: disabled, empty topic).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPluginConfig {
    /// Filesystem location of the plugin bundle to load.
    pub plugin_path: PathBuf,
    /// Opaque connection string pushed to every listener; its meaning is
    /// listener-defined (e.g. a message broker endpoint).
    pub server_address: String,
    /// Ordered subscription entries, applied in sequence.
    pub trigger_configs: Vec<TriggerConfig>,
}

impl EventPluginConfig {
    /// Validate the configuration before start.
    ///
    /// # Returns
    ///
    /// Returns `Err` if no plugin bundle path was provided.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.plugin_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingPluginPath);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No plugin bundle path was provided.
    #[error("plugin bundle path is empty")]
    MissingPluginPath,
}
