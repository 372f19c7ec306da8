//! # Node Configuration
//!
//! Configuration for the event node, assembled from defaults with
//! environment overrides.

use std::env;
use std::path::PathBuf;

use event_hub::{EventPluginConfig, TriggerConfig};

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Event subscription configuration handed to the hub.
    pub event_plugin: EventPluginConfig,
    /// Number of demo block events to produce.
    pub demo_blocks: u64,
}

impl NodeConfig {
    /// Build the configuration from environment overrides on top of the
    /// defaults.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `EVENT_NODE_PLUGIN_PATH` | `plugins/registry.bundle` |
    /// | `EVENT_NODE_SERVER_ADDRESS` | `127.0.0.1:9092` |
    /// | `EVENT_NODE_BLOCK_TOPIC` | `block` |
    /// | `EVENT_NODE_DEMO_BLOCKS` | `2000` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("EVENT_NODE_PLUGIN_PATH") {
            config.event_plugin.plugin_path = PathBuf::from(path);
        }
        if let Ok(address) = env::var("EVENT_NODE_SERVER_ADDRESS") {
            config.event_plugin.server_address = address;
        }
        if let Ok(topic) = env::var("EVENT_NODE_BLOCK_TOPIC") {
            if let Some(entry) = config
                .event_plugin
                .trigger_configs
                .iter_mut()
                .find(|entry| entry.trigger_name == "block")
            {
                entry.topic = topic;
            }
        }
        if let Ok(blocks) = env::var("EVENT_NODE_DEMO_BLOCKS") {
            if let Ok(blocks) = blocks.parse() {
                config.demo_blocks = blocks;
            }
        }

        config
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            event_plugin: EventPluginConfig {
                plugin_path: PathBuf::from("plugins/registry.bundle"),
                server_address: "127.0.0.1:9092".to_string(),
                trigger_configs: vec![
                    TriggerConfig::new("block", true, "block"),
                    TriggerConfig::new("transaction", true, "transaction"),
                    TriggerConfig::new("contractevent", false, ""),
                    TriggerConfig::new("contractlog", false, ""),
                ],
            },
            demo_blocks: 2000,
        }
    }
}
