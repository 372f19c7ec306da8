//! # Event Node
//!
//! Demo driver for the event hub: wires a compiled-in registry plugin host
//! with a tracing listener, starts the hub, produces a run of block
//! events, and reports the dispatch counters.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{error, info};

use event_hub::EventHub;
use event_types::{BlockTrigger, TriggerKind};
use node_runtime::config::NodeConfig;
use node_runtime::{logging, RegistryPluginHost, TracingEventListener};

fn main() -> Result<()> {
    logging::init();

    let config = NodeConfig::from_env();
    ensure_bundle_marker(&config.event_plugin.plugin_path)?;

    let registry = RegistryPluginHost::new()
        .with_listener(Box::new(|| Arc::new(TracingEventListener::new())));
    let hub = EventHub::init_global(registry.into_factory());

    if let Err(err) = hub.start(&config.event_plugin) {
        // Degraded mode: the node would keep running without listeners.
        error!(error = %err, "failed to start event plugins");
        return Ok(());
    }

    info!(blocks = config.demo_blocks, "producing demo block events");

    for height in 0..config.demo_blocks {
        if !hub.trigger_enabled(TriggerKind::Block) {
            break;
        }
        hub.post_block_trigger(BlockTrigger {
            timestamp: now_millis(),
            block_number: height,
            block_hash: format!("{height:#014x}"),
            parent_hash: format!("{:#014x}", height.saturating_sub(1)),
            transaction_size: height % 50,
            latest_solidified_block_number: height.saturating_sub(20),
            transaction_list: Vec::new(),
        });
    }

    let stats = hub.stats();
    info!(
        dispatched = stats.events_dispatched,
        dropped = stats.events_dropped,
        listener_faults = stats.listener_faults,
        "demo run complete"
    );

    hub.stop_plugins();
    Ok(())
}

/// The registry host's bundle is nominal; make sure its marker file exists
/// so loading passes the same path checks a real bundle would.
fn ensure_bundle_marker(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    info!(path = %path.display(), "created registry bundle marker");
    Ok(())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
