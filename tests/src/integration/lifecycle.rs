//! # Lifecycle Scenarios
//!
//! Start, configuration propagation, and stop behavior through the full
//! registry-host stack.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use event_hub::{EventPluginConfig, HubError, TriggerConfig};
    use event_types::{BlockTrigger, TriggerKind};

    use crate::support::{hub_over, RecordingListener};

    fn bundle_in(dir: &TempDir) -> PathBuf {
        let bundle = dir.path().join("plugin-recorder-1.0.0.bundle");
        std::fs::File::create(&bundle).unwrap();
        bundle
    }

    fn config(bundle: PathBuf, triggers: Vec<TriggerConfig>) -> EventPluginConfig {
        EventPluginConfig {
            plugin_path: bundle,
            server_address: "127.0.0.1:9092".to_string(),
            trigger_configs: triggers,
        }
    }

    #[test]
    fn test_start_reflects_configuration_in_flags() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);
        let dir = TempDir::new().unwrap();

        let result = hub.start(&config(
            bundle_in(&dir),
            vec![
                TriggerConfig::new("block", true, "blk"),
                TriggerConfig::new("transaction", true, "tx"),
                TriggerConfig::new("contractevent", false, ""),
                TriggerConfig::new("contractlog", false, ""),
            ],
        ));

        assert!(result.is_ok());
        assert!(hub.trigger_enabled(TriggerKind::Block));
        assert!(hub.trigger_enabled(TriggerKind::Transaction));
        assert!(!hub.trigger_enabled(TriggerKind::ContractEvent));
        assert!(!hub.trigger_enabled(TriggerKind::ContractLog));
    }

    #[test]
    fn test_server_address_arrives_before_topics() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);
        let dir = TempDir::new().unwrap();

        hub.start(&config(
            bundle_in(&dir),
            vec![TriggerConfig::new("block", true, "blk")],
        ))
        .unwrap();

        let ops = listener.ops();
        assert_eq!(ops.first().unwrap(), "address:127.0.0.1:9092");
        assert!(ops[1..].iter().all(|op| op.starts_with("topic:")));
    }

    #[test]
    fn test_enable_then_disable_is_observed_in_order() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);
        let dir = TempDir::new().unwrap();

        hub.start(&config(
            bundle_in(&dir),
            vec![
                TriggerConfig::new("block", true, "T"),
                TriggerConfig::new("block", false, "T"),
            ],
        ))
        .unwrap();

        let topic_ops: Vec<String> = listener
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("topic:block"))
            .collect();
        assert_eq!(topic_ops, vec!["topic:block:T", "topic:block:"]);
        assert!(!hub.trigger_enabled(TriggerKind::Block));
    }

    #[test]
    fn test_trigger_names_are_case_insensitive() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);
        let dir = TempDir::new().unwrap();

        hub.start(&config(
            bundle_in(&dir),
            vec![
                TriggerConfig::new("BLOCK", true, "a"),
                TriggerConfig::new("ContractLog", true, "c"),
            ],
        ))
        .unwrap();

        assert!(hub.trigger_enabled(TriggerKind::Block));
        assert!(hub.trigger_enabled(TriggerKind::ContractLog));
    }

    #[test]
    fn test_unrecognized_trigger_names_are_skipped() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);
        let dir = TempDir::new().unwrap();

        hub.start(&config(
            bundle_in(&dir),
            vec![
                TriggerConfig::new("gossip", true, "g"),
                TriggerConfig::new("block", true, "blk"),
            ],
        ))
        .unwrap();

        // Only the recognized entry produced a topic push.
        let topic_ops: Vec<String> = listener
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("topic:"))
            .collect();
        assert_eq!(topic_ops, vec!["topic:block:blk"]);
    }

    #[test]
    fn test_missing_bundle_path_fails_and_leaves_hub_unloaded() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);

        let err = hub
            .start(&config(
                PathBuf::from("/nonexistent/plugin.bundle"),
                vec![TriggerConfig::new("block", true, "blk")],
            ))
            .unwrap_err();
        assert!(matches!(err, HubError::PluginPathInvalid { .. }));

        // Dispatch after a failed start is a no-op, not an error.
        hub.post_block_trigger(BlockTrigger::default());
        assert!(listener.payloads().is_empty());
        assert_eq!(hub.stats().events_dispatched, 0);
    }

    #[test]
    fn test_registry_without_listeners_is_a_load_failure() {
        let hub = hub_over(vec![]);
        let dir = TempDir::new().unwrap();

        let err = hub.start(&config(bundle_in(&dir), vec![])).unwrap_err();
        assert!(matches!(err, HubError::NoListenersRegistered { .. }));
    }

    #[test]
    fn test_flags_remain_queryable_after_stop() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener]);
        let dir = TempDir::new().unwrap();

        hub.start(&config(
            bundle_in(&dir),
            vec![TriggerConfig::new("transaction", true, "tx")],
        ))
        .unwrap();

        hub.stop_plugins();

        // Configuration intent survives runtime stop.
        assert!(hub.trigger_enabled(TriggerKind::Transaction));
        assert!(!hub.trigger_enabled(TriggerKind::Block));
    }

    #[test]
    fn test_stop_without_start_is_harmless() {
        let hub = hub_over(vec![RecordingListener::new()]);
        hub.stop_plugins();
    }
}
