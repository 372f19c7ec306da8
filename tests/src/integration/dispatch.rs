//! # Dispatch Scenarios
//!
//! Fan-out behavior: ordering, failure isolation, and the wire contract as
//! a listener decodes it.

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use event_hub::{EventPluginConfig, TriggerConfig};
    use event_types::{
        BlockTrigger, ContractEventTrigger, ContractLogTrigger, TransactionTrigger, TriggerKind,
    };

    use crate::support::{hub_over, RecordingListener};

    fn started_hub(
        listeners: Vec<std::sync::Arc<RecordingListener>>,
        dir: &TempDir,
    ) -> event_hub::EventHub {
        let bundle: PathBuf = dir.path().join("plugin-recorder-1.0.0.bundle");
        std::fs::File::create(&bundle).unwrap();

        let hub = hub_over(listeners);
        hub.start(&EventPluginConfig {
            plugin_path: bundle,
            server_address: "127.0.0.1:9092".to_string(),
            trigger_configs: vec![TriggerConfig::new("block", true, "blk")],
        })
        .unwrap();
        hub
    }

    #[test]
    fn test_two_thousand_blocks_arrive_in_order_everywhere() {
        let first = RecordingListener::new();
        let second = RecordingListener::new();
        let dir = TempDir::new().unwrap();
        let hub = started_hub(vec![first.clone(), second.clone()], &dir);

        for height in 0..2000u64 {
            hub.post_block_trigger(BlockTrigger {
                block_number: height,
                block_hash: "0X123456789A".to_string(),
                transaction_size: height,
                ..BlockTrigger::default()
            });
        }

        for listener in [&first, &second] {
            let payloads = listener.payloads_of(TriggerKind::Block);
            assert_eq!(payloads.len(), 2000);

            let heights: Vec<u64> = payloads
                .iter()
                .map(|payload| {
                    let decoded: BlockTrigger = serde_json::from_str(payload).unwrap();
                    decoded.block_number
                })
                .collect();
            assert!(heights.windows(2).all(|pair| pair[0] < pair[1]));
            assert_eq!(heights.first(), Some(&0));
            assert_eq!(heights.last(), Some(&1999));
        }

        assert_eq!(hub.stats().events_dispatched, 2000);
        assert_eq!(hub.stats().listener_faults, 0);
    }

    #[test]
    fn test_failing_listener_does_not_block_the_next() {
        let failing = RecordingListener::failing_on(TriggerKind::Block);
        let healthy = RecordingListener::new();
        let dir = TempDir::new().unwrap();
        let hub = started_hub(vec![failing.clone(), healthy.clone()], &dir);

        hub.post_block_trigger(BlockTrigger {
            block_number: 11,
            ..BlockTrigger::default()
        });

        assert!(failing.payloads_of(TriggerKind::Block).is_empty());
        assert_eq!(healthy.payloads_of(TriggerKind::Block).len(), 1);
        assert_eq!(hub.stats().listener_faults, 1);

        // The failing listener still receives other kinds.
        hub.post_transaction_trigger(TransactionTrigger::default());
        assert_eq!(failing.payloads_of(TriggerKind::Transaction).len(), 1);
    }

    #[test]
    fn test_listener_decodes_the_documented_schema() {
        let listener = RecordingListener::new();
        let dir = TempDir::new().unwrap();
        let hub = started_hub(vec![listener.clone()], &dir);

        let original = BlockTrigger {
            block_hash: "0X123456789A".to_string(),
            block_number: 7,
            transaction_size: 3,
            ..BlockTrigger::default()
        };
        hub.post_block_trigger(original.clone());

        let payloads = listener.payloads_of(TriggerKind::Block);
        let decoded: BlockTrigger = serde_json::from_str(&payloads[0]).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_every_kind_reaches_its_handler() {
        let listener = RecordingListener::new();
        let dir = TempDir::new().unwrap();
        let hub = started_hub(vec![listener.clone()], &dir);

        hub.post_block_trigger(BlockTrigger::default());
        hub.post_transaction_trigger(TransactionTrigger::default());
        hub.post_contract_log_trigger(ContractLogTrigger::default());
        hub.post_contract_event_trigger(ContractEventTrigger::default());

        let kinds: Vec<TriggerKind> = listener
            .payloads()
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TriggerKind::Block,
                TriggerKind::Transaction,
                TriggerKind::ContractLog,
                TriggerKind::ContractEvent,
            ]
        );
        assert_eq!(hub.stats().events_dispatched, 4);
    }

    #[test]
    fn test_dispatch_is_not_gated_by_enable_flags() {
        let listener = RecordingListener::new();
        let dir = TempDir::new().unwrap();
        // Only "block" is enabled by started_hub's config.
        let hub = started_hub(vec![listener.clone()], &dir);
        assert!(!hub.trigger_enabled(TriggerKind::ContractEvent));

        hub.post_contract_event_trigger(ContractEventTrigger::default());

        // Forwarded anyway; filtering is the listener's decision.
        assert_eq!(listener.payloads_of(TriggerKind::ContractEvent).len(), 1);
    }

    #[test]
    fn test_dispatch_before_start_never_errors() {
        let listener = RecordingListener::new();
        let hub = hub_over(vec![listener.clone()]);

        hub.post_block_trigger(BlockTrigger::default());
        hub.post_contract_log_trigger(ContractLogTrigger::default());

        assert!(listener.payloads().is_empty());
        assert_eq!(hub.stats().events_dispatched, 0);
    }
}
