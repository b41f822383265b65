//! # Config Flow
//!
//! Bounds loaded from a TOML file drive the service: the same failures are
//! retried more or fewer times depending only on configuration.

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;
    use std::time::Duration;

    use propagation_policy::{
        InMemoryReputation, PeerReputation, PolicyConfigProvider, PropagationService,
        TomlConfigProvider,
    };
    use shared_errors::{ErrorKind, PeerId};

    use crate::support::{init_tracing, peers, BlobDownload, PeerBehavior};

    const CONFIG: &str = r#"
[policy]
max_alternate_peers = 1

[policy.timeout]
max_attempts = 5
initial_backoff_ms = 10
max_backoff_ms = 50

[reputation]
protocol_violation_penalty = -10.0
invalid_data_penalty = -30.0
exclusion_threshold = -25.0
"#;

    fn load() -> TomlConfigProvider {
        init_tracing();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CONFIG.as_bytes()).unwrap();
        TomlConfigProvider::load(file.path()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_timeout_bound_is_honored() {
        let provider = load();
        let svc = PropagationService::new(
            provider.policy_config(),
            InMemoryReputation::new(provider.reputation_config()).unwrap(),
        );
        let op = BlobDownload::new("deadbeef", b"blob", Duration::from_millis(50))
            .with_peer("P1", PeerBehavior::Silent);

        let err = svc.run(&op, &peers(&["P1"])).await.unwrap_err();

        assert_eq!(err.failure().map(|f| f.kind()), Some(ErrorKind::DownloadTimeout));
        assert_eq!(err.attempts(), 5);
        assert_eq!(op.calls().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_alternate_peer_cap_surfaces_second_offender() {
        let provider = load();
        let reputation = Arc::new(InMemoryReputation::new(provider.reputation_config()).unwrap());
        let svc = PropagationService::new(provider.policy_config(), Arc::clone(&reputation));
        let op = BlobDownload::new("blob0001", b"content", Duration::from_millis(50))
            .with_peer("P1", PeerBehavior::Serves(b"bad".to_vec()))
            .with_peer("P2", PeerBehavior::Serves(b"worse".to_vec()))
            .with_peer("P3", PeerBehavior::Serves(b"content".to_vec()));

        let err = svc
            .run(&op, &peers(&["P1", "P2", "P3"]))
            .await
            .unwrap_err();

        // One switch allowed: P1 -> P2, then P2's failure surfaces.
        assert_eq!(op.calls(), peers(&["P1", "P2"]));
        assert_eq!(err.failure().and_then(|f| f.peer()), Some(&PeerId::from("P2")));
        assert!(reputation.is_excluded(&PeerId::from("P1")));
        assert!(reputation.is_excluded(&PeerId::from("P2")));
    }
}
