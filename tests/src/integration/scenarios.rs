//! # Failure Scenarios
//!
//! End-to-end flows through `PropagationService` with simulated subsystems:
//!
//! 1. **Resolver**: unknown URI surfaces unchanged, slow server times out
//! 2. **Blob exchange**: silent peer exhausts the timeout bound, corrupt
//!    data moves the download to another peer
//! 3. **Negotiation**: fee above the ceiling is never retried

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use propagation_policy::{
        InMemoryReputation, NoOpReputation, PolicyConfig, PropagationError, PropagationService,
        ReputationConfig,
    };
    use shared_errors::{ErrorCategory, ErrorKind, Failure, PeerId, Price, Uri};

    use crate::support::{
        init_tracing, peers, BlobDownload, ClaimResolve, PeerBehavior, PriceQuote,
    };

    const WINDOW: Duration = Duration::from_millis(100);

    fn service() -> PropagationService<NoOpReputation> {
        init_tracing();
        PropagationService::new(PolicyConfig::for_testing(), NoOpReputation)
    }

    // =========================================================================
    // RESOLVER
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_resolve_nonexistent_uri_surfaces_unknown_uri() {
        let op = ClaimResolve::new("lbry://nonexistent", &[("lbry://known", "claim01")], WINDOW);

        let err = service()
            .run(&op, &peers(&["S1", "S2"]))
            .await
            .unwrap_err();

        let failure = err.failure().expect("surfaced failure");
        assert_eq!(
            failure,
            &Failure::UnknownUri {
                uri: Uri::from("lbry://nonexistent")
            }
        );
        assert_eq!(failure.kind().name(), "UnknownURI");
        assert_eq!(failure.to_string(), "URI lbry://nonexistent cannot be resolved");
        assert_eq!(op.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_known_uri() {
        let op = ClaimResolve::new("lbry://known", &[("lbry://known", "claim01")], WINDOW);

        let done = service().run(&op, &peers(&["S1"])).await.unwrap();

        assert_eq!(done.output, "claim01");
        assert_eq!(done.attempts, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_resolve_surfaces_timeout_with_uri() {
        let op = ClaimResolve::new("lbry://test", &[("lbry://test", "claim02")], WINDOW)
            .with_slow_server("S1");
        let svc = service();

        let err = svc.run(&op, &peers(&["S1", "S2"])).await.unwrap_err();

        let failure = err.failure().expect("surfaced failure");
        assert_eq!(failure.kind(), ErrorKind::ResolveTimeout);
        assert!(failure.to_string().contains("lbry://test"));
        assert_eq!(op.calls(), svc.config().timeout.max_attempts);
    }

    // =========================================================================
    // BLOB EXCHANGE
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_silent_peer_download_surfaces_timeout_after_bound() {
        let op = BlobDownload::new("deadbeef", b"blob", WINDOW)
            .with_peer("P1", PeerBehavior::Silent);
        let svc = service();
        let n = svc.config().timeout.max_attempts;

        let started = tokio::time::Instant::now();
        let err = svc.run(&op, &peers(&["P1"])).await.unwrap_err();

        match &err {
            PropagationError::Surfaced { failure, attempts } => {
                assert_eq!(
                    failure,
                    &Failure::DownloadTimeout {
                        download: "deadbeef".into()
                    }
                );
                assert_eq!(failure.category(), ErrorCategory::ResourceTimeout);
                assert_eq!(*attempts, n);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(op.calls(), vec![PeerId::from("P1"); n as usize]);
        // Every attempt waited out the full window.
        assert!(started.elapsed() >= WINDOW * n);
        assert_eq!(err.to_string(), "Failed to download deadbeef within timeout");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hash_mismatch_moves_download_to_another_peer() {
        init_tracing();
        let reputation = Arc::new(InMemoryReputation::new(ReputationConfig::default()).unwrap());
        let svc = PropagationService::new(PolicyConfig::for_testing(), Arc::clone(&reputation));
        let op = BlobDownload::new("blob0001", b"content", WINDOW)
            .with_peer("P2", PeerBehavior::Serves(b"tampered".to_vec()))
            .with_peer("P3", PeerBehavior::Serves(b"content".to_vec()));

        let done = svc
            .run(&op, &peers(&["P2", "P2", "P3"]))
            .await
            .unwrap();

        assert_eq!(done.output, b"content".to_vec());
        assert_eq!(done.peer, PeerId::from("P3"));
        // P2 is contacted exactly once even though it is listed twice.
        assert_eq!(op.calls(), peers(&["P2", "P3"]));
        assert!(reputation.trust(&PeerId::from("P2")) < 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_peer_corrupt_surfaces_last_invalid_data() {
        let op = BlobDownload::new("blob0001", b"content", WINDOW)
            .with_peer("P1", PeerBehavior::Serves(b"x".to_vec()))
            .with_peer("P2", PeerBehavior::Serves(b"y".to_vec()));

        let err = service()
            .run(&op, &peers(&["P1", "P2"]))
            .await
            .unwrap_err();

        assert_eq!(err.failure(), Some(&Failure::invalid_data("P2")));
        assert_eq!(err.attempts(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_connection_retried_up_to_transport_bound() {
        let op = BlobDownload::new("blob0001", b"content", WINDOW)
            .with_peer("P1", PeerBehavior::Closes);
        let svc = service();

        let err = svc.run(&op, &peers(&["P1", "P2"])).await.unwrap_err();

        assert_eq!(
            err.failure().map(Failure::kind),
            Some(ErrorKind::ConnectionClosedBeforeResponse)
        );
        assert_eq!(err.attempts(), svc.config().transport.max_attempts);
        assert!(op.calls().iter().all(|p| p.as_str() == "P1"));
    }

    // =========================================================================
    // NEGOTIATION
    // =========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_key_fee_above_max_surfaces_without_retry() {
        let op = PriceQuote::new(
            "claim01",
            Price::new(500, "LBC"),
            Price::new(100, "LBC"),
        );

        let err = service()
            .run(&op, &peers(&["P1", "P2"]))
            .await
            .unwrap_err();

        match err.failure() {
            Some(Failure::KeyFeeAboveMaxAllowed { fee, max_allowed }) => {
                assert_eq!(fee.amount(), 500);
                assert_eq!(max_allowed.amount(), 100);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.attempts(), 1);
        assert_eq!(op.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fee_within_ceiling_accepted() {
        let op = PriceQuote::new("claim01", Price::new(50, "LBC"), Price::new(100, "LBC"));

        let done = service().run(&op, &peers(&["P1"])).await.unwrap();

        assert_eq!(done.output, Price::new(50, "LBC"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_currency_mismatch_is_not_retried() {
        let op = PriceQuote::new("claim01", Price::new(5, "USD"), Price::new(100, "LBC"));

        let err = service().run(&op, &peers(&["P1"])).await.unwrap_err();

        assert_eq!(
            err.failure().map(Failure::kind),
            Some(ErrorKind::CurrencyConversion)
        );
        assert_eq!(op.calls(), 1);
    }
}
