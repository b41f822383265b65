//! # Policy Properties
//!
//! Randomized checks of the propagation rules over the whole registry:
//! categories are total, timeouts stop at their bound, blamed peers are
//! never retried, and domain or lifecycle failures are never retried.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use propagation_policy::{BackoffConfig, Decision, OperationTracker, PolicyConfig};
    use shared_errors::testing::sample_failures;
    use shared_errors::{ErrorCategory, ErrorKind, Failure, PeerId};

    fn bounded(max_attempts: u32) -> BackoffConfig {
        BackoffConfig {
            max_attempts,
            initial_backoff_ms: 1,
            max_backoff_ms: 8,
            multiplier: 2.0,
        }
    }

    fn any_failure() -> impl Strategy<Value = Failure> {
        prop::sample::select(sample_failures())
    }

    fn any_config() -> impl Strategy<Value = PolicyConfig> {
        (1u32..8, 1u32..8, prop::option::of(1usize..6), any::<bool>()).prop_map(
            |(transport, timeout, max_alternate_peers, retry_remote_exceptions)| PolicyConfig {
                transport: bounded(transport),
                timeout: bounded(timeout),
                max_alternate_peers,
                retry_remote_exceptions,
            },
        )
    }

    #[test]
    fn test_every_kind_has_exactly_one_category() {
        for kind in ErrorKind::ALL {
            let owners = ErrorCategory::ALL
                .iter()
                .filter(|category| ErrorKind::in_category(**category).any(|k| k == kind))
                .count();
            assert_eq!(owners, 1, "{kind}");
        }
    }

    proptest! {
        #[test]
        fn prop_timeout_surfaces_at_bound(
            n in 1u32..10,
            failure in prop::sample::select(vec![
                Failure::download_timeout("deadbeef"),
                Failure::download_sd_timeout("sd0001"),
                Failure::download_data_timeout("sd0002"),
                Failure::resolve_timeout("lbry://test"),
            ]),
        ) {
            let config = PolicyConfig { timeout: bounded(n), ..PolicyConfig::for_testing() };
            let mut tracker = OperationTracker::new();

            for i in 1..=n {
                prop_assert!(tracker.begin_attempt().is_some());
                let decision = tracker.on_failure(&failure, &config);
                if i < n {
                    let is_same_target_retry =
                        matches!(decision, Decision::RetrySameTarget { .. });
                    prop_assert!(is_same_target_retry);
                } else {
                    prop_assert!(decision.is_surface());
                }
            }

            // No (N+1)-th attempt.
            prop_assert!(tracker.begin_attempt().is_none());
            prop_assert_eq!(tracker.attempts(), n);
        }

        #[test]
        fn prop_blamed_peer_never_retried(
            config in any_config(),
            failures in prop::collection::vec(any_failure(), 1..12),
        ) {
            let mut tracker = OperationTracker::new();
            let mut blamed: Vec<PeerId> = Vec::new();

            for failure in &failures {
                if tracker.begin_attempt().is_none() {
                    break;
                }
                let decision = tracker.on_failure(failure, &config);
                if let Decision::RetrySameTarget { .. } = decision {
                    // A same-target retry never goes back to a blamed peer.
                    if let Some(peer) = failure.peer() {
                        prop_assert!(!blamed.contains(peer));
                    }
                }
                if let Some(peer) = decision.blamed_peer() {
                    prop_assert!(tracker.is_excluded(peer));
                    blamed.push(peer.clone());
                }
            }

            for peer in &blamed {
                prop_assert!(tracker.is_excluded(peer));
            }
        }

        #[test]
        fn prop_misbehavior_never_retries_same_peer(
            config in any_config(),
            failure in any_failure(),
        ) {
            prop_assume!(failure.category() == ErrorCategory::PeerMisbehavior);
            let mut tracker = OperationTracker::new();
            tracker.begin_attempt();

            let decision = tracker.on_failure(&failure, &config);

            let is_same_target_retry = matches!(decision, Decision::RetrySameTarget { .. });
            prop_assert!(!is_same_target_retry);
            prop_assert_eq!(decision.blamed_peer(), failure.peer());
        }

        #[test]
        fn prop_domain_and_lifecycle_never_retried(
            config in any_config(),
            failure in any_failure(),
        ) {
            prop_assume!(!failure.category().allows_automatic_retry());
            let mut tracker = OperationTracker::new();
            tracker.begin_attempt();

            let decision = tracker.on_failure(&failure, &config);

            prop_assert_eq!(decision, Decision::Surface { blamed: None });
            prop_assert!(tracker.state().is_terminal());
        }
    }
}
