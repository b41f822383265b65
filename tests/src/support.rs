//! Simulated node subsystems driven by the scenario tests.
//!
//! Each type implements `PeerOperation` the way a real subsystem would:
//! it performs one attempt against one peer and reports failures as
//! `Failure` values with their identifying context.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use propagation_policy::PeerOperation;
use shared_errors::{BlobHash, Failure, PeerId, Price, Uri};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber once; later calls are no-ops.
///
/// Honors `RUST_LOG`, defaulting to `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}

/// Build a candidate list from string ids.
pub fn peers(ids: &[&str]) -> Vec<PeerId> {
    ids.iter().map(|id| PeerId::from(*id)).collect()
}

// =============================================================================
// BLOB EXCHANGE
// =============================================================================

/// How a simulated peer answers a blob request.
#[derive(Debug, Clone)]
pub enum PeerBehavior {
    /// Sends these bytes.
    Serves(Vec<u8>),
    /// Never answers.
    Silent,
    /// Drops the connection before answering.
    Closes,
}

/// Download of one blob, verified against its expected content.
pub struct BlobDownload {
    hash: BlobHash,
    expected: Vec<u8>,
    window: Duration,
    peers: HashMap<PeerId, PeerBehavior>,
    calls: Mutex<Vec<PeerId>>,
}

impl BlobDownload {
    /// Download `hash`, whose content must equal `expected`.
    pub fn new(hash: &str, expected: &[u8], window: Duration) -> Self {
        Self {
            hash: BlobHash::from(hash),
            expected: expected.to_vec(),
            window,
            peers: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register how `peer` behaves.
    pub fn with_peer(mut self, peer: &str, behavior: PeerBehavior) -> Self {
        self.peers.insert(PeerId::from(peer), behavior);
        self
    }

    /// Peers contacted so far, in order.
    pub fn calls(&self) -> Vec<PeerId> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl PeerOperation for BlobDownload {
    type Output = Vec<u8>;

    fn target(&self) -> &str {
        self.hash.as_str()
    }

    async fn attempt(&self, peer: &PeerId) -> Result<Self::Output, Failure> {
        self.calls.lock().push(peer.clone());

        match self.peers.get(peer) {
            Some(PeerBehavior::Serves(bytes)) if *bytes == self.expected => Ok(bytes.clone()),
            Some(PeerBehavior::Serves(_)) => Err(Failure::invalid_data(peer.clone())),
            Some(PeerBehavior::Closes) => Err(Failure::connection_closed(peer.clone())),
            Some(PeerBehavior::Silent) | None => {
                tokio::time::sleep(self.window).await;
                Err(Failure::download_timeout(self.hash.clone()))
            }
        }
    }
}

// =============================================================================
// CLAIM RESOLVER
// =============================================================================

/// Resolution of one URI against the wallet servers given as candidates.
pub struct ClaimResolve {
    uri: Uri,
    claims: HashMap<String, String>,
    slow: HashSet<PeerId>,
    window: Duration,
    calls: Mutex<u32>,
}

impl ClaimResolve {
    /// Resolve `uri` against a claim table of `(uri, claim id)` pairs.
    pub fn new(uri: &str, claims: &[(&str, &str)], window: Duration) -> Self {
        Self {
            uri: Uri::from(uri),
            claims: claims
                .iter()
                .map(|(uri, claim)| (uri.to_string(), claim.to_string()))
                .collect(),
            slow: HashSet::new(),
            window,
            calls: Mutex::new(0),
        }
    }

    /// Make `server` exceed the resolve window.
    pub fn with_slow_server(mut self, server: &str) -> Self {
        self.slow.insert(PeerId::from(server));
        self
    }

    /// Attempts made so far.
    pub fn calls(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl PeerOperation for ClaimResolve {
    type Output = String;

    fn target(&self) -> &str {
        self.uri.as_str()
    }

    async fn attempt(&self, server: &PeerId) -> Result<Self::Output, Failure> {
        *self.calls.lock() += 1;

        if self.slow.contains(server) {
            tokio::time::sleep(self.window).await;
            return Err(Failure::resolve_timeout(self.uri.clone()));
        }

        self.claims
            .get(self.uri.as_str())
            .cloned()
            .ok_or_else(|| Failure::unknown_uri(self.uri.clone()))
    }
}

// =============================================================================
// PRICE NEGOTIATION
// =============================================================================

/// Price quote for a stream, checked against the configured ceiling.
pub struct PriceQuote {
    claim: String,
    fee: Price,
    max_allowed: Price,
    calls: Mutex<u32>,
}

impl PriceQuote {
    /// Quote `fee` for `claim`, refusing anything above `max_allowed`.
    pub fn new(claim: &str, fee: Price, max_allowed: Price) -> Self {
        Self {
            claim: claim.to_string(),
            fee,
            max_allowed,
            calls: Mutex::new(0),
        }
    }

    /// Attempts made so far.
    pub fn calls(&self) -> u32 {
        *self.calls.lock()
    }
}

#[async_trait]
impl PeerOperation for PriceQuote {
    type Output = Price;

    fn target(&self) -> &str {
        &self.claim
    }

    async fn attempt(&self, _peer: &PeerId) -> Result<Self::Output, Failure> {
        *self.calls.lock() += 1;

        if self.fee.currency() != self.max_allowed.currency() {
            return Err(Failure::currency_conversion(
                self.fee.currency().clone(),
                self.max_allowed.currency().clone(),
            ));
        }
        if self.fee.amount() > self.max_allowed.amount() {
            return Err(Failure::key_fee_above_max(
                self.fee.clone(),
                self.max_allowed.clone(),
            ));
        }
        Ok(self.fee.clone())
    }
}
