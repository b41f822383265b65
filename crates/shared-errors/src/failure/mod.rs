//! # Failure Values
//!
//! The unit propagated on error: one variant per [`ErrorKind`], each holding
//! only the structured context its kind requires. The human-readable message
//! is the `Display` impl, derived from those fields and nothing else.

use std::path::PathBuf;

use thiserror::Error;

use crate::context::{
    BlobHash, CharList, ClaimId, ClaimName, ComponentList, ComponentName, CurrencyCode,
    DatagramDescriptor, Outpoint, PeerId, Price, StreamHash, Uri,
};
use crate::kind::{ErrorCategory, ErrorKind, RetryClass, RpcCode};
use crate::report::FailureReport;

mod constructors;


/// Result alias for operations that fail with a [`Failure`].
pub type Result<T> = std::result::Result<T, Failure>;

/// A failure raised by a node subsystem.
///
/// Immutable once constructed and cheap to clone; it carries no attempt
/// counters, timers or trust scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Failure {
    // === Transport / DHT ===
    /// Datagram could not be decoded.
    #[error("Failed to decode datagram from {sender}: {datagram}")]
    Decode {
        /// Peer that sent the datagram.
        sender: PeerId,
        /// Length and leading bytes of the datagram.
        datagram: DatagramDescriptor,
    },

    /// K-bucket is at capacity.
    #[error("Bucket {bucket} is full")]
    BucketFull {
        /// Index of the full bucket.
        bucket: usize,
    },

    /// Remote node answered with an error.
    #[error("Remote exception from {peer}: {reason}")]
    RemoteException {
        /// Remote node that raised.
        peer: PeerId,
        /// Reason reported by the remote node.
        reason: String,
    },

    /// Transport is not connected.
    #[error("Transport is not connected")]
    TransportNotConnected,

    /// Connection closed before the response arrived.
    #[error("Connection to {peer} closed before response")]
    ConnectionClosedBeforeResponse {
        /// Peer whose connection closed.
        peer: PeerId,
    },

    /// Chain header failed validation.
    #[error("Invalid header at height {height}: {reason}")]
    InvalidHeader {
        /// Height of the rejected header.
        height: u64,
        /// Validation failure.
        reason: String,
    },

    // === Resource / Timeout ===
    /// Stream descriptor blob was not downloaded in time.
    #[error("Failed to download sd blob {download} within timeout")]
    DownloadSdTimeout {
        /// Stream descriptor hash being downloaded.
        download: BlobHash,
    },

    /// Download did not finish in time.
    #[error("Failed to download {download} within timeout")]
    DownloadTimeout {
        /// Hash being downloaded.
        download: BlobHash,
    },

    /// Data blobs for a stream were not downloaded in time.
    #[error("Failed to download data blobs for sd hash {download} within timeout")]
    DownloadDataTimeout {
        /// Stream descriptor hash whose data blobs were requested.
        download: BlobHash,
    },

    /// URI resolution did not finish in time.
    #[error("Failed to resolve \"{uri}\" within the timeout")]
    ResolveTimeout {
        /// URI being resolved.
        uri: Uri,
    },

    // === Peer misbehavior ===
    /// Generic protocol violation by a peer.
    #[error("Peer {peer} misbehaved: {reason}")]
    MisbehavingPeer {
        /// Offending peer.
        peer: PeerId,
        /// Observed violation.
        reason: String,
    },

    /// Peer sent data inconsistent with its claimed hash.
    #[error("Peer {peer} sent invalid data")]
    InvalidData {
        /// Offending peer.
        peer: PeerId,
    },

    /// Peer never answered meaningfully.
    #[error("Peer {peer} did not respond")]
    NoResponse {
        /// Silent peer.
        peer: PeerId,
    },

    /// Peer answered with a malformed response.
    #[error("Peer {peer} sent an invalid response")]
    InvalidResponse {
        /// Offending peer.
        peer: PeerId,
    },

    // === Domain: content addressing ===
    /// Blob is not known locally.
    #[error("Blob {blob} not found")]
    NoSuchBlob {
        /// Requested blob.
        blob: BlobHash,
    },

    /// Stream hash is not known.
    #[error("Stream hash {stream_hash} not found")]
    NoSuchStreamHash {
        /// Requested stream.
        stream_hash: StreamHash,
    },

    /// Stream descriptor hash is not known.
    #[error("SD hash {sd_hash} not found")]
    NoSuchSdHash {
        /// Requested stream descriptor.
        sd_hash: BlobHash,
    },

    /// Text is not a valid blob hash.
    #[error("Invalid blob hash: {hash}")]
    InvalidBlobHash {
        /// The rejected text.
        hash: String,
    },

    /// Stream hash is already stored.
    #[error("Stream hash {stream_hash} already exists")]
    DuplicateStreamHash {
        /// The duplicated stream.
        stream_hash: StreamHash,
    },

    // === Domain: resolution ===
    /// Name has no claims.
    #[error("Name {name} is unknown")]
    UnknownName {
        /// Requested name.
        name: ClaimName,
    },

    /// Claim id is not known.
    #[error("Claim {claim_id} is unknown")]
    UnknownClaimId {
        /// Requested claim.
        claim_id: ClaimId,
    },

    /// URI cannot be resolved.
    #[error("URI {uri} cannot be resolved")]
    UnknownUri {
        /// Requested URI.
        uri: Uri,
    },

    /// Outpoint cannot be resolved.
    #[error("Outpoint {outpoint} cannot be resolved")]
    UnknownOutpoint {
        /// Requested outpoint.
        outpoint: Outpoint,
    },

    /// Name contains invalid characters.
    #[error("URI {name} contains invalid characters: {}", CharList(.invalid_characters))]
    InvalidName {
        /// The rejected name.
        name: ClaimName,
        /// Offending characters, in order of first appearance.
        invalid_characters: Vec<char>,
    },

    /// Resolution failed for a reason reported by the resolver.
    #[error("Failed to resolve {uri}: {reason}")]
    Resolve {
        /// URI being resolved.
        uri: Uri,
        /// Resolver's reason.
        reason: String,
    },

    /// Claim references an unknown stream type.
    #[error("Unknown stream type '{stream_type}'")]
    UnknownStreamType {
        /// The unrecognised type.
        stream_type: String,
    },

    /// Stream descriptor is malformed.
    #[error("Invalid stream descriptor: {reason}")]
    InvalidStreamDescriptor {
        /// What is wrong with it.
        reason: String,
    },

    /// Claim carries invalid stream info.
    #[error("{name} has claim with invalid stream info: {stream_info}")]
    InvalidStreamInfo {
        /// Claim name.
        name: ClaimName,
        /// The stream info as published.
        stream_info: String,
    },

    // === Domain: economic ===
    /// Wallet balance is too low.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Requested amount is negative.
    #[error("Cannot spend a negative amount")]
    NegativeFunds,

    /// Requested amount is zero.
    #[error("Cannot spend a zero amount")]
    NullFunds,

    /// Currency is not supported.
    #[error("Invalid currency: {currency} is not a supported currency.")]
    InvalidCurrency {
        /// Rejected currency.
        currency: CurrencyCode,
    },

    /// Exchange rate feed returned an unusable response.
    #[error("Failed to get exchange rate from {feed}:{reason}")]
    InvalidExchangeRateResponse {
        /// Name of the exchange rate feed.
        feed: String,
        /// Why the response was rejected.
        reason: String,
    },

    /// No conversion path between two currencies.
    #[error("Cannot convert {from} to {to}")]
    CurrencyConversion {
        /// Source currency.
        from: CurrencyCode,
        /// Target currency.
        to: CurrencyCode,
    },

    /// Key fee exceeds the configured ceiling.
    #[error("Key fee {fee} is above the max allowed {max_allowed}")]
    KeyFeeAboveMaxAllowed {
        /// Fee requested by the claim.
        fee: Price,
        /// Configured ceiling.
        max_allowed: Price,
    },

    /// Peer and node could not agree on a price.
    #[error("Price disagreement")]
    PriceDisagreement,

    /// Payment negotiation failed.
    #[error("Negotiation failed: {reason}")]
    Negotiation {
        /// Why negotiation stopped.
        reason: String,
    },

    // === Domain: local environment and API ===
    /// Local file could not be opened.
    ///
    /// The path is rendered with `Path::display`, so non-UTF-8 bytes are
    /// replaced; the field itself keeps the exact path.
    #[error("Failed to open {}: {reason}", .path.display())]
    FileOpen {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying reason.
        reason: String,
    },

    /// Directory does not exist.
    ///
    /// Rendered lossily like [`Failure::FileOpen`].
    #[error("No such directory {}", .directory.display())]
    NoSuchDirectory {
        /// Missing directory.
        directory: PathBuf,
    },

    /// Authentication token rejected.
    #[error("Invalid authentication token")]
    InvalidAuthenticationToken,

    /// API method is not known.
    #[error("Unknown API method: {method}")]
    UnknownApiMethod {
        /// Requested method.
        method: String,
    },

    /// Generic JSON-RPC failure.
    #[error("{message}")]
    Rpc {
        /// Message reported to the RPC client.
        message: String,
    },

    // === Lifecycle ===
    /// A component's start condition is not met.
    #[error("Start condition for component {component} is not met")]
    ComponentStartConditionNotMet {
        /// Component that cannot start.
        component: ComponentName,
    },

    /// Required components have not started.
    #[error("Components not started: {}", ComponentList(.components))]
    ComponentsNotStarted {
        /// Components still pending.
        components: Vec<ComponentName>,
    },

    /// Download was cancelled.
    #[error("Download of {download} was cancelled")]
    DownloadCancelled {
        /// Hash whose download was cancelled.
        download: BlobHash,
    },

    /// Request was cancelled.
    #[error("Request was cancelled")]
    RequestCancelled,
}

impl Failure {
    /// The payload-free tag of this failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode { .. } => ErrorKind::Decode,
            Self::BucketFull { .. } => ErrorKind::BucketFull,
            Self::RemoteException { .. } => ErrorKind::RemoteException,
            Self::TransportNotConnected => ErrorKind::TransportNotConnected,
            Self::ConnectionClosedBeforeResponse { .. } => {
                ErrorKind::ConnectionClosedBeforeResponse
            }
            Self::InvalidHeader { .. } => ErrorKind::InvalidHeader,
            Self::DownloadSdTimeout { .. } => ErrorKind::DownloadSdTimeout,
            Self::DownloadTimeout { .. } => ErrorKind::DownloadTimeout,
            Self::DownloadDataTimeout { .. } => ErrorKind::DownloadDataTimeout,
            Self::ResolveTimeout { .. } => ErrorKind::ResolveTimeout,
            Self::MisbehavingPeer { .. } => ErrorKind::MisbehavingPeer,
            Self::InvalidData { .. } => ErrorKind::InvalidData,
            Self::NoResponse { .. } => ErrorKind::NoResponse,
            Self::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            Self::NoSuchBlob { .. } => ErrorKind::NoSuchBlob,
            Self::NoSuchStreamHash { .. } => ErrorKind::NoSuchStreamHash,
            Self::NoSuchSdHash { .. } => ErrorKind::NoSuchSdHash,
            Self::InvalidBlobHash { .. } => ErrorKind::InvalidBlobHash,
            Self::DuplicateStreamHash { .. } => ErrorKind::DuplicateStreamHash,
            Self::UnknownName { .. } => ErrorKind::UnknownName,
            Self::UnknownClaimId { .. } => ErrorKind::UnknownClaimId,
            Self::UnknownUri { .. } => ErrorKind::UnknownUri,
            Self::UnknownOutpoint { .. } => ErrorKind::UnknownOutpoint,
            Self::InvalidName { .. } => ErrorKind::InvalidName,
            Self::Resolve { .. } => ErrorKind::Resolve,
            Self::UnknownStreamType { .. } => ErrorKind::UnknownStreamType,
            Self::InvalidStreamDescriptor { .. } => ErrorKind::InvalidStreamDescriptor,
            Self::InvalidStreamInfo { .. } => ErrorKind::InvalidStreamInfo,
            Self::InsufficientFunds => ErrorKind::InsufficientFunds,
            Self::NegativeFunds => ErrorKind::NegativeFunds,
            Self::NullFunds => ErrorKind::NullFunds,
            Self::InvalidCurrency { .. } => ErrorKind::InvalidCurrency,
            Self::InvalidExchangeRateResponse { .. } => ErrorKind::InvalidExchangeRateResponse,
            Self::CurrencyConversion { .. } => ErrorKind::CurrencyConversion,
            Self::KeyFeeAboveMaxAllowed { .. } => ErrorKind::KeyFeeAboveMaxAllowed,
            Self::PriceDisagreement => ErrorKind::PriceDisagreement,
            Self::Negotiation { .. } => ErrorKind::Negotiation,
            Self::FileOpen { .. } => ErrorKind::FileOpen,
            Self::NoSuchDirectory { .. } => ErrorKind::NoSuchDirectory,
            Self::InvalidAuthenticationToken => ErrorKind::InvalidAuthenticationToken,
            Self::UnknownApiMethod { .. } => ErrorKind::UnknownApiMethod,
            Self::Rpc { .. } => ErrorKind::Rpc,
            Self::ComponentStartConditionNotMet { .. } => {
                ErrorKind::ComponentStartConditionNotMet
            }
            Self::ComponentsNotStarted { .. } => ErrorKind::ComponentsNotStarted,
            Self::DownloadCancelled { .. } => ErrorKind::DownloadCancelled,
            Self::RequestCancelled => ErrorKind::RequestCancelled,
        }
    }

    /// Category of this failure's kind.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.kind().category()
    }

    /// Retry class of this failure's kind.
    #[must_use]
    pub const fn retry(&self) -> RetryClass {
        self.kind().retry()
    }

    /// Numeric RPC code, present only for the JSON-RPC compatible family.
    #[must_use]
    pub const fn code(&self) -> Option<RpcCode> {
        self.kind().rpc_code()
    }

    /// The remote peer this failure blames, if its kind implicates one.
    #[must_use]
    pub fn peer(&self) -> Option<&PeerId> {
        match self {
            Self::Decode { sender, .. } => Some(sender),
            Self::RemoteException { peer, .. }
            | Self::ConnectionClosedBeforeResponse { peer }
            | Self::MisbehavingPeer { peer, .. }
            | Self::InvalidData { peer }
            | Self::NoResponse { peer }
            | Self::InvalidResponse { peer } => Some(peer),
            _ => None,
        }
    }

    /// Identifier of what a timeout or cancellation kind was waiting on.
    ///
    /// This is the key a bounded retry keeps targeting, and it survives every
    /// retry unchanged.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::DownloadSdTimeout { download }
            | Self::DownloadTimeout { download }
            | Self::DownloadDataTimeout { download }
            | Self::DownloadCancelled { download } => Some(download.as_str()),
            Self::ResolveTimeout { uri } => Some(uri.as_str()),
            _ => None,
        }
    }

    /// Render for the outermost reporting layer.
    #[must_use]
    pub fn report(&self) -> FailureReport {
        FailureReport::from(self)
    }
}
