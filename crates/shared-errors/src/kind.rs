//! # Error Kind Registry
//!
//! The closed set of failure kinds and the category each one belongs to.
//!
//! Every lookup here is a `const fn` over a fieldless enum, so classification
//! is safe to call from any number of in-flight operations at once.
//!
//! New kinds are appended; the category, retry class and code of an existing
//! kind never change once published.

use std::fmt;

/// Policy family a failure kind belongs to.
///
/// Category membership is the dispatch key for propagation policy:
///
/// ```text
/// Transport        ── connection-level: bounded retry ── structural: switch peer / surface
/// PeerMisbehavior  ── never the same peer, downgrade trust, try an alternate
/// ResourceTimeout  ── bounded retry, same target, fresh deadline
/// DomainEconomic   ── surface immediately
/// Lifecycle        ── surface to orchestration
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCategory {
    /// Communication layer or malformed wire data.
    Transport,
    /// A remote peer violated protocol expectations.
    PeerMisbehavior,
    /// An operation did not complete within its allotted duration.
    ResourceTimeout,
    /// Well-formed request that cannot succeed given current domain state.
    DomainEconomic,
    /// A dependent component was not ready, or the operation was cancelled.
    Lifecycle,
}

impl ErrorCategory {
    /// All categories, in declaration order.
    pub const ALL: [ErrorCategory; 5] = [
        Self::Transport,
        Self::PeerMisbehavior,
        Self::ResourceTimeout,
        Self::DomainEconomic,
        Self::Lifecycle,
    ];

    /// Whether kinds of this category may ever be retried automatically.
    #[must_use]
    pub const fn allows_automatic_retry(&self) -> bool {
        matches!(
            self,
            Self::Transport | Self::PeerMisbehavior | Self::ResourceTimeout
        )
    }

    /// Stable lowercase name, used as a structured logging field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::PeerMisbehavior => "peer_misbehavior",
            Self::ResourceTimeout => "resource_timeout",
            Self::DomainEconomic => "domain_economic",
            Self::Lifecycle => "lifecycle",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a kind may be retried, independent of any configured bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetryClass {
    /// Never retried automatically.
    Never,
    /// Retried against the same target, up to the category's bound.
    Bounded,
    /// Retried against the same target only when the consuming policy opts in.
    Conditional,
    /// Never retried against the same peer; retried against an alternate one.
    SwitchPeer,
    /// The caller may query a different source; not an automatic retry.
    SwitchSource,
}

/// Numeric code carried by the JSON-RPC compatible family.
///
/// The value for a given kind is frozen across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RpcCode(i32);

impl RpcCode {
    /// Generic RPC failure.
    pub const GENERIC: RpcCode = RpcCode(0);
    /// Wallet balance cannot cover the requested spend.
    pub const INSUFFICIENT_FUNDS: RpcCode = RpcCode(-310);

    /// Raw integer value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every distinguishable failure a subsystem can produce.
///
/// This is the payload-free tag of [`crate::Failure`]; policy code that only
/// needs identity (logging, backoff keys) switches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorKind {
    // === Transport / DHT ===
    /// Datagram could not be decoded.
    Decode,
    /// K-bucket is at capacity.
    BucketFull,
    /// Remote node answered with an error.
    RemoteException,
    /// Transport is not connected.
    TransportNotConnected,
    /// Connection closed before the response arrived.
    ConnectionClosedBeforeResponse,
    /// Chain header failed validation.
    InvalidHeader,

    // === Resource / Timeout ===
    /// Stream descriptor blob was not downloaded in time.
    DownloadSdTimeout,
    /// Download did not finish in time.
    DownloadTimeout,
    /// Data blobs for a stream were not downloaded in time.
    DownloadDataTimeout,
    /// URI resolution did not finish in time.
    ResolveTimeout,

    // === Peer misbehavior ===
    /// Generic protocol violation by a peer.
    MisbehavingPeer,
    /// Peer sent data inconsistent with its claimed hash.
    InvalidData,
    /// Peer never answered meaningfully.
    NoResponse,
    /// Peer answered with a malformed response.
    InvalidResponse,

    // === Domain: content addressing ===
    /// Blob is not known locally.
    NoSuchBlob,
    /// Stream hash is not known.
    NoSuchStreamHash,
    /// Stream descriptor hash is not known.
    NoSuchSdHash,
    /// Text is not a valid blob hash.
    InvalidBlobHash,
    /// Stream hash is already stored.
    DuplicateStreamHash,

    // === Domain: resolution ===
    /// Name has no claims.
    UnknownName,
    /// Claim id is not known.
    UnknownClaimId,
    /// URI cannot be resolved.
    UnknownUri,
    /// Outpoint cannot be resolved.
    UnknownOutpoint,
    /// Name contains invalid characters.
    InvalidName,
    /// Resolution failed for a reason reported by the resolver.
    Resolve,
    /// Claim references an unknown stream type.
    UnknownStreamType,
    /// Stream descriptor is malformed.
    InvalidStreamDescriptor,
    /// Claim carries invalid stream info.
    InvalidStreamInfo,

    // === Domain: economic ===
    /// Wallet balance is too low.
    InsufficientFunds,
    /// Requested amount is negative.
    NegativeFunds,
    /// Requested amount is zero.
    NullFunds,
    /// Currency is not supported.
    InvalidCurrency,
    /// Exchange rate feed returned an unusable response.
    InvalidExchangeRateResponse,
    /// No conversion path between two currencies.
    CurrencyConversion,
    /// Key fee exceeds the configured ceiling.
    KeyFeeAboveMaxAllowed,
    /// Peer and node could not agree on a price.
    PriceDisagreement,
    /// Payment negotiation failed.
    Negotiation,

    // === Domain: local environment and API ===
    /// Local file could not be opened.
    FileOpen,
    /// Directory does not exist.
    NoSuchDirectory,
    /// Authentication token rejected.
    InvalidAuthenticationToken,
    /// API method is not known.
    UnknownApiMethod,
    /// Generic JSON-RPC failure.
    Rpc,

    // === Lifecycle ===
    /// A component's start condition is not met.
    ComponentStartConditionNotMet,
    /// Required components have not started.
    ComponentsNotStarted,
    /// Download was cancelled.
    DownloadCancelled,
    /// Request was cancelled.
    RequestCancelled,
}

impl ErrorKind {
    /// The closed registry, in declaration order.
    pub const ALL: [ErrorKind; 46] = [
        Self::Decode,
        Self::BucketFull,
        Self::RemoteException,
        Self::TransportNotConnected,
        Self::ConnectionClosedBeforeResponse,
        Self::InvalidHeader,
        Self::DownloadSdTimeout,
        Self::DownloadTimeout,
        Self::DownloadDataTimeout,
        Self::ResolveTimeout,
        Self::MisbehavingPeer,
        Self::InvalidData,
        Self::NoResponse,
        Self::InvalidResponse,
        Self::NoSuchBlob,
        Self::NoSuchStreamHash,
        Self::NoSuchSdHash,
        Self::InvalidBlobHash,
        Self::DuplicateStreamHash,
        Self::UnknownName,
        Self::UnknownClaimId,
        Self::UnknownUri,
        Self::UnknownOutpoint,
        Self::InvalidName,
        Self::Resolve,
        Self::UnknownStreamType,
        Self::InvalidStreamDescriptor,
        Self::InvalidStreamInfo,
        Self::InsufficientFunds,
        Self::NegativeFunds,
        Self::NullFunds,
        Self::InvalidCurrency,
        Self::InvalidExchangeRateResponse,
        Self::CurrencyConversion,
        Self::KeyFeeAboveMaxAllowed,
        Self::PriceDisagreement,
        Self::Negotiation,
        Self::FileOpen,
        Self::NoSuchDirectory,
        Self::InvalidAuthenticationToken,
        Self::UnknownApiMethod,
        Self::Rpc,
        Self::ComponentStartConditionNotMet,
        Self::ComponentsNotStarted,
        Self::DownloadCancelled,
        Self::RequestCancelled,
    ];

    /// Returns the category for this kind.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode
            | Self::BucketFull
            | Self::RemoteException
            | Self::TransportNotConnected
            | Self::ConnectionClosedBeforeResponse
            | Self::InvalidHeader => ErrorCategory::Transport,
            Self::DownloadSdTimeout
            | Self::DownloadTimeout
            | Self::DownloadDataTimeout
            | Self::ResolveTimeout => ErrorCategory::ResourceTimeout,
            Self::MisbehavingPeer
            | Self::InvalidData
            | Self::NoResponse
            | Self::InvalidResponse => ErrorCategory::PeerMisbehavior,
            Self::NoSuchBlob
            | Self::NoSuchStreamHash
            | Self::NoSuchSdHash
            | Self::InvalidBlobHash
            | Self::DuplicateStreamHash
            | Self::UnknownName
            | Self::UnknownClaimId
            | Self::UnknownUri
            | Self::UnknownOutpoint
            | Self::InvalidName
            | Self::Resolve
            | Self::UnknownStreamType
            | Self::InvalidStreamDescriptor
            | Self::InvalidStreamInfo
            | Self::InsufficientFunds
            | Self::NegativeFunds
            | Self::NullFunds
            | Self::InvalidCurrency
            | Self::InvalidExchangeRateResponse
            | Self::CurrencyConversion
            | Self::KeyFeeAboveMaxAllowed
            | Self::PriceDisagreement
            | Self::Negotiation
            | Self::FileOpen
            | Self::NoSuchDirectory
            | Self::InvalidAuthenticationToken
            | Self::UnknownApiMethod
            | Self::Rpc => ErrorCategory::DomainEconomic,
            Self::ComponentStartConditionNotMet
            | Self::ComponentsNotStarted
            | Self::DownloadCancelled
            | Self::RequestCancelled => ErrorCategory::Lifecycle,
        }
    }

    /// Returns how this kind may be retried.
    #[must_use]
    pub const fn retry(&self) -> RetryClass {
        match self {
            Self::TransportNotConnected
            | Self::ConnectionClosedBeforeResponse
            | Self::DownloadSdTimeout
            | Self::DownloadTimeout
            | Self::DownloadDataTimeout
            | Self::ResolveTimeout => RetryClass::Bounded,
            Self::RemoteException => RetryClass::Conditional,
            Self::Decode
            | Self::MisbehavingPeer
            | Self::InvalidData
            | Self::NoResponse
            | Self::InvalidResponse => RetryClass::SwitchPeer,
            Self::InvalidExchangeRateResponse => RetryClass::SwitchSource,
            _ => RetryClass::Never,
        }
    }

    /// Whether a failure of this kind blames the remote peer that produced it.
    #[must_use]
    pub const fn implicates_peer(&self) -> bool {
        matches!(
            self,
            Self::Decode
                | Self::RemoteException
                | Self::ConnectionClosedBeforeResponse
                | Self::MisbehavingPeer
                | Self::InvalidData
                | Self::NoResponse
                | Self::InvalidResponse
        )
    }

    /// Numeric code for the JSON-RPC compatible family.
    #[must_use]
    pub const fn rpc_code(&self) -> Option<RpcCode> {
        match self {
            Self::Rpc => Some(RpcCode::GENERIC),
            Self::InsufficientFunds => Some(RpcCode::INSUFFICIENT_FUNDS),
            _ => None,
        }
    }

    /// Stable kind name, used as a structured logging field and backoff key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Decode => "DecodeError",
            Self::BucketFull => "BucketFullError",
            Self::RemoteException => "RemoteException",
            Self::TransportNotConnected => "TransportNotConnectedError",
            Self::ConnectionClosedBeforeResponse => "ConnectionClosedBeforeResponseError",
            Self::InvalidHeader => "InvalidHeaderError",
            Self::DownloadSdTimeout => "DownloadSDTimeout",
            Self::DownloadTimeout => "DownloadTimeoutError",
            Self::DownloadDataTimeout => "DownloadDataTimeout",
            Self::ResolveTimeout => "ResolveTimeout",
            Self::MisbehavingPeer => "MisbehavingPeerError",
            Self::InvalidData => "InvalidDataError",
            Self::NoResponse => "NoResponseError",
            Self::InvalidResponse => "InvalidResponseError",
            Self::NoSuchBlob => "NoSuchBlobError",
            Self::NoSuchStreamHash => "NoSuchStreamHash",
            Self::NoSuchSdHash => "NoSuchSDHash",
            Self::InvalidBlobHash => "InvalidBlobHashError",
            Self::DuplicateStreamHash => "DuplicateStreamHashError",
            Self::UnknownName => "UnknownNameError",
            Self::UnknownClaimId => "UnknownClaimID",
            Self::UnknownUri => "UnknownURI",
            Self::UnknownOutpoint => "UnknownOutpoint",
            Self::InvalidName => "InvalidName",
            Self::Resolve => "ResolveError",
            Self::UnknownStreamType => "UnknownStreamTypeError",
            Self::InvalidStreamDescriptor => "InvalidStreamDescriptorError",
            Self::InvalidStreamInfo => "InvalidStreamInfoError",
            Self::InsufficientFunds => "InsufficientFundsError",
            Self::NegativeFunds => "NegativeFundsError",
            Self::NullFunds => "NullFundsError",
            Self::InvalidCurrency => "InvalidCurrencyError",
            Self::InvalidExchangeRateResponse => "InvalidExchangeRateResponse",
            Self::CurrencyConversion => "CurrencyConversionError",
            Self::KeyFeeAboveMaxAllowed => "KeyFeeAboveMaxAllowed",
            Self::PriceDisagreement => "PriceDisagreementError",
            Self::Negotiation => "NegotiationError",
            Self::FileOpen => "FileOpenError",
            Self::NoSuchDirectory => "NoSuchDirectoryError",
            Self::InvalidAuthenticationToken => "InvalidAuthenticationToken",
            Self::UnknownApiMethod => "UnknownAPIMethodError",
            Self::Rpc => "RPCError",
            Self::ComponentStartConditionNotMet => "ComponentStartConditionNotMet",
            Self::ComponentsNotStarted => "ComponentsNotStarted",
            Self::DownloadCancelled => "DownloadCancelledError",
            Self::RequestCancelled => "RequestCanceledError",
        }
    }

    /// Kinds belonging to `category`, in declaration order.
    pub fn in_category(category: ErrorCategory) -> impl Iterator<Item = ErrorKind> {
        Self::ALL
            .into_iter()
            .filter(move |kind| kind.category() == category)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
