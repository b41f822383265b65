//! Constructors for payload-carrying kinds.
//!
//! Unit kinds (`TransportNotConnected`, `InsufficientFunds`, ...) are built
//! directly from the enum.

use std::path::PathBuf;

use super::Failure;
use crate::context::{
    BlobHash, ClaimId, ClaimName, ComponentName, CurrencyCode, DatagramDescriptor, Outpoint,
    PeerId, Price, StreamHash, Uri,
};

impl Failure {
    /// Undecodable datagram from `sender`.
    pub fn decode(sender: impl Into<PeerId>, raw: &[u8]) -> Self {
        Self::Decode {
            sender: sender.into(),
            datagram: DatagramDescriptor::from_bytes(raw),
        }
    }

    /// Bucket `bucket` is at capacity.
    pub fn bucket_full(bucket: usize) -> Self {
        Self::BucketFull { bucket }
    }

    /// Remote error reported by `peer`.
    pub fn remote_exception(peer: impl Into<PeerId>, reason: impl Into<String>) -> Self {
        Self::RemoteException {
            peer: peer.into(),
            reason: reason.into(),
        }
    }

    /// `peer` closed the connection before answering.
    pub fn connection_closed(peer: impl Into<PeerId>) -> Self {
        Self::ConnectionClosedBeforeResponse { peer: peer.into() }
    }

    /// Header at `height` failed validation.
    pub fn invalid_header(height: u64, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            height,
            reason: reason.into(),
        }
    }

    /// Stream descriptor blob timed out.
    pub fn download_sd_timeout(download: impl Into<BlobHash>) -> Self {
        Self::DownloadSdTimeout {
            download: download.into(),
        }
    }

    /// Download timed out.
    pub fn download_timeout(download: impl Into<BlobHash>) -> Self {
        Self::DownloadTimeout {
            download: download.into(),
        }
    }

    /// Data blobs for a stream timed out.
    pub fn download_data_timeout(download: impl Into<BlobHash>) -> Self {
        Self::DownloadDataTimeout {
            download: download.into(),
        }
    }

    /// Resolution of `uri` timed out.
    pub fn resolve_timeout(uri: impl Into<Uri>) -> Self {
        Self::ResolveTimeout { uri: uri.into() }
    }

    /// `peer` violated the protocol.
    pub fn misbehaving_peer(peer: impl Into<PeerId>, reason: impl Into<String>) -> Self {
        Self::MisbehavingPeer {
            peer: peer.into(),
            reason: reason.into(),
        }
    }

    /// `peer` sent data that does not match its hash.
    pub fn invalid_data(peer: impl Into<PeerId>) -> Self {
        Self::InvalidData { peer: peer.into() }
    }

    /// `peer` never answered.
    pub fn no_response(peer: impl Into<PeerId>) -> Self {
        Self::NoResponse { peer: peer.into() }
    }

    /// `peer` sent a malformed response.
    pub fn invalid_response(peer: impl Into<PeerId>) -> Self {
        Self::InvalidResponse { peer: peer.into() }
    }

    /// Blob is not known.
    pub fn no_such_blob(blob: impl Into<BlobHash>) -> Self {
        Self::NoSuchBlob { blob: blob.into() }
    }

    /// Stream hash is not known.
    pub fn no_such_stream_hash(stream_hash: impl Into<StreamHash>) -> Self {
        Self::NoSuchStreamHash {
            stream_hash: stream_hash.into(),
        }
    }

    /// Stream descriptor hash is not known.
    pub fn no_such_sd_hash(sd_hash: impl Into<BlobHash>) -> Self {
        Self::NoSuchSdHash {
            sd_hash: sd_hash.into(),
        }
    }

    /// `hash` is not a valid blob hash.
    pub fn invalid_blob_hash(hash: impl Into<String>) -> Self {
        Self::InvalidBlobHash { hash: hash.into() }
    }

    /// Stream hash is already stored.
    pub fn duplicate_stream_hash(stream_hash: impl Into<StreamHash>) -> Self {
        Self::DuplicateStreamHash {
            stream_hash: stream_hash.into(),
        }
    }

    /// Name has no claims.
    pub fn unknown_name(name: impl Into<ClaimName>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Claim id is not known.
    pub fn unknown_claim_id(claim_id: impl Into<ClaimId>) -> Self {
        Self::UnknownClaimId {
            claim_id: claim_id.into(),
        }
    }

    /// URI cannot be resolved.
    pub fn unknown_uri(uri: impl Into<Uri>) -> Self {
        Self::UnknownUri { uri: uri.into() }
    }

    /// Outpoint cannot be resolved.
    pub fn unknown_outpoint(outpoint: impl Into<Outpoint>) -> Self {
        Self::UnknownOutpoint {
            outpoint: outpoint.into(),
        }
    }

    /// Checks `name` against `is_allowed`, yielding `InvalidName` on rejection.
    ///
    /// Offending characters are collected in order of first appearance.
    /// Returns `None` when the name is valid.
    pub fn check_name(name: &str, is_allowed: impl Fn(char) -> bool) -> Option<Self> {
        let mut invalid_characters: Vec<char> = Vec::new();
        for c in name.chars() {
            if !is_allowed(c) && !invalid_characters.contains(&c) {
                invalid_characters.push(c);
            }
        }
        if invalid_characters.is_empty() {
            None
        } else {
            Some(Self::InvalidName {
                name: ClaimName::from(name),
                invalid_characters,
            })
        }
    }

    /// Resolver failed on `uri`.
    pub fn resolve(uri: impl Into<Uri>, reason: impl Into<String>) -> Self {
        Self::Resolve {
            uri: uri.into(),
            reason: reason.into(),
        }
    }

    /// Claim references an unknown stream type.
    pub fn unknown_stream_type(stream_type: impl Into<String>) -> Self {
        Self::UnknownStreamType {
            stream_type: stream_type.into(),
        }
    }

    /// Stream descriptor is malformed.
    pub fn invalid_stream_descriptor(reason: impl Into<String>) -> Self {
        Self::InvalidStreamDescriptor {
            reason: reason.into(),
        }
    }

    /// Claim `name` carries invalid stream info.
    pub fn invalid_stream_info(name: impl Into<ClaimName>, stream_info: impl Into<String>) -> Self {
        Self::InvalidStreamInfo {
            name: name.into(),
            stream_info: stream_info.into(),
        }
    }

    /// Currency is not supported.
    pub fn invalid_currency(currency: impl Into<CurrencyCode>) -> Self {
        Self::InvalidCurrency {
            currency: currency.into(),
        }
    }

    /// Exchange rate `feed` returned an unusable response.
    pub fn invalid_exchange_rate(feed: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidExchangeRateResponse {
            feed: feed.into(),
            reason: reason.into(),
        }
    }

    /// No conversion path from `from` to `to`.
    pub fn currency_conversion(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>) -> Self {
        Self::CurrencyConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Fee is above the configured ceiling.
    pub fn key_fee_above_max(fee: Price, max_allowed: Price) -> Self {
        Self::KeyFeeAboveMaxAllowed { fee, max_allowed }
    }

    /// Payment negotiation failed.
    pub fn negotiation(reason: impl Into<String>) -> Self {
        Self::Negotiation {
            reason: reason.into(),
        }
    }

    /// Local file could not be opened.
    pub fn file_open(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Directory does not exist.
    pub fn no_such_directory(directory: impl Into<PathBuf>) -> Self {
        Self::NoSuchDirectory {
            directory: directory.into(),
        }
    }

    /// API method is not known.
    pub fn unknown_api_method(method: impl Into<String>) -> Self {
        Self::UnknownApiMethod {
            method: method.into(),
        }
    }

    /// Generic JSON-RPC failure.
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            message: message.into(),
        }
    }

    /// Component start condition is not met.
    pub fn start_condition_not_met(component: impl Into<ComponentName>) -> Self {
        Self::ComponentStartConditionNotMet {
            component: component.into(),
        }
    }

    /// Components that have not started yet.
    pub fn components_not_started<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ComponentName>,
    {
        Self::ComponentsNotStarted {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Download was cancelled.
    pub fn download_cancelled(download: impl Into<BlobHash>) -> Self {
        Self::DownloadCancelled {
            download: download.into(),
        }
    }
}
