//! # Context Carrier
//!
//! Strongly-typed identifiers attached to failures.
//!
//! Each type displays its literal value verbatim so that operators can
//! correlate a rendered failure with logs from other subsystems.

use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// The literal identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

identifier! {
    /// Identifier of a remote peer (node id or `host:port`).
    PeerId
}

identifier! {
    /// Content hash naming a blob, including stream descriptor blobs.
    BlobHash
}

identifier! {
    /// Hash identifying an assembled stream.
    StreamHash
}

identifier! {
    /// Human-readable claim name.
    ClaimName
}

identifier! {
    /// Blockchain claim identifier.
    ClaimId
}

identifier! {
    /// Content URI, e.g. `lbry://name#claimid`.
    Uri
}

identifier! {
    /// Transaction outpoint, `txid:nout`.
    Outpoint
}

identifier! {
    /// Currency code, e.g. `LBC` or `USD`.
    CurrencyCode
}

identifier! {
    /// Name of a node component managed by the lifecycle orchestrator.
    ComponentName
}

/// Number of leading bytes kept in a [`DatagramDescriptor`].
pub const DATAGRAM_PREFIX_LEN: usize = 16;

/// Description of an undecodable datagram.
///
/// Keeps the total length and a bounded hex prefix; the raw buffer itself is
/// never retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatagramDescriptor {
    len: usize,
    prefix: String,
}

impl DatagramDescriptor {
    /// Describe a raw datagram.
    #[must_use]
    pub fn from_bytes(raw: &[u8]) -> Self {
        let end = raw.len().min(DATAGRAM_PREFIX_LEN);
        Self {
            len: raw.len(),
            prefix: hex::encode(&raw[..end]),
        }
    }

    /// Total datagram length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for an empty datagram.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Hex encoding of the leading bytes.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Display for DatagramDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes [{}", self.len, self.prefix)?;
        if self.len > DATAGRAM_PREFIX_LEN {
            f.write_str("..")?;
        }
        f.write_str("]")
    }
}

/// An amount in a currency's smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price {
    amount: u64,
    currency: CurrencyCode,
}

impl Price {
    /// Create a price.
    pub fn new(amount: u64, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Amount in the currency's smallest unit.
    #[must_use]
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Currency of the amount.
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Renders characters as a comma-separated list, in the order given.
pub(crate) struct CharList<'a>(pub &'a [char]);

impl fmt::Display for CharList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Renders component names as a comma-separated list.
pub(crate) struct ComponentList<'a>(pub &'a [ComponentName]);

impl fmt::Display for ComponentList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name.as_str())?;
        }
        Ok(())
    }
}
