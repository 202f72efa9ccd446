//! Data model for the name registry.
//!
//! A registered name is stored as one [`NameRecord`] keyed by its [`NodeId`]
//! (the namehash of the name). Each account additionally carries an
//! [`AccountNameState`] with the nodes it registered and its reverse-lookup
//! pointer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a fixed-width byte array for type-safe
/// identifiers.
///
/// Each generated type provides:
/// - Standard derives plus serde with `#[serde(transparent)]`
/// - `new()` constructor, `as_bytes()` accessor, and `from_slice()` parsing
/// - `Display` as a semantic prefix followed by lowercase hex
macro_rules! define_bytes_id {
    (
        $(#[$meta:meta])*
        $name:ident, $len:expr, $prefix:expr
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Byte width of this identifier.
            pub const LEN: usize = $len;

            /// Creates an identifier from raw bytes.
            #[inline]
            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Returns the raw bytes.
            #[inline]
            pub const fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Returns the identifier as lowercase hex.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }

            /// Parses an identifier from a slice of exactly [`Self::LEN`] bytes.
            pub fn from_slice(bytes: &[u8]) -> Option<Self> {
                <[u8; $len]>::try_from(bytes).ok().map(Self)
            }
        }

        impl From<[u8; $len]> for $name {
            #[inline]
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", $prefix, hex::encode(self.0))
            }
        }
    };
}

define_bytes_id!(
    /// Node identifier: the 32-byte namehash of a registered name.
    ///
    /// Acts as the primary key for a [`NameRecord`]. Node identifiers are
    /// always derived via [`namehash`](crate::namehash::namehash), never
    /// constructed from guesses.
    ///
    /// # Display
    ///
    /// Formats with `node:` prefix: `node:93cdeb70…`.
    NodeId, 32, "node"
);

define_bytes_id!(
    /// Account address: the 20-byte identifier of a controlling account.
    ///
    /// # Display
    ///
    /// Formats with `addr:` prefix: `addr:0a1b2c3d…`.
    Address, 20, "addr"
);

/// Kinds of record entries that may be attached to a name.
///
/// The allow-list is closed: the host boundary converts raw wire values via
/// [`TryFrom<u8>`], so an out-of-range type is rejected before it ever
/// reaches a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum RecordType {
    /// Canonical-name alias to another name.
    Cname = 0,
    /// Free-form text attachment.
    Txt = 1,
    /// IPv4 address.
    A = 2,
    /// IPv6 address.
    Aaaa = 3,
    /// On-chain wallet address.
    Wallet = 4,
}

impl RecordType {
    /// Every valid record type, in wire order.
    pub const ALL: [RecordType; 5] = [
        RecordType::Cname,
        RecordType::Txt,
        RecordType::A,
        RecordType::Aaaa,
        RecordType::Wallet,
    ];

    /// Lowercase name of the record type.
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordType::Cname => "cname",
            RecordType::Txt => "txt",
            RecordType::A => "a",
            RecordType::Aaaa => "aaaa",
            RecordType::Wallet => "wallet",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for RecordType {
    type Error = UnknownRecordType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RecordType::Cname),
            1 => Ok(RecordType::Txt),
            2 => Ok(RecordType::A),
            3 => Ok(RecordType::Aaaa),
            4 => Ok(RecordType::Wallet),
            _ => Err(UnknownRecordType { value }),
        }
    }
}

/// A raw record-type value outside the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRecordType {
    /// The rejected wire value.
    pub value: u8,
}

impl fmt::Display for UnknownRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown record type {}; valid types are cname, txt, a, aaaa, wallet",
            self.value
        )
    }
}

impl std::error::Error for UnknownRecordType {}

/// One typed `(label, value)` attachment on a name record.
///
/// Within a record list the `(record_type, label)` pair is unique; the list
/// order is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Kind of record, from the fixed allow-list.
    pub record_type: RecordType,
    /// Short label, bounded length.
    pub label: String,
    /// Record payload, bounded length.
    pub value: String,
}

impl RecordEntry {
    /// Creates a record entry.
    pub fn new(record_type: RecordType, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { record_type, label: label.into(), value: value.into() }
    }
}

/// The stored registration for one name.
///
/// Exactly one record exists per node identifier. It is created once by
/// registration and only ever updated in place; there is no delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRecord {
    /// The registered name, second-level-domain form (`"example.lsk"`).
    pub name: String,
    /// Minimum seconds between successive record updates.
    pub ttl: u32,
    /// Absolute epoch-seconds deadline after which records can no longer be
    /// mutated. Fixed at registration from the chosen term.
    pub expiry: u64,
    /// Controlling account; only this account may mutate records.
    pub owner: Address,
    /// Attached record entries, insertion-ordered.
    pub records: Vec<RecordEntry>,
    /// Epoch seconds at registration.
    pub created_at: u64,
    /// Epoch seconds of the last successful record update.
    pub updated_at: u64,
}

/// Per-account name-service state, embedded in the host's account record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountNameState {
    /// Node identifiers this account registered. Append-only.
    pub own_nodes: Vec<NodeId>,
    /// The node designated for reverse resolution, if any. Always a member
    /// of `own_nodes` at the time it is set.
    pub reverse_lookup: Option<NodeId>,
}

impl AccountNameState {
    /// Whether the account registered the given node.
    pub fn owns(&self, node: &NodeId) -> bool {
        self.own_nodes.contains(node)
    }
}
