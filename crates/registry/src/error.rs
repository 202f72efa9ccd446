//! Error types for registry operations.

use lns_types::{CodecError, ValidationError};
use snafu::Snafu;

/// Errors surfaced by registry workflows and queries.
///
/// Validation failures are reported to the caller verbatim and never
/// retried; a rejected mutation simply does not take effect.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RegistryError {
    /// Input failed stateless validation, before any lookup.
    #[snafu(display("Invalid input: {source}"))]
    InvalidInput {
        /// The violated constraint.
        source: ValidationError,
    },

    /// The name already has a record.
    #[snafu(display("The name \"{name}\" is already registered"))]
    AlreadyRegistered {
        /// The requested name.
        name: String,
    },

    /// No record exists for the name.
    #[snafu(display("No name record is registered for \"{name}\""))]
    NotRegistered {
        /// The requested name.
        name: String,
    },

    /// The caller does not own the record.
    #[snafu(display("Only the owner of \"{name}\" can update its records"))]
    NotOwner {
        /// The requested name.
        name: String,
    },

    /// The record's update cooldown has not elapsed.
    #[snafu(display("The TTL on \"{name}\" has {remaining_secs} seconds remaining"))]
    TtlNotElapsed {
        /// The requested name.
        name: String,
        /// Seconds until the next update is accepted.
        remaining_secs: u64,
    },

    /// The registration term has ended; records can no longer be mutated.
    #[snafu(display("The registration of \"{name}\" expired"))]
    RegistrationExpired {
        /// The requested name.
        name: String,
    },

    /// Reverse lookup can only target a node the caller registered.
    #[snafu(display("The caller does not own \"{name}\""))]
    NotOwnedByCaller {
        /// The requested name.
        name: String,
    },

    /// No handler is registered under the operation name.
    #[snafu(display("Operation \"{name}\" is not registered in the dispatch table"))]
    UnknownOperation {
        /// The unmatched operation name.
        name: String,
    },

    /// Encoding a record for storage failed.
    #[snafu(display("Codec error: {source}"))]
    Codec {
        /// The underlying codec error.
        source: CodecError,
    },

    /// Stored bytes failed to decode. The store's encoding contract was
    /// violated; fatal, not a normal control-flow outcome.
    #[snafu(display("Integrity error: stored name record is corrupt: {source}"))]
    Integrity {
        /// The underlying codec error.
        source: CodecError,
    },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
