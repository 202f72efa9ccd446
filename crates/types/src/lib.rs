//! Core types for the Lisk Name Service (LNS).
//!
//! This crate provides the foundational pieces shared by the registry:
//! - Identifier newtypes (`NodeId`, `Address`) and the stored data model
//! - The ENS-style namehash mapping a name to its node identifier
//! - Centralized postcard encode/decode with snafu error handling
//! - Registry limits (`RegistryConfig`) and input validation

#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod namehash;
pub mod types;
pub mod validation;

// Re-export commonly used items at crate root
pub use codec::{CodecError, decode, encode};
pub use config::RegistryConfig;
pub use namehash::namehash;
pub use types::{
    AccountNameState, Address, NameRecord, NodeId, RecordEntry, RecordType, UnknownRecordType,
};
pub use validation::{
    ValidationError, validate_name, validate_records, validate_term, validate_ttl,
};
