//! Centralized serialization for stored registry data.
//!
//! Name records are persisted as postcard bytes under their node key. All
//! encoding and decoding goes through this module so the storage layer has
//! a single codec contract and a single error type.

use serde::{Serialize, de::DeserializeOwned};
use snafu::Snafu;

/// Error type for codec operations.
#[derive(Debug, Snafu)]
pub enum CodecError {
    /// Encoding failed.
    #[snafu(display("Encoding failed: {source}"))]
    Encode {
        /// The underlying postcard error.
        source: postcard::Error,
    },

    /// Decoding failed.
    #[snafu(display("Decoding failed: {source}"))]
    Decode {
        /// The underlying postcard error.
        source: postcard::Error,
    },
}

/// Encodes a value to postcard bytes.
///
/// # Errors
///
/// Returns `CodecError::Encode` if serialization fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    postcard::to_allocvec(value).map_err(|source| CodecError::Encode { source })
}

/// Decodes a value from postcard bytes.
///
/// # Errors
///
/// Returns `CodecError::Decode` if deserialization fails.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    postcard::from_bytes(bytes).map_err(|source| CodecError::Decode { source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::types::{Address, NameRecord, RecordEntry, RecordType};

    fn sample_record() -> NameRecord {
        NameRecord {
            name: "example.lsk".to_string(),
            ttl: 3600,
            expiry: 1_900_000_000,
            owner: Address::new([9; 20]),
            records: vec![RecordEntry::new(RecordType::Txt, "note", "hello")],
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_name_record_roundtrip() {
        let record = sample_record();
        let bytes = encode(&record).expect("encode record");
        let decoded: NameRecord = decode(&bytes).expect("decode record");
        assert_eq!(record, decoded);
    }

    #[test]
    fn test_empty_record_list_roundtrip() {
        let mut record = sample_record();
        record.records.clear();
        let bytes = encode(&record).expect("encode record");
        let decoded: NameRecord = decode(&bytes).expect("decode record");
        assert!(decoded.records.is_empty());
    }

    #[test]
    fn test_decode_truncated_bytes_fails() {
        let bytes = encode(&sample_record()).expect("encode record");
        let result: Result<NameRecord, _> = decode(&bytes[..bytes.len() / 2]);
        let err = result.unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
        assert!(err.to_string().starts_with("Decoding failed"));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result: Result<NameRecord, _> = decode(&[0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_preserves_source_chain() {
        use std::error::Error;

        let result: Result<NameRecord, _> = decode(&[]);
        let err = result.unwrap_err();
        assert!(err.source().is_some(), "CodecError should carry the postcard source");
    }
}
