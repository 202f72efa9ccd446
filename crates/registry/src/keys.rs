//! Key encoding for the registry's slice of the state snapshot.
//!
//! One entry exists per name record, keyed by the namespace prefix and the
//! hex-encoded node identifier.
//!
//! Key format: `lns:{node_hex}`

use lns_types::NodeId;

/// Namespace prefix for all name-record keys.
pub const LNS_PREFIX: &str = "lns";

/// Encodes the state key for a node's name record.
pub fn record_key(node: &NodeId) -> Vec<u8> {
    format!("{}:{}", LNS_PREFIX, node.to_hex()).into_bytes()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format_is_stable() {
        let node = NodeId::new([0u8; 32]);
        let key = record_key(&node);
        assert_eq!(key, format!("lns:{}", "00".repeat(32)).into_bytes());
    }

    #[test]
    fn test_distinct_nodes_distinct_keys() {
        let a = record_key(&NodeId::new([1; 32]));
        let b = record_key(&NodeId::new([2; 32]));
        assert_ne!(a, b);
    }
}
