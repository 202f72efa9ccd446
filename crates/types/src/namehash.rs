//! Deterministic name-to-node hashing.
//!
//! Names map to 32-byte node identifiers via the ENS namehash construction
//! over Keccak-256: starting from 32 zero bytes, each label is folded in
//! right to left as `node = keccak256(node || keccak256(label))`. The
//! function is pure and total; every workflow and query derives nodes
//! through it rather than accepting one from the caller.

use sha3::{Digest, Keccak256};

use crate::types::NodeId;

/// Computes the node identifier for a name.
///
/// The name is hashed exactly as given; callers pass canonical lowercase
/// names (registration-time validation constrains the shape). The empty
/// string maps to the all-zero root node.
pub fn namehash(name: &str) -> NodeId {
    let mut node = [0u8; 32];
    if name.is_empty() {
        return NodeId::new(node);
    }

    for label in name.split('.').rev() {
        let mut hasher = Keccak256::new();
        hasher.update(node);
        hasher.update(keccak256(label.as_bytes()));
        node = hasher.finalize().into();
    }

    NodeId::new(node)
}

fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
