//! Host state-snapshot abstraction and the in-memory ledger.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use lns_types::{AccountNameState, Address};
use parking_lot::RwLock;

use crate::account::AccountStore;

/// Byte-keyed view of the host's current state snapshot.
///
/// The host guarantees a single sequential state-transition context per
/// unit of work, so implementations need no ordering of their own; a
/// `set` is visible to every later `get` within the same context.
pub trait StateStore {
    /// Returns the value stored at `key`, if any.
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Stores `value` at `key`, replacing any prior value.
    fn set(&mut self, key: &[u8], value: Vec<u8>);
}

/// In-memory ledger for tests and hosts without a chain backend.
///
/// A cloneable handle over shared storage: clones see the same data, so one
/// ledger can serve as both the chain snapshot and the account store of a
/// [`Context`](crate::Context). Reads take a shared lock and do not block
/// each other.
#[derive(Clone, Default)]
pub struct MemoryLedger {
    inner: Arc<RwLock<LedgerInner>>,
}

#[derive(Default)]
struct LedgerInner {
    chain: BTreeMap<Vec<u8>, Vec<u8>>,
    accounts: HashMap<Address, AccountNameState>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryLedger {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.inner.read().chain.get(key).cloned()
    }

    fn set(&mut self, key: &[u8], value: Vec<u8>) {
        self.inner.write().chain.insert(key.to_vec(), value);
    }
}

impl AccountStore for MemoryLedger {
    fn get(&self, address: &Address) -> AccountNameState {
        self.inner.read().accounts.get(address).cloned().unwrap_or_default()
    }

    fn set(&mut self, address: &Address, state: AccountNameState) {
        self.inner.write().accounts.insert(*address, state);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_set_and_get() {
        let mut ledger = MemoryLedger::new();
        assert!(StateStore::get(&ledger, b"missing").is_none());

        StateStore::set(&mut ledger, b"key", b"value".to_vec());
        assert_eq!(StateStore::get(&ledger, b"key"), Some(b"value".to_vec()));

        StateStore::set(&mut ledger, b"key", b"replaced".to_vec());
        assert_eq!(StateStore::get(&ledger, b"key"), Some(b"replaced".to_vec()));
    }

    #[test]
    fn test_clones_share_storage() {
        let mut ledger = MemoryLedger::new();
        let clone = ledger.clone();

        StateStore::set(&mut ledger, b"shared", b"data".to_vec());
        assert_eq!(StateStore::get(&clone, b"shared"), Some(b"data".to_vec()));
    }

    #[test]
    fn test_untouched_account_is_empty() {
        let ledger = MemoryLedger::new();
        let state = AccountStore::get(&ledger, &Address::new([1; 20]));
        assert!(state.own_nodes.is_empty());
        assert!(state.reverse_lookup.is_none());
    }

    #[test]
    fn test_account_roundtrip() {
        let mut ledger = MemoryLedger::new();
        let address = Address::new([2; 20]);
        let node = lns_types::NodeId::new([3; 32]);

        let state = AccountNameState { own_nodes: vec![node], reverse_lookup: Some(node) };
        AccountStore::set(&mut ledger, &address, state.clone());
        assert_eq!(AccountStore::get(&ledger, &address), state);
    }
}
