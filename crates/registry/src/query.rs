//! Read-only resolution queries.
//!
//! No validation beyond existence; `None` is the explicit absent signal.
//! Queries never mutate state, take shared references only, and may run
//! concurrently with each other and with mutations of unrelated nodes.

use lns_types::{Address, NameRecord, NodeId, namehash};

use crate::account::AccountStore;
use crate::error::Result;
use crate::registry::RegistryStore;
use crate::store::StateStore;

/// Looks up a record directly by node identifier.
///
/// # Errors
///
/// Returns `RegistryError::Integrity` if stored bytes fail to decode.
pub fn resolve_node(state: &dyn StateStore, node: &NodeId) -> Result<Option<NameRecord>> {
    RegistryStore::get(state, node)
}

/// Hashes a name and looks up its record.
///
/// # Errors
///
/// Returns `RegistryError::Integrity` if stored bytes fail to decode.
pub fn resolve_name(state: &dyn StateStore, name: &str) -> Result<Option<NameRecord>> {
    RegistryStore::get(state, &namehash(name))
}

/// Resolves an account through its designated reverse-lookup node.
///
/// Returns `None` when the account has no reverse record.
///
/// # Errors
///
/// Returns `RegistryError::Integrity` if stored bytes fail to decode.
pub fn resolve_account(
    state: &dyn StateStore,
    accounts: &dyn AccountStore,
    address: &Address,
) -> Result<Option<NameRecord>> {
    match accounts.get(address).reverse_lookup {
        Some(node) => RegistryStore::get(state, &node),
        None => Ok(None),
    }
}
