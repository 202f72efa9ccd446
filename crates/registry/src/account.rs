//! Host account-state capability.

use lns_types::{AccountNameState, Address};

/// Read/write access to the per-account name-service state the host embeds
/// in its account records.
///
/// The workflows only ever append to `own_nodes` and replace
/// `reverse_lookup`; the host owns the account record itself.
pub trait AccountStore {
    /// Returns the account's name-service state. Accounts the registry has
    /// never touched yield the empty state.
    fn get(&self, address: &Address) -> AccountNameState;

    /// Replaces the account's name-service state.
    fn set(&mut self, address: &Address, state: AccountNameState);
}
