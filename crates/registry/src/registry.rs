//! Name-record persistence over the host snapshot.
//!
//! A thin adapter: encode/decode a [`NameRecord`] to postcard bytes keyed
//! by node identifier. Existence checks and ownership gates live in the
//! workflows; this layer only moves records in and out of the snapshot and
//! stamps their timestamps.

use lns_types::{Address, NameRecord, NodeId, RecordEntry, decode, encode, namehash};
use snafu::ResultExt;
use tracing::debug;

use crate::clock::Clock;
use crate::error::{CodecSnafu, IntegritySnafu, NotRegisteredSnafu, Result};
use crate::keys::record_key;
use crate::store::StateStore;

/// Fields of a record being created; timestamps are stamped by the store.
#[derive(Debug, Clone)]
pub struct NewNameRecord {
    /// Name to register.
    pub name: String,
    /// Update cooldown in seconds.
    pub ttl: u32,
    /// Absolute expiry deadline in epoch seconds.
    pub expiry: u64,
    /// Controlling account.
    pub owner: Address,
    /// Initial record entries.
    pub records: Vec<RecordEntry>,
}

/// Partial update for [`RegistryStore::update`]; unset fields retain their
/// prior value.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    /// New update cooldown.
    pub ttl: Option<u32>,
    /// New controlling account.
    pub owner: Option<Address>,
    /// New expiry deadline.
    pub expiry: Option<u64>,
    /// Replacement record list (wholesale, not merged).
    pub records: Option<Vec<RecordEntry>>,
}

/// Name-record storage operations.
pub struct RegistryStore;

impl RegistryStore {
    /// Returns the record stored for a node.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Integrity` if the stored bytes fail to
    /// decode.
    pub fn get(state: &dyn StateStore, node: &NodeId) -> Result<Option<NameRecord>> {
        match state.get(&record_key(node)) {
            Some(bytes) => {
                let record = decode(&bytes).context(IntegritySnafu)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Creates the record for a new registration and returns its node.
    ///
    /// The caller has already verified that no record exists for the name;
    /// mutations run in the host's sequential context, so the check cannot
    /// race with this write.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Codec` if encoding fails.
    pub fn create(
        state: &mut dyn StateStore,
        clock: &dyn Clock,
        new: NewNameRecord,
    ) -> Result<NodeId> {
        let node = namehash(&new.name);
        let now = clock.now();
        let record = NameRecord {
            name: new.name,
            ttl: new.ttl,
            expiry: new.expiry,
            owner: new.owner,
            records: new.records,
            created_at: now,
            updated_at: now,
        };

        let encoded = encode(&record).context(CodecSnafu)?;
        state.set(&record_key(&node), encoded);
        debug!(node = %node, name = %record.name, "created name record");
        Ok(node)
    }

    /// Applies a partial update to an existing record, stamping
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotRegistered` if no record exists at the
    /// node, `Integrity` on decode failure, and `Codec` on encode failure.
    pub fn update(
        state: &mut dyn StateStore,
        clock: &dyn Clock,
        node: &NodeId,
        patch: RecordPatch,
    ) -> Result<NameRecord> {
        let mut record = match Self::get(state, node)? {
            Some(record) => record,
            None => return NotRegisteredSnafu { name: node.to_string() }.fail(),
        };

        if let Some(ttl) = patch.ttl {
            record.ttl = ttl;
        }
        if let Some(owner) = patch.owner {
            record.owner = owner;
        }
        if let Some(expiry) = patch.expiry {
            record.expiry = expiry;
        }
        if let Some(records) = patch.records {
            record.records = records;
        }
        record.updated_at = clock.now();

        let encoded = encode(&record).context(CodecSnafu)?;
        state.set(&record_key(node), encoded);
        debug!(node = %node, name = %record.name, "updated name record");
        Ok(record)
    }
}
