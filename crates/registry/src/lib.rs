//! Registry core for the Lisk Name Service.
//!
//! Sits between the host's state-transition runtime and the stored name
//! records, providing:
//!
//! - A thin persistence adapter over the host's byte-keyed state snapshot
//! - The three mutation workflows: register, update records, reverse lookup
//! - Read-only resolution queries by node, name, and account
//! - An explicit dispatch table keyed by operation name
//!
//! All mutations run inside the host's single sequential state-transition
//! context; the crate takes explicit store handles and performs every
//! fallible step before the first write, so a rejected operation leaves no
//! partial state.

#![deny(unsafe_code)]

mod account;
mod clock;
mod dispatch;
mod error;
mod keys;
mod query;
mod register;
mod registry;
mod reverse_lookup;
mod store;
mod update_records;

pub use account::AccountStore;
pub use clock::{Clock, ManualClock, SystemClock, add_years};
pub use dispatch::{Context, NameService, TxHandler, TxParams};
pub use error::{RegistryError, Result};
pub use keys::{LNS_PREFIX, record_key};
pub use query::{resolve_account, resolve_name, resolve_node};
pub use register::{Register, RegisterParams};
pub use registry::{NewNameRecord, RecordPatch, RegistryStore};
pub use reverse_lookup::{ReverseLookupParams, SetReverseLookup};
pub use store::{MemoryLedger, StateStore};
pub use update_records::{UpdateRecords, UpdateRecordsParams};
