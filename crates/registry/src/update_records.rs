//! Record-update workflow: replace the record set on an owned name.
//!
//! Updates are rate-limited per record by its own TTL, measured from the
//! last update: the record list can churn at most once per TTL window. The
//! absolute expiry deadline fixed at registration is a separate gate; past
//! it the record set is frozen.

use lns_types::{Address, RecordEntry, RegistryConfig, namehash, validate_records};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::info;

use crate::dispatch::{Context, TxHandler, TxParams};
use crate::error::{
    InvalidInputSnafu, NotOwnerSnafu, NotRegisteredSnafu, RegistrationExpiredSnafu, Result,
    TtlNotElapsedSnafu, UnknownOperationSnafu,
};
use crate::registry::{RecordPatch, RegistryStore};

/// Dispatch-table key for record updates.
pub const OPERATION: &str = "updateRecords";

/// Inputs for replacing a name's record list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecordsParams {
    /// Name whose records to replace.
    pub name: String,
    /// Replacement record list; replaces the old list wholesale.
    pub records: Vec<RecordEntry>,
}

pub(crate) fn validate(config: &RegistryConfig, params: &UpdateRecordsParams) -> Result<()> {
    validate_records(&params.records, config).context(InvalidInputSnafu)
}

pub(crate) fn apply(
    ctx: &mut Context<'_>,
    sender: &Address,
    params: &UpdateRecordsParams,
) -> Result<()> {
    let node = namehash(&params.name);
    let record = match RegistryStore::get(ctx.state, &node)? {
        Some(record) => record,
        None => return NotRegisteredSnafu { name: params.name.clone() }.fail(),
    };

    if record.owner != *sender {
        return NotOwnerSnafu { name: params.name.clone() }.fail();
    }

    let now = ctx.clock.now();
    if now > record.expiry {
        return RegistrationExpiredSnafu { name: params.name.clone() }.fail();
    }

    let eligible_at = record.updated_at.saturating_add(u64::from(record.ttl));
    if now < eligible_at {
        return TtlNotElapsedSnafu {
            name: params.name.clone(),
            remaining_secs: eligible_at - now,
        }
        .fail();
    }

    let updated = RegistryStore::update(
        ctx.state,
        ctx.clock,
        &node,
        RecordPatch { records: Some(params.records.clone()), ..RecordPatch::default() },
    )?;

    info!(name = %params.name, records = updated.records.len(), "records updated");
    Ok(())
}

/// Record-update handler for the dispatch table.
pub struct UpdateRecords;

impl TxHandler for UpdateRecords {
    fn name(&self) -> &'static str {
        OPERATION
    }

    fn validate(&self, config: &RegistryConfig, params: &TxParams) -> Result<()> {
        match params {
            TxParams::UpdateRecords(params) => validate(config, params),
            other => UnknownOperationSnafu { name: other.operation() }.fail(),
        }
    }

    fn apply(&self, ctx: &mut Context<'_>, sender: &Address, params: &TxParams) -> Result<()> {
        match params {
            TxParams::UpdateRecords(params) => apply(ctx, sender, params),
            other => UnknownOperationSnafu { name: other.operation() }.fail(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use lns_types::RecordType;

    use super::*;
    use crate::clock::ManualClock;
    use crate::error::RegistryError;
    use crate::query::resolve_name;
    use crate::register;
    use crate::register::RegisterParams;
    use crate::store::MemoryLedger;

    const NOW: u64 = 1_700_000_000;
    const TTL: u64 = 3600;

    fn setup(owner: &Address) -> (MemoryLedger, ManualClock) {
        let ledger = MemoryLedger::new();
        let clock = ManualClock::at(NOW);
        let config = RegistryConfig::default();

        let (mut chain, mut accounts) = (ledger.clone(), ledger.clone());
        let mut ctx = Context {
            state: &mut chain,
            accounts: &mut accounts,
            clock: &clock,
            config: &config,
        };
        register::apply(
            &mut ctx,
            owner,
            &RegisterParams { name: "alice.lsk".to_string(), ttl: TTL as u32, register_for: 1 },
        )
        .expect("register");

        (ledger, clock)
    }

    fn update(
        ledger: &MemoryLedger,
        clock: &ManualClock,
        sender: &Address,
        params: &UpdateRecordsParams,
    ) -> Result<()> {
        let config = RegistryConfig::default();
        let (mut chain, mut accounts) = (ledger.clone(), ledger.clone());
        let mut ctx = Context {
            state: &mut chain,
            accounts: &mut accounts,
            clock,
            config: &config,
        };
        validate(&config, params)?;
        apply(&mut ctx, sender, params)
    }

    fn txt(label: &str, value: &str) -> RecordEntry {
        RecordEntry::new(RecordType::Txt, label, value)
    }

    fn params(records: Vec<RecordEntry>) -> UpdateRecordsParams {
        UpdateRecordsParams { name: "alice.lsk".to_string(), records }
    }

    #[test]
    fn test_update_after_cooldown_replaces_wholesale() {
        let owner = Address::new([1; 20]);
        let (ledger, clock) = setup(&owner);

        clock.advance(TTL);
        update(&ledger, &clock, &owner, &params(vec![txt("a", "1"), txt("b", "2")]))
            .expect("first update");

        clock.advance(TTL);
        update(&ledger, &clock, &owner, &params(vec![txt("c", "3")])).expect("second update");

        let record = resolve_name(&ledger, "alice.lsk").expect("resolve").expect("exists");
        // Wholesale replacement, not a merge.
        assert_eq!(record.records, vec![txt("c", "3")]);
        assert_eq!(record.updated_at, NOW + 2 * TTL);
    }

    #[test]
    fn test_update_before_cooldown_rejected() {
        let owner = Address::new([1; 20]);
        let (ledger, clock) = setup(&owner);

        clock.advance(TTL - 1);
        let err = update(&ledger, &clock, &owner, &params(vec![txt("a", "1")])).unwrap_err();
        match err {
            RegistryError::TtlNotElapsed { remaining_secs, .. } => {
                assert_eq!(remaining_secs, 1);
            }
            other => panic!("expected TtlNotElapsed, got {other:?}"),
        }

        // No partial write.
        let record = resolve_name(&ledger, "alice.lsk").expect("resolve").expect("exists");
        assert!(record.records.is_empty());
        assert_eq!(record.updated_at, NOW);
    }

    #[test]
    fn test_update_at_exact_cooldown_boundary_accepted() {
        let owner = Address::new([1; 20]);
        let (ledger, clock) = setup(&owner);

        clock.advance(TTL);
        assert!(update(&ledger, &clock, &owner, &params(vec![txt("a", "1")])).is_ok());
    }

    #[test]
    fn test_update_by_non_owner_rejected() {
        let owner = Address::new([1; 20]);
        let intruder = Address::new([9; 20]);
        let (ledger, clock) = setup(&owner);

        clock.advance(TTL);
        let err = update(&ledger, &clock, &intruder, &params(vec![txt("a", "1")])).unwrap_err();
        assert!(matches!(err, RegistryError::NotOwner { .. }));

        let record = resolve_name(&ledger, "alice.lsk").expect("resolve").expect("exists");
        assert!(record.records.is_empty());
    }

    #[test]
    fn test_update_unregistered_name_rejected() {
        let owner = Address::new([1; 20]);
        let (ledger, clock) = setup(&owner);

        let p = UpdateRecordsParams {
            name: "ghost.lsk".to_string(),
            records: vec![txt("a", "1")],
        };
        let err = update(&ledger, &clock, &owner, &p).unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
    }

    #[test]
    fn test_update_past_expiry_rejected() {
        let owner = Address::new([1; 20]);
        let (ledger, clock) = setup(&owner);

        // Two flat years is past any one-year calendar expiry.
        clock.advance(2 * 365 * 24 * 60 * 60);
        let err = update(&ledger, &clock, &owner, &params(vec![txt("a", "1")])).unwrap_err();
        assert!(matches!(err, RegistryError::RegistrationExpired { .. }));
    }

    #[test]
    fn test_invalid_record_lists_rejected_before_lookup() {
        let owner = Address::new([1; 20]);
        let (ledger, clock) = setup(&owner);
        clock.advance(TTL);

        let over_limit: Vec<RecordEntry> =
            (0..51).map(|i| txt(&format!("l{i}"), "v")).collect();
        let duplicate = vec![txt("dup", "1"), txt("dup", "2")];
        let long_value = vec![txt("l", &"x".repeat(256))];

        for bad in [over_limit, duplicate, long_value] {
            let err = update(&ledger, &clock, &owner, &params(bad)).unwrap_err();
            assert!(matches!(err, RegistryError::InvalidInput { .. }));
        }

        // Nothing was written by any rejected attempt.
        let record = resolve_name(&ledger, "alice.lsk").expect("resolve").expect("exists");
        assert!(record.records.is_empty());
        assert_eq!(record.updated_at, NOW);
    }
}
