//! Operation dispatch and the host-facing service façade.
//!
//! Each mutation workflow is a plain [`TxHandler`] — stateless `validate`
//! plus `apply` against an explicit [`Context`] — registered in a dispatch
//! table keyed by operation name. No lifecycle hooks, no inheritance; the
//! host hands its capabilities in per call and nothing here reaches for
//! process-wide state.

use std::collections::BTreeMap;

use lns_types::{Address, NameRecord, NodeId, RegistryConfig};

use crate::account::AccountStore;
use crate::clock::Clock;
use crate::error::{Result, UnknownOperationSnafu};
use crate::query;
use crate::register::{self, Register, RegisterParams};
use crate::reverse_lookup::{self, ReverseLookupParams, SetReverseLookup};
use crate::store::StateStore;
use crate::update_records::{self, UpdateRecords, UpdateRecordsParams};

/// Mutable view of the host's state-transition context.
///
/// Threaded explicitly through every operation; one context corresponds to
/// one unit of work in the host's sequential transaction processing.
pub struct Context<'a> {
    /// Byte-keyed state snapshot holding the name records.
    pub state: &'a mut dyn StateStore,
    /// Per-account name-service state.
    pub accounts: &'a mut dyn AccountStore,
    /// Time source for stamps and gate checks.
    pub clock: &'a dyn Clock,
    /// Limits enforced during validation.
    pub config: &'a RegistryConfig,
}

/// Parameters of one mutation, tagged by operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxParams {
    /// Claim a new name.
    Register(RegisterParams),
    /// Replace the record list on an owned name.
    UpdateRecords(UpdateRecordsParams),
    /// Designate an owned node for reverse resolution.
    ReverseLookup(ReverseLookupParams),
}

impl TxParams {
    /// Operation name used as the dispatch key.
    pub fn operation(&self) -> &'static str {
        match self {
            TxParams::Register(_) => register::OPERATION,
            TxParams::UpdateRecords(_) => update_records::OPERATION,
            TxParams::ReverseLookup(_) => reverse_lookup::OPERATION,
        }
    }
}

/// One mutation workflow behind the dispatch table.
pub trait TxHandler: Send + Sync {
    /// Operation name; the key under which the handler is registered.
    fn name(&self) -> &'static str;

    /// Stateless input validation; runs before any state is read.
    fn validate(&self, config: &RegistryConfig, params: &TxParams) -> Result<()>;

    /// Applies the operation inside the host's state-transition context.
    fn apply(&self, ctx: &mut Context<'_>, sender: &Address, params: &TxParams) -> Result<()>;
}

/// Host-facing façade over the name-service operations.
pub struct NameService {
    config: RegistryConfig,
    handlers: BTreeMap<&'static str, Box<dyn TxHandler>>,
}

impl NameService {
    /// Creates a service with the given limits and every workflow handler
    /// registered.
    pub fn new(config: RegistryConfig) -> Self {
        let mut handlers: BTreeMap<&'static str, Box<dyn TxHandler>> = BTreeMap::new();
        let all: [Box<dyn TxHandler>; 3] =
            [Box::new(Register), Box::new(UpdateRecords), Box::new(SetReverseLookup)];
        for handler in all {
            handlers.insert(handler.name(), handler);
        }
        Self { config, handlers }
    }

    /// The limits this service enforces.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Builds an operation context over the given host capabilities.
    pub fn context<'a>(
        &'a self,
        state: &'a mut dyn StateStore,
        accounts: &'a mut dyn AccountStore,
        clock: &'a dyn Clock,
    ) -> Context<'a> {
        Context { state, accounts, clock, config: &self.config }
    }

    /// Validates and applies one operation through the dispatch table.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownOperation` on a dispatch-table miss,
    /// otherwise whatever the workflow's validate or apply returns.
    pub fn execute(
        &self,
        ctx: &mut Context<'_>,
        sender: &Address,
        params: &TxParams,
    ) -> Result<()> {
        let handler = match self.handlers.get(params.operation()) {
            Some(handler) => handler,
            None => return UnknownOperationSnafu { name: params.operation() }.fail(),
        };
        handler.validate(ctx.config, params)?;
        handler.apply(ctx, sender, params)
    }

    /// Registers a new name for `sender`.
    pub fn register(
        &self,
        ctx: &mut Context<'_>,
        sender: &Address,
        params: RegisterParams,
    ) -> Result<()> {
        self.execute(ctx, sender, &TxParams::Register(params))
    }

    /// Replaces the record list on a name `sender` owns.
    pub fn update_records(
        &self,
        ctx: &mut Context<'_>,
        sender: &Address,
        params: UpdateRecordsParams,
    ) -> Result<()> {
        self.execute(ctx, sender, &TxParams::UpdateRecords(params))
    }

    /// Points `sender`'s reverse lookup at a node it owns.
    pub fn set_reverse_lookup(
        &self,
        ctx: &mut Context<'_>,
        sender: &Address,
        params: ReverseLookupParams,
    ) -> Result<()> {
        self.execute(ctx, sender, &TxParams::ReverseLookup(params))
    }

    /// Resolves a name to its record.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Integrity` if stored bytes fail to decode.
    pub fn resolve_name(
        &self,
        state: &dyn StateStore,
        name: &str,
    ) -> Result<Option<NameRecord>> {
        query::resolve_name(state, name)
    }

    /// Resolves a node identifier to its record.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Integrity` if stored bytes fail to decode.
    pub fn resolve_node(
        &self,
        state: &dyn StateStore,
        node: &NodeId,
    ) -> Result<Option<NameRecord>> {
        query::resolve_node(state, node)
    }

    /// Resolves an account through its reverse-lookup pointer.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Integrity` if stored bytes fail to decode.
    pub fn resolve_account(
        &self,
        state: &dyn StateStore,
        accounts: &dyn AccountStore,
        address: &Address,
    ) -> Result<Option<NameRecord>> {
        query::resolve_account(state, accounts, address)
    }
}

impl Default for NameService {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::error::RegistryError;
    use crate::store::MemoryLedger;

    #[test]
    fn test_all_operations_registered() {
        let service = NameService::default();
        for name in ["register", "updateRecords", "reverseLookup"] {
            assert!(service.handlers.contains_key(name), "missing handler for {name}");
        }
        assert_eq!(service.handlers.len(), 3);
    }

    #[test]
    fn test_handler_rejects_mismatched_params() {
        let handler = Register;
        let config = RegistryConfig::default();
        let params = TxParams::ReverseLookup(ReverseLookupParams { name: "a.lsk".to_string() });

        let err = handler.validate(&config, &params).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownOperation { .. }));
    }

    #[test]
    fn test_execute_register_end_to_end() {
        let service = NameService::default();
        let ledger = MemoryLedger::new();
        let clock = ManualClock::at(1_700_000_000);
        let sender = Address::new([5; 20]);

        let (mut chain, mut accounts) = (ledger.clone(), ledger.clone());
        let mut ctx = service.context(&mut chain, &mut accounts, &clock);
        let params = TxParams::Register(RegisterParams {
            name: "dispatch.lsk".to_string(),
            ttl: 3600,
            register_for: 1,
        });
        service.execute(&mut ctx, &sender, &params).expect("register via dispatch");

        let record = service
            .resolve_name(&ledger, "dispatch.lsk")
            .expect("resolve")
            .expect("record exists");
        assert_eq!(record.owner, sender);
    }
}
