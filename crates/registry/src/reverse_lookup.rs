//! Reverse-lookup workflow: designate an owned node for account resolution.
//!
//! Ownership is proven against the caller's own account state (the nodes it
//! registered), not the record's current owner field; the two can diverge
//! only under ownership transfer, which is out of scope.

use lns_types::{Address, RegistryConfig, namehash};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dispatch::{Context, TxHandler, TxParams};
use crate::error::{NotOwnedByCallerSnafu, Result, UnknownOperationSnafu};

/// Dispatch-table key for reverse lookup.
pub const OPERATION: &str = "reverseLookup";

/// Inputs for designating a reverse-lookup node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseLookupParams {
    /// Name whose node becomes the caller's reverse-resolution target.
    pub name: String,
}

pub(crate) fn validate(_config: &RegistryConfig, _params: &ReverseLookupParams) -> Result<()> {
    // Ownership can only be checked against account state in apply.
    Ok(())
}

pub(crate) fn apply(
    ctx: &mut Context<'_>,
    sender: &Address,
    params: &ReverseLookupParams,
) -> Result<()> {
    let node = namehash(&params.name);
    let mut account = ctx.accounts.get(sender);

    if !account.owns(&node) {
        return NotOwnedByCallerSnafu { name: params.name.clone() }.fail();
    }

    account.reverse_lookup = Some(node);
    ctx.accounts.set(sender, account);

    info!(name = %params.name, node = %node, owner = %sender, "reverse lookup set");
    Ok(())
}

/// Reverse-lookup handler for the dispatch table.
pub struct SetReverseLookup;

impl TxHandler for SetReverseLookup {
    fn name(&self) -> &'static str {
        OPERATION
    }

    fn validate(&self, config: &RegistryConfig, params: &TxParams) -> Result<()> {
        match params {
            TxParams::ReverseLookup(params) => validate(config, params),
            other => UnknownOperationSnafu { name: other.operation() }.fail(),
        }
    }

    fn apply(&self, ctx: &mut Context<'_>, sender: &Address, params: &TxParams) -> Result<()> {
        match params {
            TxParams::ReverseLookup(params) => apply(ctx, sender, params),
            other => UnknownOperationSnafu { name: other.operation() }.fail(),
        }
    }
}
