//! Registration workflow: claim a new name.

use lns_types::{Address, RegistryConfig, namehash, validate_name, validate_term, validate_ttl};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::info;

use crate::clock::add_years;
use crate::dispatch::{Context, TxHandler, TxParams};
use crate::error::{AlreadyRegisteredSnafu, InvalidInputSnafu, Result, UnknownOperationSnafu};
use crate::registry::{NewNameRecord, RegistryStore};

/// Dispatch-table key for registration.
pub const OPERATION: &str = "register";

/// Inputs for registering a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterParams {
    /// Name to claim, second-level-domain form (`"example.lsk"`).
    pub name: String,
    /// Update cooldown in seconds; at least the configured minimum.
    pub ttl: u32,
    /// Registration term in whole years.
    pub register_for: u32,
}

pub(crate) fn validate(config: &RegistryConfig, params: &RegisterParams) -> Result<()> {
    validate_ttl(params.ttl, config).context(InvalidInputSnafu)?;
    validate_term(params.register_for, config).context(InvalidInputSnafu)?;
    validate_name(&params.name, config).context(InvalidInputSnafu)?;
    Ok(())
}

pub(crate) fn apply(
    ctx: &mut Context<'_>,
    sender: &Address,
    params: &RegisterParams,
) -> Result<()> {
    let node = namehash(&params.name);
    if RegistryStore::get(ctx.state, &node)?.is_some() {
        return AlreadyRegisteredSnafu { name: params.name.clone() }.fail();
    }

    let expiry = add_years(ctx.clock.now(), params.register_for);
    let node = RegistryStore::create(
        ctx.state,
        ctx.clock,
        NewNameRecord {
            name: params.name.clone(),
            ttl: params.ttl,
            expiry,
            owner: *sender,
            records: Vec::new(),
        },
    )?;

    let mut account = ctx.accounts.get(sender);
    account.own_nodes.push(node);
    ctx.accounts.set(sender, account);

    info!(name = %params.name, node = %node, owner = %sender, "name registered");
    Ok(())
}

/// Registration handler for the dispatch table.
pub struct Register;

impl TxHandler for Register {
    fn name(&self) -> &'static str {
        OPERATION
    }

    fn validate(&self, config: &RegistryConfig, params: &TxParams) -> Result<()> {
        match params {
            TxParams::Register(params) => validate(config, params),
            other => UnknownOperationSnafu { name: other.operation() }.fail(),
        }
    }

    fn apply(&self, ctx: &mut Context<'_>, sender: &Address, params: &TxParams) -> Result<()> {
        match params {
            TxParams::Register(params) => apply(ctx, sender, params),
            other => UnknownOperationSnafu { name: other.operation() }.fail(),
        }
    }
}
