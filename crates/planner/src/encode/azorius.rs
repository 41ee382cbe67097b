//! Azorius module setup encoding.

use alloy_primitives::Address;
use alloy_sol_types::{SolCall, SolValue};
use azorius_contracts::IAzorius;

use super::ModuleSetup;
use crate::config::GovernancePeriods;
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;

/// Encode the Azorius core initializer. The Safe is owner, avatar and
/// target; the strategy array carries the already-predicted strategy
/// address.
pub fn encode_azorius_setup(
    safe: Address,
    strategy: Address,
    periods: &GovernancePeriods,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    if strategy.is_zero() {
        return Err(PlannerError::missing_dependency("strategy"));
    }

    let inner = (
        safe,
        safe,
        safe,
        vec![strategy],
        periods.timelock_period,
        periods.execution_period,
    )
        .abi_encode_params();

    Ok(ModuleSetup {
        mastercopy: network.azorius_mastercopy,
        initializer: IAzorius::setUpCall { initializeParams: inner.into() }.abi_encode().into(),
    })
}
