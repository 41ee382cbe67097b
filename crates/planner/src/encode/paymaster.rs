//! Voting paymaster setup encoding.

use alloy_primitives::Address;
use alloy_sol_types::{SolCall, SolValue};
use azorius_contracts::IVotingPaymaster;

use super::ModuleSetup;
use crate::config::GaslessVotingConfig;
use crate::error::PlannerResult;
use crate::network::NetworkAddresses;

/// Encode the paymaster initializer: the Safe owns the paymaster, which
/// registers with the configured ERC-4337 entry point.
pub fn encode_paymaster_setup(
    safe: Address,
    gasless: &GaslessVotingConfig,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    let inner = (safe, gasless.entry_point).abi_encode_params();

    Ok(ModuleSetup {
        mastercopy: network.paymaster_mastercopy,
        initializer: IVotingPaymaster::setUpCall { initializeParams: inner.into() }
            .abi_encode()
            .into(),
    })
}
