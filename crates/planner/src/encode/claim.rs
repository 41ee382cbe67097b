//! Parent-allocation claim module setup encoding.

use alloy_primitives::Address;
use alloy_sol_types::{SolCall, SolValue};
use azorius_contracts::IErc20Claim;

use super::ModuleSetup;
use crate::config::ParentLink;
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;

/// Encode the claim module initializer. Needs both the parent token and
/// this DAO's predicted token address; the parent Safe funds the claim.
pub fn encode_claim_setup(
    parent: &ParentLink,
    child_token: Address,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    if parent.parent_token.is_zero() {
        return Err(PlannerError::invalid_input(
            "parent.parent_token",
            "parent token address is not set",
        ));
    }
    if child_token.is_zero() {
        return Err(PlannerError::missing_dependency("token"));
    }

    let inner = (
        parent.claim_deadline_block,
        parent.parent_safe,
        parent.parent_token,
        child_token,
        parent.parent_allocation,
    )
        .abi_encode_params();

    Ok(ModuleSetup {
        mastercopy: network.erc20_claim_mastercopy,
        initializer: IErc20Claim::setUpCall { initializeParams: inner.into() }.abi_encode().into(),
    })
}
