//! Governance token setup encoding.

use alloy_primitives::{Address, U256};
use alloy_sol_types::{SolCall, SolValue};
use azorius_contracts::{IVotesErc20, IVotesErc20Lockable};

use super::ModuleSetup;
use crate::config::NewTokenParams;
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;

/// Expand the configured allocation list into the parallel holder/amount
/// arrays the token constructor consumes.
///
/// If the allocations do not cover the full supply, the remainder goes to
/// the DAO's own treasury as one extra trailing row. Row order is preserved:
/// `holders[i]` funds `amounts[i]`.
pub fn allocation_arrays(
    params: &NewTokenParams,
    safe: Address,
) -> PlannerResult<(Vec<Address>, Vec<U256>)> {
    let mut holders = Vec::with_capacity(params.allocations.len() + 1);
    let mut amounts = Vec::with_capacity(params.allocations.len() + 1);

    let mut allocated = U256::ZERO;
    for allocation in &params.allocations {
        allocated = allocated.checked_add(allocation.amount).ok_or_else(|| {
            PlannerError::invalid_input("token.allocations", "allocation amounts overflow")
        })?;
        holders.push(allocation.to);
        amounts.push(allocation.amount);
    }

    if allocated > params.total_supply {
        return Err(PlannerError::invalid_input(
            "token.allocations",
            format!(
                "allocations total {allocated} exceeds total supply {}",
                params.total_supply
            ),
        ));
    }
    if allocated < params.total_supply {
        holders.push(safe);
        amounts.push(params.total_supply - allocated);
    }

    Ok((holders, amounts))
}

/// Encode the token proxy initializer, selecting the plain or lockable
/// mastercopy from the lock flag.
pub fn encode_token_setup(
    params: &NewTokenParams,
    safe: Address,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    let (holders, amounts) = allocation_arrays(params, safe)?;

    if params.locked {
        let inner = (
            params.name.clone(),
            params.symbol.clone(),
            holders,
            amounts,
            safe,
            true,
        )
            .abi_encode_params();
        Ok(ModuleSetup {
            mastercopy: network.votes_erc20_lockable_mastercopy,
            initializer: IVotesErc20Lockable::setUpCall { initializeParams: inner.into() }
                .abi_encode()
                .into(),
        })
    } else {
        let inner =
            (params.name.clone(), params.symbol.clone(), holders, amounts).abi_encode_params();
        Ok(ModuleSetup {
            mastercopy: network.votes_erc20_mastercopy,
            initializer: IVotesErc20::setUpCall { initializeParams: inner.into() }
                .abi_encode()
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenAllocation;

    fn test_address(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn params(allocations: Vec<TokenAllocation>, supply: u64) -> NewTokenParams {
        NewTokenParams {
            name: "Test".to_string(),
            symbol: "TST".to_string(),
            total_supply: U256::from(supply),
            allocations,
            locked: false,
        }
    }

    #[test]
    fn test_remainder_goes_to_safe() {
        let safe = test_address(0xFE);
        let holder = test_address(0xAA);
        let params = params(
            vec![TokenAllocation { to: holder, amount: U256::from(600) }],
            1000,
        );

        let (holders, amounts) = allocation_arrays(&params, safe).unwrap();
        assert_eq!(holders, vec![holder, safe]);
        assert_eq!(amounts, vec![U256::from(600), U256::from(400)]);
    }

    #[test]
    fn test_exact_allocation_has_no_remainder_row() {
        let safe = test_address(0xFE);
        let params = params(
            vec![
                TokenAllocation { to: test_address(0xAA), amount: U256::from(700) },
                TokenAllocation { to: test_address(0xBB), amount: U256::from(300) },
            ],
            1000,
        );

        let (holders, amounts) = allocation_arrays(&params, safe).unwrap();
        assert_eq!(holders.len(), 2);
        assert_eq!(amounts, vec![U256::from(700), U256::from(300)]);
        assert!(!holders.contains(&safe));
    }

    #[test]
    fn test_over_allocation_rejected() {
        let params = params(
            vec![TokenAllocation { to: test_address(0xAA), amount: U256::from(1001) }],
            1000,
        );
        let err = allocation_arrays(&params, test_address(0xFE)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { field: "token.allocations", .. }));
    }

    #[test]
    fn test_empty_allocations_mint_everything_to_safe() {
        let safe = test_address(0xFE);
        let params = params(vec![], 1000);

        let (holders, amounts) = allocation_arrays(&params, safe).unwrap();
        assert_eq!(holders, vec![safe]);
        assert_eq!(amounts, vec![U256::from(1000)]);
    }

    #[test]
    fn test_lock_flag_selects_lockable_mastercopy() {
        let network = NetworkAddresses {
            votes_erc20_mastercopy: test_address(1),
            votes_erc20_lockable_mastercopy: test_address(2),
            ..Default::default()
        };

        let mut p = params(vec![], 1000);
        let plain = encode_token_setup(&p, test_address(0xFE), &network).unwrap();
        assert_eq!(plain.mastercopy, network.votes_erc20_mastercopy);

        p.locked = true;
        let locked = encode_token_setup(&p, test_address(0xFE), &network).unwrap();
        assert_eq!(locked.mastercopy, network.votes_erc20_lockable_mastercopy);
        assert_ne!(plain.initializer, locked.initializer);
    }
}
