//! Freeze voting and freeze guard setup encoding.

use alloy_primitives::Address;
use alloy_sol_types::{SolCall, SolValue};
use azorius_contracts::{
    IAzoriusFreezeGuard, IErc20FreezeVoting, IErc721FreezeVoting, IMultisigFreezeGuard,
    IMultisigFreezeVoting,
};

use super::ModuleSetup;
use crate::config::{ChildDaoTarget, FreezeConfig, ParentVotingStrategy};
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;

/// Encode the freeze-voting initializer, selecting the contract variant
/// that matches how the parent DAO is governed.
pub fn encode_freeze_voting_setup(
    parent: &ParentVotingStrategy,
    freeze: &FreezeConfig,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    let owner = parent.parent_safe();
    if owner.is_zero() {
        return Err(PlannerError::invalid_input(
            "parent_safe",
            "parent safe address is not set",
        ));
    }

    match parent {
        ParentVotingStrategy::Multisig { parent_safe } => {
            let inner = (
                owner,
                freeze.freeze_votes_threshold,
                freeze.freeze_proposal_period,
                freeze.freeze_period,
                *parent_safe,
            )
                .abi_encode_params();
            Ok(ModuleSetup {
                mastercopy: network.multisig_freeze_voting_mastercopy,
                initializer: IMultisigFreezeVoting::setUpCall { initializeParams: inner.into() }
                    .abi_encode()
                    .into(),
            })
        }
        ParentVotingStrategy::Erc20 { parent_token, .. } => {
            if parent_token.is_zero() {
                return Err(PlannerError::invalid_input(
                    "parent_token",
                    "parent votes token address is not set",
                ));
            }
            let inner = (
                owner,
                freeze.freeze_votes_threshold,
                freeze.freeze_proposal_period,
                freeze.freeze_period,
                *parent_token,
            )
                .abi_encode_params();
            Ok(ModuleSetup {
                mastercopy: network.erc20_freeze_voting_mastercopy,
                initializer: IErc20FreezeVoting::setUpCall { initializeParams: inner.into() }
                    .abi_encode()
                    .into(),
            })
        }
        ParentVotingStrategy::Erc721 { parent_strategy, .. } => {
            if parent_strategy.is_zero() {
                return Err(PlannerError::invalid_input(
                    "parent_strategy",
                    "parent voting strategy address is not set",
                ));
            }
            let inner = (
                owner,
                freeze.freeze_votes_threshold,
                freeze.freeze_proposal_period,
                freeze.freeze_period,
                *parent_strategy,
            )
                .abi_encode_params();
            Ok(ModuleSetup {
                mastercopy: network.erc721_freeze_voting_mastercopy,
                initializer: IErc721FreezeVoting::setUpCall { initializeParams: inner.into() }
                    .abi_encode()
                    .into(),
            })
        }
    }
}

/// Encode the freeze-guard initializer referencing the predicted
/// freeze-voting address. The guard variant depends on whether the child
/// executes through an Azorius module.
pub fn encode_freeze_guard_setup(
    parent_safe: Address,
    freeze_voting: Address,
    child: &ChildDaoTarget,
    freeze: &FreezeConfig,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    if freeze_voting.is_zero() {
        return Err(PlannerError::missing_dependency("freeze_voting"));
    }

    if child.azorius.is_some() {
        let inner = (parent_safe, freeze_voting).abi_encode_params();
        Ok(ModuleSetup {
            mastercopy: network.azorius_freeze_guard_mastercopy,
            initializer: IAzoriusFreezeGuard::setUpCall { initializeParams: inner.into() }
                .abi_encode()
                .into(),
        })
    } else {
        let inner = (
            freeze.timelock_period,
            freeze.execution_period,
            parent_safe,
            freeze_voting,
            child.safe,
        )
            .abi_encode_params();
        Ok(ModuleSetup {
            mastercopy: network.multisig_freeze_guard_mastercopy,
            initializer: IMultisigFreezeGuard::setUpCall { initializeParams: inner.into() }
                .abi_encode()
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    fn test_address(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn freeze() -> FreezeConfig {
        FreezeConfig {
            freeze_votes_threshold: U256::from(3),
            freeze_proposal_period: 10,
            freeze_period: 200,
            timelock_period: 20,
            execution_period: 100,
        }
    }

    fn network() -> NetworkAddresses {
        NetworkAddresses {
            multisig_freeze_voting_mastercopy: test_address(0x31),
            erc20_freeze_voting_mastercopy: test_address(0x32),
            erc721_freeze_voting_mastercopy: test_address(0x33),
            multisig_freeze_guard_mastercopy: test_address(0x34),
            azorius_freeze_guard_mastercopy: test_address(0x35),
            ..Default::default()
        }
    }

    #[test]
    fn test_variant_tracks_parent_strategy() {
        let network = network();
        let multisig = encode_freeze_voting_setup(
            &ParentVotingStrategy::Multisig { parent_safe: test_address(9) },
            &freeze(),
            &network,
        )
        .unwrap();
        let erc20 = encode_freeze_voting_setup(
            &ParentVotingStrategy::Erc20 {
                parent_safe: test_address(9),
                parent_token: test_address(8),
            },
            &freeze(),
            &network,
        )
        .unwrap();
        let erc721 = encode_freeze_voting_setup(
            &ParentVotingStrategy::Erc721 {
                parent_safe: test_address(9),
                parent_strategy: test_address(7),
            },
            &freeze(),
            &network,
        )
        .unwrap();

        assert_eq!(multisig.mastercopy, network.multisig_freeze_voting_mastercopy);
        assert_eq!(erc20.mastercopy, network.erc20_freeze_voting_mastercopy);
        assert_eq!(erc721.mastercopy, network.erc721_freeze_voting_mastercopy);
    }

    #[test]
    fn test_erc20_variant_requires_parent_token() {
        let err = encode_freeze_voting_setup(
            &ParentVotingStrategy::Erc20 {
                parent_safe: test_address(9),
                parent_token: Address::ZERO,
            },
            &freeze(),
            &network(),
        )
        .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { field: "parent_token", .. }));
    }

    #[test]
    fn test_guard_variant_tracks_child_executor() {
        let network = network();
        let voting = test_address(0x77);

        let on_safe = encode_freeze_guard_setup(
            test_address(9),
            voting,
            &ChildDaoTarget { safe: test_address(1), azorius: None },
            &freeze(),
            &network,
        )
        .unwrap();
        let on_azorius = encode_freeze_guard_setup(
            test_address(9),
            voting,
            &ChildDaoTarget { safe: test_address(1), azorius: Some(test_address(2)) },
            &freeze(),
            &network,
        )
        .unwrap();

        assert_eq!(on_safe.mastercopy, network.multisig_freeze_guard_mastercopy);
        assert_eq!(on_azorius.mastercopy, network.azorius_freeze_guard_mastercopy);
    }

    #[test]
    fn test_guard_requires_freeze_voting() {
        let err = encode_freeze_guard_setup(
            test_address(9),
            Address::ZERO,
            &ChildDaoTarget { safe: test_address(1), azorius: None },
            &freeze(),
            &network(),
        )
        .unwrap_err();
        assert!(matches!(err, PlannerError::MissingDependency { field: "freeze_voting" }));
    }
}
