//! Linear voting strategy setup encoding.

use alloy_primitives::{address, Address, U256};
use alloy_sol_types::{SolCall, SolValue};
use azorius_contracts::{
    ILinearErc20Voting, ILinearErc20VotingV1, ILinearErc721Voting, ILinearErc721VotingV1,
};

use super::ModuleSetup;
use crate::config::{Erc20StrategyParams, Erc721StrategyParams};
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;

/// Placeholder Azorius address embedded in strategy setups. The real module
/// address is installed by a dedicated `setAzorius` transaction later in the
/// same batch, once the module proxy exists.
pub const AZORIUS_SENTINEL: Address = address!("0000000000000000000000000000000000000001");

/// Convert a whole quorum percentage into the numerator the strategy stores,
/// over the denominator read from its mastercopy.
pub fn quorum_numerator(quorum_percent: u64, denominator: U256) -> U256 {
    U256::from(quorum_percent) * denominator / U256::from(100)
}

/// Encode an ERC20 strategy initializer. `denominator` is the on-chain
/// `QUORUM_DENOMINATOR` of the mastercopy that will back the proxy; the
/// gasless flag selects the V1 (paymaster-capable) variant.
pub fn encode_erc20_strategy(
    safe: Address,
    governance_token: Address,
    params: &Erc20StrategyParams,
    voting_period: u32,
    denominator: U256,
    gasless: bool,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    if governance_token.is_zero() {
        return Err(PlannerError::missing_dependency("token"));
    }

    let inner = (
        safe,
        governance_token,
        AZORIUS_SENTINEL,
        voting_period,
        params.proposer_weight,
        quorum_numerator(params.quorum_percent, denominator),
        params.basis_numerator,
    )
        .abi_encode_params();

    let (mastercopy, initializer) = if gasless {
        (
            network.linear_erc20_voting_v1_mastercopy,
            ILinearErc20VotingV1::setUpCall { initializeParams: inner.into() }.abi_encode(),
        )
    } else {
        (
            network.linear_erc20_voting_mastercopy,
            ILinearErc20Voting::setUpCall { initializeParams: inner.into() }.abi_encode(),
        )
    };

    Ok(ModuleSetup { mastercopy, initializer: initializer.into() })
}

/// Encode an ERC721 strategy initializer. The quorum threshold is an
/// absolute vote count, taken as configured.
pub fn encode_erc721_strategy(
    safe: Address,
    params: &Erc721StrategyParams,
    voting_period: u32,
    gasless: bool,
    network: &NetworkAddresses,
) -> PlannerResult<ModuleSetup> {
    if params.tokens.is_empty() {
        return Err(PlannerError::invalid_input(
            "strategy.tokens",
            "ERC721 strategy needs at least one voting token",
        ));
    }

    let tokens: Vec<Address> = params.tokens.iter().map(|t| t.address).collect();
    let weights: Vec<U256> = params.tokens.iter().map(|t| t.weight).collect();

    let inner = (
        safe,
        tokens,
        weights,
        AZORIUS_SENTINEL,
        voting_period,
        params.quorum_threshold,
        params.proposer_threshold,
        params.basis_numerator,
    )
        .abi_encode_params();

    let (mastercopy, initializer) = if gasless {
        (
            network.linear_erc721_voting_v1_mastercopy,
            ILinearErc721VotingV1::setUpCall { initializeParams: inner.into() }.abi_encode(),
        )
    } else {
        (
            network.linear_erc721_voting_mastercopy,
            ILinearErc721Voting::setUpCall { initializeParams: inner.into() }.abi_encode(),
        )
    };

    Ok(ModuleSetup { mastercopy, initializer: initializer.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Erc721VotingToken;

    fn test_address(n: u8) -> Address {
        Address::new([n; 20])
    }

    fn network() -> NetworkAddresses {
        NetworkAddresses {
            linear_erc20_voting_mastercopy: test_address(0x20),
            linear_erc20_voting_v1_mastercopy: test_address(0x21),
            linear_erc721_voting_mastercopy: test_address(0x72),
            linear_erc721_voting_v1_mastercopy: test_address(0x73),
            ..Default::default()
        }
    }

    #[test]
    fn test_quorum_numerator_conversion() {
        let denominator = U256::from(1_000_000u64);
        let numerator = quorum_numerator(10, denominator);
        assert_eq!(numerator, U256::from(100_000u64));

        // Recovering the percentage round-trips.
        assert_eq!(numerator * U256::from(100) / denominator, U256::from(10));
    }

    #[test]
    fn test_erc20_strategy_requires_token() {
        let params = Erc20StrategyParams {
            quorum_percent: 10,
            proposer_weight: U256::ONE,
            basis_numerator: U256::from(500_000),
        };
        let err = encode_erc20_strategy(
            test_address(1),
            Address::ZERO,
            &params,
            100,
            U256::from(1_000_000u64),
            false,
            &network(),
        )
        .unwrap_err();
        assert!(matches!(err, PlannerError::MissingDependency { field: "token" }));
    }

    #[test]
    fn test_gasless_flag_selects_v1_mastercopy() {
        let params = Erc20StrategyParams {
            quorum_percent: 10,
            proposer_weight: U256::ONE,
            basis_numerator: U256::from(500_000),
        };
        let network = network();

        let plain = encode_erc20_strategy(
            test_address(1),
            test_address(2),
            &params,
            100,
            U256::from(1_000_000u64),
            false,
            &network,
        )
        .unwrap();
        let v1 = encode_erc20_strategy(
            test_address(1),
            test_address(2),
            &params,
            100,
            U256::from(1_000_000u64),
            true,
            &network,
        )
        .unwrap();

        assert_eq!(plain.mastercopy, network.linear_erc20_voting_mastercopy);
        assert_eq!(v1.mastercopy, network.linear_erc20_voting_v1_mastercopy);
    }

    #[test]
    fn test_erc721_strategy_rejects_empty_tokens() {
        let params = Erc721StrategyParams {
            tokens: vec![],
            quorum_threshold: U256::from(5),
            proposer_threshold: U256::ONE,
            basis_numerator: U256::from(500_000),
        };
        let err =
            encode_erc721_strategy(test_address(1), &params, 100, false, &network()).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { field: "strategy.tokens", .. }));
    }

    #[test]
    fn test_erc721_strategy_encodes_parallel_arrays() {
        let params = Erc721StrategyParams {
            tokens: vec![
                Erc721VotingToken { address: test_address(0xA1), weight: U256::from(1) },
                Erc721VotingToken { address: test_address(0xA2), weight: U256::from(3) },
            ],
            quorum_threshold: U256::from(5),
            proposer_threshold: U256::ONE,
            basis_numerator: U256::from(500_000),
        };
        let setup =
            encode_erc721_strategy(test_address(1), &params, 100, false, &network()).unwrap();

        // Both collection addresses appear in the encoded initializer.
        let raw = setup.initializer.as_ref();
        let a1 = test_address(0xA1);
        let a2 = test_address(0xA2);
        assert!(raw.windows(20).any(|w| w == a1.as_slice()));
        assert!(raw.windows(20).any(|w| w == a2.as_slice()));
    }
}
