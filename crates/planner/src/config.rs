//! Governance configuration model.
//!
//! The full input to a deployment plan, immutable once a builder is
//! constructed. One sum type per configuration axis (governance type, token
//! origin) so encoders match exhaustively instead of branching on scattered
//! flags.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// One token allocation row. Position in the allocation list is load-bearing:
/// the token constructor consumes holders and amounts as parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAllocation {
    pub to: Address,
    pub amount: U256,
}

/// Parameters for a token the plan deploys itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTokenParams {
    pub name: String,
    pub symbol: String,
    pub total_supply: U256,
    pub allocations: Vec<TokenAllocation>,
    /// Deploy the lockable mastercopy: transfers are frozen until the DAO
    /// releases them.
    pub locked: bool,
}

/// Where the governance token comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenSetup {
    /// Deploy a fresh token as part of the batch.
    New(NewTokenParams),
    /// Reuse an already-deployed votes token; no token transaction is
    /// produced and the address is taken as given.
    Imported { address: Address },
}

/// ERC20 linear-voting strategy parameters.
///
/// The quorum is a percentage of token supply; it is converted to a
/// numerator over the strategy's on-chain `QUORUM_DENOMINATOR` at encode
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20StrategyParams {
    /// Quorum as a whole percentage of total supply (0..=100).
    pub quorum_percent: u64,
    /// Token weight an address must hold to submit a proposal.
    pub proposer_weight: U256,
    /// Votes required to pass, as a numerator over the strategy's basis
    /// denominator of 1_000_000. Simple majority is 500_000.
    pub basis_numerator: U256,
}

/// One NFT collection counted by an ERC721 strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc721VotingToken {
    pub address: Address,
    pub weight: U256,
}

/// ERC721 linear-voting strategy parameters.
///
/// The quorum is an absolute vote count, not a percentage: the strategy
/// contract does not track NFT total supply, so a ratio cannot be enforced
/// on-chain. External contract constraint, respected as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc721StrategyParams {
    pub tokens: Vec<Erc721VotingToken>,
    pub quorum_threshold: U256,
    pub proposer_threshold: U256,
    /// See [`Erc20StrategyParams::basis_numerator`].
    pub basis_numerator: U256,
}

/// Proposal lifecycle periods, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernancePeriods {
    pub voting_period: u32,
    pub timelock_period: u32,
    pub execution_period: u32,
}

/// Linkage to a parent DAO for sub-DAO setups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    pub parent_safe: Address,
    /// The parent DAO's votes token.
    pub parent_token: Address,
    /// Amount of the child token reserved for parent-token holders. Zero
    /// means no claim module is deployed.
    pub parent_allocation: U256,
    /// Block after which unclaimed tokens lapse; zero for no deadline.
    pub claim_deadline_block: u32,
}

/// Account-abstraction collaborators for gas-sponsored voting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaslessVotingConfig {
    /// ERC-4337 entry point the paymaster registers with.
    pub entry_point: Address,
    /// Validator contract approved for the strategy's vote function.
    pub voting_validator: Address,
}

/// Azorius DAO parameters shared by both strategy types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzoriusDaoParams {
    /// The DAO's Safe: owner, avatar and target of the Azorius module, and
    /// recipient of any unallocated token supply.
    pub safe: Address,
    pub token: TokenSetup,
    pub periods: GovernancePeriods,
    pub parent: Option<ParentLink>,
    pub gasless_voting: Option<GaslessVotingConfig>,
}

/// A multisig DAO: governed directly by its Safe owners, no on-chain voting
/// module. Carried on this axis so freeze setups can key off it; the Azorius
/// builder rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigGovernance {
    pub safe: Address,
}

/// Top-level governance configuration, discriminated by governance type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceConfig {
    Multisig(MultisigGovernance),
    AzoriusErc20 { dao: AzoriusDaoParams, strategy: Erc20StrategyParams },
    AzoriusErc721 { dao: AzoriusDaoParams, strategy: Erc721StrategyParams },
}

/// Strategy parameters collapsed onto one axis, as builders consume them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyConfig {
    Erc20(Erc20StrategyParams),
    Erc721(Erc721StrategyParams),
}

/// Freeze mechanism parameters for a sub-DAO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreezeConfig {
    /// Votes needed to freeze the child.
    pub freeze_votes_threshold: U256,
    /// Blocks a freeze proposal stays open for votes.
    pub freeze_proposal_period: u32,
    /// Blocks a successful freeze lasts.
    pub freeze_period: u32,
    /// Timelock imposed on child transactions by a multisig freeze guard.
    pub timelock_period: u32,
    /// Execution window enforced by a multisig freeze guard.
    pub execution_period: u32,
}

/// How the PARENT DAO is governed; selects the freeze-voting contract
/// variant, which must match the parent's voting mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentVotingStrategy {
    Multisig { parent_safe: Address },
    Erc20 { parent_safe: Address, parent_token: Address },
    Erc721 { parent_safe: Address, parent_strategy: Address },
}

impl ParentVotingStrategy {
    /// The parent Safe, which owns the freeze pair in every variant.
    pub fn parent_safe(&self) -> Address {
        match self {
            Self::Multisig { parent_safe }
            | Self::Erc20 { parent_safe, .. }
            | Self::Erc721 { parent_safe, .. } => *parent_safe,
        }
    }
}

/// The child DAO a freeze guard attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildDaoTarget {
    pub safe: Address,
    /// Set when the child executes through an Azorius module; the guard is
    /// then installed on the module instead of the Safe.
    pub azorius: Option<Address>,
}

impl AzoriusDaoParams {
    fn validate(&self) -> PlannerResult<()> {
        if self.safe.is_zero() {
            return Err(PlannerError::invalid_input("safe", "DAO safe address is not set"));
        }
        match &self.token {
            TokenSetup::New(params) => {
                if params.name.is_empty() {
                    return Err(PlannerError::invalid_input("token.name", "token name is empty"));
                }
                if params.symbol.is_empty() {
                    return Err(PlannerError::invalid_input(
                        "token.symbol",
                        "token symbol is empty",
                    ));
                }
                if params.total_supply.is_zero() {
                    return Err(PlannerError::invalid_input(
                        "token.total_supply",
                        "total supply is zero",
                    ));
                }
            }
            TokenSetup::Imported { address } => {
                if address.is_zero() {
                    return Err(PlannerError::invalid_input(
                        "token.address",
                        "imported token address is not set",
                    ));
                }
            }
        }
        if let Some(parent) = &self.parent {
            if !parent.parent_allocation.is_zero() && parent.parent_token.is_zero() {
                return Err(PlannerError::invalid_input(
                    "parent.parent_token",
                    "parent allocation set but parent token address is missing",
                ));
            }
        }
        if let Some(gasless) = &self.gasless_voting {
            if gasless.entry_point.is_zero() {
                return Err(PlannerError::invalid_input(
                    "gasless_voting.entry_point",
                    "entry point address is not set",
                ));
            }
            if gasless.voting_validator.is_zero() {
                return Err(PlannerError::invalid_input(
                    "gasless_voting.voting_validator",
                    "voting validator address is not set",
                ));
            }
        }
        Ok(())
    }
}

impl GovernanceConfig {
    /// Validate internal consistency. Called by builders at construction.
    pub fn validate(&self) -> PlannerResult<()> {
        match self {
            Self::Multisig(multisig) => {
                if multisig.safe.is_zero() {
                    return Err(PlannerError::invalid_input("safe", "DAO safe address is not set"));
                }
                Ok(())
            }
            Self::AzoriusErc20 { dao, strategy } => {
                dao.validate()?;
                if strategy.quorum_percent > 100 {
                    return Err(PlannerError::invalid_input(
                        "strategy.quorum_percent",
                        format!("quorum {}% exceeds 100%", strategy.quorum_percent),
                    ));
                }
                Ok(())
            }
            Self::AzoriusErc721 { dao, strategy } => {
                dao.validate()?;
                if strategy.tokens.is_empty() {
                    return Err(PlannerError::invalid_input(
                        "strategy.tokens",
                        "ERC721 strategy needs at least one voting token",
                    ));
                }
                Ok(())
            }
        }
    }
}
