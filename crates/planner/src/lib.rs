//! Deterministic deployment planner for Azorius DAO governance modules.
//!
//! Given a governance configuration, the planner computes the CREATE2
//! addresses a set of minimal-proxy modules will be deployed at, before any
//! of them exists, and emits the ordered transaction descriptors that
//! deploy and wire them together atomically through a Safe multisend.
//!
//! # Overview
//!
//! - [`create2`]: pure address prediction for module-proxy deployments.
//! - [`config`]: the governance configuration model.
//! - [`encode`]: per-module setup encoders (initializer + mastercopy
//!   variant selection).
//! - [`builder`]: the [`AzoriusTxBuilder`] and [`FreezeGuardTxBuilder`]
//!   orchestrators producing [`TransactionDescriptor`]s.
//! - [`provider`]: the injected chain-read client.
//!
//! The planner neither signs nor submits anything; descriptor batching and
//! execution belong to an external submission flow.

pub mod builder;
pub mod config;
pub mod create2;
pub mod encode;
mod error;
pub mod network;
pub mod nonce;
pub mod provider;

pub use builder::{
    AzoriusTxBuilder, EncodedModule, FreezeGuardTxBuilder, ModuleSlot, Operation, PlanStep,
    TransactionDescriptor,
};
pub use config::{
    AzoriusDaoParams, ChildDaoTarget, Erc20StrategyParams, Erc721StrategyParams,
    Erc721VotingToken, FreezeConfig, GaslessVotingConfig, GovernanceConfig, GovernancePeriods,
    MultisigGovernance, NewTokenParams, ParentLink, ParentVotingStrategy, StrategyConfig,
    TokenAllocation, TokenSetup,
};
pub use create2::{calculate_salt, predict_module_address, proxy_creation_code};
pub use error::{PlannerError, PlannerResult};
pub use network::NetworkAddresses;
pub use nonce::{OsNonceSource, SaltNonceSource, SequentialNonceSource};
pub use provider::ChainReader;
