//! Azorius DAO deployment plan builder.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use azorius_contracts::{
    prevalidated_signature, ILinearErc20Voting, ILinearErc20VotingV1, ILinearErc721Voting,
    ILinearErc721VotingV1, IModuleProxyFactory, ISafe, IVotesErc20, IVotingPaymaster,
};
use tracing::debug;

use super::descriptor::{PlanStep, TransactionDescriptor};
use super::slot::ModuleSlot;
use crate::config::{
    AzoriusDaoParams, GaslessVotingConfig, GovernanceConfig, GovernancePeriods, ParentLink,
    StrategyConfig, TokenSetup,
};
use crate::create2::predict_module_address;
use crate::encode;
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;
use crate::nonce::SaltNonceSource;
use crate::provider::ChainReader;

/// One salt nonce per module slot, drawn once at construction. Distinct per
/// slot: the CREATE2 salt binds `(initializer hash, nonce)`, and identical
/// initializers with a shared nonce would predict colliding addresses.
#[derive(Debug, Clone, Copy)]
struct SlotNonces {
    token: U256,
    strategy: U256,
    azorius: U256,
    claim: U256,
    paymaster: U256,
}

impl SlotNonces {
    fn draw(source: &mut dyn SaltNonceSource) -> Self {
        Self {
            token: source.next_nonce(),
            strategy: source.next_nonce(),
            azorius: source.next_nonce(),
            claim: source.next_nonce(),
            paymaster: source.next_nonce(),
        }
    }
}

/// Plans the module-deployment batch for an Azorius DAO.
///
/// Lifecycle: [`new`](Self::new) fixes the configuration, draws salt nonces
/// and resolves the token slot; [`init`](Self::init) performs the one chain
/// read and predicts the remaining addresses in dependency order; the
/// `build_*_tx` methods then emit descriptors in any order the caller asks,
/// each failing with `MissingDependency` if its prerequisite slot is still
/// unset. The builder is single-owner and discarded after the descriptors
/// are extracted.
#[derive(Debug)]
pub struct AzoriusTxBuilder<C> {
    chain: C,
    network: NetworkAddresses,
    safe: Address,
    token_setup: TokenSetup,
    strategy_config: StrategyConfig,
    periods: GovernancePeriods,
    parent: Option<ParentLink>,
    gasless_voting: Option<GaslessVotingConfig>,
    nonces: SlotNonces,
    token: ModuleSlot,
    strategy: ModuleSlot,
    azorius: ModuleSlot,
    claim: ModuleSlot,
    paymaster: ModuleSlot,
}

impl<C: ChainReader> AzoriusTxBuilder<C> {
    /// Validate the configuration and resolve the token slot. A new token
    /// is encoded and predicted immediately (no chain read needed); an
    /// imported token short-circuits to its given address.
    pub fn new(
        config: GovernanceConfig,
        network: NetworkAddresses,
        chain: C,
        nonce_source: &mut dyn SaltNonceSource,
    ) -> PlannerResult<Self> {
        config.validate()?;
        network.validate()?;

        let (dao, strategy_config) = match config {
            GovernanceConfig::Multisig(_) => {
                return Err(PlannerError::unsupported(
                    "AzoriusTxBuilder",
                    "multisig DAOs deploy no Azorius modules",
                ))
            }
            GovernanceConfig::AzoriusErc20 { dao, strategy } => {
                (dao, StrategyConfig::Erc20(strategy))
            }
            GovernanceConfig::AzoriusErc721 { dao, strategy } => {
                (dao, StrategyConfig::Erc721(strategy))
            }
        };
        let AzoriusDaoParams { safe, token, periods, parent, gasless_voting } = dao;

        let nonces = SlotNonces::draw(nonce_source);
        let mut builder = Self {
            chain,
            network,
            safe,
            token_setup: token,
            strategy_config,
            periods,
            parent,
            gasless_voting,
            nonces,
            token: ModuleSlot::Unset,
            strategy: ModuleSlot::Unset,
            azorius: ModuleSlot::Unset,
            claim: ModuleSlot::Unset,
            paymaster: ModuleSlot::Unset,
        };

        match &builder.token_setup {
            TokenSetup::New(params) => {
                let setup = encode::token::encode_token_setup(params, builder.safe, &builder.network)?;
                let address = predict_module_address(
                    builder.network.module_proxy_factory,
                    setup.mastercopy,
                    &setup.initializer,
                    builder.nonces.token,
                )?;
                debug!(target: "planner", token = %address, "predicted governance token address");
                builder.token.fill("token", ModuleSlot::encoded(setup, builder.nonces.token, address))?;
            }
            TokenSetup::Imported { address } => {
                debug!(target: "planner", token = %address, "using imported governance token");
                builder.token.fill("token", ModuleSlot::Predicted(*address))?;
            }
        }

        Ok(builder)
    }

    /// Predict the strategy, Azorius, claim and paymaster addresses, in
    /// that order. The ordering is a true data dependency: the strategy
    /// initializer needs the token address, the Azorius initializer embeds
    /// the predicted strategy address, the claim initializer embeds the
    /// predicted token address.
    ///
    /// The only suspension point is the ERC20 quorum-denominator read;
    /// failures propagate as `ContractRead` without retry.
    pub async fn init(&mut self) -> PlannerResult<()> {
        let token_address = self.token.require_address("token")?;

        let strategy_setup = match &self.strategy_config {
            StrategyConfig::Erc20(params) => {
                let denominator = self.read_quorum_denominator().await?;
                encode::strategy::encode_erc20_strategy(
                    self.safe,
                    token_address,
                    params,
                    self.periods.voting_period,
                    denominator,
                    self.gasless_voting.is_some(),
                    &self.network,
                )?
            }
            StrategyConfig::Erc721(params) => encode::strategy::encode_erc721_strategy(
                self.safe,
                params,
                self.periods.voting_period,
                self.gasless_voting.is_some(),
                &self.network,
            )?,
        };
        let strategy_address = predict_module_address(
            self.network.module_proxy_factory,
            strategy_setup.mastercopy,
            &strategy_setup.initializer,
            self.nonces.strategy,
        )?;
        debug!(target: "planner", strategy = %strategy_address, "predicted voting strategy address");
        self.strategy
            .fill("strategy", ModuleSlot::encoded(strategy_setup, self.nonces.strategy, strategy_address))?;

        let azorius_setup =
            encode::azorius::encode_azorius_setup(self.safe, strategy_address, &self.periods, &self.network)?;
        let azorius_address = predict_module_address(
            self.network.module_proxy_factory,
            azorius_setup.mastercopy,
            &azorius_setup.initializer,
            self.nonces.azorius,
        )?;
        debug!(target: "planner", azorius = %azorius_address, "predicted Azorius module address");
        self.azorius
            .fill("azorius", ModuleSlot::encoded(azorius_setup, self.nonces.azorius, azorius_address))?;

        if let Some(parent) = self.claimable_parent().cloned() {
            let claim_setup = encode::claim::encode_claim_setup(&parent, token_address, &self.network)?;
            let claim_address = predict_module_address(
                self.network.module_proxy_factory,
                claim_setup.mastercopy,
                &claim_setup.initializer,
                self.nonces.claim,
            )?;
            debug!(target: "planner", claim = %claim_address, "predicted token claim address");
            self.claim
                .fill("token_claim", ModuleSlot::encoded(claim_setup, self.nonces.claim, claim_address))?;
        }

        if let Some(gasless) = &self.gasless_voting {
            let paymaster_setup =
                encode::paymaster::encode_paymaster_setup(self.safe, gasless, &self.network)?;
            let paymaster_address = predict_module_address(
                self.network.module_proxy_factory,
                paymaster_setup.mastercopy,
                &paymaster_setup.initializer,
                self.nonces.paymaster,
            )?;
            debug!(target: "planner", paymaster = %paymaster_address, "predicted paymaster address");
            self.paymaster.fill(
                "paymaster",
                ModuleSlot::encoded(paymaster_setup, self.nonces.paymaster, paymaster_address),
            )?;
        }

        Ok(())
    }

    async fn read_quorum_denominator(&self) -> PlannerResult<U256> {
        let mastercopy = if self.gasless_voting.is_some() {
            self.network.linear_erc20_voting_v1_mastercopy
        } else {
            self.network.linear_erc20_voting_mastercopy
        };
        if mastercopy.is_zero() {
            return Err(PlannerError::invalid_input(
                "linear_erc20_voting_mastercopy",
                "strategy mastercopy address is not set",
            ));
        }

        let data = ILinearErc20Voting::QUORUM_DENOMINATORCall {}.abi_encode();
        let ret = self
            .chain
            .call(mastercopy, data.into())
            .await
            .map_err(|reason| PlannerError::contract_read("QUORUM_DENOMINATOR", reason))?;
        ILinearErc20Voting::QUORUM_DENOMINATORCall::abi_decode_returns(&ret)
            .map_err(|e| PlannerError::contract_read("QUORUM_DENOMINATOR", e.to_string()))
    }

    fn claimable_parent(&self) -> Option<&ParentLink> {
        self.parent.as_ref().filter(|parent| !parent.parent_allocation.is_zero())
    }

    fn deploy_descriptor(&self, step: PlanStep, field: &'static str, slot: &ModuleSlot) -> PlannerResult<TransactionDescriptor> {
        let module = slot.require_encoded(field)?;
        let data = IModuleProxyFactory::deployModuleCall {
            masterCopy: module.mastercopy,
            initializer: module.initializer.clone(),
            saltNonce: module.nonce,
        }
        .abi_encode();
        debug!(target: "planner", ?step, module = %module.address, "built deployment descriptor");
        Ok(TransactionDescriptor::call(step, self.network.module_proxy_factory, data.into()))
    }

    /// Whether the plan deploys a fresh token (vs importing one).
    pub fn deploys_new_token(&self) -> bool {
        matches!(self.token_setup, TokenSetup::New(_))
    }

    /// Deploy the governance token. Not available for imported tokens.
    pub fn build_create_token_tx(&self) -> PlannerResult<TransactionDescriptor> {
        if !self.deploys_new_token() {
            return Err(PlannerError::invalid_input(
                "token",
                "token was imported; there is no deployment transaction",
            ));
        }
        self.deploy_descriptor(PlanStep::CreateToken, "token", &self.token)
    }

    /// Deploy the linear voting strategy.
    pub fn build_deploy_strategy_tx(&self) -> PlannerResult<TransactionDescriptor> {
        self.deploy_descriptor(PlanStep::DeployStrategy, "strategy", &self.strategy)
    }

    /// Deploy the Azorius core module.
    pub fn build_deploy_azorius_tx(&self) -> PlannerResult<TransactionDescriptor> {
        self.deploy_descriptor(PlanStep::DeployAzorius, "azorius", &self.azorius)
    }

    /// Replace the sentinel in the deployed strategy with the real Azorius
    /// module address.
    pub fn build_set_azorius_address_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let strategy = self.strategy.require_address("strategy")?;
        let azorius = self.azorius.require_address("azorius")?;
        let data = match &self.strategy_config {
            StrategyConfig::Erc20(_) if self.gasless_voting.is_some() => {
                ILinearErc20VotingV1::setAzoriusCall { azoriusModule: azorius }.abi_encode()
            }
            StrategyConfig::Erc20(_) => {
                ILinearErc20Voting::setAzoriusCall { azoriusModule: azorius }.abi_encode()
            }
            StrategyConfig::Erc721(_) if self.gasless_voting.is_some() => {
                ILinearErc721VotingV1::setAzoriusCall { azoriusModule: azorius }.abi_encode()
            }
            StrategyConfig::Erc721(_) => {
                ILinearErc721Voting::setAzoriusCall { azoriusModule: azorius }.abi_encode()
            }
        };
        Ok(TransactionDescriptor::call(PlanStep::SetStrategyAzorius, strategy, data.into()))
    }

    /// Enable the Azorius module on the Safe.
    pub fn build_enable_azorius_module_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let azorius = self.azorius.require_address("azorius")?;
        let data = ISafe::enableModuleCall { module: azorius }.abi_encode();
        Ok(TransactionDescriptor::call(PlanStep::EnableAzoriusModule, self.safe, data.into()))
    }

    /// Add the Azorius module as a Safe owner (threshold 1).
    pub fn build_add_azorius_owner_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let azorius = self.azorius.require_address("azorius")?;
        let data =
            ISafe::addOwnerWithThresholdCall { owner: azorius, threshold: U256::ONE }.abi_encode();
        Ok(TransactionDescriptor::call(PlanStep::AddAzoriusOwner, self.safe, data.into()))
    }

    /// Remove the multisend contract from the Safe's owner list. Assumes
    /// the add-owner descriptor ran immediately before in the same batch,
    /// making Azorius the multisend's predecessor in the linked list.
    pub fn build_remove_multisend_owner_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let azorius = self.azorius.require_address("azorius")?;
        let data = ISafe::removeOwnerCall {
            prevOwner: azorius,
            owner: self.network.multisend,
            threshold: U256::ONE,
        }
        .abi_encode();
        Ok(TransactionDescriptor::call(PlanStep::RemoveMultisendOwner, self.safe, data.into()))
    }

    /// Deploy the parent-allocation claim module.
    pub fn build_deploy_token_claim_tx(&self) -> PlannerResult<TransactionDescriptor> {
        if self.claimable_parent().is_none() {
            return Err(PlannerError::invalid_input(
                "parent.parent_allocation",
                "no parent allocation is configured",
            ));
        }
        self.deploy_descriptor(PlanStep::DeployTokenClaim, "token_claim", &self.claim)
    }

    /// Approve the claim module to pull the parent allocation from this
    /// DAO's token. Targets the child token; executed by the parent Safe's
    /// batch.
    pub fn build_approve_claim_allocation_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let Some(parent) = self.claimable_parent() else {
            return Err(PlannerError::invalid_input(
                "parent.parent_allocation",
                "no parent allocation is configured",
            ));
        };
        let claim = self.claim.require_address("token_claim")?;
        let token = self.token.require_address("token")?;
        let data = IVotesErc20::approveCall { spender: claim, amount: parent.parent_allocation }
            .abi_encode();
        Ok(TransactionDescriptor::call(PlanStep::ApproveClaimAllocation, token, data.into()))
    }

    /// Deploy the gasless-voting paymaster. Requires the gasless-voting
    /// configuration to have been supplied at construction.
    pub fn build_deploy_paymaster_tx(&self) -> PlannerResult<TransactionDescriptor> {
        if self.gasless_voting.is_none() {
            return Err(PlannerError::invalid_input(
                "gasless_voting",
                "gasless voting was not configured for this DAO",
            ));
        }
        self.deploy_descriptor(PlanStep::DeployPaymaster, "paymaster", &self.paymaster)
    }

    /// Whitelist the strategy's vote function on the paymaster.
    pub fn build_approve_strategy_on_paymaster_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let Some(gasless) = &self.gasless_voting else {
            return Err(PlannerError::invalid_input(
                "gasless_voting",
                "gasless voting was not configured for this DAO",
            ));
        };
        let paymaster = self.paymaster.require_address("paymaster")?;
        let strategy = self.strategy.require_address("strategy")?;
        let selector = match &self.strategy_config {
            StrategyConfig::Erc20(_) => ILinearErc20VotingV1::voteCall::SELECTOR,
            StrategyConfig::Erc721(_) => ILinearErc721VotingV1::voteCall::SELECTOR,
        };
        let data = IVotingPaymaster::setFunctionValidatorCall {
            target: strategy,
            functionSelector: selector.into(),
            validator: gasless.voting_validator,
        }
        .abi_encode();
        Ok(TransactionDescriptor::call(PlanStep::ApprovePaymasterStrategy, paymaster, data.into()))
    }

    /// Predicted (or imported) governance token address.
    pub fn token_address(&self) -> PlannerResult<Address> {
        self.token.require_address("token")
    }

    /// Predicted voting strategy address.
    pub fn strategy_address(&self) -> PlannerResult<Address> {
        self.strategy.require_address("strategy")
    }

    /// Predicted Azorius module address.
    pub fn azorius_address(&self) -> PlannerResult<Address> {
        self.azorius.require_address("azorius")
    }

    /// Predicted token claim address, when a parent allocation exists.
    pub fn token_claim_address(&self) -> PlannerResult<Address> {
        self.claim.require_address("token_claim")
    }

    /// Predicted paymaster address, when gasless voting is configured.
    pub fn paymaster_address(&self) -> PlannerResult<Address> {
        self.paymaster.require_address("paymaster")
    }

    /// Pre-validated Safe signature for batch execution through the
    /// multisend owner.
    pub fn prevalidated_signature(&self) -> Bytes {
        prevalidated_signature(self.network.multisend)
    }
}
