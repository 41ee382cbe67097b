//! Freeze-guard deployment plan builder for sub-DAOs.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;
use azorius_contracts::{IAzorius, IModuleProxyFactory, ISafe};
use tracing::debug;

use super::descriptor::{PlanStep, TransactionDescriptor};
use super::slot::ModuleSlot;
use crate::config::{ChildDaoTarget, FreezeConfig, ParentVotingStrategy};
use crate::create2::predict_module_address;
use crate::encode;
use crate::error::{PlannerError, PlannerResult};
use crate::network::NetworkAddresses;
use crate::nonce::SaltNonceSource;

/// Plans the freeze-voting/freeze-guard pair a parent DAO attaches to a
/// child. The freeze-voting variant is keyed off the PARENT's voting
/// strategy type; the guard targets the child's Azorius module when it has
/// one, otherwise the child Safe directly.
///
/// No chain reads are needed, so both addresses are predicted at
/// construction. The freeze-guard initializer is encoded only after the
/// freeze-voting address it references is fixed.
#[derive(Debug)]
pub struct FreezeGuardTxBuilder {
    network: NetworkAddresses,
    child: ChildDaoTarget,
    freeze_voting: ModuleSlot,
    freeze_guard: ModuleSlot,
}

impl FreezeGuardTxBuilder {
    /// Encode both modules and predict their addresses.
    pub fn new(
        freeze: FreezeConfig,
        parent: ParentVotingStrategy,
        child: ChildDaoTarget,
        network: NetworkAddresses,
        nonce_source: &mut dyn SaltNonceSource,
    ) -> PlannerResult<Self> {
        network.validate()?;
        if child.safe.is_zero() {
            return Err(PlannerError::invalid_input("child.safe", "child safe address is not set"));
        }

        let voting_nonce = nonce_source.next_nonce();
        let guard_nonce = nonce_source.next_nonce();

        let voting_setup = encode::freeze::encode_freeze_voting_setup(&parent, &freeze, &network)?;
        let voting_address = predict_module_address(
            network.module_proxy_factory,
            voting_setup.mastercopy,
            &voting_setup.initializer,
            voting_nonce,
        )?;
        debug!(target: "planner", freeze_voting = %voting_address, "predicted freeze voting address");

        let guard_setup = encode::freeze::encode_freeze_guard_setup(
            parent.parent_safe(),
            voting_address,
            &child,
            &freeze,
            &network,
        )?;
        let guard_address = predict_module_address(
            network.module_proxy_factory,
            guard_setup.mastercopy,
            &guard_setup.initializer,
            guard_nonce,
        )?;
        debug!(target: "planner", freeze_guard = %guard_address, "predicted freeze guard address");

        let mut builder = Self {
            network,
            child,
            freeze_voting: ModuleSlot::Unset,
            freeze_guard: ModuleSlot::Unset,
        };
        builder
            .freeze_voting
            .fill("freeze_voting", ModuleSlot::encoded(voting_setup, voting_nonce, voting_address))?;
        builder
            .freeze_guard
            .fill("freeze_guard", ModuleSlot::encoded(guard_setup, guard_nonce, guard_address))?;
        Ok(builder)
    }

    fn deploy_descriptor(
        &self,
        step: PlanStep,
        field: &'static str,
        slot: &ModuleSlot,
    ) -> PlannerResult<TransactionDescriptor> {
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

    /// Deploy the freeze-voting module.
    pub fn build_deploy_freeze_voting_tx(&self) -> PlannerResult<TransactionDescriptor> {
        self.deploy_descriptor(PlanStep::DeployFreezeVoting, "freeze_voting", &self.freeze_voting)
    }

    /// Deploy the freeze guard.
    pub fn build_deploy_freeze_guard_tx(&self) -> PlannerResult<TransactionDescriptor> {
        self.deploy_descriptor(PlanStep::DeployFreezeGuard, "freeze_guard", &self.freeze_guard)
    }

    /// Install the guard on the child's executor: its Azorius module when
    /// present, its Safe otherwise.
    pub fn build_set_guard_tx(&self) -> PlannerResult<TransactionDescriptor> {
        let guard = self.freeze_guard.require_address("freeze_guard")?;
        let (to, data) = match self.child.azorius {
            Some(azorius) => (azorius, IAzorius::setGuardCall { guard }.abi_encode()),
            None => (self.child.safe, ISafe::setGuardCall { guard }.abi_encode()),
        };
        Ok(TransactionDescriptor::call(PlanStep::SetGuard, to, data.into()))
    }

    /// Predicted freeze-voting address.
    pub fn freeze_voting_address(&self) -> PlannerResult<Address> {
        self.freeze_voting.require_address("freeze_voting")
    }

    /// Predicted freeze-guard address.
    pub fn freeze_guard_address(&self) -> PlannerResult<Address> {
        self.freeze_guard.require_address("freeze_guard")
    }
}
