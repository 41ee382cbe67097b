//! Planned transaction descriptors.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Safe/multisend call type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Call,
    DelegateCall,
}

/// Which step of the deployment plan a descriptor belongs to. Ordinal order
/// is the dependency order the batch must preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlanStep {
    CreateToken,
    DeployStrategy,
    DeployAzorius,
    SetStrategyAzorius,
    EnableAzoriusModule,
    AddAzoriusOwner,
    RemoveMultisendOwner,
    DeployTokenClaim,
    ApproveClaimAllocation,
    DeployPaymaster,
    ApprovePaymasterStrategy,
    DeployFreezeVoting,
    DeployFreezeGuard,
    SetGuard,
}

/// One planned transaction, consumed in plan order by an external
/// batch-submission flow. The planner never executes these itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDescriptor {
    pub step: PlanStep,
    pub to: Address,
    /// Always zero for module deployment and wiring.
    pub value: U256,
    pub data: Bytes,
    pub operation: Operation,
}

impl TransactionDescriptor {
    /// A plain call descriptor with zero value.
    pub fn call(step: PlanStep, to: Address, data: Bytes) -> Self {
        Self { step, to, value: U256::ZERO, data, operation: Operation::Call }
    }
}
