//! Per-module slot state.

use alloy_primitives::{Address, Bytes, U256};

use crate::encode::ModuleSetup;
use crate::error::{PlannerError, PlannerResult};

/// A module whose initializer is fixed and whose address is predicted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedModule {
    pub mastercopy: Address,
    /// The exact initializer bytes the salt was derived from.
    pub initializer: Bytes,
    pub nonce: U256,
    pub address: Address,
}

/// State of one deployable module slot. Transitions are monotonic:
/// `Unset` → `Predicted` (imported modules, no deployment) or
/// `Unset` → `Encoded` (modules the plan deploys). A populated slot is
/// never rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModuleSlot {
    #[default]
    Unset,
    /// Address known without deployment (e.g. an imported token).
    Predicted(Address),
    /// Initializer encoded and address predicted; a deployment descriptor
    /// can be built.
    Encoded(EncodedModule),
}

impl ModuleSlot {
    /// Build the `Encoded` state from an encoder output and prediction.
    pub fn encoded(setup: ModuleSetup, nonce: U256, address: Address) -> Self {
        Self::Encoded(EncodedModule {
            mastercopy: setup.mastercopy,
            initializer: setup.initializer,
            nonce,
            address,
        })
    }

    /// The predicted address, if any.
    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Unset => None,
            Self::Predicted(address) => Some(*address),
            Self::Encoded(module) => Some(module.address),
        }
    }

    pub(crate) fn require_address(&self, field: &'static str) -> PlannerResult<Address> {
        self.address().ok_or(PlannerError::MissingDependency { field })
    }

    pub(crate) fn require_encoded(&self, field: &'static str) -> PlannerResult<&EncodedModule> {
        match self {
            Self::Encoded(module) => Ok(module),
            _ => Err(PlannerError::MissingDependency { field }),
        }
    }

    /// Populate the slot, enforcing write-once.
    pub(crate) fn fill(&mut self, field: &'static str, next: Self) -> PlannerResult<()> {
        if !matches!(self, Self::Unset) {
            return Err(PlannerError::invalid_input(field, "slot is already populated"));
        }
        *self = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_slot_has_no_address() {
        let slot = ModuleSlot::Unset;
        assert!(slot.address().is_none());
        assert!(matches!(
            slot.require_address("token"),
            Err(PlannerError::MissingDependency { field: "token" })
        ));
    }

    #[test]
    fn test_predicted_slot_is_not_deployable() {
        let slot = ModuleSlot::Predicted(Address::new([1; 20]));
        assert!(slot.address().is_some());
        assert!(slot.require_encoded("token").is_err());
    }

    #[test]
    fn test_fill_is_write_once() {
        let mut slot = ModuleSlot::Unset;
        slot.fill("token", ModuleSlot::Predicted(Address::new([1; 20]))).unwrap();

        let err = slot
            .fill("token", ModuleSlot::Predicted(Address::new([2; 20])))
            .unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { field: "token", .. }));
        // The original value survives the rejected write.
        assert_eq!(slot.address(), Some(Address::new([1; 20])));
    }
}
