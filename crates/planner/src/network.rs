//! Per-network deployment addresses.
//!
//! Mastercopy and infrastructure addresses are provided by network
//! configuration, never computed. Mastercopies that a given plan does not
//! touch may be left zero; prediction fails with `InvalidInput` only when a
//! zero mastercopy is actually used.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Deployed singleton addresses for one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkAddresses {
    /// Zodiac module proxy factory; deployer of every module below.
    pub module_proxy_factory: Address,
    /// MultiSend call-only contract the batch executes through.
    pub multisend: Address,

    pub votes_erc20_mastercopy: Address,
    pub votes_erc20_lockable_mastercopy: Address,

    pub linear_erc20_voting_mastercopy: Address,
    pub linear_erc20_voting_v1_mastercopy: Address,
    pub linear_erc721_voting_mastercopy: Address,
    pub linear_erc721_voting_v1_mastercopy: Address,

    pub azorius_mastercopy: Address,
    pub erc20_claim_mastercopy: Address,
    pub paymaster_mastercopy: Address,

    pub multisig_freeze_voting_mastercopy: Address,
    pub erc20_freeze_voting_mastercopy: Address,
    pub erc721_freeze_voting_mastercopy: Address,
    pub multisig_freeze_guard_mastercopy: Address,
    pub azorius_freeze_guard_mastercopy: Address,
}

impl NetworkAddresses {
    /// Validate the addresses every plan needs regardless of configuration.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.module_proxy_factory.is_zero() {
            return Err(PlannerError::invalid_input(
                "module_proxy_factory",
                "factory address is not set",
            ));
        }
        if self.multisend.is_zero() {
            return Err(PlannerError::invalid_input("multisend", "multisend address is not set"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_factory() {
        let network = NetworkAddresses {
            multisend: Address::new([2; 20]),
            ..Default::default()
        };
        let err = network.validate().unwrap_err();
        assert!(matches!(
            err,
            PlannerError::InvalidInput { field: "module_proxy_factory", .. }
        ));
    }

    #[test]
    fn test_validate_requires_multisend() {
        let network = NetworkAddresses {
            module_proxy_factory: Address::new([1; 20]),
            ..Default::default()
        };
        let err = network.validate().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { field: "multisend", .. }));
    }
}
