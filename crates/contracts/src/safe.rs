//! Safe (Gnosis Safe) owner/module management surface.
//!
//! Only the functions the deployment batch drives: module enablement, owner
//! rotation, and guard installation. Proposal execution itself is handled by
//! an external submission flow.

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::sol;

sol! {
    interface ISafe {
        function enableModule(address module) external;

        /// Prepends `owner` to the Safe's linked owner list.
        function addOwnerWithThreshold(address owner, uint256 threshold) external;

        /// Removes `owner`; `prevOwner` must be its predecessor in the
        /// linked owner list.
        function removeOwner(address prevOwner, address owner, uint256 threshold) external;

        function setGuard(address guard) external;

        function getOwners() external view returns (address[] memory);
    }
}

/// Pre-validated Safe signature for a transaction executed by the multisend
/// contract while it is still a Safe owner during initial setup.
///
/// Fixed byte pattern required by the Safe signature-check protocol:
/// `r` = the multisend address (left-padded to 32 bytes), `s` = 0,
/// `v` = 1 (approved-hash marker). Not derived from an owner/threshold
/// model.
pub fn prevalidated_signature(multisend: Address) -> Bytes {
    let mut sig = Vec::with_capacity(65);
    sig.extend_from_slice(&[0u8; 12]);
    sig.extend_from_slice(multisend.as_slice());
    sig.extend_from_slice(&[0u8; 32]);
    sig.push(0x01);
    Bytes::from(sig)
}
