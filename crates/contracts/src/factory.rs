//! Zodiac module proxy factory.
//!
//! Deploys ERC-1167 minimal proxies at deterministic CREATE2 addresses.
//! The salt is `keccak256(keccak256(initializer) ++ saltNonce)`, which is
//! what makes module addresses predictable before deployment.

use alloy_sol_types::sol;

sol! {
    interface IModuleProxyFactory {
        /// Deploy a minimal proxy for `masterCopy` and invoke `initializer`
        /// on it. Reverts if the target address is already taken.
        function deployModule(
            address masterCopy,
            bytes memory initializer,
            uint256 saltNonce
        ) external returns (address proxy);
    }
}
