//! Deterministic module address prediction.
//!
//! The module proxy factory deploys ERC-1167 minimal proxies via CREATE2.
//! Given the factory address, the mastercopy the proxy will delegate to, the
//! initializer calldata, and the salt nonce, the deployment address is fully
//! determined before the transaction runs. This is what lets the planner
//! wire modules together inside a single batch.

use alloy_primitives::{keccak256, Address, B256, U256};

use crate::error::{PlannerError, PlannerResult};

/// Minimal proxy creation-code prefix: deploy-time stub plus the runtime
/// prefix up to the embedded mastercopy address.
const PROXY_CREATION_PREFIX: [u8; 19] = [
    0x60, 0x2d, 0x80, 0x60, 0x09, 0x3d, 0x39, 0x3d, 0xf3, 0x36, 0x3d, 0x3d, 0x37, 0x3d, 0x3d,
    0x3d, 0x36, 0x3d, 0x73,
];

/// Minimal proxy creation-code suffix: the runtime tail after the embedded
/// mastercopy address.
const PROXY_CREATION_SUFFIX: [u8; 15] = [
    0x5a, 0xf4, 0x3d, 0x82, 0x80, 0x3e, 0x90, 0x3d, 0x91, 0x60, 0x2b, 0x57, 0xfd, 0x5b, 0xf3,
];

/// Build the CREATE2 init code for a minimal proxy delegating to
/// `mastercopy`.
pub fn proxy_creation_code(mastercopy: Address) -> Vec<u8> {
    let mut code = Vec::with_capacity(PROXY_CREATION_PREFIX.len() + 20 + PROXY_CREATION_SUFFIX.len());
    code.extend_from_slice(&PROXY_CREATION_PREFIX);
    code.extend_from_slice(mastercopy.as_slice());
    code.extend_from_slice(&PROXY_CREATION_SUFFIX);
    code
}

/// Salt the proxy factory derives for a deployment:
/// `keccak256(keccak256(initializer) ++ nonce)`.
pub fn calculate_salt(initializer: &[u8], nonce: U256) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(keccak256(initializer).as_slice());
    preimage[32..].copy_from_slice(&nonce.to_be_bytes::<32>());
    keccak256(preimage)
}

/// Predict the address the proxy factory will deploy a module at.
///
/// Pure function of its inputs; recomputing with different initializer bytes
/// yields a different address, so callers must fix the initializer before
/// predicting and never re-encode afterwards.
pub fn predict_module_address(
    factory: Address,
    mastercopy: Address,
    initializer: &[u8],
    nonce: U256,
) -> PlannerResult<Address> {
    if factory.is_zero() {
        return Err(PlannerError::invalid_input(
            "module_proxy_factory",
            "factory address is not set",
        ));
    }
    if mastercopy.is_zero() {
        return Err(PlannerError::invalid_input(
            "mastercopy",
            "mastercopy address is not set",
        ));
    }

    let salt = calculate_salt(initializer, nonce);
    let init_code_hash = keccak256(proxy_creation_code(mastercopy));

    // address = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12..]
    let mut preimage = [0u8; 85];
    preimage[0] = 0xff;
    preimage[1..21].copy_from_slice(factory.as_slice());
    preimage[21..53].copy_from_slice(salt.as_slice());
    preimage[53..85].copy_from_slice(init_code_hash.as_slice());

    Ok(Address::from_slice(&keccak256(preimage)[12..]))
}
