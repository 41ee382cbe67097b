//! Module setup encoders.
//!
//! One encoder per deployable module family. Each is a pure function over
//! its slice of the governance configuration plus any cross-module addresses
//! already predicted, and produces the proxy initializer (a full
//! `setUp(bytes)` call) together with the mastercopy variant it selected.
//! The initializer bytes are final once returned: the CREATE2 salt is
//! derived from them, so re-encoding after prediction would silently move
//! the deployment address.

pub mod azorius;
pub mod claim;
pub mod freeze;
pub mod paymaster;
pub mod strategy;
pub mod token;

use alloy_primitives::{Address, Bytes};

/// Output of a setup encoder: which mastercopy to proxy, and the
/// initializer calldata the proxy factory will invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSetup {
    pub mastercopy: Address,
    pub initializer: Bytes,
}
