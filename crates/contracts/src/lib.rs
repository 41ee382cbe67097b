//! Static ABI surface for the Azorius deployment planner.
//!
//! One module per deployable contract family. Each module carries the
//! `sol!`-generated interface used to encode calldata, plus a comment
//! documenting the `setUp(bytes)` parameter tuple the proxy initializer
//! must carry for that family. The planner encodes those tuples with
//! `SolValue::abi_encode_params` and wraps them in `setUp(bytes)` calls.

pub mod azorius;
pub mod claim;
pub mod factory;
pub mod freeze;
pub mod paymaster;
pub mod safe;
pub mod token;
pub mod voting;

pub use azorius::IAzorius;
pub use claim::IErc20Claim;
pub use factory::IModuleProxyFactory;
pub use freeze::{
    IAzoriusFreezeGuard, IErc20FreezeVoting, IErc721FreezeVoting, IMultisigFreezeGuard,
    IMultisigFreezeVoting,
};
pub use paymaster::IVotingPaymaster;
pub use safe::{prevalidated_signature, ISafe};
pub use token::{IVotesErc20, IVotesErc20Lockable};
pub use voting::{
    ILinearErc20Voting, ILinearErc20VotingV1, ILinearErc721Voting, ILinearErc721VotingV1,
};
