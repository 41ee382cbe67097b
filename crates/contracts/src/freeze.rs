//! Freeze voting and freeze guard contracts for sub-DAOs.
//!
//! A parent DAO can halt a child DAO's execution pending a freeze vote. The
//! freeze-voting variant must match how the PARENT is governed (multisig
//! owners, ERC20 votes, or ERC721 votes); the guard variant depends on
//! whether the CHILD executes through an Azorius module or directly through
//! its Safe.
//!
//! Setup tuples:
//!
//! - `MultisigFreezeVoting`:
//!   `(address owner, uint256 freezeVotesThreshold, uint32 freezeProposalPeriod,
//!     uint32 freezePeriod, address parentSafe)`
//! - `ERC20FreezeVoting`:
//!   `(address owner, uint256 freezeVotesThreshold, uint32 freezeProposalPeriod,
//!     uint32 freezePeriod, address parentVotesToken)`
//! - `ERC721FreezeVoting`:
//!   `(address owner, uint256 freezeVotesThreshold, uint32 freezeProposalPeriod,
//!     uint32 freezePeriod, address parentStrategy)`
//! - `MultisigFreezeGuard`:
//!   `(uint32 timelockPeriod, uint32 executionPeriod, address owner,
//!     address freezeVoting, address childSafe)`
//! - `AzoriusFreezeGuard`:
//!   `(address owner, address freezeVoting)`

use alloy_sol_types::sol;

sol! {
    interface IMultisigFreezeVoting {
        function setUp(bytes memory initializeParams) external;

        function castFreezeVote() external;

        function isFrozen() external view returns (bool);
    }
}

sol! {
    interface IErc20FreezeVoting {
        function setUp(bytes memory initializeParams) external;

        function castFreezeVote() external;

        function isFrozen() external view returns (bool);
    }
}

sol! {
    interface IErc721FreezeVoting {
        function setUp(bytes memory initializeParams) external;

        function castFreezeVote(address[] memory tokenAddresses, uint256[] memory tokenIds) external;

        function isFrozen() external view returns (bool);
    }
}

sol! {
    interface IMultisigFreezeGuard {
        function setUp(bytes memory initializeParams) external;
    }
}

sol! {
    interface IAzoriusFreezeGuard {
        function setUp(bytes memory initializeParams) external;
    }
}
