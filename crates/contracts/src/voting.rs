//! Linear voting strategy contracts.
//!
//! Four mastercopy variants along two axes: the weighing token (ERC20 vs
//! ERC721) and whether the strategy supports gas-sponsored voting through a
//! paymaster (the V1 interfaces). The Azorius module address is not known
//! when a strategy is deployed as part of a batch, so the setup tuple embeds
//! the sentinel `address(0x1)` and the real pointer is installed afterwards
//! with `setAzorius`.
//!
//! Setup tuples:
//!
//! - ERC20 (plain and V1):
//!   `(address owner, address governanceToken, address azoriusModule,
//!     uint32 votingPeriod, uint256 requiredProposerWeight,
//!     uint256 quorumNumerator, uint256 basisNumerator)`
//! - ERC721 (plain and V1):
//!   `(address owner, address[] tokens, uint256[] weights,
//!     address azoriusModule, uint32 votingPeriod, uint256 quorumThreshold,
//!     uint256 proposerThreshold, uint256 basisNumerator)`
//!
//! The ERC20 quorum is a numerator over the on-chain `QUORUM_DENOMINATOR`;
//! the ERC721 quorum is an absolute token count because the strategy does
//! not track NFT total supply.

use alloy_sol_types::sol;

sol! {
    interface ILinearErc20Voting {
        function setUp(bytes memory initializeParams) external;

        /// Install the Azorius module pointer after batch deployment.
        function setAzorius(address azoriusModule) external;

        /// Denominator the setup quorum numerator is expressed over.
        function QUORUM_DENOMINATOR() external view returns (uint256);

        function vote(uint32 proposalId, uint8 voteType) external;
    }
}

sol! {
    interface ILinearErc20VotingV1 {
        function setUp(bytes memory initializeParams) external;

        function setAzorius(address azoriusModule) external;

        function QUORUM_DENOMINATOR() external view returns (uint256);

        /// V1 voting entry point; eligible for paymaster sponsorship.
        function vote(uint32 proposalId, uint8 voteType) external;
    }
}

sol! {
    interface ILinearErc721Voting {
        function setUp(bytes memory initializeParams) external;

        function setAzorius(address azoriusModule) external;

        function vote(
            uint32 proposalId,
            uint8 voteType,
            address[] memory tokenAddresses,
            uint256[] memory tokenIds
        ) external;
    }
}

sol! {
    interface ILinearErc721VotingV1 {
        function setUp(bytes memory initializeParams) external;

        function setAzorius(address azoriusModule) external;

        /// V1 voting entry point; eligible for paymaster sponsorship.
        function vote(
            uint32 proposalId,
            uint8 voteType,
            address[] memory tokenAddresses,
            uint256[] memory tokenIds
        ) external;
    }
}
