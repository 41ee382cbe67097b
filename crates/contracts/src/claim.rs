//! Parent-allocation token claim module.
//!
//! Lets holders of a parent DAO's token claim a proportional share of a
//! child DAO's token. Funded by an ERC20 `approve` from the parent treasury
//! in the same batch that deploys the claim contract.
//!
//! `setUp` tuple:
//! `(uint32 deadlineBlock, address funder, address parentToken,
//!   address childToken, uint256 parentAllocation)`
//!
//! A `deadlineBlock` of zero means the claim never expires.

use alloy_sol_types::sol;

sol! {
    interface IErc20Claim {
        function setUp(bytes memory initializeParams) external;

        function claimTokens(address claimer) external;

        function getClaimAmount(address claimer) external view returns (uint256);
    }
}
