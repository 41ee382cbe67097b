//! ERC-4337 paymaster for gas-sponsored voting.
//!
//! The DAO deploys its own paymaster proxy and whitelists the vote function
//! of its strategy; sponsored user operations are validated per
//! `(target, selector)` pair by an external validator contract.
//!
//! `setUp` tuple: `(address owner, address entryPoint)`

use alloy_sol_types::sol;

sol! {
    interface IVotingPaymaster {
        function setUp(bytes memory initializeParams) external;

        /// Route validation of calls to `target.functionSelector` through
        /// `validator`. A zero validator removes the approval.
        function setFunctionValidator(
            address target,
            bytes4 functionSelector,
            address validator
        ) external;
    }
}
