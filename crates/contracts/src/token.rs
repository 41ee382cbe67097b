//! Governance token contracts.
//!
//! Two mastercopy variants share the proxy-initializer shape but differ in
//! their setup tuple:
//!
//! - `VotesERC20`: plain voting token.
//!   `setUp` tuple: `(string name, string symbol, address[] holders, uint256[] amounts)`
//! - `VotesERC20Lockable`: transfers locked until the lock owner releases
//!   them; used for "locked" token launches.
//!   `setUp` tuple: `(string name, string symbol, address[] holders, uint256[] amounts, address lockOwner, bool locked)`
//!
//! The `holders`/`amounts` arrays are consumed positionally by the token
//! constructor; index `i` of one must correspond to index `i` of the other.

use alloy_sol_types::sol;

sol! {
    interface IVotesErc20 {
        /// Proxy initializer. `initializeParams` is the ABI-encoded setup
        /// tuple documented at module level.
        function setUp(bytes memory initializeParams) external;

        function approve(address spender, uint256 amount) external returns (bool);

        function balanceOf(address account) external view returns (uint256);

        function totalSupply() external view returns (uint256);
    }
}

sol! {
    interface IVotesErc20Lockable {
        function setUp(bytes memory initializeParams) external;

        function approve(address spender, uint256 amount) external returns (bool);

        /// Releases the transfer lock. Only callable by the lock owner.
        function unlock() external;

        function locked() external view returns (bool);
    }
}
