//! Azorius governance module.
//!
//! Coordinates the proposal lifecycle for a Safe and delegates vote
//! accounting to an attached linear voting strategy.
//!
//! `setUp` tuple:
//! `(address owner, address avatar, address target, address[] strategies,
//!   uint32 timelockPeriod, uint32 executionPeriod)`
//!
//! For a standalone DAO all three of owner/avatar/target are the Safe
//! itself; the strategies array carries the predicted strategy address.

use alloy_sol_types::sol;

sol! {
    interface IAzorius {
        function setUp(bytes memory initializeParams) external;

        /// Attach a transaction guard (freeze guard for sub-DAOs).
        function setGuard(address guard) external;

        function isStrategyEnabled(address strategy) external view returns (bool);
    }
}
