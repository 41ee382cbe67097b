//! Planner Error Types
//!
//! Every failure in this crate propagates to the caller unmodified; the
//! planner performs no retries and never returns a partial transaction plan.

use thiserror::Error;

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors that can occur while planning a deployment batch
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Malformed or missing required address/config at construction time
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A step was attempted before its prerequisite address was predicted.
    /// This is a sequencing error in the calling code, not user input.
    #[error("`{field}` has not been predicted yet; call init() first")]
    MissingDependency { field: &'static str },

    /// An unrecognized governance-type/strategy-type combination reached a
    /// step that branches on it
    #[error("unsupported configuration in {context}: {reason}")]
    UnsupportedConfiguration { context: &'static str, reason: String },

    /// The chain-read client failed or reverted
    #[error("contract read `{call}` failed: {reason}")]
    ContractRead { call: &'static str, reason: String },
}

impl PlannerError {
    /// Create an invalid-input error
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field, reason: reason.into() }
    }

    /// Create a missing-dependency error
    pub fn missing_dependency(field: &'static str) -> Self {
        Self::MissingDependency { field }
    }

    /// Create an unsupported-configuration error
    pub fn unsupported(context: &'static str, reason: impl Into<String>) -> Self {
        Self::UnsupportedConfiguration { context, reason: reason.into() }
    }

    /// Create a contract-read error
    pub fn contract_read(call: &'static str, reason: impl Into<String>) -> Self {
        Self::ContractRead { call, reason: reason.into() }
    }

    /// Check if this error indicates a transient chain failure the caller
    /// may retry (the planner itself never retries)
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::ContractRead { .. })
    }
}
