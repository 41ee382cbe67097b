//! Chain read abstraction.
//!
//! The planner's only suspension points are read-only contract calls (the
//! ERC20 strategy's quorum denominator during `init()`). The client is an
//! injected collaborator; timeouts and retry policy live with the
//! implementation, not here.

use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;

/// Read-only chain client.
///
/// Errors are stringly-typed at this edge and wrapped into
/// [`PlannerError::ContractRead`](crate::PlannerError::ContractRead) by the
/// planner.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Execute an `eth_call` against `to` with ABI-encoded `data`, returning
    /// the raw return bytes.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, String>;

    /// Execute several independent read calls. Implementations may batch
    /// these into one multicall; the default issues them sequentially.
    async fn multicall(&self, calls: Vec<(Address, Bytes)>) -> Result<Vec<Bytes>, String> {
        let mut results = Vec::with_capacity(calls.len());
        for (to, data) in calls {
            results.push(self.call(to, data).await?);
        }
        Ok(results)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;

    /// In-memory ChainReader for tests: canned return data per target
    /// address, with call recording.
    #[derive(Default, Debug)]
    pub(crate) struct MockChainReader {
        responses: HashMap<Address, Bytes>,
        pub(crate) calls: Mutex<Vec<(Address, Bytes)>>,
        fail_all: bool,
    }

    impl MockChainReader {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_response(mut self, to: Address, data: Bytes) -> Self {
            self.responses.insert(to, data);
            self
        }

        pub(crate) fn failing() -> Self {
            Self { fail_all: true, ..Self::default() }
        }
    }

    #[async_trait]
    impl ChainReader for MockChainReader {
        async fn call(&self, to: Address, data: Bytes) -> Result<Bytes, String> {
            self.calls.lock().unwrap().push((to, data));
            if self.fail_all {
                return Err("execution reverted".to_string());
            }
            self.responses
                .get(&to)
                .cloned()
                .ok_or_else(|| format!("no canned response for {to}"))
        }
    }
}
