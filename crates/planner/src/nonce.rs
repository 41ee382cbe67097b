//! Salt nonce generation.
//!
//! Each module slot gets one 256-bit salt nonce, drawn once at builder
//! construction. The source is injected so tests and reproducible fixtures
//! can pin the nonces while production draws fresh randomness per slot.

use alloy_primitives::U256;
use rand::RngCore;

/// Source of per-slot salt nonces.
///
/// Successive calls must return distinct values: slot salts are derived from
/// `(initializer hash, nonce)` and a repeated nonce with colliding
/// initializers would predict colliding addresses.
pub trait SaltNonceSource {
    /// Draw the next salt nonce.
    fn next_nonce(&mut self) -> U256;
}

/// Production source: 32 fresh random bytes per draw.
#[derive(Debug, Default)]
pub struct OsNonceSource;

impl SaltNonceSource for OsNonceSource {
    fn next_nonce(&mut self) -> U256 {
        let mut buf = [0u8; 32];
        rand::rng().fill_bytes(&mut buf);
        U256::from_be_bytes(buf)
    }
}

/// Deterministic source for tests: a fixed start value incremented per draw.
#[derive(Debug)]
pub struct SequentialNonceSource {
    next: U256,
}

impl SequentialNonceSource {
    /// Create a source that yields `start`, `start + 1`, ...
    pub fn new(start: u64) -> Self {
        Self { next: U256::from(start) }
    }
}

impl SaltNonceSource for SequentialNonceSource {
    fn next_nonce(&mut self) -> U256 {
        let nonce = self.next;
        self.next += U256::ONE;
        nonce
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_source_is_reproducible() {
        let mut a = SequentialNonceSource::new(100);
        let mut b = SequentialNonceSource::new(100);

        for _ in 0..4 {
            assert_eq!(a.next_nonce(), b.next_nonce());
        }
    }

    #[test]
    fn test_sequential_source_yields_distinct_nonces() {
        let mut source = SequentialNonceSource::new(0);
        let first = source.next_nonce();
        let second = source.next_nonce();
        assert_ne!(first, second);
    }

    #[test]
    fn test_os_source_yields_distinct_nonces() {
        let mut source = OsNonceSource;
        assert_ne!(source.next_nonce(), source.next_nonce());
    }
}
