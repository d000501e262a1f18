//! Match receipt summarizing one match pass.
//!
//! The receipt records what a pass did and fingerprints the book it left
//! behind, so two runs over the same input can be compared by state root
//! alone.

use sha2::{Digest, Sha256};

/// Summary of a single [`crate::MatchingEngine::run`] pass.
///
/// ## State Root
///
/// The 32-byte state root is a SHA-256 hash of the book's textual rendering
/// after the pass (see [`crate::OrderBook::state_root`]).
///
/// ## Example
///
/// ```
/// use crossbook::types::MatchReceipt;
///
/// let receipt = MatchReceipt::new(1, 2, 300, 1, 1, [0u8; 32]);
/// assert!(!receipt.is_empty());
/// assert_eq!(receipt.state_root_hex().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchReceipt {
    /// Sequence number of the pass (1-based, per engine)
    pub pass: u64,

    /// Number of trades emitted during the pass
    pub trades_executed: u64,

    /// Sum of traded sizes
    pub volume: i64,

    /// Bids left in the book after the pass
    pub bids_remaining: u64,

    /// Asks left in the book after the pass
    pub asks_remaining: u64,

    /// SHA-256 of the book rendering after the pass
    pub state_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a new match receipt
    pub fn new(
        pass: u64,
        trades_executed: u64,
        volume: i64,
        bids_remaining: u64,
        asks_remaining: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            pass,
            trades_executed,
            volume,
            bids_remaining,
            asks_remaining,
            state_root,
        }
    }

    /// Compute SHA-256 hash of the given data
    pub fn compute_hash(data: &[u8]) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(data);
        let result = hasher.finalize();

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&result);
        hash
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Check if the pass produced no trades
    pub fn is_empty(&self) -> bool {
        self.trades_executed == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
