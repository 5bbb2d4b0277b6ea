//! Governance proposals and their lifecycle.

use commons_types::{Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// A governance proposal.
///
/// Lifecycle: created open, tallies grow monotonically through votes, and a
/// single successful execution flips `executed` — after which every field is
/// frozen for good.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: u64,
    /// Who proposed it. Execution is not restricted to the proposer.
    pub proposer: Principal,
    /// What is being proposed.
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    /// One-shot execution flag. Starts false, becomes true exactly once.
    pub executed: bool,
    pub created_at: Timestamp,
}

impl Proposal {
    /// Total weight cast so far, regardless of direction. This is the number
    /// quorum is measured against.
    pub fn total_weight(&self) -> u64 {
        self.votes_for.saturating_add(self.votes_against)
    }
}
