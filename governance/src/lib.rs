//! Governance for the commons registry.
//!
//! Token-weighted voting with quorum-gated, one-shot execution. A proposal
//! moves Open → Executed and nothing else: there is no rejected state and no
//! expiry, so a failed execution attempt leaves the proposal open and
//! executable again once more weight arrives.
//!
//! Vote weight is advisory: the voter's ledger balance must cover the weight
//! at the moment of the call, but no tokens are transferred or locked.

pub mod engine;
pub mod error;
pub mod proposal;

pub use engine::GovernanceEngine;
pub use error::GovernanceError;
pub use proposal::Proposal;
