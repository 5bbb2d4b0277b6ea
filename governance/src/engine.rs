//! The governance engine — proposal storage, voting, execution.

use crate::error::GovernanceError;
use crate::proposal::Proposal;
use commons_ledger::Ledger;
use commons_types::{PlatformParams, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Owns all proposals and the id counter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceEngine {
    next_id: u64,
    proposals: HashMap<u64, Proposal>,
    quorum_threshold: u64,
    max_description_bytes: usize,
}

impl GovernanceEngine {
    pub fn new(params: &PlatformParams) -> Self {
        Self {
            next_id: 1,
            proposals: HashMap::new(),
            quorum_threshold: params.quorum_threshold,
            max_description_bytes: params.max_field_bytes,
        }
    }

    /// The configured quorum threshold.
    pub fn quorum_threshold(&self) -> u64 {
        self.quorum_threshold
    }

    /// Submit a new proposal. Returns the assigned id.
    pub fn create_proposal(
        &mut self,
        caller: &Principal,
        description: impl Into<String>,
        now: Timestamp,
    ) -> Result<u64, GovernanceError> {
        let description = description.into();
        if description.is_empty() {
            return Err(GovernanceError::InvalidDescription(
                "description must not be empty".into(),
            ));
        }
        if description.len() > self.max_description_bytes {
            return Err(GovernanceError::InvalidDescription(format!(
                "description is {} bytes, limit is {}",
                description.len(),
                self.max_description_bytes
            )));
        }
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(GovernanceError::Overflow)?;
        self.proposals.insert(
            id,
            Proposal {
                id,
                proposer: caller.clone(),
                description,
                votes_for: 0,
                votes_against: 0,
                executed: false,
                created_at: now,
            },
        );
        debug!(id, proposer = %caller, "proposal created");
        Ok(id)
    }

    /// Look up a proposal.
    pub fn proposal(&self, id: u64) -> Result<&Proposal, GovernanceError> {
        self.proposals
            .get(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))
    }

    /// Cast a weighted vote.
    ///
    /// The voter's ledger balance must cover `weight` at the moment of the
    /// call; nothing is transferred or locked — weight is advisory.
    ///
    /// NOTE: no per-voter ballot is recorded anywhere. The same identity may
    /// call this any number of times and every call adds its full weight to
    /// the tally. That cumulative behavior is part of the system's observable
    /// contract and is kept as-is; see DESIGN.md before "fixing" it.
    pub fn vote(
        &mut self,
        ledger: &dyn Ledger,
        voter: &Principal,
        id: u64,
        support: bool,
        weight: u64,
    ) -> Result<(), GovernanceError> {
        if weight == 0 {
            return Err(GovernanceError::ZeroWeight);
        }
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted(id));
        }
        let available = ledger.balance_of(voter);
        if available < weight {
            return Err(GovernanceError::InsufficientBalance {
                needed: weight,
                available,
            });
        }
        let tally = if support {
            &mut proposal.votes_for
        } else {
            &mut proposal.votes_against
        };
        *tally = tally.checked_add(weight).ok_or(GovernanceError::Overflow)?;
        debug!(id, voter = %voter, support, weight, "vote cast");
        Ok(())
    }

    /// Execute a proposal. Callable by any identity, not just the proposer.
    ///
    /// Succeeds iff the proposal has not been executed, holds a strict
    /// majority for (ties fail), and the total weight cast meets the quorum
    /// threshold. Any unmet condition returns an error and changes nothing,
    /// leaving the proposal open and executable later.
    pub fn execute(&mut self, caller: &Principal, id: u64) -> Result<(), GovernanceError> {
        let proposal = self
            .proposals
            .get_mut(&id)
            .ok_or(GovernanceError::ProposalNotFound(id))?;
        if proposal.executed {
            return Err(GovernanceError::AlreadyExecuted(id));
        }
        if proposal.votes_for <= proposal.votes_against {
            return Err(GovernanceError::NoMajority {
                votes_for: proposal.votes_for,
                votes_against: proposal.votes_against,
            });
        }
        let cast = proposal.total_weight();
        if cast < self.quorum_threshold {
            return Err(GovernanceError::QuorumNotMet {
                cast,
                quorum: self.quorum_threshold,
            });
        }
        proposal.executed = true;
        info!(id, executor = %caller, "proposal executed");
        Ok(())
    }
}
