use commons_types::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("proposal {0} not found")]
    ProposalNotFound(u64),

    #[error("invalid description: {0}")]
    InvalidDescription(String),

    #[error("vote weight must be greater than zero")]
    ZeroWeight,

    #[error("insufficient balance to back vote: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("proposal {0} has already been executed")]
    AlreadyExecuted(u64),

    #[error("no majority: {votes_for} for vs {votes_against} against")]
    NoMajority { votes_for: u64, votes_against: u64 },

    #[error("quorum not met: {cast} of {quorum} required weight cast")]
    QuorumNotMet { cast: u64, quorum: u64 },

    #[error("vote tally overflow")]
    Overflow,
}

impl GovernanceError {
    /// Wire-stable numeric code for this error.
    ///
    /// All three execution blockers collapse onto 1009; the split variants
    /// exist so callers and logs can tell which condition failed.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProposalNotFound(_) => ErrorCode::ProposalNotFound,
            Self::InvalidDescription(_) | Self::ZeroWeight | Self::Overflow => {
                ErrorCode::InvalidInput
            }
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::AlreadyExecuted(_) | Self::NoMajority { .. } | Self::QuorumNotMet { .. } => {
                ErrorCode::CannotExecute
            }
        }
    }
}
