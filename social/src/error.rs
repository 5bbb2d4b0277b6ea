use commons_ledger::LedgerError;
use commons_types::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SocialError {
    #[error("no profile stored for {0}")]
    ProfileNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl SocialError {
    /// Wire-stable numeric code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ProfileNotFound(_) => ErrorCode::ProfileNotFound,
            Self::InvalidInput(_) | Self::ZeroAmount => ErrorCode::InvalidInput,
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::Ledger(inner) => inner.code(),
        }
    }
}
