use commons_types::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u64, available: u64 },

    #[error("balance overflow")]
    Overflow,
}

impl LedgerError {
    /// Wire-stable numeric code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InsufficientBalance { .. } => ErrorCode::InsufficientBalance,
            Self::Overflow => ErrorCode::InvalidInput,
        }
    }
}
