use commons_governance::GovernanceError;
use commons_ledger::LedgerError;
use commons_registry::RegistryError;
use commons_social::SocialError;
use commons_types::ErrorCode;
use thiserror::Error;

/// Unified error surface of the platform facade.
///
/// The per-crate variants keep their full payloads; `code()` collapses them
/// onto the stable wire table for external consumers.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    Social(#[from] SocialError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl PlatformError {
    /// Wire-stable numeric code, when the error belongs to the wire contract.
    ///
    /// Snapshot failures are operational, not wire errors, and carry no code.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Registry(e) => Some(e.code()),
            Self::Governance(e) => Some(e.code()),
            Self::Social(e) => Some(e.code()),
            Self::Ledger(e) => Some(e.code()),
            Self::Snapshot(_) => None,
        }
    }
}
