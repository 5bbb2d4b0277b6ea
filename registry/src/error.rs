use commons_types::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("content {0} not found")]
    NotFound(u64),

    #[error("caller is not the owner of content {0}")]
    Unauthorized(u64),

    #[error("read access to content {0} denied")]
    AccessDenied(u64),

    #[error("access list for content {id} is full ({capacity} entries)")]
    ListFull { id: u64, capacity: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("content id space exhausted")]
    IdOverflow,
}

impl RegistryError {
    /// Wire-stable numeric code for this error.
    ///
    /// `AccessDenied` and `ListFull` share code 1005 on the wire; they stay
    /// distinct variants in the Rust API.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::ContentNotFound,
            Self::Unauthorized(_) => ErrorCode::Unauthorized,
            Self::AccessDenied(_) | Self::ListFull { .. } => ErrorCode::AccessDenied,
            Self::InvalidInput(_) | Self::IdOverflow => ErrorCode::InvalidInput,
        }
    }
}
