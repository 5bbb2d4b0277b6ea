//! Stable numeric error codes — the wire contract shared by every crate.
//!
//! Each crate keeps its own rich `thiserror` enum; the `code()` method on
//! those enums collapses variants onto this table for wire compatibility.
//! The numbers are frozen: changing them breaks external consumers.

use serde::{Deserialize, Serialize};

/// Wire-stable error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ErrorCode {
    /// Ledger precondition unmet.
    InsufficientBalance = 1001,
    /// No profile stored for the principal.
    ProfileNotFound = 1002,
    /// Content id does not resolve.
    ContentNotFound = 1003,
    /// Caller fails an ownership check.
    Unauthorized = 1004,
    /// Gated read denied, or access list at capacity.
    AccessDenied = 1005,
    /// Proposal id does not resolve.
    ProposalNotFound = 1008,
    /// Governance execution preconditions unmet.
    CannotExecute = 1009,
    /// Length/zero/range violation on a user-supplied field.
    InvalidInput = 1010,
    /// Reserved. Nothing produces this code.
    RateLimited = 1011,
}

impl ErrorCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_frozen() {
        assert_eq!(ErrorCode::InsufficientBalance.as_u16(), 1001);
        assert_eq!(ErrorCode::ProfileNotFound.as_u16(), 1002);
        assert_eq!(ErrorCode::ContentNotFound.as_u16(), 1003);
        assert_eq!(ErrorCode::Unauthorized.as_u16(), 1004);
        assert_eq!(ErrorCode::AccessDenied.as_u16(), 1005);
        assert_eq!(ErrorCode::ProposalNotFound.as_u16(), 1008);
        assert_eq!(ErrorCode::CannotExecute.as_u16(), 1009);
        assert_eq!(ErrorCode::InvalidInput.as_u16(), 1010);
        assert_eq!(ErrorCode::RateLimited.as_u16(), 1011);
    }
}
