//! The ledger collaborator boundary.
//!
//! The core never mints tokens or sets supply policy; it consumes exactly
//! two calls from an external ledger: a balance lookup and an atomic
//! transfer. The rest of the workspace depends only on the [`Ledger`] trait.
//! [`MemoryLedger`] is the in-process implementation used for tests and
//! single-node deployments.

pub mod error;
pub mod memory;

pub use error::LedgerError;
pub use memory::MemoryLedger;

use commons_types::Principal;

/// Balance lookup and atomic value transfer between principals.
///
/// `transfer` is atomic pass-or-fail: on error no balance changed. There are
/// no partial transfers and no retry semantics at this boundary.
pub trait Ledger: Send {
    /// Current balance of a principal. Unknown principals hold zero.
    fn balance_of(&self, who: &Principal) -> u64;

    /// Move `amount` from `from` to `to`.
    fn transfer(&mut self, from: &Principal, to: &Principal, amount: u64)
        -> Result<(), LedgerError>;
}
