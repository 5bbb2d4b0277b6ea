//! Profiles, tipping, and subscriptions.
//!
//! Everything here is simple field storage or a thin pass-through to the
//! ledger collaborator: there are no invariants beyond length bounds, and
//! value movement is delegated wholesale to [`commons_ledger::Ledger`].

pub mod engine;
pub mod error;
pub mod profile;

pub use engine::SocialEngine;
pub use error::SocialError;
pub use profile::Profile;
