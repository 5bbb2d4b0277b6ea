//! Content registry — ownership-guarded records with bounded access lists.
//!
//! Records are keyed by a monotonically assigned id that is never reused,
//! even after deletion. Every mutation is gated by a single shared owner
//! guard that resolves the record and checks ownership before any field is
//! touched, so a returned error always means the record is unchanged.

pub mod engine;
pub mod error;
pub mod record;

pub use engine::ContentRegistry;
pub use error::RegistryError;
pub use record::ContentRecord;
