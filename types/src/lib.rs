//! Fundamental types for the commons registry.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: principals, timestamps, platform parameters, event records,
//! and the stable numeric error codes of the wire contract.

pub mod error;
pub mod event;
pub mod params;
pub mod principal;
pub mod time;

pub use error::ErrorCode;
pub use event::EventRecord;
pub use params::PlatformParams;
pub use principal::Principal;
pub use time::Timestamp;
