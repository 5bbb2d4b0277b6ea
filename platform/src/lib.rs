//! The platform facade — one entry point per public operation.
//!
//! Every operation is a single atomic transaction: validate preconditions
//! against committed state, mutate, emit exactly one event. The facade owns
//! every engine plus the external collaborators (ledger, event sink), and
//! [`SharedPlatform`] serializes all access through one lock so no two
//! operations ever interleave their effects.

pub mod config;
pub mod error;
pub mod events;
pub mod platform;
pub mod snapshot;

pub use config::{ConfigError, PlatformConfig};
pub use error::PlatformError;
pub use events::{EventSink, NullSink, RecordingSink, TracingSink};
pub use platform::{Platform, SharedPlatform};

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable for filtering.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
