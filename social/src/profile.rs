//! User profiles — one per principal, upserted idempotently.

use commons_types::{Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// Simple field storage keyed by owner. No invariant beyond length bounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub owner: Principal,
    pub username: String,
    pub bio: String,
    pub updated_at: Timestamp,
}
