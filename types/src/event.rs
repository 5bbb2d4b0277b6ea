//! Structured event records emitted after every committed mutation.

use crate::principal::Principal;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// One append-only notification of a committed state transition.
///
/// Exactly one record is emitted per successful mutating call, after the
/// mutation commits; failed calls emit nothing. Delivery order follows
/// commit order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EventRecord {
    /// Action name, e.g. `content-created`, `proposal-executed`.
    pub action: String,
    /// The authenticated caller that performed the action.
    pub actor: Principal,
    /// The content or proposal id the action touched, when there is one.
    pub subject: Option<u64>,
    /// Action-specific payload.
    pub payload: serde_json::Value,
    /// Commit time.
    pub at: Timestamp,
}

impl EventRecord {
    pub fn new(
        action: impl Into<String>,
        actor: Principal,
        subject: Option<u64>,
        payload: serde_json::Value,
        at: Timestamp,
    ) -> Self {
        Self {
            action: action.into(),
            actor,
            subject,
            payload,
            at,
        }
    }
}
