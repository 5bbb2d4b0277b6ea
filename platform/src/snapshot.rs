//! Bincode snapshots of all engine state.
//!
//! The external ledger is deliberately not part of a snapshot: balances live
//! with the ledger collaborator, and restoring a platform re-attaches
//! whichever ledger the caller supplies.

use crate::error::PlatformError;
use crate::events::EventSink;
use crate::platform::Platform;
use commons_governance::GovernanceEngine;
use commons_ledger::Ledger;
use commons_registry::ContentRegistry;
use commons_social::SocialEngine;
use commons_types::PlatformParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    params: PlatformParams,
    registry: ContentRegistry,
    governance: GovernanceEngine,
    social: SocialEngine,
}

impl Platform {
    /// Persist all engine state to `path`.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), PlatformError> {
        let snapshot = Snapshot {
            params: self.params.clone(),
            registry: self.registry.clone(),
            governance: self.governance.clone(),
            social: self.social.clone(),
        };
        let bytes = bincode::serialize(&snapshot)
            .map_err(|e| PlatformError::Snapshot(e.to_string()))?;
        std::fs::write(path, bytes).map_err(|e| PlatformError::Snapshot(e.to_string()))?;
        Ok(())
    }

    /// Restore a platform from a snapshot, attaching a ledger and sink.
    pub fn load_snapshot(
        path: impl AsRef<Path>,
        ledger: Box<dyn Ledger>,
        sink: Box<dyn EventSink>,
    ) -> Result<Self, PlatformError> {
        let bytes =
            std::fs::read(path).map_err(|e| PlatformError::Snapshot(e.to_string()))?;
        let snapshot: Snapshot = bincode::deserialize(&bytes)
            .map_err(|e| PlatformError::Snapshot(e.to_string()))?;
        Ok(Self {
            params: snapshot.params,
            registry: snapshot.registry,
            governance: snapshot.governance,
            social: snapshot.social,
            ledger,
            sink,
        })
    }
}
