//! Platform parameters — the governance and registry configuration values.
//!
//! Everything here is configuration, not derived state: the quorum threshold
//! in particular is a constant the operator sets, never computed from
//! participation.

use serde::{Deserialize, Serialize};

/// Configuration shared by the registry, governance, and social engines.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformParams {
    /// Minimum total vote weight (`votes_for + votes_against`) a proposal
    /// must accumulate before it is eligible for execution.
    pub quorum_threshold: u64,

    /// Maximum number of entries in a content record's access list.
    pub max_access_list: usize,

    /// Maximum byte length for user-supplied text fields (urls, proposal
    /// descriptions, profile bios).
    pub max_field_bytes: usize,

    /// Maximum byte length for profile usernames.
    pub max_username_bytes: usize,

    /// When true, `get` on a content record requires the caller to be the
    /// owner or an access-list member; when false, reads are public.
    pub content_reads_are_gated: bool,
}

impl PlatformParams {
    pub const DEFAULT_QUORUM: u64 = 100;
    pub const DEFAULT_MAX_ACCESS_LIST: usize = 100;
    pub const DEFAULT_MAX_FIELD_BYTES: usize = 256;
    pub const DEFAULT_MAX_USERNAME_BYTES: usize = 64;
}

impl Default for PlatformParams {
    fn default() -> Self {
        Self {
            quorum_threshold: Self::DEFAULT_QUORUM,
            max_access_list: Self::DEFAULT_MAX_ACCESS_LIST,
            max_field_bytes: Self::DEFAULT_MAX_FIELD_BYTES,
            max_username_bytes: Self::DEFAULT_MAX_USERNAME_BYTES,
            content_reads_are_gated: true,
        }
    }
}
