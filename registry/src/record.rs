//! Content records and their access lists.

use commons_types::{Principal, Timestamp};
use serde::{Deserialize, Serialize};

/// One registered piece of content.
///
/// `id` and `owner` are immutable for the lifetime of the record; there is
/// no transfer-of-ownership operation. The access list grows only by append
/// and may contain duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: u64,
    pub owner: Principal,
    pub url: String,
    pub access_list: Vec<Principal>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ContentRecord {
    /// Whether `who` may read this record under gated-read policy.
    ///
    /// The owner is implicitly authorized and need not appear in the list.
    pub fn can_read(&self, who: &Principal) -> bool {
        self.owner == *who || self.access_list.contains(who)
    }
}
