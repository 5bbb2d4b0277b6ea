//! The content registry engine.

use crate::error::RegistryError;
use crate::record::ContentRecord;
use commons_types::{PlatformParams, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Owns all content records and the id counter.
///
/// Ids start at 1 and only ever increase; deleting a record retires its id
/// permanently because the counter never moves backwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentRegistry {
    next_id: u64,
    records: HashMap<u64, ContentRecord>,
    max_access_list: usize,
    max_url_bytes: usize,
    gated_reads: bool,
}

impl ContentRegistry {
    pub fn new(params: &PlatformParams) -> Self {
        Self {
            next_id: 1,
            records: HashMap::new(),
            max_access_list: params.max_access_list,
            max_url_bytes: params.max_field_bytes,
            gated_reads: params.content_reads_are_gated,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register new content. Returns the assigned id.
    pub fn create(
        &mut self,
        caller: &Principal,
        url: impl Into<String>,
        now: Timestamp,
    ) -> Result<u64, RegistryError> {
        let url = url.into();
        self.validate_url(&url)?;
        let id = self.next_id;
        self.next_id = self.next_id.checked_add(1).ok_or(RegistryError::IdOverflow)?;
        self.records.insert(
            id,
            ContentRecord {
                id,
                owner: caller.clone(),
                url,
                access_list: Vec::new(),
                created_at: now,
                updated_at: now,
            },
        );
        debug!(id, owner = %caller, "content created");
        Ok(id)
    }

    /// Read a record. Under gated reads the caller must be the owner or an
    /// access-list member; otherwise reads are public.
    pub fn get(&self, caller: &Principal, id: u64) -> Result<&ContentRecord, RegistryError> {
        let record = self.records.get(&id).ok_or(RegistryError::NotFound(id))?;
        if self.gated_reads && !record.can_read(caller) {
            return Err(RegistryError::AccessDenied(id));
        }
        Ok(record)
    }

    /// Replace a record's url and access list wholesale (not a merge).
    pub fn update(
        &mut self,
        caller: &Principal,
        id: u64,
        url: impl Into<String>,
        access_list: Vec<Principal>,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let url = url.into();
        self.validate_url(&url)?;
        if access_list.len() > self.max_access_list {
            return Err(RegistryError::InvalidInput(format!(
                "access list holds {} entries, capacity is {}",
                access_list.len(),
                self.max_access_list
            )));
        }
        let record = self.owned_record_mut(caller, id)?;
        record.url = url;
        record.access_list = access_list;
        record.updated_at = now;
        debug!(id, "content updated");
        Ok(())
    }

    /// Delete a record. Its id is permanently retired.
    pub fn delete(&mut self, caller: &Principal, id: u64) -> Result<(), RegistryError> {
        self.owned_record_mut(caller, id)?;
        self.records.remove(&id);
        debug!(id, "content deleted");
        Ok(())
    }

    /// Append `grantee` to the record's access list.
    ///
    /// The list is append-only and not deduplicated: granting the same
    /// principal twice consumes two of the record's capacity slots.
    pub fn grant_access(
        &mut self,
        caller: &Principal,
        id: u64,
        grantee: &Principal,
        now: Timestamp,
    ) -> Result<(), RegistryError> {
        let capacity = self.max_access_list;
        let record = self.owned_record_mut(caller, id)?;
        if record.access_list.len() >= capacity {
            return Err(RegistryError::ListFull { id, capacity });
        }
        record.access_list.push(grantee.clone());
        record.updated_at = now;
        debug!(id, grantee = %grantee, "access granted");
        Ok(())
    }

    /// The shared owner guard: resolve the record, then check ownership.
    ///
    /// Every owner-gated mutator calls this before touching any field, so a
    /// `NotFound`/`Unauthorized` return guarantees no partial write happened.
    fn owned_record_mut(
        &mut self,
        caller: &Principal,
        id: u64,
    ) -> Result<&mut ContentRecord, RegistryError> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(RegistryError::NotFound(id))?;
        if record.owner != *caller {
            return Err(RegistryError::Unauthorized(id));
        }
        Ok(record)
    }

    fn validate_url(&self, url: &str) -> Result<(), RegistryError> {
        if url.is_empty() {
            return Err(RegistryError::InvalidInput("url must not be empty".into()));
        }
        if url.len() > self.max_url_bytes {
            return Err(RegistryError::InvalidInput(format!(
                "url is {} bytes, limit is {}",
                url.len(),
                self.max_url_bytes
            )));
        }
        Ok(())
    }
}
