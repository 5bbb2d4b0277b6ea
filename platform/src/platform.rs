//! The platform facade and its single-writer wrapper.

use crate::error::PlatformError;
use crate::events::EventSink;
use commons_governance::{GovernanceEngine, Proposal};
use commons_ledger::Ledger;
use commons_registry::{ContentRecord, ContentRegistry};
use commons_social::{Profile, SocialEngine};
use commons_types::{EventRecord, PlatformParams, Principal, Timestamp};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// Owns every engine plus the external collaborators.
///
/// Each public method is one atomic transaction: preconditions are checked
/// against committed state before any write, so an `Err` return guarantees
/// the platform is exactly as it was. Exactly one event is emitted per
/// successful mutation, after the mutation commits.
pub struct Platform {
    pub(crate) params: PlatformParams,
    pub(crate) registry: ContentRegistry,
    pub(crate) governance: GovernanceEngine,
    pub(crate) social: SocialEngine,
    pub(crate) ledger: Box<dyn Ledger>,
    pub(crate) sink: Box<dyn EventSink>,
}

impl Platform {
    pub fn new(
        params: PlatformParams,
        ledger: Box<dyn Ledger>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        Self {
            registry: ContentRegistry::new(&params),
            governance: GovernanceEngine::new(&params),
            social: SocialEngine::new(&params),
            params,
            ledger,
            sink,
        }
    }

    pub fn params(&self) -> &PlatformParams {
        &self.params
    }

    /// Ledger balance of a principal (read-only pass-through).
    pub fn balance_of(&self, who: &Principal) -> u64 {
        self.ledger.balance_of(who)
    }

    // ── Content registry ─────────────────────────────────────────────────

    pub fn create_content(
        &mut self,
        caller: &Principal,
        url: &str,
    ) -> Result<u64, PlatformError> {
        let now = Timestamp::now();
        let id = self.registry.create(caller, url, now)?;
        self.emit("content-created", caller, Some(id), json!({ "url": url }), now);
        Ok(id)
    }

    pub fn get_content(
        &self,
        caller: &Principal,
        id: u64,
    ) -> Result<&ContentRecord, PlatformError> {
        Ok(self.registry.get(caller, id)?)
    }

    pub fn update_content(
        &mut self,
        caller: &Principal,
        id: u64,
        url: &str,
        access_list: Vec<Principal>,
    ) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        let list_len = access_list.len();
        self.registry.update(caller, id, url, access_list, now)?;
        self.emit(
            "content-updated",
            caller,
            Some(id),
            json!({ "url": url, "access_list_len": list_len }),
            now,
        );
        Ok(())
    }

    pub fn delete_content(&mut self, caller: &Principal, id: u64) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.registry.delete(caller, id)?;
        self.emit("content-deleted", caller, Some(id), json!({}), now);
        Ok(())
    }

    pub fn grant_access(
        &mut self,
        caller: &Principal,
        id: u64,
        grantee: &Principal,
    ) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.registry.grant_access(caller, id, grantee, now)?;
        self.emit(
            "access-granted",
            caller,
            Some(id),
            json!({ "grantee": grantee.as_str() }),
            now,
        );
        Ok(())
    }

    // ── Governance ───────────────────────────────────────────────────────

    pub fn create_proposal(
        &mut self,
        caller: &Principal,
        description: &str,
    ) -> Result<u64, PlatformError> {
        let now = Timestamp::now();
        let id = self.governance.create_proposal(caller, description, now)?;
        self.emit(
            "proposal-created",
            caller,
            Some(id),
            json!({ "description": description }),
            now,
        );
        Ok(id)
    }

    pub fn get_proposal(&self, id: u64) -> Result<&Proposal, PlatformError> {
        Ok(self.governance.proposal(id)?)
    }

    pub fn vote(
        &mut self,
        caller: &Principal,
        id: u64,
        support: bool,
        weight: u64,
    ) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.governance
            .vote(self.ledger.as_ref(), caller, id, support, weight)?;
        self.emit(
            "vote-cast",
            caller,
            Some(id),
            json!({ "support": support, "weight": weight }),
            now,
        );
        Ok(())
    }

    pub fn execute_proposal(&mut self, caller: &Principal, id: u64) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.governance.execute(caller, id)?;
        self.emit("proposal-executed", caller, Some(id), json!({}), now);
        Ok(())
    }

    // ── Profiles and token-weighted actions ──────────────────────────────

    pub fn set_profile(
        &mut self,
        caller: &Principal,
        username: &str,
        bio: &str,
    ) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.social.set_profile(caller, username, bio, now)?;
        self.emit(
            "profile-updated",
            caller,
            None,
            json!({ "username": username }),
            now,
        );
        Ok(())
    }

    pub fn get_profile(&self, who: &Principal) -> Result<&Profile, PlatformError> {
        Ok(self.social.profile(who)?)
    }

    pub fn tip_user(
        &mut self,
        caller: &Principal,
        recipient: &Principal,
        amount: u64,
    ) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.social
            .tip(self.ledger.as_mut(), caller, recipient, amount)?;
        self.emit(
            "tip-sent",
            caller,
            None,
            json!({ "recipient": recipient.as_str(), "amount": amount }),
            now,
        );
        Ok(())
    }

    pub fn subscribe(
        &mut self,
        caller: &Principal,
        target: &Principal,
        content_id: u64,
        fee: u64,
    ) -> Result<(), PlatformError> {
        let now = Timestamp::now();
        self.social
            .subscribe(self.ledger.as_mut(), caller, target, content_id, fee)?;
        self.emit(
            "subscription-created",
            caller,
            Some(content_id),
            json!({ "target": target.as_str(), "fee": fee }),
            now,
        );
        Ok(())
    }

    pub fn is_subscribed(&self, who: &Principal, content_id: u64) -> bool {
        self.social.is_subscribed(who, content_id)
    }

    fn emit(
        &self,
        action: &str,
        actor: &Principal,
        subject: Option<u64>,
        payload: serde_json::Value,
        at: Timestamp,
    ) {
        self.sink
            .emit(EventRecord::new(action, actor.clone(), subject, payload, at));
    }
}

/// Single-writer handle over a [`Platform`].
///
/// Every operation passes through one mutex, reproducing the global
/// serialization the engines assume: no two operations interleave, and a
/// reader never observes state between an owner check and its mutation.
#[derive(Clone)]
pub struct SharedPlatform {
    inner: Arc<Mutex<Platform>>,
}

impl SharedPlatform {
    pub fn new(platform: Platform) -> Self {
        Self {
            inner: Arc::new(Mutex::new(platform)),
        }
    }

    /// Run one operation against the platform under the global lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Platform) -> R) -> R {
        let mut guard = self.inner.lock().expect("platform lock poisoned");
        f(&mut guard)
    }
}
