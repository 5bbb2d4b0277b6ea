//! Profile storage and token-weighted actions (tips, subscriptions).

use crate::error::SocialError;
use crate::profile::Profile;
use commons_ledger::Ledger;
use commons_types::{PlatformParams, Principal, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Profiles plus the subscription book.
///
/// Tips and subscriptions carry no state machine of their own: each is a
/// balance precondition followed by one atomic ledger transfer. The only
/// retained state is `(subscriber, content_id) -> fee`, consulted by
/// [`SocialEngine::is_subscribed`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SocialEngine {
    profiles: HashMap<Principal, Profile>,
    subscriptions: HashMap<(Principal, u64), u64>,
    max_username_bytes: usize,
    max_bio_bytes: usize,
}

impl SocialEngine {
    pub fn new(params: &PlatformParams) -> Self {
        Self {
            profiles: HashMap::new(),
            subscriptions: HashMap::new(),
            max_username_bytes: params.max_username_bytes,
            max_bio_bytes: params.max_field_bytes,
        }
    }

    /// Create or replace the caller's profile. Idempotent upsert.
    pub fn set_profile(
        &mut self,
        caller: &Principal,
        username: impl Into<String>,
        bio: impl Into<String>,
        now: Timestamp,
    ) -> Result<(), SocialError> {
        let username = username.into();
        let bio = bio.into();
        if username.len() > self.max_username_bytes {
            return Err(SocialError::InvalidInput(format!(
                "username is {} bytes, limit is {}",
                username.len(),
                self.max_username_bytes
            )));
        }
        if bio.len() > self.max_bio_bytes {
            return Err(SocialError::InvalidInput(format!(
                "bio is {} bytes, limit is {}",
                bio.len(),
                self.max_bio_bytes
            )));
        }
        self.profiles.insert(
            caller.clone(),
            Profile {
                owner: caller.clone(),
                username,
                bio,
                updated_at: now,
            },
        );
        debug!(owner = %caller, "profile upserted");
        Ok(())
    }

    /// Look up a principal's profile.
    pub fn profile(&self, who: &Principal) -> Result<&Profile, SocialError> {
        self.profiles
            .get(who)
            .ok_or_else(|| SocialError::ProfileNotFound(who.to_string()))
    }

    /// Send `amount` from `caller` to `recipient`.
    ///
    /// Pass-or-fail: on error no value moved.
    pub fn tip(
        &mut self,
        ledger: &mut dyn Ledger,
        caller: &Principal,
        recipient: &Principal,
        amount: u64,
    ) -> Result<(), SocialError> {
        if amount == 0 {
            return Err(SocialError::ZeroAmount);
        }
        let available = ledger.balance_of(caller);
        if available < amount {
            return Err(SocialError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        ledger.transfer(caller, recipient, amount)?;
        debug!(from = %caller, to = %recipient, amount, "tip sent");
        Ok(())
    }

    /// Pay `fee` to `target` and record a subscription to `content_id`.
    pub fn subscribe(
        &mut self,
        ledger: &mut dyn Ledger,
        caller: &Principal,
        target: &Principal,
        content_id: u64,
        fee: u64,
    ) -> Result<(), SocialError> {
        if fee == 0 {
            return Err(SocialError::ZeroAmount);
        }
        let available = ledger.balance_of(caller);
        if available < fee {
            return Err(SocialError::InsufficientBalance {
                needed: fee,
                available,
            });
        }
        // The transfer is the only fallible step; the insert after it cannot
        // fail, so subscription state and ledger state move together.
        ledger.transfer(caller, target, fee)?;
        self.subscriptions.insert((caller.clone(), content_id), fee);
        debug!(subscriber = %caller, content_id, fee, "subscription created");
        Ok(())
    }

    /// Whether `who` has an active subscription to `content_id`.
    pub fn is_subscribed(&self, who: &Principal, content_id: u64) -> bool {
        self.subscriptions.contains_key(&(who.clone(), content_id))
    }
}
