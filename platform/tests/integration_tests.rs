//! Integration tests exercising the full platform:
//! content lifecycle → governance → tipping/subscriptions → events →
//! snapshot restore.
//!
//! These tests wire together components that are normally only connected
//! inside `platform.rs`, verifying the system works end-to-end — not just
//! in isolation.

use commons_ledger::MemoryLedger;
use commons_platform::{Platform, RecordingSink, SharedPlatform};
use commons_types::{ErrorCode, PlatformParams, Principal};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn p(name: &str) -> Principal {
    Principal::new(name)
}

fn funded_platform(balances: &[(&str, u64)]) -> (Platform, RecordingSink) {
    let mut ledger = MemoryLedger::new();
    for (name, amount) in balances {
        ledger.mint(&p(name), *amount).expect("mint");
    }
    let sink = RecordingSink::new();
    let platform = Platform::new(
        PlatformParams::default(),
        Box::new(ledger),
        Box::new(sink.clone()),
    );
    (platform, sink)
}

// ---------------------------------------------------------------------------
// Content lifecycle
// ---------------------------------------------------------------------------

#[test]
fn content_lifecycle_end_to_end() {
    let (mut platform, sink) = funded_platform(&[]);
    let alice = p("alice");
    let bob = p("bob");

    let id = platform.create_content(&alice, "https://a.example/1").unwrap();
    assert_eq!(id, 1);

    // Gated by default: bob cannot read until granted.
    let err = platform.get_content(&bob, id).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::AccessDenied));

    platform.grant_access(&alice, id, &bob).unwrap();
    assert_eq!(
        platform.get_content(&bob, id).unwrap().url,
        "https://a.example/1"
    );

    platform
        .update_content(&alice, id, "https://a.example/2", vec![bob.clone()])
        .unwrap();
    platform.delete_content(&alice, id).unwrap();

    let err = platform.get_content(&alice, id).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::ContentNotFound));

    // A fresh record never reuses the retired id.
    let next = platform.create_content(&alice, "https://a.example/3").unwrap();
    assert_eq!(next, 2);

    assert_eq!(
        sink.actions(),
        vec![
            "content-created",
            "access-granted",
            "content-updated",
            "content-deleted",
            "content-created",
        ]
    );
}

#[test]
fn failed_operations_emit_no_events() {
    let (mut platform, sink) = funded_platform(&[]);
    let alice = p("alice");
    let mallory = p("mallory");

    let id = platform.create_content(&alice, "https://a").unwrap();
    assert!(platform.delete_content(&mallory, id).is_err());
    assert!(platform.create_content(&alice, "").is_err());
    assert!(platform.vote(&alice, 99, true, 5).is_err());

    assert_eq!(sink.actions(), vec!["content-created"]);
}

// ---------------------------------------------------------------------------
// Governance
// ---------------------------------------------------------------------------

#[test]
fn governance_quorum_scenario_through_the_facade() {
    let (mut platform, sink) =
        funded_platform(&[("yes", 1_000), ("no", 1_000), ("late", 1_000)]);
    let proposer = p("proposer");

    let id = platform.create_proposal(&proposer, "open the registry").unwrap();
    platform.vote(&p("yes"), id, true, 60).unwrap();
    platform.vote(&p("no"), id, false, 30).unwrap();

    // 90 < 100: not executable yet, state untouched, retry allowed.
    let err = platform.execute_proposal(&p("anyone"), id).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::CannotExecute));
    assert!(!platform.get_proposal(id).unwrap().executed);

    platform.vote(&p("late"), id, true, 10).unwrap();
    platform.execute_proposal(&p("anyone"), id).unwrap();
    assert!(platform.get_proposal(id).unwrap().executed);

    // Execution is one-shot.
    let err = platform.execute_proposal(&p("anyone"), id).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::CannotExecute));

    // Voting consulted the ledger but moved no tokens.
    assert_eq!(platform.balance_of(&p("yes")), 1_000);

    assert_eq!(
        sink.actions(),
        vec![
            "proposal-created",
            "vote-cast",
            "vote-cast",
            "vote-cast",
            "proposal-executed",
        ]
    );
}

#[test]
fn vote_weight_is_balance_gated() {
    let (mut platform, _sink) = funded_platform(&[("poor", 10)]);
    let id = platform.create_proposal(&p("a"), "anything").unwrap();

    let err = platform.vote(&p("poor"), id, true, 11).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::InsufficientBalance));

    let err = platform.vote(&p("poor"), id, true, 0).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::InvalidInput));

    platform.vote(&p("poor"), id, true, 10).unwrap();
    assert_eq!(platform.get_proposal(id).unwrap().votes_for, 10);
}

// ---------------------------------------------------------------------------
// Profiles, tipping, subscriptions
// ---------------------------------------------------------------------------

#[test]
fn tipping_and_subscriptions_move_value_atomically() {
    let (mut platform, sink) = funded_platform(&[("fan", 100)]);
    let fan = p("fan");
    let creator = p("creator");

    platform.set_profile(&creator, "creator", "makes things").unwrap();
    assert_eq!(platform.get_profile(&creator).unwrap().username, "creator");

    let content = platform.create_content(&creator, "https://c/1").unwrap();

    platform.tip_user(&fan, &creator, 30).unwrap();
    assert_eq!(platform.balance_of(&fan), 70);
    assert_eq!(platform.balance_of(&creator), 30);

    // Insufficient funds: no transfer, no event.
    let err = platform.tip_user(&fan, &creator, 71).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::InsufficientBalance));
    assert_eq!(platform.balance_of(&fan), 70);

    platform.subscribe(&fan, &creator, content, 25).unwrap();
    assert!(platform.is_subscribed(&fan, content));
    assert_eq!(platform.balance_of(&creator), 55);

    assert_eq!(
        sink.actions(),
        vec![
            "profile-updated",
            "content-created",
            "tip-sent",
            "subscription-created",
        ]
    );
}

#[test]
fn missing_profile_maps_to_wire_code() {
    let (platform, _sink) = funded_platform(&[]);
    let err = platform.get_profile(&p("ghost")).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::ProfileNotFound));
}

// ---------------------------------------------------------------------------
// Single-writer handle
// ---------------------------------------------------------------------------

#[test]
fn shared_platform_serializes_operations() {
    let (platform, _sink) = funded_platform(&[]);
    let shared = SharedPlatform::new(platform);
    let alice = p("alice");

    let id = shared.with(|pf| pf.create_content(&alice, "https://a")).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = shared.clone();
            let owner = alice.clone();
            std::thread::spawn(move || {
                shared
                    .with(|pf| pf.grant_access(&owner, id, &p(&format!("u{i}"))))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let len = shared.with(|pf| pf.get_content(&alice, id).unwrap().access_list.len());
    assert_eq!(len, 4);
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshot_restores_engine_state_but_not_the_ledger() {
    let (mut platform, _sink) = funded_platform(&[("voter", 500)]);
    let alice = p("alice");

    let content = platform.create_content(&alice, "https://a").unwrap();
    platform.grant_access(&alice, content, &p("bob")).unwrap();
    let proposal = platform.create_proposal(&alice, "keep going").unwrap();
    platform.vote(&p("voter"), proposal, true, 40).unwrap();
    platform.set_profile(&alice, "alice", "hi").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("commons.snapshot");
    platform.save_snapshot(&path).unwrap();

    // Restore against a fresh, differently funded ledger.
    let mut ledger = MemoryLedger::new();
    ledger.mint(&p("voter"), 60).unwrap();
    let restored = Platform::load_snapshot(
        &path,
        Box::new(ledger),
        Box::new(RecordingSink::new()),
    )
    .unwrap();

    let record = restored.get_content(&alice, content).unwrap();
    assert_eq!(record.url, "https://a");
    assert_eq!(record.access_list.len(), 1);
    assert_eq!(restored.get_proposal(proposal).unwrap().votes_for, 40);
    assert_eq!(restored.get_profile(&alice).unwrap().username, "alice");
    // Balances came from the attached ledger, not the snapshot.
    assert_eq!(restored.balance_of(&p("voter")), 60);
}
