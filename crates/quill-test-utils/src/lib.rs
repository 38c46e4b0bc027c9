//! Test utilities for Quill crates.

use proptest::prelude::*;
use quill_authz::{Action, ArticleId, Principal, ResourceSnapshot, RoleToken, UserId};
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a principal.
pub fn principal(id: u64, role: RoleToken) -> Principal {
    Principal::new(id, role)
}

/// Build an article snapshot authored by `owner`.
pub fn article(id: u64, owner: u64) -> ResourceSnapshot {
    ResourceSnapshot::article(ArticleId::new(id), UserId::new(owner))
}

/// Build a user snapshot.
pub fn user(id: u64) -> ResourceSnapshot {
    ResourceSnapshot::user(UserId::new(id))
}

/// Writes `content` as `.quill/config.yaml` in a fresh project directory.
pub fn temp_project(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let quill_dir = dir.path().join(".quill");
    std::fs::create_dir_all(&quill_dir).expect("Failed to create .quill dir");
    let path = quill_dir.join("config.yaml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Any role.
pub fn arb_role() -> impl Strategy<Value = RoleToken> {
    prop::sample::select(RoleToken::ALL.to_vec())
}

/// Any action.
pub fn arb_action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

/// Small id space so owners and principals collide often.
pub fn arb_id() -> impl Strategy<Value = u64> {
    0u64..16
}

/// Any principal.
pub fn arb_principal() -> impl Strategy<Value = Principal> {
    (arb_id(), arb_role()).prop_map(|(id, role)| principal(id, role))
}

/// Any article snapshot.
pub fn arb_article() -> impl Strategy<Value = ResourceSnapshot> {
    (arb_id(), arb_id()).prop_map(|(id, owner)| article(id, owner))
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err and return the error.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
