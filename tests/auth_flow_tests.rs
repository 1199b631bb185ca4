//! End-to-end auth flow tests: login, hydration, registration, logout.
//!
//! These exercise the full path from a form draft through the auth
//! context down to the persisted JSON record.

use alumnext::auth::{AuthContext, AuthState, Role, SessionStore, MOCK_TOKEN};
use alumnext::forms::{AlumniDraft, Branch, StudentDraft};
use alumnext::routes::{guard, GuardDecision, Route};
use std::fs;
use tempfile::tempdir;

fn hydrated(dir: &std::path::Path) -> AuthContext {
    let mut ctx = AuthContext::new(SessionStore::new(dir));
    ctx.hydrate().unwrap();
    ctx
}

#[test]
fn test_login_produces_expected_session() {
    let dir = tempdir().unwrap();
    let mut ctx = hydrated(dir.path());

    ctx.login("a@b.edu", "x").unwrap();

    assert!(ctx.is_authenticated());
    let session = ctx.session().unwrap();
    assert_eq!(session.user.name, "a");
    assert_eq!(session.user.email, "a@b.edu");
    assert_eq!(session.role, Role::Student);
    assert_eq!(session.token, MOCK_TOKEN);
}

#[test]
fn test_persisted_record_matches_wire_format() {
    let dir = tempdir().unwrap();
    let mut ctx = hydrated(dir.path());
    ctx.login("a@b.edu", "x").unwrap();

    let raw = fs::read_to_string(dir.path().join("auth.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["user"]["name"], "a");
    assert_eq!(value["user"]["email"], "a@b.edu");
    assert_eq!(value["role"], "student");
    assert_eq!(value["token"], "mock-jwt-token");
}

#[test]
fn test_session_survives_restart() {
    let dir = tempdir().unwrap();
    {
        let mut ctx = hydrated(dir.path());
        ctx.login("asha@university.edu", "pw").unwrap();
    }

    // A fresh context over the same directory restores the session
    let ctx = hydrated(dir.path());
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.session().unwrap().user.email, "asha@university.edu");
    assert_eq!(guard(Route::Dashboard, &ctx), GuardDecision::Allow);
}

#[test]
fn test_student_registration_tags_role() {
    let dir = tempdir().unwrap();
    let mut ctx = hydrated(dir.path());

    let draft = StudentDraft {
        full_name: "Asha Rao".into(),
        username: "asha".into(),
        roll_number: "2024CS001".into(),
        branch: Some(Branch::Cse),
        year: "2024".into(),
        email: "asha@university.edu".into(),
        phone: "9876543210".into(),
        profile_file: None,
        password: "Secret1!".into(),
        confirm_password: "Secret1!".into(),
    };
    ctx.register_student(&draft).unwrap();

    assert_eq!(ctx.role(), Some(Role::Student));
    let session = ctx.session().unwrap();
    assert_eq!(session.user.name, "Asha Rao");
    assert_eq!(session.user.email, "asha@university.edu");
}

#[test]
fn test_alumni_registration_tags_role() {
    let dir = tempdir().unwrap();
    let mut ctx = hydrated(dir.path());

    let draft = AlumniDraft {
        full_name: "Ravi Kumar".into(),
        username: "ravi".into(),
        year_of_passing: "2019".into(),
        branch: Some(Branch::Ece),
        job_profile: "Backend Engineer".into(),
        company: "Initech".into(),
        linked_in: "https://linkedin.com/in/ravi".into(),
        email: "ravi@company.com".into(),
        phone: "9123456780".into(),
        password: "Secret1!".into(),
        confirm_password: "Secret1!".into(),
    };
    ctx.register_alumni(&draft).unwrap();

    assert_eq!(ctx.role(), Some(Role::Alumni));

    // Persisted role tag is lowercase on the wire
    let raw = fs::read_to_string(dir.path().join("auth.json")).unwrap();
    assert!(raw.contains("\"role\":\"alumni\""));
}

#[test]
fn test_logout_removes_record_and_blocks_dashboard() {
    let dir = tempdir().unwrap();
    let mut ctx = hydrated(dir.path());
    ctx.login("a@b.edu", "x").unwrap();

    ctx.logout().unwrap();

    assert!(!ctx.is_authenticated());
    assert_eq!(*ctx.state(), AuthState::Anonymous);
    assert!(!dir.path().join("auth.json").exists());
    assert_eq!(
        guard(Route::Dashboard, &ctx),
        GuardDecision::Redirect(Route::Login)
    );
}

#[test]
fn test_login_overwrites_previous_session() {
    let dir = tempdir().unwrap();
    let mut ctx = hydrated(dir.path());
    ctx.login("first@b.edu", "x").unwrap();
    ctx.login("second@b.edu", "y").unwrap();

    assert_eq!(ctx.session().unwrap().user.email, "second@b.edu");
    let restored = hydrated(dir.path());
    assert_eq!(restored.session().unwrap().user.email, "second@b.edu");
}
