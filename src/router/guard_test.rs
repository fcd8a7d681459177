use super::*;

use std::sync::Arc;

use crate::state::session::{Profile, ROLE_KEY, Role, SessionStore, TOKEN_KEY, USER_INFO_KEY};
use crate::util::storage::{MemoryStorage, SessionStorage};

fn profile(role: Role, completed: bool) -> Profile {
    Profile {
        user_id: 1,
        display_name: "Jack".to_owned(),
        email: "jack@example.com".to_owned(),
        username: "jack".to_owned(),
        profile_completed: completed,
        student_id: if role == Role::Student { Some("S2023001".to_owned()) } else { None },
        class_id: None,
    }
}

/// Build a session by rehydrating scripted storage slots, the same path a
/// real page load takes.
fn session(token: &str, role: &str, profile: Option<Profile>) -> SessionStore {
    let storage = Arc::new(MemoryStorage::default());
    if !token.is_empty() {
        storage.set(TOKEN_KEY, token);
    }
    storage.set(ROLE_KEY, role);
    if let Some(p) = profile {
        storage.set(USER_INFO_KEY, &serde_json::to_string(&p).unwrap());
    }
    SessionStore::load(storage)
}

fn unauthenticated() -> SessionStore {
    session("", "", None)
}

fn student(completed: bool) -> SessionStore {
    session("api_token_x", "student", Some(profile(Role::Student, completed)))
}

fn teacher() -> SessionStore {
    session("api_token_x", "teacher", Some(profile(Role::Teacher, true)))
}

fn redirect_to(path: &str) -> GuardOutcome {
    GuardOutcome::Redirect { path: path.to_owned(), replace: false }
}

// =============================================================
// Public targets
// =============================================================

#[test]
fn unauthenticated_may_visit_login_and_register() {
    let s = unauthenticated();
    assert_eq!(evaluate(&s, "/"), GuardOutcome::Allow);
    assert_eq!(evaluate(&s, "/register"), GuardOutcome::Allow);
}

#[test]
fn authenticated_teacher_is_bounced_from_login_to_home() {
    assert_eq!(evaluate(&teacher(), "/"), redirect_to(TEACHER_HOME));
    assert_eq!(evaluate(&teacher(), "/register"), redirect_to(TEACHER_HOME));
}

#[test]
fn authenticated_student_is_bounced_from_login_to_home() {
    assert_eq!(evaluate(&student(true), "/"), redirect_to(STUDENT_HOME));
}

#[test]
fn token_with_unusable_role_fails_open_to_login() {
    let s = session("api_token_x", "superuser", None);
    assert_eq!(evaluate(&s, "/"), GuardOutcome::ResetAndAllow);
}

// =============================================================
// Authentication requirement
// =============================================================

#[test]
fn unauthenticated_protected_target_redirects_to_login() {
    let s = unauthenticated();
    assert_eq!(evaluate(&s, "/teacher/home"), redirect_to(LOGIN_PATH));
    assert_eq!(evaluate(&s, "/student/experiment-list"), redirect_to(LOGIN_PATH));
}

// =============================================================
// Profile-completion gate
// =============================================================

#[test]
fn incomplete_student_profile_gates_navigation() {
    let outcome = evaluate(&student(false), "/student/experiment-list");
    assert_eq!(
        outcome,
        GuardOutcome::Redirect {
            path: "/student/profile?redirect=/student/experiment-list&first_login=true".to_owned(),
            replace: true,
        }
    );
}

#[test]
fn profile_paths_bypass_the_gate() {
    assert_eq!(evaluate(&student(false), "/student/profile"), GuardOutcome::Allow);
}

#[test]
fn gate_applies_before_role_scoping() {
    let outcome = evaluate(&student(false), "/teacher/home");
    assert!(matches!(
        outcome,
        GuardOutcome::Redirect { path, replace: true } if path.starts_with(STUDENT_PROFILE)
    ));
}

#[test]
fn completed_profile_is_not_gated() {
    assert_eq!(evaluate(&student(true), "/student/experiment-list"), GuardOutcome::Allow);
}

#[test]
fn missing_profile_record_counts_as_incomplete() {
    let s = session("api_token_x", "student", None);
    assert!(matches!(
        evaluate(&s, "/student/home"),
        GuardOutcome::Redirect { replace: true, .. }
    ));
}

#[test]
fn teachers_are_never_profile_gated() {
    let s = session("api_token_x", "teacher", Some(profile(Role::Teacher, false)));
    assert_eq!(evaluate(&s, "/teacher/home"), GuardOutcome::Allow);
}

// =============================================================
// Role scoping
// =============================================================

#[test]
fn teacher_visiting_student_pages_goes_home() {
    assert_eq!(evaluate(&teacher(), "/student/home"), redirect_to(TEACHER_HOME));
}

#[test]
fn student_visiting_teacher_pages_goes_home() {
    assert_eq!(evaluate(&student(true), "/teacher/experiment-manage"), redirect_to(STUDENT_HOME));
}

#[test]
fn matching_role_is_allowed_through() {
    assert_eq!(evaluate(&teacher(), "/teacher/class-manage"), GuardOutcome::Allow);
    assert_eq!(evaluate(&student(true), "/student/result"), GuardOutcome::Allow);
}

// =============================================================
// Determinism
// =============================================================

#[test]
fn evaluation_is_deterministic_for_fixed_input() {
    let s = student(false);
    let first = evaluate(&s, "/student/result");
    let second = evaluate(&s, "/student/result");
    assert_eq!(first, second);
}
