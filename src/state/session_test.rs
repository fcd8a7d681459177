use super::*;

use std::cell::Cell;
use std::sync::Arc;

use futures::executor::block_on;

use crate::net::types::{ApiResponse, LoginRequest, RawUserInfo};
use crate::util::storage::{MemoryStorage, SessionStorage};

/// Scripted gateway covering success, rejection, and transport failure.
#[derive(Default)]
struct FakeGateway {
    login_code: u16,
    login_message: String,
    login_data: Option<RawUserInfo>,
    login_transport_fail: bool,
    user_info: Option<RawUserInfo>,
    user_info_calls: Cell<u32>,
    logout_fail: bool,
    logout_calls: Cell<u32>,
}

impl AuthGateway for FakeGateway {
    async fn login(&self, _request: &LoginRequest) -> Result<ApiResponse<RawUserInfo>, SessionError> {
        if self.login_transport_fail {
            return Err(SessionError::Transport("connection refused".to_owned()));
        }
        Ok(ApiResponse {
            code: self.login_code,
            message: self.login_message.clone(),
            data: self.login_data.clone(),
        })
    }

    async fn user_info(&self) -> Result<RawUserInfo, SessionError> {
        self.user_info_calls.set(self.user_info_calls.get() + 1);
        self.user_info
            .clone()
            .ok_or_else(|| SessionError::Transport("timed out".to_owned()))
    }

    async fn logout(&self) -> Result<(), SessionError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        if self.logout_fail {
            Err(SessionError::Transport("timed out".to_owned()))
        } else {
            Ok(())
        }
    }
}

fn student_raw() -> RawUserInfo {
    RawUserInfo {
        user_id: Some(1),
        user_type: Some("student".to_owned()),
        real_name: Some("Jack".to_owned()),
        email: Some("jack@example.com".to_owned()),
        username: None,
        profile_completed: false,
        student_id: Some("S2023001".to_owned()),
        class_id: Some(3),
    }
}

fn login_ok(data: RawUserInfo) -> FakeGateway {
    FakeGateway {
        login_code: 200,
        login_message: "login ok".to_owned(),
        login_data: Some(data),
        ..FakeGateway::default()
    }
}

fn memory_store() -> (Arc<MemoryStorage>, SessionStore) {
    let storage = Arc::new(MemoryStorage::default());
    let store = SessionStore::load(Arc::clone(&storage) as Arc<dyn SessionStorage>);
    (storage, store)
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_parses_known_strings() {
    assert_eq!(Role::parse("student"), Role::Student);
    assert_eq!(Role::parse("teacher"), Role::Teacher);
}

#[test]
fn role_parse_anything_else_is_unknown() {
    assert_eq!(Role::parse(""), Role::Unknown);
    assert_eq!(Role::parse("admin"), Role::Unknown);
    assert_eq!(Role::parse("Student"), Role::Unknown);
}

#[test]
fn role_storage_round_trip() {
    for role in [Role::Student, Role::Teacher] {
        assert_eq!(Role::parse(role.as_str()), role);
    }
    assert_eq!(Role::Unknown.as_str(), "");
}

// =============================================================
// Rehydration
// =============================================================

#[test]
fn empty_storage_rehydrates_unauthenticated() {
    let (_, store) = memory_store();
    assert!(!store.is_authenticated());
    assert_eq!(store.role(), Role::Unknown);
    assert!(store.profile().is_none());
}

#[test]
fn malformed_stored_profile_defaults_to_empty_session() {
    let storage = Arc::new(MemoryStorage::default());
    storage.set(TOKEN_KEY, "api_token_stale");
    storage.set(ROLE_KEY, "student");
    storage.set(USER_INFO_KEY, "{not valid json");

    let store = SessionStore::load(Arc::clone(&storage) as Arc<dyn SessionStorage>);
    assert!(!store.is_authenticated());
    assert_eq!(store.role(), Role::Unknown);
    assert!(store.profile().is_none());
    // Stale slots are cleared, not left to corrupt the next load.
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
    assert_eq!(storage.get(USER_INFO_KEY), None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_establishes_session() {
    let (_, mut store) = memory_store();
    let gateway = login_ok(student_raw());

    block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap();

    assert!(store.is_authenticated());
    assert!(store.token().starts_with("api_token_"));
    assert_eq!(store.role(), Role::Student);
    let profile = store.profile().unwrap();
    assert_eq!(profile.user_id, 1);
    assert_eq!(profile.display_name, "Jack");
    assert_eq!(profile.username, "jack");
    assert_eq!(profile.student_id.as_deref(), Some("S2023001"));
}

#[test]
fn login_persists_all_three_slots() {
    let (storage, mut store) = memory_store();
    let gateway = login_ok(student_raw());

    block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap();

    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some(store.token()));
    assert_eq!(storage.get(ROLE_KEY).as_deref(), Some("student"));
    let stored: Profile = serde_json::from_str(&storage.get(USER_INFO_KEY).unwrap()).unwrap();
    assert_eq!(Some(&stored), store.profile());
}

#[test]
fn rejected_login_surfaces_error_and_leaves_session_untouched() {
    let (storage, mut store) = memory_store();
    let gateway = FakeGateway {
        login_code: 401,
        login_message: "bad credentials".to_owned(),
        ..FakeGateway::default()
    };

    let err = block_on(store.login(&gateway, "alice", "wrongpass", Role::Student)).unwrap_err();
    match err {
        SessionError::Authentication { message } => assert_eq!(message, "bad credentials"),
        other => panic!("expected authentication error, got {other:?}"),
    }
    assert!(!store.is_authenticated());
    assert_eq!(store.role(), Role::Unknown);
    assert!(store.profile().is_none());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn login_transport_failure_leaves_session_untouched() {
    let (_, mut store) = memory_store();
    let gateway = FakeGateway {
        login_transport_fail: true,
        ..FakeGateway::default()
    };

    let err = block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap_err();
    assert!(matches!(err, SessionError::Transport(_)));
    assert!(!store.is_authenticated());
}

#[test]
fn server_role_wins_over_form_selection() {
    let (_, mut store) = memory_store();
    let mut raw = student_raw();
    raw.user_type = Some("teacher".to_owned());
    let gateway = login_ok(raw);

    block_on(store.login(&gateway, "wang", "secret", Role::Student)).unwrap();
    assert_eq!(store.role(), Role::Teacher);
}

#[test]
fn token_role_invariant_holds_after_login_and_logout() {
    let (_, mut store) = memory_store();
    let gateway = login_ok(student_raw());

    block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap();
    assert!(store.is_authenticated());
    assert!(matches!(store.role(), Role::Student | Role::Teacher));

    block_on(store.logout(&gateway));
    assert!(!store.is_authenticated());
    assert_eq!(store.role(), Role::Unknown);
    assert!(store.profile().is_none());
}

// =============================================================
// Profile fetch
// =============================================================

#[test]
fn fetch_profile_short_circuits_when_present() {
    let (_, mut store) = memory_store();
    let gateway = login_ok(student_raw());
    block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap();

    let first = block_on(store.fetch_profile(&gateway)).unwrap();
    let second = block_on(store.fetch_profile(&gateway)).unwrap();
    assert_eq!(first, second);
    assert_eq!(gateway.user_info_calls.get(), 0);
}

#[test]
fn fetch_profile_fetches_and_persists_when_absent() {
    let (storage, mut store) = memory_store();
    let gateway = FakeGateway {
        user_info: Some(student_raw()),
        ..FakeGateway::default()
    };

    let profile = block_on(store.fetch_profile(&gateway)).unwrap();
    assert_eq!(profile.user_id, 1);
    assert_eq!(gateway.user_info_calls.get(), 1);
    assert!(storage.get(USER_INFO_KEY).is_some());

    // Second call is served from the store.
    let again = block_on(store.fetch_profile(&gateway)).unwrap();
    assert_eq!(again, profile);
    assert_eq!(gateway.user_info_calls.get(), 1);
}

#[test]
fn fetch_profile_transport_failure_is_soft() {
    let (_, mut store) = memory_store();
    let gateway = FakeGateway::default(); // user_info: None -> transport error

    assert!(block_on(store.fetch_profile(&gateway)).is_none());
    assert_eq!(gateway.user_info_calls.get(), 1);
}

// =============================================================
// Logout / reset
// =============================================================

#[test]
fn logout_timeout_still_clears_session_and_storage() {
    let (storage, mut store) = memory_store();
    let login_gateway = login_ok(student_raw());
    block_on(store.login(&login_gateway, "jack", "secret", Role::Student)).unwrap();

    let gateway = FakeGateway {
        logout_fail: true,
        ..FakeGateway::default()
    };
    block_on(store.logout(&gateway));

    assert_eq!(gateway.logout_calls.get(), 1);
    assert!(!store.is_authenticated());
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_INFO_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
}

#[test]
fn clear_durable_session_removes_all_slots() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "t");
    storage.set(USER_INFO_KEY, "{}");
    storage.set(ROLE_KEY, "teacher");

    clear_durable_session(&storage);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_INFO_KEY), None);
    assert_eq!(storage.get(ROLE_KEY), None);
}

// =============================================================
// Reload round trip
// =============================================================

#[test]
fn login_survives_simulated_reload() {
    let storage = Arc::new(MemoryStorage::default());
    let mut store = SessionStore::load(Arc::clone(&storage) as Arc<dyn SessionStorage>);
    let gateway = login_ok(student_raw());
    block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap();

    let reloaded = SessionStore::load(Arc::clone(&storage) as Arc<dyn SessionStorage>);
    assert_eq!(reloaded.token(), store.token());
    assert_eq!(reloaded.role(), store.role());
    assert_eq!(reloaded.profile(), store.profile());
}

// =============================================================
// Profile updates
// =============================================================

#[test]
fn apply_profile_persists_completion_flag() {
    let (storage, mut store) = memory_store();
    let gateway = login_ok(student_raw());
    block_on(store.login(&gateway, "jack", "secret", Role::Student)).unwrap();
    assert!(!store.profile_completed());

    let mut profile = store.profile().unwrap().clone();
    profile.profile_completed = true;
    store.apply_profile(profile);

    assert!(store.profile_completed());
    let stored: Profile = serde_json::from_str(&storage.get(USER_INFO_KEY).unwrap()).unwrap();
    assert!(stored.profile_completed);
}
