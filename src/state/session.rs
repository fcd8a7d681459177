//! Session store: single source of truth for who is logged in and as what.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and user-aware pages read this state on every navigation.
//! Every mutation is mirrored into durable storage so a page reload
//! rehydrates the same session. Network access goes through the
//! [`AuthGateway`] seam so tests can script the remote side.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::types::{ApiResponse, LoginRequest, RawUserInfo};
use crate::util::storage::{BrowserStorage, SessionStorage};

/// Durable storage slot for the opaque credential string.
pub const TOKEN_KEY: &str = "token";
/// Durable storage slot for the serialized profile.
pub const USER_INFO_KEY: &str = "userInfo";
/// Durable storage slot for the role string.
pub const ROLE_KEY: &str = "role";

/// Closed role set. Anything the backend sends outside the two known
/// strings lands on `Unknown` and is treated as a corrupted session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    #[default]
    Unknown,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value {
            "student" => Self::Student,
            "teacher" => Self::Teacher,
            _ => Self::Unknown,
        }
    }

    /// Wire/storage representation. `Unknown` maps to the empty string,
    /// matching the unauthenticated storage state.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Unknown => "",
        }
    }
}

/// Canonical user profile, produced once from the backend's field-name
/// variants and typed from then on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub display_name: String,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub profile_completed: bool,
    pub student_id: Option<String>,
    pub class_id: Option<i64>,
}

impl Profile {
    /// Normalize wire fields. `fallback_username` covers the login response,
    /// which omits the username the client already knows.
    pub fn from_raw(raw: RawUserInfo, fallback_username: &str) -> Self {
        Self {
            user_id: raw.user_id.unwrap_or_default(),
            display_name: raw.real_name.unwrap_or_default(),
            email: raw.email.unwrap_or_default(),
            username: raw.username.unwrap_or_else(|| fallback_username.to_owned()),
            profile_completed: raw.profile_completed,
            student_id: raw.student_id,
            class_id: raw.class_id,
        }
    }
}

/// Session-level failures. Only login failures reach the user; logout and
/// profile-fetch failures are logged and absorbed.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The gateway rejected the credentials.
    #[error("authentication failed: {message}")]
    Authentication { message: String },
    /// Network or timeout failure talking to the gateway.
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Remote auth operations the session store depends on. Implemented over
/// HTTP by [`crate::net::auth::HttpGateway`] and by scripted fakes in tests.
/// Futures here are not `Send`; everything runs on the UI event loop.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<RawUserInfo>, SessionError>;
    async fn user_info(&self) -> Result<RawUserInfo, SessionError>;
    async fn logout(&self) -> Result<(), SessionError>;
}

/// The authenticated identity for this browser context.
///
/// Invariant: `token` is non-empty exactly when a login established a role
/// and profile. Mutations persist all three durable slots synchronously.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    token: String,
    role: Role,
    profile: Option<Profile>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::load(Arc::new(BrowserStorage))
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &!self.token.is_empty())
            .field("role", &self.role)
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Rehydrate from durable storage. Unreadable stored profile JSON is
    /// recovered silently: the whole session defaults to empty and the
    /// stale slots are cleared.
    pub fn load(storage: Arc<dyn SessionStorage>) -> Self {
        let token = storage.get(TOKEN_KEY).unwrap_or_default();
        let role = storage.get(ROLE_KEY).map(|r| Role::parse(&r)).unwrap_or_default();
        let profile = match storage.get(USER_INFO_KEY) {
            None => None,
            Some(raw) => match serde_json::from_str::<Profile>(&raw) {
                Ok(profile) => Some(profile),
                Err(err) => {
                    log::warn!("discarding unreadable stored session: {err}");
                    clear_durable_session(storage.as_ref());
                    return Self { storage, token: String::new(), role: Role::Unknown, profile: None };
                }
            },
        };
        Self { storage, token, role, profile }
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn profile_completed(&self) -> bool {
        self.profile.as_ref().is_some_and(|p| p.profile_completed)
    }

    /// Exchange credentials for a session. On any failure the prior session
    /// is left untouched.
    ///
    /// The backend decides the role; `selected_role` is only the form
    /// choice, and a mismatch is logged.
    ///
    /// # Errors
    ///
    /// [`SessionError::Authentication`] when the gateway rejects the
    /// credentials, [`SessionError::Transport`] when the call itself fails.
    pub async fn login(
        &mut self,
        gateway: &impl AuthGateway,
        username: &str,
        password: &str,
        selected_role: Role,
    ) -> Result<(), SessionError> {
        let request = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        let response = gateway.login(&request).await?;
        if response.code != 200 {
            return Err(SessionError::Authentication { message: response.message });
        }

        let raw = response.data.unwrap_or_default();
        let role = raw.user_type.as_deref().map_or(Role::Unknown, Role::parse);
        if role != selected_role {
            log::warn!("login role mismatch: form selected {selected_role:?}, server says {role:?}");
        }

        self.token = synthesize_token();
        self.role = role;
        self.profile = Some(Profile::from_raw(raw, username));
        self.persist();
        Ok(())
    }

    /// Return the profile, fetching it once if absent. Already-present
    /// profiles short-circuit without a network call. Fetch failures are
    /// soft: the session is already authenticated, so the caller gets
    /// `None` instead of an error.
    pub async fn fetch_profile(&mut self, gateway: &impl AuthGateway) -> Option<Profile> {
        if let Some(profile) = &self.profile {
            return Some(profile.clone());
        }
        match gateway.user_info().await {
            Ok(raw) => {
                self.role = raw.user_type.as_deref().map_or(self.role, Role::parse);
                let profile = Profile::from_raw(raw, "");
                self.profile = Some(profile.clone());
                self.persist();
                Some(profile)
            }
            Err(err) => {
                log::warn!("profile fetch failed: {err}");
                None
            }
        }
    }

    /// End the session. The remote call is best-effort; local state and
    /// durable storage are cleared unconditionally.
    pub async fn logout(&mut self, gateway: &impl AuthGateway) {
        if let Err(err) = gateway.logout().await {
            log::warn!("logout call failed, clearing local session anyway: {err}");
        }
        self.reset();
    }

    /// Synchronous, unconditional clear of in-memory state and durable
    /// storage. Also invoked by the unauthorized-response interceptor path.
    pub fn reset(&mut self) {
        self.token.clear();
        self.role = Role::Unknown;
        self.profile = None;
        clear_durable_session(self.storage.as_ref());
    }

    /// Replace the stored profile after a successful profile update, e.g.
    /// when a student completes the profile gate.
    pub fn apply_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.persist();
    }

    fn persist(&self) {
        self.storage.set(TOKEN_KEY, &self.token);
        self.storage.set(ROLE_KEY, self.role.as_str());
        match &self.profile {
            Some(profile) => {
                if let Ok(raw) = serde_json::to_string(profile) {
                    self.storage.set(USER_INFO_KEY, &raw);
                }
            }
            None => self.storage.remove(USER_INFO_KEY),
        }
    }
}

/// Clear the three durable session slots without touching in-memory state.
/// Used by [`SessionStore::reset`] and by the 401 interceptor, which runs
/// outside any store instance.
pub fn clear_durable_session(storage: &dyn SessionStorage) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_INFO_KEY);
    storage.remove(ROLE_KEY);
}

/// The backend does not issue tokens; any unique client-side string works.
fn synthesize_token() -> String {
    format!("api_token_{}", uuid::Uuid::new_v4().simple())
}
