//! Auth endpoints and the HTTP-backed [`AuthGateway`].

use serde::Serialize;

use super::http;
use super::types::{ApiResponse, LoginRequest, ProfileUpdate, RawUserInfo, RegisterRequest};
use crate::state::session::{AuthGateway, SessionError};

/// Production gateway: the session store's remote side, over gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGateway;

impl AuthGateway for HttpGateway {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<RawUserInfo>, SessionError> {
        http::post_json("/login", request).await
    }

    async fn user_info(&self) -> Result<RawUserInfo, SessionError> {
        http::get_json("/auth/user-info").await
    }

    async fn logout(&self) -> Result<(), SessionError> {
        http::post_empty("/auth/logout").await
    }
}

/// Create a new account.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails; a gateway-side
/// rejection comes back in the envelope's `code`/`message`.
pub async fn register(request: &RegisterRequest) -> Result<ApiResponse<RawUserInfo>, SessionError> {
    http::post_json("/register", request).await
}

/// Update profile fields for the logged-in user.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn update_profile(
    update: &ProfileUpdate,
) -> Result<ApiResponse<RawUserInfo>, SessionError> {
    http::post_json("/profile/update", update).await
}

/// Change the account password.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn change_password(
    old_password: &str,
    new_password: &str,
) -> Result<ApiResponse<serde_json::Value>, SessionError> {
    #[derive(Serialize)]
    struct ChangePassword<'a> {
        old_password: &'a str,
        new_password: &'a str,
    }
    http::post_json("/auth/change-password", &ChangePassword { old_password, new_password }).await
}
