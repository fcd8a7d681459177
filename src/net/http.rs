//! Shared HTTP plumbing for the REST wrappers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request carries the session headers read from durable storage, and
//! every response passes the unauthorized interceptor: an HTTP 401 from any
//! endpoint clears the durable session and hard-navigates to the login
//! page. Browser-only (`hydrate`); SSR paths return transport errors.
//!
//! Paths are same-origin (`/login`, `/experiments`, …); the dev server
//! proxies them to the backend.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::SessionError;

#[cfg(feature = "hydrate")]
use crate::state::session::{self, Profile};
#[cfg(feature = "hydrate")]
use crate::util::storage::{BrowserStorage, SessionStorage};

#[cfg(feature = "hydrate")]
pub(crate) fn with_session_headers(
    builder: gloo_net::http::RequestBuilder,
) -> gloo_net::http::RequestBuilder {
    let storage = BrowserStorage;
    let mut builder = builder;
    if let Some(token) = storage.get(session::TOKEN_KEY).filter(|t| !t.is_empty()) {
        builder = builder.header("Authorization", &format!("Bearer {token}"));
    }
    // Older backend revisions key some lookups off an explicit user id.
    if let Some(raw) = storage.get(session::USER_INFO_KEY) {
        if let Ok(profile) = serde_json::from_str::<Profile>(&raw) {
            builder = builder.header("User-ID", &profile.user_id.to_string());
        }
    }
    builder
}

/// Treat an HTTP 401 from anywhere as "session over": clear the durable
/// slots and force navigation to the login page.
#[cfg(feature = "hydrate")]
pub(crate) fn intercept_unauthorized(resp: &gloo_net::http::Response) -> bool {
    if resp.status() != 401 {
        return false;
    }
    session::clear_durable_session(&BrowserStorage);
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
    true
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> SessionError {
    SessionError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, SessionError> {
    if intercept_unauthorized(&resp) {
        return Err(SessionError::Transport("unauthorized".to_owned()));
    }
    resp.json::<T>().await.map_err(transport)
}

/// # Errors
///
/// [`SessionError::Transport`] on network failure, an unauthorized
/// response, or an unparsable body.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_session_headers(gloo_net::http::Request::get(path))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SessionError::Transport("not available on server".to_owned()))
    }
}

/// # Errors
///
/// [`SessionError::Transport`] on network failure, an unauthorized
/// response, or an unparsable body.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(gloo_net::http::Request::post(path))
            .json(body)
            .map_err(transport)?;
        let resp = request.send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(SessionError::Transport("not available on server".to_owned()))
    }
}

/// # Errors
///
/// [`SessionError::Transport`] on network failure, an unauthorized
/// response, or an unparsable body.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let request = with_session_headers(gloo_net::http::Request::put(path))
            .json(body)
            .map_err(transport)?;
        let resp = request.send().await.map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(SessionError::Transport("not available on server".to_owned()))
    }
}

/// # Errors
///
/// [`SessionError::Transport`] on network failure, an unauthorized
/// response, or an unparsable body.
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_session_headers(gloo_net::http::Request::delete(path))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SessionError::Transport("not available on server".to_owned()))
    }
}

/// POST with no payload, discarding the response body.
///
/// # Errors
///
/// [`SessionError::Transport`] on network failure or a non-success status.
pub async fn post_empty(path: &str) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_session_headers(gloo_net::http::Request::post(path))
            .send()
            .await
            .map_err(transport)?;
        if intercept_unauthorized(&resp) {
            return Err(SessionError::Transport("unauthorized".to_owned()));
        }
        if !resp.ok() {
            return Err(SessionError::Transport(format!("request failed: {}", resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(SessionError::Transport("not available on server".to_owned()))
    }
}
