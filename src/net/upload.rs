//! Submission-archive upload endpoints.
//!
//! Uploads are multipart form posts, so this module is browser-only: the
//! `FormData` payload has no SSR equivalent.

use super::http;
use super::types::{ApiResponse, UploadRecord};
use crate::state::session::SessionError;

/// Upload a student's experiment archive (zip/rar/7z). The form carries
/// `experimentId`, `studentId`, and the file itself.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
#[cfg(feature = "hydrate")]
pub async fn upload_experiment_archive(
    form: web_sys::FormData,
) -> Result<ApiResponse<serde_json::Value>, SessionError> {
    let request = http::with_session_headers(gloo_net::http::Request::post(
        "/api/experiments/upload",
    ))
    .body(form)
    .map_err(|e| SessionError::Transport(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| SessionError::Transport(e.to_string()))?;
    if http::intercept_unauthorized(&resp) {
        return Err(SessionError::Transport("unauthorized".to_owned()));
    }
    resp.json()
        .await
        .map_err(|e| SessionError::Transport(e.to_string()))
}

/// Upload history for one experiment.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn fetch_upload_history(experiment_id: i64) -> Result<Vec<UploadRecord>, SessionError> {
    http::get_json(&format!("/api/experiments/{experiment_id}/uploads")).await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn delete_upload(upload_id: i64) -> Result<ApiResponse<serde_json::Value>, SessionError> {
    http::delete_json(&format!("/uploads/{upload_id}")).await
}
