//! Class-management endpoints (teacher side).

use serde::Serialize;

use super::http;
use super::types::{ApiResponse, ClassInfo};
use crate::state::session::SessionError;

#[derive(Clone, Debug, Serialize)]
pub struct ClassDraft {
    pub class_name: String,
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn fetch_classes() -> Result<Vec<ClassInfo>, SessionError> {
    http::get_json("/classes").await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn create_class(draft: &ClassDraft) -> Result<ApiResponse<ClassInfo>, SessionError> {
    http::post_json("/classes", draft).await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn update_class(
    id: i64,
    draft: &ClassDraft,
) -> Result<ApiResponse<ClassInfo>, SessionError> {
    http::put_json(&format!("/classes/{id}"), draft).await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn delete_class(id: i64) -> Result<ApiResponse<serde_json::Value>, SessionError> {
    http::delete_json(&format!("/classes/{id}")).await
}
