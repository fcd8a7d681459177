//! Experiment endpoints: CRUD for teachers, list/submit for students.

use serde::Serialize;

use super::http;
use super::types::{ApiResponse, Experiment, ExperimentPage};
use crate::state::session::SessionError;

/// Fields a teacher fills in when creating or editing an experiment.
#[derive(Clone, Debug, Serialize)]
pub struct ExperimentDraft {
    pub experiment_name: String,
    pub class_id: i64,
    pub description: String,
    pub deadline: Option<String>,
}

/// One page of the global experiment list.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn fetch_experiments(page: i64, limit: i64) -> Result<ExperimentPage, SessionError> {
    http::get_json(&format!("/experiments?page={page}&limit={limit}")).await
}

/// One page of the experiments assigned to the logged-in student.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn fetch_student_experiments(
    page: i64,
    limit: i64,
) -> Result<ExperimentPage, SessionError> {
    http::get_json(&format!("/student/experiments?page={page}&limit={limit}")).await
}

/// Full detail for one experiment.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn fetch_experiment(id: i64) -> Result<Experiment, SessionError> {
    http::get_json(&format!("/experiments/{id}")).await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn create_experiment(
    draft: &ExperimentDraft,
) -> Result<ApiResponse<Experiment>, SessionError> {
    http::post_json("/experiments", draft).await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn update_experiment(
    id: i64,
    draft: &ExperimentDraft,
) -> Result<ApiResponse<Experiment>, SessionError> {
    http::put_json(&format!("/experiments/{id}"), draft).await
}

/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn delete_experiment(id: i64) -> Result<ApiResponse<serde_json::Value>, SessionError> {
    http::delete_json(&format!("/experiments/{id}")).await
}

/// Submit a student's answer for an experiment.
///
/// # Errors
///
/// [`SessionError::Transport`] when the call fails.
pub async fn submit_experiment(
    id: i64,
    content: &serde_json::Value,
) -> Result<ApiResponse<serde_json::Value>, SessionError> {
    http::post_json(&format!("/student/experiments/{id}/submit"), content).await
}
