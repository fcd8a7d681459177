//! Wire DTOs for the experiment-platform REST API.
//!
//! DESIGN
//! ======
//! The backend has grown field-name variants over time (`user_id` vs `id`,
//! `realname` vs `name`). Those variants are absorbed here with serde
//! aliases so everything past the network boundary sees one canonical
//! shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard response envelope: `code == 200` signals success, `message`
/// carries the human-readable verdict, `data` the payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Login payload sent to `POST /login`. The role the user picked in the
/// form is not transmitted; the server decides the role.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration payload for `POST /register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub realname: String,
    pub email: String,
    pub user_type: String,
}

/// User fields as the backend sends them, in any of its historical
/// spellings. Normalized into [`crate::state::session::Profile`] at the
/// session-store boundary.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawUserInfo {
    #[serde(alias = "id")]
    pub user_id: Option<i64>,
    #[serde(alias = "role")]
    pub user_type: Option<String>,
    #[serde(alias = "realname", alias = "name")]
    pub real_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    #[serde(default)]
    pub profile_completed: bool,
    pub student_id: Option<String>,
    pub class_id: Option<i64>,
}

/// A lab experiment as listed and detailed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub experiment_id: i64,
    pub experiment_name: String,
    pub class_id: i64,
    pub teacher_id: i64,
    #[serde(default)]
    pub description: String,
    pub publish_time: Option<String>,
    pub deadline: Option<String>,
}

/// One page of experiments. `total` is the overall row count, not the
/// page length.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ExperimentPage {
    #[serde(default)]
    pub data: Vec<Experiment>,
    #[serde(default)]
    pub total: i64,
}

/// A teaching class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub class_id: i64,
    pub class_name: String,
    #[serde(default)]
    pub student_count: i64,
}

/// One uploaded submission archive for an experiment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UploadRecord {
    pub upload_id: i64,
    pub experiment_id: i64,
    pub file_name: String,
    #[serde(default)]
    pub file_size: i64,
    pub upload_time: Option<String>,
}

/// Profile fields a student fills in to pass the completion gate.
#[derive(Clone, Debug, Serialize)]
pub struct ProfileUpdate {
    pub realname: String,
    pub email: String,
    pub student_id: Option<String>,
    pub class_id: Option<i64>,
}
