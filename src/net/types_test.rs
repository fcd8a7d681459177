use super::*;

// =============================================================
// ApiResponse envelope
// =============================================================

#[test]
fn api_response_parses_success_envelope() {
    let json = r#"{"code":200,"message":"ok","data":{"user_id":7,"user_type":"student"}}"#;
    let resp: ApiResponse<RawUserInfo> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.code, 200);
    assert_eq!(resp.data.unwrap().user_id, Some(7));
}

#[test]
fn api_response_tolerates_missing_data() {
    let json = r#"{"code":401,"message":"bad credentials"}"#;
    let resp: ApiResponse<RawUserInfo> = serde_json::from_str(json).unwrap();
    assert_eq!(resp.code, 401);
    assert!(resp.data.is_none());
}

// =============================================================
// RawUserInfo field aliases
// =============================================================

#[test]
fn raw_user_info_accepts_canonical_names() {
    let json = r#"{"user_id":1,"user_type":"teacher","realname":"Wang","email":"w@x.io"}"#;
    let raw: RawUserInfo = serde_json::from_str(json).unwrap();
    assert_eq!(raw.user_id, Some(1));
    assert_eq!(raw.user_type.as_deref(), Some("teacher"));
    assert_eq!(raw.real_name.as_deref(), Some("Wang"));
}

#[test]
fn raw_user_info_accepts_legacy_aliases() {
    let json = r#"{"id":2,"role":"student","name":"Jack"}"#;
    let raw: RawUserInfo = serde_json::from_str(json).unwrap();
    assert_eq!(raw.user_id, Some(2));
    assert_eq!(raw.user_type.as_deref(), Some("student"));
    assert_eq!(raw.real_name.as_deref(), Some("Jack"));
}

#[test]
fn raw_user_info_profile_completed_defaults_false() {
    let raw: RawUserInfo = serde_json::from_str(r#"{"user_id":3}"#).unwrap();
    assert!(!raw.profile_completed);
    assert!(raw.student_id.is_none());
    assert!(raw.class_id.is_none());
}

// =============================================================
// ExperimentPage
// =============================================================

#[test]
fn experiment_page_parses_rows_and_total() {
    let json = r#"{"data":[{"experiment_id":1,"experiment_name":"Sorting","class_id":3,"teacher_id":2,"description":"quicksort lab"}],"total":12}"#;
    let page: ExperimentPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total, 12);
    assert_eq!(page.data[0].experiment_name, "Sorting");
}

#[test]
fn experiment_page_defaults_to_empty() {
    let page: ExperimentPage = serde_json::from_str("{}").unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 0);
}
