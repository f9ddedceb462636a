use super::*;
use crate::net::types::{Role, SessionUser};

fn record(code: &str) -> ApplicationRecord {
    ApplicationRecord {
        code: code.to_owned(),
        full_name: Some("Ann Lee".to_owned()),
        trn: Some("123456789".to_owned()),
        created_at: Some("2025-10-19T09:30:00".to_owned()),
        ..ApplicationRecord::default()
    }
}

fn details(code: &str, status: Option<ApprovalStatus>) -> ApplicationDetails {
    ApplicationDetails {
        application: record(code),
        certification: None,
        approval: status.map(|s| crate::net::types::Approval { status: Some(s), ..Default::default() }),
    }
}

fn staff_session(username: &str) -> SessionState {
    SessionState {
        user: Some(SessionUser {
            id: Some(3),
            username: username.to_owned(),
            role: Role::Staff,
            trn: None,
            email: None,
        }),
        restored: true,
    }
}

// =============================================================
// Row mapping
// =============================================================

#[test]
fn rows_are_numbered_from_one_with_placeholders() {
    let mut with_doctor = record("NHF-2");
    with_doctor.doctor_name = Some("Dr. Brown".to_owned());
    with_doctor.condition = Some("Asthma".to_owned());
    let rows = map_rows(&[record("NHF-1"), with_doctor], &HashMap::new());
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[0].doctor_name, "—");
    assert_eq!(rows[0].conditions_count, 0);
    assert_eq!(rows[0].status, ApprovalStatus::Pending);
    assert_eq!(rows[1].id, 2);
    assert_eq!(rows[1].doctor_name, "Dr. Brown");
    assert_eq!(rows[1].conditions_count, 1);
}

#[test]
fn record_status_wins_over_session_decision() {
    let mut r = record("NHF-1");
    r.status = Some(ApprovalStatus::Rejected);
    let decisions = HashMap::from([("NHF-1".to_owned(), ApprovalStatus::Approved)]);
    assert_eq!(map_rows(&[r], &decisions)[0].status, ApprovalStatus::Rejected);
}

// =============================================================
// Decision flow
// =============================================================

#[test]
fn decided_code_leaves_pending_list_and_dialog_closes() {
    let mut state = StaffState { records: vec![record("NHF-1"), record("NHF-2")], ..Default::default() };
    assert!(state.begin("NHF-1"));
    state.finish_lookup();
    state.open_details(details("NHF-1", None));

    assert!(state.begin("NHF-1"));
    state.record_decision("NHF-1", Decision::Approved);
    assert!(state.should_refresh_detail("NHF-1"));
    state.refresh_detail(details("NHF-1", Some(ApprovalStatus::Approved)));
    state.finish_decision();

    let pending: Vec<_> = state.pending_rows().into_iter().map(|r| r.code).collect();
    assert_eq!(pending, vec!["NHF-2".to_owned()]);
    assert!(!state.dialog_open);
    assert!(state.busy_code.is_none());
    assert_eq!(state.selected.map(|d| d.approval_status()), Some(ApprovalStatus::Approved));
}

#[test]
fn failed_decision_still_closes_dialog() {
    let mut state = StaffState::default();
    state.open_details(details("NHF-1", None));
    state.begin("NHF-1");
    state.finish_decision();
    assert!(!state.dialog_open);
    assert!(!state.is_busy("NHF-1"));
}

#[test]
fn busy_code_blocks_second_action() {
    let mut state = StaffState::default();
    assert!(state.begin("NHF-1"));
    assert!(state.is_busy("NHF-1"));
    assert!(!state.is_busy("NHF-2"));
    assert!(!state.begin("NHF-2"));
}

#[test]
fn detail_refresh_only_for_open_dialog_of_same_code() {
    let mut state = StaffState::default();
    state.open_details(details("NHF-1", None));
    assert!(!state.should_refresh_detail("NHF-2"));
    state.close_dialog();
    assert!(!state.should_refresh_detail("NHF-1"));
    state.refresh_detail(details("NHF-2", Some(ApprovalStatus::Rejected)));
    assert_eq!(state.selected.as_ref().map(|d| d.application.code.as_str()), Some("NHF-1"));
}

// =============================================================
// Approval request
// =============================================================

#[test]
fn approval_request_uses_session_reviewer() {
    let body = approval_request("NHF-1", Decision::Approved, &staff_session("kim@nhf.gov.jm")).unwrap();
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"app_code": "NHF-1", "action": "approved", "reviewer_username": "kim@nhf.gov.jm"})
    );
}

#[test]
fn approval_request_requires_reviewer() {
    assert_eq!(approval_request("NHF-1", Decision::Rejected, &SessionState::default()), Err(MISSING_REVIEWER));
    assert_eq!(approval_request("NHF-1", Decision::Rejected, &staff_session("  ")), Err(MISSING_REVIEWER));
}

#[test]
fn toast_text_per_decision() {
    assert_eq!(decision_toast(Decision::Approved), "Application approved");
    assert_eq!(decision_toast(Decision::Rejected), "Application rejected");
}

#[test]
fn begin_leaves_dialog_fields_untouched() {
    let mut state = StaffState::default();
    state.open_details(details("NHF-1", None));
    let before = (state.dialog_open, state.selected.clone());
    assert!(state.begin("NHF-1"));
    assert_eq!((state.dialog_open, state.selected.clone()), before);
}
