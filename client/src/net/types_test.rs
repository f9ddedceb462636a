use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Applicant).unwrap(), "\"applicant\"");
    assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
    assert_eq!(serde_json::to_string(&Role::Staff).unwrap(), "\"staff\"");
}

#[test]
fn role_parse_accepts_known_roles_only() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_routes_and_endpoints() {
    assert_eq!(Role::Applicant.home_path(), "/applicant");
    assert_eq!(Role::Doctor.home_path(), "/doctor");
    assert_eq!(Role::Staff.home_path(), "/staff");
    assert_eq!(Role::Applicant.register_endpoint(), "/applicants/register");
    assert_eq!(Role::Doctor.register_endpoint(), "/doctor/register");
    assert_eq!(Role::Staff.register_endpoint(), "/staff/register");
}

// =============================================================
// Session record
// =============================================================

#[test]
fn session_user_reads_minimal_record() {
    let user: SessionUser = serde_json::from_str(r#"{"username":"jane","role":"doctor"}"#).unwrap();
    assert_eq!(user.username, "jane");
    assert_eq!(user.role, Role::Doctor);
    assert!(user.id.is_none());
    assert!(user.trn.is_none());
}

#[test]
fn login_response_keeps_typed_email() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"ok":true,"id":7,"username":"a@b.com","role":"applicant"}"#).unwrap();
    let session = resp.into_session(" a@b.com ");
    assert_eq!(session.id, Some(7));
    assert_eq!(session.role, Role::Applicant);
    assert_eq!(session.email.as_deref(), Some("a@b.com"));
}

#[test]
fn login_response_without_email_identifier() {
    let resp: LoginResponse = serde_json::from_str(r#"{"id":1,"username":"bob","role":"staff"}"#).unwrap();
    assert!(resp.into_session("bob").email.is_none());
}

// =============================================================
// Application list
// =============================================================

#[test]
fn application_list_accepts_wrapped_shape() {
    let raw = r#"{"applications":[{"code":"NHF-1","full_name":"Ann Lee","trn":"123","condition":null}]}"#;
    let records = serde_json::from_str::<ApplicationList>(raw).unwrap().into_records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "NHF-1");
    assert_eq!(records[0].full_name.as_deref(), Some("Ann Lee"));
    assert!(records[0].condition.is_none());
    assert!(records[0].status.is_none());
}

#[test]
fn application_list_accepts_bare_array() {
    let raw = r#"[{"code":"NHF-1"},{"code":"NHF-2","status":"approved"}]"#;
    let records = serde_json::from_str::<ApplicationList>(raw).unwrap().into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].status, Some(ApprovalStatus::Approved));
}

#[test]
fn application_list_wrapped_without_key_is_empty() {
    let records = serde_json::from_str::<ApplicationList>("{}").unwrap().into_records();
    assert!(records.is_empty());
}

// =============================================================
// Details triple
// =============================================================

fn details_with(cert: Option<Certification>, condition: Option<&str>) -> ApplicationDetails {
    ApplicationDetails {
        application: ApplicationRecord {
            code: "NHF-1".to_owned(),
            condition: condition.map(str::to_owned),
            ..ApplicationRecord::default()
        },
        certification: cert,
        approval: None,
    }
}

#[test]
fn details_missing_approval_is_pending() {
    assert_eq!(details_with(None, None).approval_status(), ApprovalStatus::Pending);
}

#[test]
fn details_parses_backend_triple() {
    let raw = r#"{
        "application": {"code":"NHF-1","full_name":"Ann Lee"},
        "certification": null,
        "approval": {"status":"approved","reviewer_username":"staff","reviewed_at":null,"reason":null}
    }"#;
    let details: ApplicationDetails = serde_json::from_str(raw).unwrap();
    assert!(details.certification.is_none());
    assert_eq!(details.approval_status(), ApprovalStatus::Approved);
}

#[test]
fn condition_list_prefers_certified_conditions() {
    let cert = Certification {
        certified_conditions: Some("Asthma (Mild), Diabetes (Severe)".to_owned()),
        ..Certification::default()
    };
    assert_eq!(
        details_with(Some(cert), Some("Flu")).condition_list(),
        vec!["Asthma (Mild)".to_owned(), "Diabetes (Severe)".to_owned()]
    );
}

#[test]
fn condition_list_reads_conditions_json() {
    let cert = Certification {
        conditions_json: Some(r#"["Asthma (Mild)"]"#.to_owned()),
        ..Certification::default()
    };
    assert_eq!(details_with(Some(cert), None).condition_list(), vec!["Asthma (Mild)".to_owned()]);
}

#[test]
fn condition_list_falls_back_to_application_condition() {
    let cert = Certification { conditions_json: Some("[]".to_owned()), ..Certification::default() };
    assert_eq!(details_with(Some(cert), Some("Hypertension")).condition_list(), vec!["Hypertension".to_owned()]);
    assert!(details_with(None, Some("  ")).condition_list().is_empty());
}

// =============================================================
// Doctor lookup / member
// =============================================================

#[test]
fn doctor_lookup_reads_flag_and_record() {
    let raw = r#"{"id":3,"code":"NHF-9","full_name":"A B C","trn":"111","is_certified":true}"#;
    let lookup: DoctorLookup = serde_json::from_str(raw).unwrap();
    assert!(lookup.is_certified);
    assert_eq!(lookup.record.code, "NHF-9");
    assert_eq!(lookup.record.trn.as_deref(), Some("111"));
}

#[test]
fn doctor_lookup_flag_defaults_false() {
    let lookup: DoctorLookup = serde_json::from_str(r#"{"code":"NHF-9"}"#).unwrap();
    assert!(!lookup.is_certified);
}

#[test]
fn member_card_serialization_skips_missing_id() {
    let member = MemberCard {
        id: None,
        full_name: "Ann Lee".to_owned(),
        trn: "123456789".to_owned(),
        member_number: "NHF000000001".to_owned(),
        valid_from: "2025-10-19".to_owned(),
    };
    let value = serde_json::to_value(&member).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["member_number"], "NHF000000001");
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn registration_payload_flattens_role_details() {
    let payload = RegistrationPayload {
        username: "d@x.com".to_owned(),
        email: "d@x.com".to_owned(),
        password: "pw".to_owned(),
        full_name: "Dee Doc".to_owned(),
        details: RoleDetails::Doctor { mcj_reg_no: "D-12345".to_owned() },
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "username": "d@x.com",
            "email": "d@x.com",
            "password": "pw",
            "full_name": "Dee Doc",
            "mcj_reg_no": "D-12345"
        })
    );
}

#[test]
fn approval_request_serializes_action_lowercase() {
    let req = ApprovalRequest {
        app_code: "NHF-1".to_owned(),
        action: Decision::Approved,
        reviewer_username: "staff".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"app_code": "NHF-1", "action": "approved", "reviewer_username": "staff"})
    );
}

#[test]
fn decision_maps_to_status() {
    assert_eq!(Decision::Approved.status(), ApprovalStatus::Approved);
    assert_eq!(Decision::Rejected.status(), ApprovalStatus::Rejected);
}
