use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: " ann@example.com ".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
        trn: "123456789".to_owned(),
        dob: "1990-01-01".to_owned(),
        gender: "Female".to_owned(),
        mcj_reg_no: "D-12345".to_owned(),
        staff_id: "NHF1234".to_owned(),
    }
}

#[test]
fn mismatched_passwords_are_rejected_for_every_role() {
    let mut form = filled();
    form.confirm_password = "different".to_owned();
    for role in Role::ALL {
        assert_eq!(form.build(role), Err(PASSWORD_MISMATCH.to_owned()));
    }
}

#[test]
fn mismatch_reported_before_missing_fields() {
    let form = RegistrationForm { password: "a".to_owned(), confirm_password: "b".to_owned(), ..Default::default() };
    assert_eq!(form.build(Role::Applicant), Err(PASSWORD_MISMATCH.to_owned()));
}

#[test]
fn applicant_payload_shape() {
    let payload = filled().build(Role::Applicant).unwrap();
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "username": "ann@example.com",
            "email": "ann@example.com",
            "password": "secret",
            "full_name": "Ann Lee",
            "trn": "123456789",
            "dob": "1990-01-01",
            "gender": "Female"
        })
    );
}

#[test]
fn doctor_payload_only_adds_registration_number() {
    let payload = filled().build(Role::Doctor).unwrap();
    assert_eq!(payload.details, RoleDetails::Doctor { mcj_reg_no: "D-12345".to_owned() });
}

#[test]
fn staff_payload_includes_staff_id() {
    let payload = filled().build(Role::Staff).unwrap();
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["staff_id"], "NHF1234");
    assert_eq!(value["trn"], "123456789");
}

#[test]
fn doctor_does_not_need_trn() {
    let form = RegistrationForm { trn: String::new(), dob: String::new(), gender: String::new(), ..filled() };
    assert!(form.build(Role::Doctor).is_ok());
    assert_eq!(form.build(Role::Applicant), Err("TRN is required".to_owned()));
}

#[test]
fn staff_requires_staff_id() {
    let form = RegistrationForm { staff_id: "  ".to_owned(), ..filled() };
    assert_eq!(form.build(Role::Staff), Err("Staff ID is required".to_owned()));
}

#[test]
fn blank_email_is_rejected() {
    let form = RegistrationForm { email: " ".to_owned(), ..filled() };
    assert_eq!(form.build(Role::Doctor), Err("Email is required".to_owned()));
}

#[test]
fn field_sets_per_role() {
    assert_eq!(fields_for(Role::Doctor), &[RegistrationField::McjRegNo]);
    assert_eq!(fields_for(Role::Staff).len(), 4);
    assert!(fields_for(Role::Applicant).contains(&RegistrationField::Gender));
}

#[test]
fn set_field_round_trips() {
    let mut form = RegistrationForm::default();
    form.set_field(RegistrationField::StaffId, "S-1".to_owned());
    assert_eq!(form.field(RegistrationField::StaffId), "S-1");
}
