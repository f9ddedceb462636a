use super::*;
use crate::net::types::ApplicationRecord;

fn lookup(full_name: &str, certified: bool) -> DoctorLookup {
    DoctorLookup {
        record: ApplicationRecord {
            code: "NHF-20251019-ABC123".to_owned(),
            full_name: Some(full_name.to_owned()),
            trn: Some("123456789".to_owned()),
            phone: None,
            address: Some(String::new()),
            parish: Some("Kingston".to_owned()),
            ..ApplicationRecord::default()
        },
        is_certified: certified,
    }
}

fn patient() -> PatientRecord {
    patient_from_lookup(lookup("Ann Marie Lee", false)).unwrap()
}

fn draft() -> CertificationDraft {
    let mut conditions = ConditionList::default();
    conditions.update(0, ConditionField::Name, "Diabetes Type 2".to_owned());
    conditions.update(0, ConditionField::Severity, "Moderate".to_owned());
    CertificationDraft {
        certification_date: "2025-10-20".to_owned(),
        doctor_surname: "Brown".to_owned(),
        doctor_first_name: " Kay ".to_owned(),
        office_address: "2 King St".to_owned(),
        parish: "St. Andrew".to_owned(),
        office_phone: "876-555-0100".to_owned(),
        mcj_reg_no: "D-12345".to_owned(),
        signature: "Kay Brown".to_owned(),
        conditions,
    }
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn blank_code_rejected_locally() {
    assert_eq!(validate_lookup_code("   "), Err(EMPTY_CODE));
    assert_eq!(validate_lookup_code(" NHF-1 "), Ok("NHF-1".to_owned()));
}

#[test]
fn names_split_positionally() {
    let owned = |a: &str, b: &str, c: &str| (a.to_owned(), b.to_owned(), c.to_owned());
    assert_eq!(split_full_name("Ann Marie Lee Smith"), owned("Ann", "Marie", "Lee Smith"));
    assert_eq!(split_full_name("Ann Lee"), owned("Ann", "Lee", ""));
    assert_eq!(split_full_name(""), (String::new(), String::new(), String::new()));
}

#[test]
fn certified_lookup_never_yields_a_patient() {
    assert_eq!(patient_from_lookup(lookup("Ann Lee", true)), Err(ALREADY_CERTIFIED));
}

#[test]
fn missing_contact_fields_shown_as_na() {
    let p = patient();
    assert_eq!(p.phone, "N/A");
    assert_eq!(p.address, "N/A");
    assert_eq!(p.display_name(), "Ann Marie Lee");
    assert_eq!(p.attestation_name(), "Ann Lee");
}

// =============================================================
// Condition list
// =============================================================

#[test]
fn condition_list_keeps_last_row() {
    let mut list = ConditionList::default();
    assert_eq!(list.len(), 1);
    assert!(!list.can_remove());
    list.remove(0);
    assert_eq!(list.len(), 1);
    list.add();
    assert!(list.can_remove());
    list.remove(0);
    assert_eq!(list.len(), 1);
}

#[test]
fn incomplete_rows_are_not_counted() {
    let mut list = ConditionList::default();
    list.update(0, ConditionField::Name, "Asthma".to_owned());
    list.add();
    list.update(1, ConditionField::Name, "Hypertension".to_owned());
    list.update(1, ConditionField::Severity, "Mild".to_owned());
    assert_eq!(list.valid_count(), 1);
    assert_eq!(list.encoded(), vec!["Hypertension (Mild)".to_owned()]);
}

#[test]
fn update_out_of_range_is_ignored() {
    let mut list = ConditionList::default();
    list.update(5, ConditionField::Name, "x".to_owned());
    assert_eq!(list, ConditionList::default());
}

// =============================================================
// Certification payload
// =============================================================

#[test]
fn certified_patient_rejected_regardless_of_conditions() {
    let mut p = patient();
    p.is_certified = true;
    assert_eq!(draft().build(&p), Err(CERTIFY_AGAIN));
}

#[test]
fn zero_complete_conditions_rejected() {
    let d = CertificationDraft { conditions: ConditionList::default(), ..draft() };
    assert_eq!(d.build(&patient()), Err(NO_CONDITIONS));
}

#[test]
fn missing_code_rejected() {
    let p = PatientRecord { code: String::new(), ..patient() };
    assert_eq!(draft().build(&p), Err(NO_APPLICATION_CODE));
}

#[test]
fn payload_shape() {
    let body = draft().build(&patient()).unwrap();
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "app_code": "NHF-20251019-ABC123",
            "doctor_name": "Kay Brown",
            "mcj_reg_no": "D-12345",
            "office_address": "2 King St",
            "parish": "St. Andrew",
            "office_phone": "876-555-0100",
            "conditions": ["Diabetes Type 2 (Moderate)"],
            "conditions_json": "[\"Diabetes Type 2 (Moderate)\"]",
            "certification_date": "2025-10-20",
            "notes": "Certified by Kay Brown on 2025-10-20"
        })
    );
}

#[test]
fn blank_date_omitted_from_payload() {
    let d = CertificationDraft { certification_date: String::new(), ..draft() };
    let value = serde_json::to_value(d.build(&patient()).unwrap()).unwrap();
    assert!(value.get("certification_date").is_none());
}
