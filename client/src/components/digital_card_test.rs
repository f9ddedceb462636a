use super::*;

#[test]
fn qr_payload_is_member_json() {
    let member = MemberCard {
        id: None,
        full_name: "Ann Lee".to_owned(),
        trn: "123456789".to_owned(),
        member_number: "NHF000123".to_owned(),
        valid_from: "2025-10-19".to_owned(),
    };
    let value: serde_json::Value = serde_json::from_str(&qr_payload(&member)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "full_name": "Ann Lee",
            "trn": "123456789",
            "member_number": "NHF000123",
            "valid_from": "2025-10-19"
        })
    );
}

#[test]
fn qr_payload_keeps_id_when_present() {
    let member = MemberCard { id: Some(7), ..MemberCard::default() };
    assert!(qr_payload(&member).contains("\"id\":7"));
}
