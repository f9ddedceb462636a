use super::*;

#[test]
fn login_input_trims_identifier_but_not_password() {
    assert_eq!(
        validate_login_input("  ann@example.com ", " pw "),
        Ok(LoginRequest { username: "ann@example.com".to_owned(), password: " pw ".to_owned() })
    );
}

#[test]
fn login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_login_input("ann", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn register_links_carry_role_query() {
    assert_eq!(register_href(Role::Doctor), "/register?role=doctor");
    assert_eq!(register_href(Role::Staff), "/register?role=staff");
}
