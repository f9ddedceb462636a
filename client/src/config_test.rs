use super::*;

#[test]
fn join_url_handles_leading_slash() {
    assert_eq!(join_url("http://localhost:5000/api", "/applications"), "http://localhost:5000/api/applications");
}

#[test]
fn join_url_inserts_missing_slash() {
    assert_eq!(join_url("http://localhost:5000/api", "members/1"), "http://localhost:5000/api/members/1");
}

#[test]
fn join_url_strips_trailing_base_slash() {
    assert_eq!(join_url("https://x.test/api/", "/login"), "https://x.test/api/login");
}

#[test]
fn api_url_starts_with_selected_base() {
    let url = api_url("/staff/approve");
    assert!(url.starts_with(api_base()));
    assert!(url.ends_with("/staff/approve"));
}

#[test]
fn api_base_has_no_trailing_slash() {
    assert!(!api_base().ends_with('/'));
}

#[test]
fn staff_page_size_is_one_hundred() {
    assert_eq!(STAFF_PAGE_SIZE, 100);
}
