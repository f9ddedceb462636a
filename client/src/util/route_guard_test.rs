use super::*;
use crate::net::types::SessionUser;

fn session_for(role: Role) -> SessionState {
    SessionState {
        user: Some(SessionUser { id: Some(1), username: "u".to_owned(), role, trn: None, email: None }),
        restored: true,
    }
}

#[test]
fn waits_until_session_restored() {
    assert_eq!(guard_decision(&SessionState::default(), &[Role::Staff]), GuardOutcome::Pending);
}

#[test]
fn staff_route_without_session_redirects() {
    let session = SessionState { user: None, restored: true };
    assert_eq!(guard_decision(&session, &[Role::Staff]), GuardOutcome::Redirect);
}

#[test]
fn wrong_role_redirects() {
    assert_eq!(guard_decision(&session_for(Role::Applicant), &[Role::Staff]), GuardOutcome::Redirect);
    assert_eq!(guard_decision(&session_for(Role::Doctor), &[Role::Applicant]), GuardOutcome::Redirect);
}

#[test]
fn matching_role_allowed() {
    for role in Role::ALL {
        assert_eq!(guard_decision(&session_for(role), &[role]), GuardOutcome::Allow);
    }
}

#[test]
fn multi_role_route_allows_any_listed_role() {
    let allowed = [Role::Doctor, Role::Staff];
    assert_eq!(guard_decision(&session_for(Role::Doctor), &allowed), GuardOutcome::Allow);
    assert_eq!(guard_decision(&session_for(Role::Applicant), &allowed), GuardOutcome::Redirect);
}

#[test]
fn login_path_is_root() {
    assert_eq!(LOGIN_PATH, "/");
}
