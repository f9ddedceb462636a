//! Role-based route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical redirect behavior: once the session is
//! restored, a missing record or a role outside the page's allowed set sends
//! the visitor back to the login route. Validity is "record exists"; there is
//! no expiry or refresh.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::Role;
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not restored yet; render nothing and wait.
    Pending,
    Allow,
    Redirect,
}

/// Decide whether the current session may see a page limited to `allowed`.
#[must_use]
pub fn guard_decision(session: &SessionState, allowed: &[Role]) -> GuardOutcome {
    if !session.restored {
        return GuardOutcome::Pending;
    }
    match session.role() {
        Some(role) if allowed.contains(&role) => GuardOutcome::Allow,
        _ => GuardOutcome::Redirect,
    }
}

/// Redirect to the login route whenever the guard rejects the session.
pub fn install_role_guard<F>(session: RwSignal<SessionState>, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if guard_decision(&session.get(), allowed) == GuardOutcome::Redirect {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Whether a guarded page should render its content.
pub fn guard_allows(session: RwSignal<SessionState>, allowed: &'static [Role]) -> impl Fn() -> bool + Copy {
    move || guard_decision(&session.get(), allowed) == GuardOutcome::Allow
}
