//! Session context for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` provides one `RwSignal<SessionState>`. It is restored from
//! `localStorage` once the browser hydrates, written at login, and cleared at
//! logout. Route guards and portals read it; nothing else touches storage.
//!
//! `POST /login` answers without a TRN, while application rows carry only the
//! TRN. The applicant portal can only find its own application by TRN, so a
//! submitted TRN is written into the session and also remembered per account
//! under [`KNOWN_TRNS_KEY`], surviving logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use crate::net::types::{Role, SessionUser};
use crate::util::storage;

/// Fixed `localStorage` key holding the JSON session record.
pub const SESSION_KEY: &str = "user";

/// `localStorage` key mapping usernames to the TRN they applied with.
pub const KNOWN_TRNS_KEY: &str = "applicant_trns";

/// Fill a missing TRN from the per-account map.
#[must_use]
pub fn with_known_trn(mut user: SessionUser, known: &HashMap<String, String>) -> SessionUser {
    let has_trn = user.trn.as_deref().is_some_and(|t| !t.trim().is_empty());
    if !has_trn {
        if let Some(trn) = known.get(&user.username) {
            user.trn = Some(trn.clone());
        }
    }
    user
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    /// False until the persisted record has been read (SSR and the first
    /// client render cannot see storage yet).
    pub restored: bool,
}

impl SessionState {
    /// Read the persisted record.
    #[must_use]
    pub fn restore() -> Self {
        Self { user: storage::read_record(SESSION_KEY), restored: true }
    }

    /// Replace the current user and persist it.
    pub fn sign_in(&mut self, user: SessionUser) {
        let known: HashMap<String, String> = storage::read_record(KNOWN_TRNS_KEY).unwrap_or_default();
        let user = with_known_trn(user, &known);
        storage::write_record(SESSION_KEY, &user);
        self.user = Some(user);
        self.restored = true;
    }

    /// Attach the TRN an application was submitted with. Blank input and a
    /// signed-out session are ignored.
    pub fn remember_trn(&mut self, trn: &str) {
        let trn = trn.trim();
        let Some(user) = self.user.as_mut() else {
            return;
        };
        if trn.is_empty() {
            return;
        }
        user.trn = Some(trn.to_owned());
        storage::write_record(SESSION_KEY, &*user);
        let mut known: HashMap<String, String> = storage::read_record(KNOWN_TRNS_KEY).unwrap_or_default();
        known.insert(user.username.clone(), trn.to_owned());
        storage::write_record(KNOWN_TRNS_KEY, &known);
    }

    /// Forget the current user and delete the persisted record.
    pub fn sign_out(&mut self) {
        storage::clear_record(SESSION_KEY);
        self.user = None;
        self.restored = true;
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}
