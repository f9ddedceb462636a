//! Staff portal review queue.
//!
//! DESIGN
//! ======
//! The backend listing may omit `status`, so decisions taken in this session
//! are remembered per code and consulted when mapping rows. A decided code
//! then leaves the pending view even before the backend reflects it.
//!
//! `busy_code` disables the buttons of the application being acted on; it is
//! the only double-submit guard.

#[cfg(test)]
#[path = "staff_test.rs"]
mod staff_test;

use std::collections::HashMap;

use crate::net::types::{ApplicationDetails, ApplicationRecord, ApprovalRequest, ApprovalStatus, Decision};
use crate::state::session::SessionState;
use crate::util::format::PLACEHOLDER;

pub const MISSING_REVIEWER: &str = "Your session has no username. Please sign in again.";

/// Display-oriented listing row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationRow {
    /// 1-based position in the listing.
    pub id: usize,
    pub code: String,
    pub patient_name: String,
    pub trn: String,
    pub submitted_date: String,
    pub status: ApprovalStatus,
    pub doctor_name: String,
    pub conditions_count: usize,
}

/// Map backend records to rows, filling status from `decisions` when absent.
#[must_use]
pub fn map_rows(records: &[ApplicationRecord], decisions: &HashMap<String, ApprovalStatus>) -> Vec<ApplicationRow> {
    records
        .iter()
        .enumerate()
        .map(|(idx, r)| ApplicationRow {
            id: idx + 1,
            code: r.code.clone(),
            patient_name: r.full_name.clone().unwrap_or_default(),
            trn: r.trn.clone().unwrap_or_default(),
            submitted_date: r.created_at.clone().unwrap_or_default(),
            status: r
                .status
                .or_else(|| decisions.get(&r.code).copied())
                .unwrap_or_default(),
            doctor_name: r
                .doctor_name
                .clone()
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_owned()),
            conditions_count: usize::from(r.condition.as_deref().is_some_and(|c| !c.trim().is_empty())),
        })
        .collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaffState {
    pub records: Vec<ApplicationRecord>,
    pub decisions: HashMap<String, ApprovalStatus>,
    pub selected: Option<ApplicationDetails>,
    pub dialog_open: bool,
    pub busy_code: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StaffState {
    #[must_use]
    pub fn rows(&self) -> Vec<ApplicationRow> {
        map_rows(&self.records, &self.decisions)
    }

    #[must_use]
    pub fn pending_rows(&self) -> Vec<ApplicationRow> {
        self.rows().into_iter().filter(|r| r.status == ApprovalStatus::Pending).collect()
    }

    #[must_use]
    pub fn is_busy(&self, code: &str) -> bool {
        self.busy_code.as_deref() == Some(code)
    }

    /// Mark `code` as in flight. Returns false when another action is pending.
    pub fn begin(&mut self, code: &str) -> bool {
        if self.busy_code.is_some() {
            return false;
        }
        self.busy_code = Some(code.to_owned());
        true
    }

    pub fn open_details(&mut self, details: ApplicationDetails) {
        self.selected = Some(details);
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn record_decision(&mut self, code: &str, decision: Decision) {
        self.decisions.insert(code.to_owned(), decision.status());
    }

    /// Whether the dialog is still showing `code` after a decision.
    #[must_use]
    pub fn should_refresh_detail(&self, code: &str) -> bool {
        self.dialog_open && self.selected.as_ref().is_some_and(|d| d.application.code == code)
    }

    pub fn refresh_detail(&mut self, details: ApplicationDetails) {
        if self.selected.as_ref().is_some_and(|d| d.application.code == details.application.code) {
            self.selected = Some(details);
        }
    }

    /// End of a details fetch.
    pub fn finish_lookup(&mut self) {
        self.busy_code = None;
    }

    /// End of a decision, successful or not. The dialog always closes.
    pub fn finish_decision(&mut self) {
        self.busy_code = None;
        self.dialog_open = false;
    }
}

#[must_use]
pub fn decision_toast(decision: Decision) -> &'static str {
    match decision {
        Decision::Approved => "Application approved",
        Decision::Rejected => "Application rejected",
    }
}

/// Decision body with the signed-in reviewer's username.
///
/// # Errors
///
/// Returns [`MISSING_REVIEWER`] when the session carries no username.
pub fn approval_request(code: &str, decision: Decision, session: &SessionState) -> Result<ApprovalRequest, &'static str> {
    let reviewer = session
        .username()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(MISSING_REVIEWER)?;
    Ok(ApprovalRequest {
        app_code: code.to_owned(),
        action: decision,
        reviewer_username: reviewer.to_owned(),
    })
}
