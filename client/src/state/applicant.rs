//! Applicant portal view state.
//!
//! DESIGN
//! ======
//! The applicant's stage is derived from two facts: whether an application
//! record is held and the approval status fetched for it.
//!
//! ```text
//! NotApplied --submit--> Pending --staff--> Approved (terminal)
//!                           |
//!                           +----staff--> Rejected --resubmit--> Pending
//! ```
//!
//! The form is offered only in `NotApplied` and `Rejected`.

#[cfg(test)]
#[path = "applicant_test.rs"]
mod applicant_test;

use crate::net::types::{ApplicationRecord, ApprovalStatus, MemberCard, NewApplication, SessionUser};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplicantStage {
    NotApplied,
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApplicantTab {
    #[default]
    Application,
    Card,
}

/// Who the signed-in applicant is, for finding their own application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicantIdentity {
    pub trn: Option<String>,
    pub username: String,
    pub email: Option<String>,
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl ApplicantIdentity {
    #[must_use]
    pub fn from_session(user: &SessionUser) -> Self {
        Self {
            trn: present(user.trn.as_deref()).map(str::to_owned),
            username: user.username.trim().to_owned(),
            email: present(user.email.as_deref()).map(str::to_owned),
        }
    }

    /// Identity filter sent with `GET /applications`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(trn) = &self.trn {
            pairs.push(("trn", trn.clone()));
        }
        if !self.username.is_empty() {
            pairs.push(("username", self.username.clone()));
        }
        if let Some(email) = &self.email {
            pairs.push(("email", email.clone()));
        }
        pairs
    }

    /// A field matches only when both sides carry it.
    #[must_use]
    pub fn matches(&self, record: &ApplicationRecord) -> bool {
        let same = |mine: Option<&str>, theirs: Option<&str>| match (present(mine), present(theirs)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        };
        same(self.trn.as_deref(), record.trn.as_deref())
            || same(Some(&self.username), record.username.as_deref())
            || same(self.email.as_deref(), record.email.as_deref())
    }
}

/// Pick the applicant's own record from a (possibly unfiltered) listing.
#[must_use]
pub fn find_own_application(records: Vec<ApplicationRecord>, identity: &ApplicantIdentity) -> Option<ApplicationRecord> {
    records.into_iter().find(|r| identity.matches(r))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicantState {
    pub application: Option<ApplicationRecord>,
    pub status: ApprovalStatus,
    pub member: Option<MemberCard>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ApplicantState {
    #[must_use]
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn stage(&self) -> ApplicantStage {
        if self.application.is_none() {
            return ApplicantStage::NotApplied;
        }
        match self.status {
            ApprovalStatus::Pending => ApplicantStage::Pending,
            ApprovalStatus::Approved => ApplicantStage::Approved,
            ApprovalStatus::Rejected => ApplicantStage::Rejected,
        }
    }

    /// Whether the application form may be shown.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.stage(), ApplicantStage::NotApplied | ApplicantStage::Rejected)
    }

    #[must_use]
    pub fn card_available(&self) -> bool {
        self.stage() == ApplicantStage::Approved && self.member.is_some()
    }

    #[must_use]
    pub fn default_tab(&self) -> ApplicantTab {
        if self.stage() == ApplicantStage::Approved { ApplicantTab::Card } else { ApplicantTab::Application }
    }

    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self.stage() {
            ApplicantStage::NotApplied => "Complete the form below to apply for the NHF Health Fund.",
            ApplicantStage::Pending => "Your application is under review.",
            ApplicantStage::Approved => "Your application has been approved.",
            ApplicantStage::Rejected => "Your application was rejected. You may reapply below.",
        }
    }

    #[must_use]
    pub fn card_message(&self) -> &'static str {
        match self.stage() {
            ApplicantStage::Pending => "Your card will be available once approved.",
            _ => "No card available yet.",
        }
    }

    /// Record returned by the self-lookup; status is fetched separately.
    pub fn found(&mut self, record: ApplicationRecord) {
        self.status = record.status.unwrap_or_default();
        self.application = Some(record);
    }

    /// A freshly submitted application starts pending with no card.
    pub fn record_submission(&mut self, code: impl Into<String>, trn: &str) {
        let mut record = ApplicationRecord::with_code(code);
        record.trn = Some(trn.trim().to_owned()).filter(|t| !t.is_empty());
        self.application = Some(record);
        self.status = ApprovalStatus::Pending;
        self.member = None;
        self.error = None;
    }
}

/// Applicant-entered application fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub trn: String,
    pub dob: String,
    pub gender: String,
    pub address: String,
    pub phone: String,
    pub parish: String,
    pub condition: String,
}

pub const MISSING_ACCOUNT_ID: &str = "Your session is missing an account id. Please sign in again.";

impl ApplicationDraft {
    /// Blank draft with the TRN pre-filled from the session when known.
    #[must_use]
    pub fn for_session(user: Option<&SessionUser>) -> Self {
        Self {
            trn: user.and_then(|u| u.trn.clone()).unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Validate required fields and build the request body.
    ///
    /// # Errors
    ///
    /// Returns the message to show for the first blank required field, or
    /// when the session has no account id.
    pub fn build(&self, user_id: Option<i64>) -> Result<NewApplication, String> {
        let required = [
            ("Full Name", &self.full_name),
            ("TRN", &self.trn),
            ("Date of Birth", &self.dob),
            ("Gender", &self.gender),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{label} is required"));
            }
        }
        let user_id = user_id.ok_or_else(|| MISSING_ACCOUNT_ID.to_owned())?;
        let optional = |s: &str| present(Some(s)).map(str::to_owned);
        Ok(NewApplication {
            user_id,
            full_name: self.full_name.trim().to_owned(),
            trn: self.trn.trim().to_owned(),
            dob: self.dob.trim().to_owned(),
            gender: self.gender.trim().to_owned(),
            address: optional(&self.address),
            phone: optional(&self.phone),
            parish: optional(&self.parish),
            condition: optional(&self.condition),
        })
    }
}
