//! Wire DTOs mirrored from the backend's JSON.
//!
//! DESIGN
//! ======
//! Records are held only in transient view state. Nearly every field is
//! optional because the backend emits `null` freely; rendering decides what a
//! missing value looks like.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role. Every role-specific branch in the client matches on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Applicant,
    Doctor,
    Staff,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Applicant, Role::Doctor, Role::Staff];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Doctor => "doctor",
            Role::Staff => "staff",
        }
    }

    /// Parse the lowercase wire/query form.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "applicant" => Some(Role::Applicant),
            "doctor" => Some(Role::Doctor),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    /// Route of the role's portal.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Applicant => "/applicant",
            Role::Doctor => "/doctor",
            Role::Staff => "/staff",
        }
    }

    /// API path accepting this role's registration payload.
    #[must_use]
    pub fn register_endpoint(self) -> &'static str {
        match self {
            Role::Applicant => "/applicants/register",
            Role::Doctor => "/doctor/register",
            Role::Staff => "/staff/register",
        }
    }

    /// Phrase used after "Register as".
    #[must_use]
    pub fn article_label(self) -> &'static str {
        match self {
            Role::Applicant => "an Applicant",
            Role::Doctor => "a Doctor",
            Role::Staff => "NHF Staff",
        }
    }
}

/// The single persisted record identifying the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend account id; required to submit an application.
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub trn: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Review state of an application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }
}

/// A staff decision; the `action` of `POST /staff/approve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    #[must_use]
    pub fn status(self) -> ApprovalStatus {
        match self {
            Decision::Approved => ApprovalStatus::Approved,
            Decision::Rejected => ApprovalStatus::Rejected,
        }
    }
}

/// One application as listed by `/applications`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Server-assigned unique code, e.g. `NHF-20251019-ABC123`.
    pub code: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub trn: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub parish: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ApplicationRecord {
    /// Placeholder record holding only a freshly issued code.
    #[must_use]
    pub fn with_code(code: impl Into<String>) -> Self {
        Self { code: code.into(), ..Self::default() }
    }
}

/// `/applications` answers either a bare array or `{ "applications": [...] }`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ApplicationList {
    Bare(Vec<ApplicationRecord>),
    Wrapped {
        #[serde(default)]
        applications: Vec<ApplicationRecord>,
    },
}

impl ApplicationList {
    #[must_use]
    pub fn into_records(self) -> Vec<ApplicationRecord> {
        match self {
            ApplicationList::Bare(records) | ApplicationList::Wrapped { applications: records } => records,
        }
    }
}

/// Doctor-authored certification of one application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub app_code: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub mcj_reg_no: Option<String>,
    #[serde(default)]
    pub office_address: Option<String>,
    #[serde(default)]
    pub parish: Option<String>,
    #[serde(default)]
    pub office_phone: Option<String>,
    /// Comma-separated condition list.
    #[serde(default)]
    pub certified_conditions: Option<String>,
    /// JSON-encoded array of condition strings, as stored by the backend.
    #[serde(default)]
    pub conditions_json: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub certification_date: Option<String>,
}

/// Staff decision record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    #[serde(default)]
    pub app_code: Option<String>,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub reviewer_username: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Approval {
    #[must_use]
    pub fn effective_status(&self) -> ApprovalStatus {
        self.status.unwrap_or_default()
    }
}

/// `/staff/applications/{code}`: the application/certification/approval triple.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub application: ApplicationRecord,
    #[serde(default)]
    pub certification: Option<Certification>,
    #[serde(default)]
    pub approval: Option<Approval>,
}

impl ApplicationDetails {
    /// Status shown for the triple; a missing approval means pending.
    #[must_use]
    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval.as_ref().map(Approval::effective_status).unwrap_or_default()
    }

    /// Conditions to display: certified ones first, else the applicant's own.
    #[must_use]
    pub fn condition_list(&self) -> Vec<String> {
        let certified = self.certification.as_ref().map(certified_conditions).unwrap_or_default();
        if !certified.is_empty() {
            return certified;
        }
        self.application
            .condition
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(|c| vec![c.to_owned()])
            .unwrap_or_default()
    }
}

fn certified_conditions(cert: &Certification) -> Vec<String> {
    if let Some(list) = cert.certified_conditions.as_deref().filter(|s| !s.trim().is_empty()) {
        return list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
    }
    cert.conditions_json
        .as_deref()
        .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// `/doctor/applications/{code}`: an application plus its certification flag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct DoctorLookup {
    #[serde(flatten)]
    pub record: ApplicationRecord,
    #[serde(default)]
    pub is_certified: bool,
}

/// Member card fields, derived server-side after approval.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub full_name: String,
    pub trn: String,
    pub member_number: String,
    pub valid_from: String,
}

/// `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub trn: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl LoginResponse {
    /// Session record for this login. The typed identifier doubles as the
    /// email when the user signed in with one.
    #[must_use]
    pub fn into_session(self, typed_identifier: &str) -> SessionUser {
        let email = self
            .email
            .or_else(|| typed_identifier.contains('@').then(|| typed_identifier.trim().to_owned()));
        SessionUser { id: self.id, username: self.username, role: self.role, trn: self.trn, email }
    }
}

/// Role-specific part of a registration payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleDetails {
    Applicant { trn: String, dob: String, gender: String },
    Doctor { mcj_reg_no: String },
    Staff { dob: String, gender: String, trn: String, staff_id: String },
}

/// Body for the role's registration endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(flatten)]
    pub details: RoleDetails,
}

/// `POST /applications` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    pub user_id: i64,
    pub full_name: String,
    pub trn: String,
    pub dob: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parish: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// `POST /applications` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedApplication {
    pub code: String,
}

/// `POST /certifications` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CertificationPayload {
    pub app_code: String,
    pub doctor_name: String,
    pub mcj_reg_no: String,
    pub office_address: String,
    pub parish: String,
    pub office_phone: String,
    pub conditions: Vec<String>,
    pub conditions_json: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_date: Option<String>,
    pub notes: String,
}

/// `POST /staff/approve` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApprovalRequest {
    pub app_code: String,
    pub action: Decision,
    pub reviewer_username: String,
}
