//! Doctor portal: application lookup and certification drafting.

#[cfg(test)]
#[path = "doctor_test.rs"]
mod doctor_test;

use crate::net::types::{CertificationPayload, DoctorLookup};

pub const EMPTY_CODE: &str = "Please enter an application code";
pub const ALREADY_CERTIFIED: &str = "This application has already been certified.";
pub const CERTIFY_AGAIN: &str = "You cannot certify this application again. It has already been certified.";
pub const NO_CONDITIONS: &str = "Please add at least one condition";
pub const NO_APPLICATION_CODE: &str = "No application code found for this patient";

const NOT_AVAILABLE: &str = "N/A";

/// Positional split of a full name: first word, second word, then the rest.
///
/// Not name-aware; "Ann Lee" yields an empty surname.
#[must_use]
pub fn split_full_name(full_name: &str) -> (String, String, String) {
    let mut parts = full_name.split(' ');
    let first = parts.next().unwrap_or_default().to_owned();
    let middle = parts.next().unwrap_or_default().to_owned();
    let surname = parts.collect::<Vec<_>>().join(" ");
    (first, middle, surname)
}

/// Display-oriented patient details bound to the certification form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientRecord {
    pub code: String,
    pub first_name: String,
    pub middle_name: String,
    pub surname: String,
    pub trn: String,
    pub gender: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub parish: String,
    pub condition: String,
    pub is_certified: bool,
}

impl PatientRecord {
    #[must_use]
    pub fn display_name(&self) -> String {
        [&self.first_name, &self.middle_name, &self.surname]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Name used in the attestation heading.
    #[must_use]
    pub fn attestation_name(&self) -> String {
        format!("{} {}", self.first_name, self.surname).trim().to_owned()
    }
}

/// Trimmed lookup code, or the message for an empty field.
///
/// # Errors
///
/// Returns [`EMPTY_CODE`] when nothing but whitespace was entered.
pub fn validate_lookup_code(raw: &str) -> Result<String, &'static str> {
    let code = raw.trim();
    if code.is_empty() { Err(EMPTY_CODE) } else { Ok(code.to_owned()) }
}

/// Reshape a lookup answer for display; certified applications are refused.
///
/// # Errors
///
/// Returns [`ALREADY_CERTIFIED`] when the backend flags the application.
pub fn patient_from_lookup(lookup: DoctorLookup) -> Result<PatientRecord, &'static str> {
    if lookup.is_certified {
        return Err(ALREADY_CERTIFIED);
    }
    let record = lookup.record;
    let (first_name, middle_name, surname) = split_full_name(record.full_name.as_deref().unwrap_or_default());
    let or_na = |v: Option<String>| v.filter(|s| !s.trim().is_empty()).unwrap_or_else(|| NOT_AVAILABLE.to_owned());
    Ok(PatientRecord {
        code: record.code,
        first_name,
        middle_name,
        surname,
        trn: record.trn.unwrap_or_default(),
        gender: record.gender.unwrap_or_default(),
        dob: record.dob.unwrap_or_default(),
        phone: or_na(record.phone),
        address: or_na(record.address),
        parish: record.parish.unwrap_or_default(),
        condition: record.condition.unwrap_or_default(),
        is_certified: false,
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConditionEntry {
    pub name: String,
    pub severity: String,
}

impl ConditionEntry {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.severity.trim().is_empty()
    }

    fn encoded(&self) -> String {
        format!("{} ({})", self.name, self.severity)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionField {
    Name,
    Severity,
}

/// Ordered, editable condition rows. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionList {
    entries: Vec<ConditionEntry>,
}

impl Default for ConditionList {
    fn default() -> Self {
        Self { entries: vec![ConditionEntry::default()] }
    }
}

impl ConditionList {
    #[must_use]
    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_remove(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn add(&mut self) {
        self.entries.push(ConditionEntry::default());
    }

    /// Remove a row; the last remaining row stays.
    pub fn remove(&mut self, index: usize) {
        if self.can_remove() && index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn update(&mut self, index: usize, field: ConditionField, value: String) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        match field {
            ConditionField::Name => entry.name = value,
            ConditionField::Severity => entry.severity = value,
        }
    }

    /// Rows with both name and severity filled in.
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_complete()).count()
    }

    /// `"name (severity)"` for every complete row, blank rows dropped.
    #[must_use]
    pub fn encoded(&self) -> Vec<String> {
        self.entries.iter().filter(|e| e.is_complete()).map(ConditionEntry::encoded).collect()
    }
}

/// Doctor-entered certification fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CertificationDraft {
    pub certification_date: String,
    pub doctor_surname: String,
    pub doctor_first_name: String,
    pub office_address: String,
    pub parish: String,
    pub office_phone: String,
    pub mcj_reg_no: String,
    pub signature: String,
    pub conditions: ConditionList,
}

impl CertificationDraft {
    /// Validate against the patient and assemble the request body.
    ///
    /// # Errors
    ///
    /// Refuses a certified patient first, then an empty condition list, then
    /// a patient without an application code.
    pub fn build(&self, patient: &PatientRecord) -> Result<CertificationPayload, &'static str> {
        if patient.is_certified {
            return Err(CERTIFY_AGAIN);
        }
        let conditions = self.conditions.encoded();
        if conditions.is_empty() {
            return Err(NO_CONDITIONS);
        }
        if patient.code.trim().is_empty() {
            return Err(NO_APPLICATION_CODE);
        }
        let conditions_json = serde_json::to_string(&conditions).unwrap_or_else(|_| "[]".to_owned());
        let date = self.certification_date.trim();
        Ok(CertificationPayload {
            app_code: patient.code.clone(),
            doctor_name: format!("{} {}", self.doctor_first_name.trim(), self.doctor_surname.trim()),
            mcj_reg_no: self.mcj_reg_no.trim().to_owned(),
            office_address: self.office_address.trim().to_owned(),
            parish: self.parish.trim().to_owned(),
            office_phone: self.office_phone.trim().to_owned(),
            conditions,
            conditions_json,
            certification_date: (!date.is_empty()).then(|| date.to_owned()),
            notes: format!("Certified by {} on {}", self.signature.trim(), self.certification_date),
        })
    }
}
