//! Registration form model.
//!
//! The field set depends on the role: applicants give TRN/DOB/gender, doctors
//! their MCJ registration number, staff TRN/DOB/gender plus a staff ID. Name,
//! email and password are common to all.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::net::types::{RegistrationPayload, Role, RoleDetails};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub trn: String,
    pub dob: String,
    pub gender: String,
    pub mcj_reg_no: String,
    pub staff_id: String,
}

/// Form inputs a role shows, in render order after name/email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationField {
    Trn,
    Dob,
    Gender,
    McjRegNo,
    StaffId,
}

impl RegistrationField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Trn => "TRN",
            RegistrationField::Dob => "Date of Birth",
            RegistrationField::Gender => "Gender",
            RegistrationField::McjRegNo => "MCJ Registration No.",
            RegistrationField::StaffId => "Staff ID",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            RegistrationField::Trn => "123456789",
            RegistrationField::Dob => "",
            RegistrationField::Gender => "Male / Female",
            RegistrationField::McjRegNo => "D-12345",
            RegistrationField::StaffId => "NHF1234",
        }
    }

    #[must_use]
    pub fn input_type(self) -> &'static str {
        match self {
            RegistrationField::Dob => "date",
            _ => "text",
        }
    }
}

/// Role-specific inputs.
#[must_use]
pub fn fields_for(role: Role) -> &'static [RegistrationField] {
    match role {
        Role::Applicant => &[RegistrationField::Trn, RegistrationField::Dob, RegistrationField::Gender],
        Role::Doctor => &[RegistrationField::McjRegNo],
        Role::Staff => &[
            RegistrationField::Trn,
            RegistrationField::Dob,
            RegistrationField::Gender,
            RegistrationField::StaffId,
        ],
    }
}

impl RegistrationForm {
    #[must_use]
    pub fn field(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Trn => &self.trn,
            RegistrationField::Dob => &self.dob,
            RegistrationField::Gender => &self.gender,
            RegistrationField::McjRegNo => &self.mcj_reg_no,
            RegistrationField::StaffId => &self.staff_id,
        }
    }

    pub fn set_field(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::Trn => self.trn = value,
            RegistrationField::Dob => self.dob = value,
            RegistrationField::Gender => self.gender = value,
            RegistrationField::McjRegNo => self.mcj_reg_no = value,
            RegistrationField::StaffId => self.staff_id = value,
        }
    }

    /// Validate and assemble the payload for `role`.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the passwords differ or a required
    /// field is blank. No request may be issued on error.
    pub fn build(&self, role: Role) -> Result<RegistrationPayload, String> {
        if self.password != self.confirm_password {
            return Err(PASSWORD_MISMATCH.to_owned());
        }
        let common = [
            ("First Name", &self.first_name),
            ("Last Name", &self.last_name),
            ("Email", &self.email),
            ("Password", &self.password),
        ];
        for (label, value) in common {
            if value.trim().is_empty() {
                return Err(format!("{label} is required"));
            }
        }
        for field in fields_for(role) {
            if self.field(*field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }

        let value = |s: &str| s.trim().to_owned();
        let details = match role {
            Role::Applicant => RoleDetails::Applicant {
                trn: value(&self.trn),
                dob: value(&self.dob),
                gender: value(&self.gender),
            },
            Role::Doctor => RoleDetails::Doctor { mcj_reg_no: value(&self.mcj_reg_no) },
            Role::Staff => RoleDetails::Staff {
                dob: value(&self.dob),
                gender: value(&self.gender),
                trn: value(&self.trn),
                staff_id: value(&self.staff_id),
            },
        };
        let email = value(&self.email);
        Ok(RegistrationPayload {
            username: email.clone(),
            email,
            password: self.password.clone(),
            full_name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            details,
        })
    }
}
