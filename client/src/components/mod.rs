//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the forms and review panels. They read the
//! session and toast queue from Leptos context and report results to their
//! portal through callbacks.

pub mod application_details_dialog;
pub mod application_form;
pub mod digital_card;
pub mod doctor_certification_form;
pub mod portal_header;
pub mod toast_host;
