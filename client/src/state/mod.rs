//! Shared client state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `toast` are provided app-wide through Leptos context. The
//! per-portal models (`applicant`, `doctor`, `staff`, `registration`) are
//! owned by their pages and hold only transient view state.

pub mod applicant;
pub mod doctor;
pub mod registration;
pub mod session;
pub mod staff;
pub mod toast;
