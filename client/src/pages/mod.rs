//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, fetch on mount, action
//! handlers) and delegates rendering details to `components`.

pub mod applicant_portal;
pub mod doctor_portal;
pub mod login;
pub mod register;
pub mod staff_portal;
