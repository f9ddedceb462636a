//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `error` classifies their failures.
//! `types` holds the JSON schema both sides agree on.

pub mod api;
pub mod error;
pub mod types;
