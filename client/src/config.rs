//! Compile-time backend selection.
//!
//! The backend base URL is baked into the bundle: the `production` feature
//! selects the hosted API, otherwise `PULSE_API_BASE` from the build
//! environment wins over the local development address.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const LOCAL_API_BASE: &str = "http://localhost:5000/api";
pub const PRODUCTION_API_BASE: &str = "https://pulse-connect-eight.vercel.app/api";

/// Number of applications the staff portal requests per load.
pub const STAFF_PAGE_SIZE: usize = 100;

/// Base URL every API call is issued against (no trailing slash).
pub fn api_base() -> &'static str {
    if cfg!(feature = "production") {
        return PRODUCTION_API_BASE;
    }
    match option_env!("PULSE_API_BASE") {
        Some(base) if !base.trim().is_empty() => base.trim_end_matches('/'),
        _ => LOCAL_API_BASE,
    }
}

/// Join the base URL with an absolute API path such as `/applications`.
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
