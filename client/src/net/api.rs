//! REST API helpers for the health-fund backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Bodies are read as text and
//! parsed once so a non-JSON answer is reported as an unexpected response
//! rather than a transport failure. No call is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{
    ApplicationDetails, ApplicationRecord, ApprovalRequest, CertificationPayload, CreatedApplication,
    DoctorLookup, LoginRequest, LoginResponse, MemberCard, NewApplication, RegistrationPayload, Role,
};

pub const APPLICATIONS_PATH: &str = "/applications";
pub const CERTIFICATIONS_PATH: &str = "/certifications";
pub const APPROVE_PATH: &str = "/staff/approve";
pub const LOGIN_PATH: &str = "/login";

#[cfg(any(test, feature = "hydrate"))]
fn staff_application_endpoint(code: &str) -> String {
    format!("/staff/applications/{}", code.trim())
}

#[cfg(any(test, feature = "hydrate"))]
fn doctor_application_endpoint(code: &str) -> String {
    format!("/doctor/applications/{}", code.trim())
}

#[cfg(any(test, feature = "hydrate"))]
fn member_endpoint(trn: &str) -> String {
    format!("/members/{}", trn.trim())
}

#[cfg(any(test, feature = "hydrate"))]
fn decision_failed_message(request: &ApprovalRequest) -> String {
    let verb = match request.action {
        super::types::Decision::Approved => "approve",
        super::types::Decision::Rejected => "reject",
    };
    format!("Failed to {verb} application")
}

/// Pull a non-empty `error` string out of a JSON body.
#[cfg(any(test, feature = "hydrate"))]
fn error_field(value: &serde_json::Value) -> Option<String> {
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Classify a finished HTTP exchange.
///
/// Non-JSON bodies are `UnexpectedResponse` regardless of status; non-2xx
/// bodies become `Backend` with the payload's `error` or `fallback`.
#[cfg(any(test, feature = "hydrate"))]
fn interpret_response<T: DeserializeOwned>(status: u16, ok: bool, body: &str, fallback: &str) -> Result<T, ApiError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|_| ApiError::UnexpectedResponse)?;
    if !ok {
        let message = error_field(&value).unwrap_or_else(|| fallback.to_owned());
        return Err(ApiError::Backend { status, message });
    }
    serde_json::from_value(value).map_err(|_| ApiError::UnexpectedResponse)
}

/// Member lookups answer 404 (or an `error` body) until the application is
/// approved; both mean "no card yet".
#[cfg(any(test, feature = "hydrate"))]
fn interpret_member(status: u16, ok: bool, body: &str) -> Result<Option<MemberCard>, ApiError> {
    match interpret_response::<serde_json::Value>(status, ok, body, "Member not found") {
        Ok(value) if error_field(&value).is_some() => Ok(None),
        Ok(value) => serde_json::from_value(value).map(Some).map_err(|_| ApiError::UnexpectedResponse),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(feature = "hydrate")]
async fn read_body(
    pending: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<(u16, bool, String), ApiError> {
    let resp = pending.map_err(|e| {
        log::warn!("request failed: {e}");
        ApiError::Network
    })?;
    let status = resp.status();
    let ok = resp.ok();
    let body = resp.text().await.map_err(|e| {
        log::warn!("reading response body failed: {e}");
        ApiError::Network
    })?;
    Ok((status, ok, body))
}

#[cfg(feature = "hydrate")]
fn log_failure<T>(what: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        match e {
            ApiError::UnexpectedResponse => log::warn!("{what}: server returned a malformed body"),
            ApiError::Backend { status, message } => log::warn!("{what}: {status} {message}"),
            _ => {}
        }
    }
    result
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    what: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    let (status, ok, body) = read_body(builder.send().await).await?;
    log_failure(what, interpret_response(status, ok, &body, fallback))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
    path: &str,
    payload: &B,
    what: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    let url = crate::config::api_url(path);
    let request = gloo_net::http::Request::post(&url).json(payload).map_err(|e| {
        log::warn!("{what}: encoding request failed: {e}");
        ApiError::Encode
    })?;
    let (status, ok, body) = read_body(request.send().await).await?;
    log_failure(what, interpret_response(status, ok, &body, fallback))
}

/// Sign in via `POST /login`.
///
/// # Errors
///
/// Returns the backend's message (e.g. invalid credentials) or a transport error.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(LOGIN_PATH, request, "login", "Invalid username or password").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Create an account through the role's registration endpoint.
///
/// # Errors
///
/// Returns the backend's `error` message or "Registration failed".
pub async fn register(role: Role, payload: &RegistrationPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<serde_json::Value, _>(role.register_endpoint(), payload, "register", "Registration failed")
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, payload);
        Err(ApiError::Network)
    }
}

/// Submit a new application via `POST /applications`; returns the issued code.
///
/// # Errors
///
/// Returns the backend's `error` (e.g. an application already exists).
pub async fn submit_application(application: &NewApplication) -> Result<CreatedApplication, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(APPLICATIONS_PATH, application, "submit application", "Failed to submit application").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = application;
        Err(ApiError::Network)
    }
}

/// List applications via `GET /applications` with the given query pairs.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not an application list.
pub async fn fetch_applications(query: &[(&'static str, String)]) -> Result<Vec<ApplicationRecord>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(APPLICATIONS_PATH);
        let builder = gloo_net::http::Request::get(&url).query(query.iter().map(|(k, v)| (*k, v.as_str())));
        get_json::<super::types::ApplicationList>(builder, "list applications", "Failed to fetch applications")
            .await
            .map(super::types::ApplicationList::into_records)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Network)
    }
}

/// Fetch the application/certification/approval triple for `code`.
///
/// # Errors
///
/// Returns the backend's `error` or "Unable to fetch details".
pub async fn fetch_application_details(code: &str) -> Result<ApplicationDetails, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(&staff_application_endpoint(code));
        get_json(gloo_net::http::Request::get(&url), "application details", "Unable to fetch details").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(ApiError::Network)
    }
}

/// Look up an application for certification, including `is_certified`.
///
/// # Errors
///
/// Returns the backend's `error` or "Application not found"; a non-JSON body
/// is [`ApiError::UnexpectedResponse`].
pub async fn lookup_application_for_doctor(code: &str) -> Result<DoctorLookup, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(&doctor_application_endpoint(code));
        get_json(gloo_net::http::Request::get(&url), "doctor lookup", "Application not found").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = code;
        Err(ApiError::Network)
    }
}

/// Record a certification via `POST /certifications`.
///
/// # Errors
///
/// Returns the backend's `error` or "Failed to save certification".
pub async fn submit_certification(payload: &CertificationPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<serde_json::Value, _>(CERTIFICATIONS_PATH, payload, "certify", "Failed to save certification")
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Network)
    }
}

/// Approve or reject via `POST /staff/approve`.
///
/// # Errors
///
/// Returns the backend's `error` or "Failed to approve/reject application".
pub async fn submit_decision(request: &ApprovalRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let fallback = decision_failed_message(request);
        post_json::<serde_json::Value, _>(APPROVE_PATH, request, "decision", &fallback)
            .await
            .map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Network)
    }
}

/// Fetch the member card for `trn`; `Ok(None)` until one exists.
///
/// # Errors
///
/// Returns an error for transport failures or malformed bodies.
pub async fn fetch_member(trn: &str) -> Result<Option<MemberCard>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::config::api_url(&member_endpoint(trn));
        let (status, ok, body) = read_body(gloo_net::http::Request::get(&url).send().await).await?;
        log_failure("member", interpret_member(status, ok, &body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = trn;
        Err(ApiError::Network)
    }
}
