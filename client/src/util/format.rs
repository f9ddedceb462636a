//! Display helpers for read-only record panels.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Literal shown for a missing field.
pub const PLACEHOLDER: &str = "—";

/// Mask shown while the card's TRN is hidden.
pub const TRN_MASK: &str = "•••-•••-•••";

/// `value` trimmed, or the placeholder when absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// Uppercase the first character (`"female"` -> `"Female"`).
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render an ISO-8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Anything that does not look like `YYYY-MM-DDTHH:MM...` is shown as-is.
pub fn display_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let Some((date, time)) = raw.split_once('T').or_else(|| raw.split_once(' ')) else {
        return raw.to_owned();
    };
    let hhmm: String = time.chars().take(5).collect();
    if date.len() != 10 || hhmm.len() != 5 || !hhmm.contains(':') {
        return raw.to_owned();
    }
    format!("{date} {hhmm}")
}

/// Optional timestamp with placeholder fallback.
pub fn timestamp_or_placeholder(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => display_timestamp(v),
        _ => PLACEHOLDER.to_owned(),
    }
}

/// The card's TRN, masked unless `visible`.
pub fn masked_trn(trn: &str, visible: bool) -> String {
    if visible { trn.to_owned() } else { TRN_MASK.to_owned() }
}
