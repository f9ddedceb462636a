use super::*;

#[test]
fn placeholder_for_missing_or_blank() {
    assert_eq!(or_placeholder(None), "—");
    assert_eq!(or_placeholder(Some("   ")), "—");
    assert_eq!(or_placeholder(Some(" Kingston ")), "Kingston");
}

#[test]
fn capitalize_first_letter_only() {
    assert_eq!(capitalize_first("female"), "Female");
    assert_eq!(capitalize_first("mALE"), "MALE");
    assert_eq!(capitalize_first(""), "");
}

#[test]
fn timestamp_trims_seconds_and_fraction() {
    assert_eq!(display_timestamp("2025-10-19T14:03:27.123456"), "2025-10-19 14:03");
}

#[test]
fn timestamp_accepts_space_separator() {
    assert_eq!(display_timestamp("2025-10-19 08:15:00"), "2025-10-19 08:15");
}

#[test]
fn timestamp_passes_through_unrecognised_input() {
    assert_eq!(display_timestamp("yesterday"), "yesterday");
    assert_eq!(display_timestamp("2025-10-19"), "2025-10-19");
}

#[test]
fn optional_timestamp_placeholder() {
    assert_eq!(timestamp_or_placeholder(None), "—");
    assert_eq!(timestamp_or_placeholder(Some("2025-01-02T03:04:05")), "2025-01-02 03:04");
}

#[test]
fn trn_masking() {
    assert_eq!(masked_trn("123456789", true), "123456789");
    assert_eq!(masked_trn("123456789", false), "•••-•••-•••");
}
