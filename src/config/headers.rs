//! HTTP header name constants.
//!
//! This module defines the header names shown in the response summary when
//! `--all-headers` is not set.

/// Content-Type header
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
/// Accept header
pub const HEADER_ACCEPT: &str = "Accept";
/// Date header
pub const HEADER_DATE: &str = "Date";
/// Content-Length header
pub const HEADER_CONTENT_LENGTH: &str = "Content-Length";
/// Connection header
pub const HEADER_CONNECTION: &str = "Connection";

/// Headers printed by default.
/// Any other response header is only shown with `--all-headers`.
/// To add/remove headers, modify this array.
pub const DEFAULT_HEADER_ALLOW_LIST: &[&str] = &[
    HEADER_CONTENT_TYPE,
    HEADER_ACCEPT,
    HEADER_DATE,
    HEADER_CONTENT_LENGTH,
    HEADER_CONNECTION,
];

/// Returns `true` if `name` is one of the default allow-listed headers.
///
/// Header names are case-insensitive, so `content-type` matches `Content-Type`.
pub fn is_allow_listed(name: &str) -> bool {
    DEFAULT_HEADER_ALLOW_LIST
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(name))
}
