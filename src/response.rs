//! Captured result of one request execution.
//!
//! This module provides [`ResponseSummary`] and the helpers that turn a
//! transport response head into its fields (protocol label, status line,
//! header map, redirect target).

use std::collections::BTreeMap;
use std::time::Duration;

use hyper::ext::ReasonPhrase;
use reqwest::header::{HeaderMap, LOCATION};
use reqwest::{StatusCode, Version};

/// Immutable captured result of executing one request.
///
/// Headers are keyed by their canonical name (`Content-Type`) in a sorted map,
/// so enumeration order is stable between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSummary {
    protocol: String,
    status_code: u16,
    status_text: String,
    final_url: String,
    redirect_location: String,
    headers: BTreeMap<String, Vec<String>>,
    body: Vec<u8>,
    elapsed: Duration,
}

impl ResponseSummary {
    /// Starts a summary for a response with the given status code.
    ///
    /// The status text defaults to the code followed by its canonical reason
    /// phrase, and the protocol to `HTTP/1.1`.
    pub fn builder(status_code: u16) -> ResponseSummaryBuilder {
        let status_text = StatusCode::from_u16(status_code)
            .map(|status| status_line(status, None))
            .unwrap_or_else(|_| status_code.to_string());
        ResponseSummaryBuilder {
            summary: ResponseSummary {
                protocol: protocol_label(Version::HTTP_11).to_string(),
                status_code,
                status_text,
                final_url: String::new(),
                redirect_location: String::new(),
                headers: BTreeMap::new(),
                body: Vec::new(),
                elapsed: Duration::ZERO,
            },
        }
    }

    /// Wire protocol, e.g. `HTTP/1.1`.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Status line, e.g. `200 OK`.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// URL actually reached after any followed redirects.
    pub fn final_url(&self) -> &str {
        &self.final_url
    }

    /// `Location` of the returned response, empty when it had none.
    pub fn redirect_location(&self) -> &str {
        &self.redirect_location
    }

    pub fn headers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Time from dispatch until the body was fully read.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Consuming builder for [`ResponseSummary`].
#[derive(Debug, Clone)]
pub struct ResponseSummaryBuilder {
    summary: ResponseSummary,
}

impl ResponseSummaryBuilder {
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.summary.protocol = protocol.into();
        self
    }

    pub fn status_text(mut self, status_text: impl Into<String>) -> Self {
        self.summary.status_text = status_text.into();
        self
    }

    pub fn final_url(mut self, final_url: impl Into<String>) -> Self {
        self.summary.final_url = final_url.into();
        self
    }

    pub fn redirect_location(mut self, location: impl Into<String>) -> Self {
        self.summary.redirect_location = location.into();
        self
    }

    /// Appends a header value under the canonical form of `name`.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.summary
            .headers
            .entry(canonical_header_name(name))
            .or_default()
            .push(value.into());
        self
    }

    /// Appends every value of every header in `headers`.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.summary
                .headers
                .entry(canonical_header_name(name.as_str()))
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.summary.body = body.into();
        self
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.summary.elapsed = elapsed;
        self
    }

    pub fn build(self) -> ResponseSummary {
        self.summary
    }
}

/// Returns the wire label for an HTTP version.
pub fn protocol_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}

/// Formats a status as `<code> <reason>`, e.g. `404 Not Found`.
///
/// `reason` is the phrase the server sent, when it differs from the canonical
/// one. Without it the canonical phrase is used, and codes with no registered
/// phrase are rendered as the bare number.
pub fn status_line(status: StatusCode, reason: Option<&str>) -> String {
    match reason.filter(|r| !r.is_empty()).or(status.canonical_reason()) {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Reason phrase sent by the server, if it was not the canonical one.
///
/// The HTTP/1 transport only records the phrase when it differs from the
/// canonical reason, so `None` means the canonical phrase applies.
pub fn reason_phrase(response: &reqwest::Response) -> Option<String> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .map(|reason| String::from_utf8_lossy(reason.as_bytes()).into_owned())
}

/// Converts a header name to its canonical MIME form.
///
/// The first letter and every letter following a hyphen are uppercased, the
/// rest lowercased: `content-type` becomes `Content-Type`. Names containing
/// characters other than ASCII letters, digits and hyphens are returned
/// unchanged.
pub fn canonical_header_name(name: &str) -> String {
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        return name.to_string();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

/// Reads the `Location` header verbatim, or an empty string when absent.
pub fn location_header(headers: &HeaderMap) -> String {
    headers
        .get(LOCATION)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn header_map(entries: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in entries {
            // In tests, we use known-good header names and values
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .unwrap_or_else(|_| panic!("Invalid header name in test: {}", name));
            let header_value = HeaderValue::from_str(value)
                .unwrap_or_else(|_| panic!("Invalid header value in test: {}", value));
            headers.append(header_name, header_value);
        }
        headers
    }

    #[test]
    fn test_protocol_label() {
        assert_eq!(protocol_label(Version::HTTP_10), "HTTP/1.0");
        assert_eq!(protocol_label(Version::HTTP_11), "HTTP/1.1");
        assert_eq!(protocol_label(Version::HTTP_2), "HTTP/2.0");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(StatusCode::OK, None), "200 OK");
        assert_eq!(status_line(StatusCode::FOUND, None), "302 Found");
        assert_eq!(status_line(StatusCode::NOT_FOUND, None), "404 Not Found");
    }

    #[test]
    fn test_status_line_without_reason() {
        let status = StatusCode::from_u16(599).expect("599 is a valid status code");
        assert_eq!(status_line(status, None), "599");
    }

    #[test]
    fn test_status_line_prefers_server_reason() {
        assert_eq!(
            status_line(StatusCode::OK, Some("Everything Fine")),
            "200 Everything Fine"
        );
        let status = StatusCode::from_u16(599).expect("599 is a valid status code");
        assert_eq!(status_line(status, Some("Upstream Gone")), "599 Upstream Gone");
        assert_eq!(status_line(StatusCode::OK, Some("")), "200 OK");
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("content-type"), "Content-Type");
        assert_eq!(canonical_header_name("CONTENT-LENGTH"), "Content-Length");
        assert_eq!(canonical_header_name("x-request-id"), "X-Request-Id");
        assert_eq!(canonical_header_name("etag"), "Etag");
        assert_eq!(canonical_header_name("www-authenticate"), "Www-Authenticate");
    }

    #[test]
    fn test_canonical_header_name_leaves_unusual_names() {
        assert_eq!(canonical_header_name("x_custom"), "x_custom");
    }

    #[test]
    fn test_builder_defaults() {
        let summary = ResponseSummary::builder(204).build();
        assert_eq!(summary.status_code(), 204);
        assert_eq!(summary.status_text(), "204 No Content");
        assert_eq!(summary.protocol(), "HTTP/1.1");
        assert_eq!(summary.redirect_location(), "");
        assert!(summary.headers().is_empty());
        assert!(summary.body().is_empty());
        assert_eq!(summary.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_headers_keep_repeated_values_in_order() {
        let headers = header_map(&[
            ("set-cookie", "a=1"),
            ("content-type", "text/plain"),
            ("set-cookie", "b=2"),
        ]);
        let summary = ResponseSummary::builder(200).headers(&headers).build();

        assert_eq!(
            summary.headers().get("Set-Cookie"),
            Some(&vec!["a=1".to_string(), "b=2".to_string()])
        );
        assert_eq!(
            summary.headers().get("Content-Type"),
            Some(&vec!["text/plain".to_string()])
        );
        let names: Vec<&String> = summary.headers().keys().collect();
        assert_eq!(names, ["Content-Type", "Set-Cookie"]);
    }

    #[test]
    fn test_location_header_verbatim() {
        let headers = header_map(&[("location", "/next?page=2")]);
        assert_eq!(location_header(&headers), "/next?page=2");
    }

    #[test]
    fn test_location_header_missing() {
        assert_eq!(location_header(&HeaderMap::new()), "");
    }
}
