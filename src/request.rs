//! Request description and URL canonicalization.
//!
//! A [`RequestSpec`] is built once from validated input through
//! [`RequestSpecBuilder`] and is never mutated afterwards.

use std::time::Duration;

use crate::config::{DEFAULT_SCHEME, SCHEME_SEPARATOR};

/// Prefixes `http://` to URLs that carry no scheme.
///
/// A URL is considered qualified when it contains `://` anywhere. The
/// transformation is idempotent: qualified URLs are returned unchanged.
///
/// # Examples
///
/// ```
/// use http_inspect::canonicalize_url;
///
/// assert_eq!(canonicalize_url("example.com"), "http://example.com");
/// assert_eq!(canonicalize_url("https://example.com"), "https://example.com");
/// ```
pub fn canonicalize_url(url: &str) -> String {
    if url.contains(SCHEME_SEPARATOR) {
        url.to_string()
    } else {
        format!("{DEFAULT_SCHEME}{url}")
    }
}

/// Validated, immutable description of one HTTP call.
///
/// Built through [`RequestSpec::builder`]; read through accessors only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    method: String,
    url: String,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    timeout_seconds: u64,
    follow_redirects: bool,
    ignore_certificate_errors: bool,
    user_agent: Option<String>,
    cookies: Option<String>,
    proxy: Option<String>,
}

impl RequestSpec {
    /// Starts a request with no headers, an empty body, no deadline, and
    /// redirects and certificate checks left at their strict defaults.
    ///
    /// The method is uppercased; it is not checked against a list of known verbs.
    pub fn builder(method: impl AsRef<str>, url: impl Into<String>) -> RequestSpecBuilder {
        RequestSpecBuilder {
            spec: RequestSpec {
                method: method.as_ref().to_ascii_uppercase(),
                url: url.into(),
                headers: Vec::new(),
                body: Vec::new(),
                timeout_seconds: 0,
                follow_redirects: false,
                ignore_certificate_errors: false,
                user_agent: None,
                cookies: None,
                proxy: None,
            },
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The URL as given, before canonicalization.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Header entries in the order they were added, repeats included.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    /// The request deadline, or `None` when no deadline is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }

    pub fn follow_redirects(&self) -> bool {
        self.follow_redirects
    }

    pub fn ignore_certificate_errors(&self) -> bool {
        self.ignore_certificate_errors
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Value sent verbatim as the `Cookie` header.
    pub fn cookies(&self) -> Option<&str> {
        self.cookies.as_deref()
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }
}

/// Consuming builder for [`RequestSpec`].
#[derive(Debug, Clone)]
pub struct RequestSpecBuilder {
    spec: RequestSpec,
}

impl RequestSpecBuilder {
    /// Adds a header. Repeated names are all sent.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.spec.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.spec.body = body.into();
        self
    }

    /// Sets the deadline in seconds, `0` meaning no deadline.
    pub fn timeout_seconds(mut self, seconds: u64) -> Self {
        self.spec.timeout_seconds = seconds;
        self
    }

    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.spec.follow_redirects = follow;
        self
    }

    pub fn ignore_certificate_errors(mut self, ignore: bool) -> Self {
        self.spec.ignore_certificate_errors = ignore;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.spec.user_agent = Some(user_agent.into());
        self
    }

    pub fn cookies(mut self, cookies: impl Into<String>) -> Self {
        self.spec.cookies = Some(cookies.into());
        self
    }

    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.spec.proxy = Some(proxy.into());
        self
    }

    pub fn build(self) -> RequestSpec {
        self.spec
    }
}
