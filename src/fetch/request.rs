//! Transport request construction.
//!
//! This module turns a [`RequestSpec`] into a `reqwest::Request` bound to a
//! client, attaching headers with append semantics.

use reqwest::header::{HeaderName, HeaderValue, COOKIE};
use reqwest::Method;
use url::Url;

use crate::error_handling::ExecuteError;
use crate::request::RequestSpec;

/// Builds the transport request for `spec` against an already canonical `url`.
///
/// Headers are appended, never replaced, so two entries with the same name
/// are both sent. A configured cookie string is appended as a `Cookie` header.
/// An empty body is not attached at all.
///
/// # Errors
///
/// Returns `ExecuteError::RequestConstruction` if the method token, the URL,
/// or any header name or value is invalid.
pub(crate) fn build_request(
    client: &reqwest::Client,
    spec: &RequestSpec,
    url: &str,
) -> Result<reqwest::Request, ExecuteError> {
    let method = Method::from_bytes(spec.method().as_bytes()).map_err(|e| {
        ExecuteError::RequestConstruction(format!("invalid method {:?}: {}", spec.method(), e))
    })?;
    let parsed = Url::parse(url)
        .map_err(|e| ExecuteError::RequestConstruction(format!("invalid URL {url:?}: {e}")))?;

    let mut builder = client.request(method, parsed);
    if !spec.body().is_empty() {
        builder = builder.body(spec.body().to_vec());
    }
    let mut request = builder
        .build()
        .map_err(|e| ExecuteError::RequestConstruction(e.to_string()))?;

    let headers = request.headers_mut();
    for (name, value) in spec.headers() {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            ExecuteError::RequestConstruction(format!("invalid header name {name:?}: {e}"))
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            ExecuteError::RequestConstruction(format!("invalid value for header {name}: {e}"))
        })?;
        headers.append(header_name, header_value);
    }

    if let Some(cookies) = spec.cookies() {
        let cookie_value = HeaderValue::from_str(cookies).map_err(|e| {
            ExecuteError::RequestConstruction(format!("invalid cookie value: {e}"))
        })?;
        headers.append(COOKIE, cookie_value);
    }

    Ok(request)
}
