//! HTTP client initialization.
//!
//! A client is built for every execution so that the redirect policy and the
//! relaxed TLS settings of one request never apply to another.

use reqwest::redirect::Policy;
use reqwest::{ClientBuilder, Proxy};

use crate::config::{DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS};
use crate::request::RequestSpec;

/// Initializes the HTTP client for one request.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent from the request, or [`DEFAULT_USER_AGENT`]
/// - Redirect following up to [`MAX_REDIRECT_HOPS`] hops, or no following at all
/// - A cookie store, so cookies set during followed hops are sent on the next hop
/// - Certificate and hostname verification disabled when the request asks for it
/// - The request's proxy, if any
///
/// No client-level timeout is set: the executor bounds the whole exchange
/// with its own deadline.
///
/// # Arguments
///
/// * `spec` - The request whose transport policy the client carries
///
/// # Errors
///
/// Returns a `reqwest::Error` if the proxy URL is invalid or the TLS backend
/// cannot be initialized.
pub fn init_client(spec: &RequestSpec) -> Result<reqwest::Client, reqwest::Error> {
    let redirect = if spec.follow_redirects() {
        Policy::limited(MAX_REDIRECT_HOPS)
    } else {
        Policy::none()
    };

    let mut builder = ClientBuilder::new()
        .redirect(redirect)
        .cookie_store(true)
        .user_agent(spec.user_agent().unwrap_or(DEFAULT_USER_AGENT));

    if spec.ignore_certificate_errors() {
        builder = builder
            .danger_accept_invalid_certs(true)
            .danger_accept_invalid_hostnames(true);
    }

    if let Some(proxy) = spec.proxy() {
        builder = builder.proxy(Proxy::all(proxy)?);
    }

    builder.build()
}
