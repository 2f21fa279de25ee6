//! Request execution.
//!
//! This module sends one request described by a [`RequestSpec`] and captures
//! the response as a [`ResponseSummary`]:
//! - The URL is canonicalized and the transport request built
//! - A client carrying this request's redirect and TLS policy is created
//! - Sending and draining the body run under the optional deadline
//! - Elapsed time covers everything from dispatch to the last body byte
//!
//! There is exactly one network attempt per call. Errors are returned, never retried.

mod request;

use std::time::{Duration, Instant};

use log::{debug, info};
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};
use url::Url;

use crate::error_handling::{to_execute_error, ExecuteError, Phase};
use crate::initialization::init_client;
use crate::request::{canonicalize_url, RequestSpec};
use crate::response::{
    location_header, protocol_label, reason_phrase, status_line, ResponseSummary,
};

use request::build_request;

/// Response head fields captured before the body consumes the response.
struct ResponseHead {
    version: Version,
    status: StatusCode,
    reason: Option<String>,
    url: Url,
    headers: HeaderMap,
}

/// Executes the request and returns the summary of the final response.
///
/// With `follow_redirects` the client follows redirects and the summary
/// describes the last hop. Without it the first redirect response is returned
/// as-is and its `Location` header ends up in `redirect_location`.
///
/// When the request carries a deadline, connecting, sending and reading the
/// full body must finish within it. On expiry the in-flight exchange is
/// dropped, which closes the connection and discards any partial body.
///
/// # Errors
///
/// - `ExecuteError::RequestConstruction` for an invalid method, URL, header or proxy
/// - `ExecuteError::Network` for connection, DNS, TLS or redirect-limit failures
/// - `ExecuteError::Timeout` when the deadline expires
/// - `ExecuteError::BodyRead` when the body stream fails
pub async fn execute(spec: &RequestSpec) -> Result<ResponseSummary, ExecuteError> {
    let url = canonicalize_url(spec.url());
    let deadline = spec.timeout();

    let client = init_client(spec)
        .map_err(|e| ExecuteError::RequestConstruction(format!("cannot build client: {e}")))?;
    let request = build_request(&client, spec, &url)?;
    let requested = request.url().clone();

    debug!(
        "Sending {} {} ({} byte body, {} header(s))",
        spec.method(),
        url,
        spec.body().len(),
        spec.headers().len()
    );
    debug!(
        "Follow redirects: {}, verify certificates: {}, deadline: {:?}",
        spec.follow_redirects(),
        !spec.ignore_certificate_errors(),
        deadline
    );

    let start = Instant::now();
    let exchange = send_and_drain(&client, request, deadline);
    let (head, body) = match deadline {
        Some(limit) => tokio::time::timeout(limit, exchange)
            .await
            .map_err(|_| ExecuteError::Timeout(limit))??,
        None => exchange.await?,
    };
    let elapsed = start.elapsed();

    // Report the URL as given unless a redirect moved us elsewhere
    let final_url = if head.url == requested {
        url
    } else {
        head.url.to_string()
    };

    info!(
        "{} {} in {:?} ({} bytes)",
        head.status.as_u16(),
        final_url,
        elapsed,
        body.len()
    );

    Ok(ResponseSummary::builder(head.status.as_u16())
        .protocol(protocol_label(head.version))
        .status_text(status_line(head.status, head.reason.as_deref()))
        .final_url(final_url)
        .redirect_location(location_header(&head.headers))
        .headers(&head.headers)
        .body(body)
        .elapsed(elapsed)
        .build())
}

/// Sends the request and reads the whole body into memory.
async fn send_and_drain(
    client: &reqwest::Client,
    request: reqwest::Request,
    deadline: Option<Duration>,
) -> Result<(ResponseHead, Vec<u8>), ExecuteError> {
    let response = client
        .execute(request)
        .await
        .map_err(|e| to_execute_error(e, Phase::Send, deadline))?;

    let head = ResponseHead {
        version: response.version(),
        status: response.status(),
        reason: reason_phrase(&response),
        url: response.url().clone(),
        headers: response.headers().clone(),
    };
    if head.status.is_redirection() {
        debug!(
            "Returning redirect response {} (Location: {:?})",
            head.status.as_u16(),
            location_header(&head.headers)
        );
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| to_execute_error(e, Phase::Body, deadline))?;

    Ok((head, body.to_vec()))
}
