//! Error categorization.
//!
//! This module maps transport errors onto the executor's error taxonomy.

use std::time::Duration;

use super::types::{ErrorKind, ExecuteError};

/// Stage of the exchange in which a transport error surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Connecting, sending the request, and waiting for the response head
    Send,
    /// Draining the response body
    Body,
}

/// Categorizes a `reqwest::Error` into an `ErrorKind`.
///
/// Timeouts and builder errors are recognized in either phase. Anything else
/// is a network error while sending and a body read error while draining.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
/// * `phase` - Where in the exchange the error was raised
pub fn categorize_reqwest_error(error: &reqwest::Error, phase: Phase) -> ErrorKind {
    if error.is_timeout() {
        ErrorKind::Timeout
    } else if error.is_builder() {
        ErrorKind::RequestConstruction
    } else {
        match phase {
            Phase::Send => ErrorKind::Network,
            Phase::Body => ErrorKind::BodyRead,
        }
    }
}

/// Wraps a `reqwest::Error` into the matching `ExecuteError` variant.
///
/// `deadline` is the configured request deadline. A transport-level timeout
/// without a configured deadline (an OS or proxy timeout) is reported as a
/// network error, since no deadline of ours expired.
pub(crate) fn to_execute_error(
    error: reqwest::Error,
    phase: Phase,
    deadline: Option<Duration>,
) -> ExecuteError {
    match categorize_reqwest_error(&error, phase) {
        ErrorKind::Timeout => match deadline {
            Some(deadline) => ExecuteError::Timeout(deadline),
            None => ExecuteError::Network(error),
        },
        ErrorKind::RequestConstruction => ExecuteError::RequestConstruction(error.to_string()),
        ErrorKind::Network => ExecuteError::Network(error),
        ErrorKind::BodyRead => ExecuteError::BodyRead(error),
    }
}
