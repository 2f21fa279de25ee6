//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A command-line flag that failed validation.
///
/// `field` names the flag (without dashes, using underscores) so callers and
/// tests can tell which input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ConfigError {
    /// Name of the offending flag
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl ConfigError {
    /// Creates a validation error for `field`.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure of a single request execution.
///
/// Each variant is terminal: the executor makes at most one network attempt
/// and hands the error straight back to the caller.
#[derive(Error, Debug)]
pub enum ExecuteError {
    /// The request could not be built (invalid method, URL, header, or proxy).
    #[error("invalid request: {0}")]
    RequestConstruction(String),

    /// Connection, DNS, TLS handshake or other transport failure.
    ///
    /// The transport error is kept as the source, not repeated in the message.
    #[error("network error")]
    Network(#[source] ReqwestError),

    /// The deadline expired before the full response was received.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The response body stream failed while it was being drained.
    #[error("failed to read response body")]
    BodyRead(#[source] ReqwestError),
}

impl ExecuteError {
    /// Returns the stage of the request that failed.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExecuteError::RequestConstruction(_) => ErrorKind::RequestConstruction,
            ExecuteError::Network(_) => ErrorKind::Network,
            ExecuteError::Timeout(_) => ErrorKind::Timeout,
            ExecuteError::BodyRead(_) => ErrorKind::BodyRead,
        }
    }
}

/// Categories of request execution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    RequestConstruction,
    Network,
    Timeout,
    BodyRead,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RequestConstruction => "Request construction error",
            ErrorKind::Network => "Network error",
            ErrorKind::Timeout => "Timeout error",
            ErrorKind::BodyRead => "Body read error",
        }
    }
}
