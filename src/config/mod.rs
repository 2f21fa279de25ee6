//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (scheme handling, redirect limits, etc.)
//! - HTTP header name constants and the default header allow-list
//! - CLI option types and their conversion into a request and display options

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{LogFormat, LogLevel, Opt};
