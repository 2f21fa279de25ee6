//! http_inspect library: send one HTTP request and summarize the response
//!
//! This library provides the two halves of the `http_inspect` CLI:
//! - [`execute`] sends the request described by a [`RequestSpec`], applying its
//!   timeout, redirect and TLS policy, and captures a [`ResponseSummary`]
//! - [`render`] / [`render_to`] turn that summary into readable text
//!
//! # Example
//!
//! ```no_run
//! use http_inspect::{execute, render, DisplayOptions, RequestSpec};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let spec = RequestSpec::builder("GET", "example.com")
//!     .timeout_seconds(5)
//!     .follow_redirects(true)
//!     .build();
//!
//! let summary = execute(&spec).await?;
//! print!("{}", render(&summary, &DisplayOptions::default()));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! [`execute`] is async and requires a Tokio runtime.

pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod render;
mod request;
mod response;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt};
pub use error_handling::{
    categorize_reqwest_error, ConfigError, ErrorKind, ExecuteError, InitializationError, Phase,
};
pub use fetch::execute;
pub use render::{
    classify, decode_unicode_escapes, render, render_to, DecodeError, DisplayOptions, StatusTone,
};
pub use request::{canonicalize_url, RequestSpec, RequestSpecBuilder};
pub use response::{ResponseSummary, ResponseSummaryBuilder};
