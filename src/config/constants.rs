//! Configuration constants.
//!
//! This module defines the constants used when building and executing a request.

/// Separator that marks a URL as already carrying a scheme.
pub const SCHEME_SEPARATOR: &str = "://";

/// Scheme prepended to URLs given without one.
pub const DEFAULT_SCHEME: &str = "http://";

// Redirect handling
/// Maximum number of redirect hops to follow when `--follow-redirects` is set.
/// Matches the limit most HTTP clients apply by default.
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default HTTP method when `--method` is not given.
pub const DEFAULT_METHOD: &str = "GET";
