//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the conversion of parsed flags into a [`RequestSpec`] and [`DisplayOptions`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_METHOD;
use crate::error_handling::ConfigError;
use crate::render::DisplayOptions;
use crate::request::RequestSpec;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Basic usage (http:// is assumed)
/// http_inspect example.com
///
/// # POST with a header and a body, following redirects
/// http_inspect -X post -H 'Content-Type: application/json' -d '{"a":1}' -L https://example.com/api
///
/// # Every header, no body, 5 second deadline
/// http_inspect --all-headers --without-body --timeout 5 https://example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "http_inspect",
    version,
    about = "Sends one HTTP request and prints a readable summary of the response."
)]
pub struct Opt {
    /// Target URL (http:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    pub url: String,

    /// HTTP method, any token is accepted (uppercased)
    #[arg(short = 'X', long, default_value = DEFAULT_METHOD)]
    pub method: String,

    /// Request header as "Name: value" (repeatable; repeated names are all sent)
    #[arg(short = 'H', long = "header", value_name = "NAME: VALUE")]
    pub headers: Vec<String>,

    /// Request body
    #[arg(short = 'd', long, conflicts_with = "data_file")]
    pub data: Option<String>,

    /// Read the request body from a file
    #[arg(long, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Deadline for the whole request in seconds (0 disables the deadline)
    #[arg(short = 't', long, value_name = "SECONDS", default_value_t = 0)]
    pub timeout: u64,

    /// Follow redirects and report the final response
    #[arg(short = 'L', long)]
    pub follow_redirects: bool,

    /// Skip TLS certificate and hostname verification for this request
    #[arg(short = 'k', long)]
    pub insecure: bool,

    /// Print every response header instead of the default short list
    #[arg(short = 'a', long)]
    pub all_headers: bool,

    /// Do not print the response body
    #[arg(long)]
    pub without_body: bool,

    /// HTTP User-Agent header value
    #[arg(short = 'A', long)]
    pub user_agent: Option<String>,

    /// Cookie header value, e.g. "session=abc; theme=dark"
    #[arg(short = 'b', long = "cookie")]
    pub cookies: Option<String>,

    /// Proxy URL for the request, e.g. http://127.0.0.1:8080
    #[arg(short = 'x', long)]
    pub proxy: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Validates the parsed flags and builds the request to execute.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending flag if the method or URL
    /// is empty, a header is not of the form `Name: value`, or the body file
    /// cannot be read.
    pub fn request_spec(&self) -> Result<RequestSpec, ConfigError> {
        let method = self.method.trim();
        if method.is_empty() {
            return Err(ConfigError::new("method", "must not be empty"));
        }

        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::new("url", "must not be empty"));
        }

        let body = match (&self.data, &self.data_file) {
            (Some(data), _) => data.clone().into_bytes(),
            (None, Some(path)) => std::fs::read(path).map_err(|e| {
                ConfigError::new(
                    "data_file",
                    format!("cannot read {}: {}", path.display(), e),
                )
            })?,
            (None, None) => Vec::new(),
        };

        let mut builder = RequestSpec::builder(method, url)
            .body(body)
            .timeout_seconds(self.timeout)
            .follow_redirects(self.follow_redirects)
            .ignore_certificate_errors(self.insecure);

        for raw in &self.headers {
            let (name, value) = parse_header_arg(raw)?;
            builder = builder.header(name, value);
        }

        if let Some(user_agent) = non_empty(&self.user_agent) {
            builder = builder.user_agent(user_agent);
        }
        if let Some(cookies) = non_empty(&self.cookies) {
            builder = builder.cookies(cookies);
        }
        if let Some(proxy) = non_empty(&self.proxy) {
            builder = builder.proxy(proxy);
        }

        Ok(builder.build())
    }

    /// Display toggles for the response summary.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_all_headers: self.all_headers,
            hide_body: self.without_body,
            color: !self.no_color,
        }
    }
}

/// Splits a `Name: value` header argument.
///
/// Whitespace around the name and the value is trimmed. The value may be empty,
/// the name may not.
fn parse_header_arg(raw: &str) -> Result<(String, String), ConfigError> {
    let Some((name, value)) = raw.split_once(':') else {
        return Err(ConfigError::new(
            "header",
            format!("expected \"Name: value\", got {raw:?}"),
        ));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::new(
            "header",
            format!("missing header name in {raw:?}"),
        ));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Opt {
        let mut full = vec!["http_inspect"];
        full.extend_from_slice(args);
        Opt::try_parse_from(full).expect("arguments should parse")
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_defaults() {
        let opt = parse(&["example.com"]);
        assert_eq!(opt.url, "example.com");
        assert_eq!(opt.method, "GET");
        assert_eq!(opt.timeout, 0);
        assert!(!opt.follow_redirects);
        assert!(!opt.insecure);
        assert!(!opt.all_headers);
        assert!(!opt.without_body);
        assert!(!opt.no_color);
        assert_eq!(
            log::LevelFilter::from(opt.log_level.clone()),
            log::LevelFilter::Warn
        );
        match opt.log_format {
            LogFormat::Plain => {}
            LogFormat::Json => panic!("Default log format should be Plain"),
        }
    }

    #[test]
    fn test_request_spec_from_flags() {
        let opt = parse(&[
            "-X",
            "post",
            "-H",
            "Content-Type: application/json",
            "-H",
            "X-Trace:  a ",
            "-H",
            "X-Trace: b",
            "-d",
            "{\"a\":1}",
            "-t",
            "3",
            "-L",
            "-k",
            "-A",
            "probe/2.0",
            "-b",
            "session=abc",
            "example.com/api",
        ]);
        let spec = opt.request_spec().expect("flags are valid");

        assert_eq!(spec.method(), "POST");
        assert_eq!(spec.url(), "example.com/api");
        assert_eq!(
            spec.headers(),
            &[
                ("Content-Type".to_string(), "application/json".to_string()),
                ("X-Trace".to_string(), "a".to_string()),
                ("X-Trace".to_string(), "b".to_string()),
            ]
        );
        assert_eq!(spec.body(), b"{\"a\":1}");
        assert_eq!(spec.timeout_seconds(), 3);
        assert!(spec.follow_redirects());
        assert!(spec.ignore_certificate_errors());
        assert_eq!(spec.user_agent(), Some("probe/2.0"));
        assert_eq!(spec.cookies(), Some("session=abc"));
        assert_eq!(spec.proxy(), None);
    }

    #[test]
    fn test_header_value_may_contain_colons() {
        let opt = parse(&["-H", "Referer: http://example.com:8080/", "example.com"]);
        let spec = opt.request_spec().expect("flags are valid");
        assert_eq!(
            spec.headers(),
            &[("Referer".to_string(), "http://example.com:8080/".to_string())]
        );
    }

    #[test]
    fn test_header_without_colon_is_rejected() {
        let opt = parse(&["-H", "NoColonHere", "example.com"]);
        let err = opt.request_spec().expect_err("header should be rejected");
        assert_eq!(err.field, "header");
        assert!(err.message.contains("Name: value"));
    }

    #[test]
    fn test_header_with_empty_name_is_rejected() {
        let opt = parse(&["-H", " : value", "example.com"]);
        let err = opt.request_spec().expect_err("header should be rejected");
        assert_eq!(err.field, "header");
    }

    #[test]
    fn test_empty_method_is_rejected() {
        let opt = parse(&["-X", "  ", "example.com"]);
        let err = opt.request_spec().expect_err("method should be rejected");
        assert_eq!(err.field, "method");
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let opt = parse(&[""]);
        let err = opt.request_spec().expect_err("url should be rejected");
        assert_eq!(err.field, "url");
    }

    #[test]
    fn test_blank_optional_values_are_ignored() {
        let opt = parse(&["-A", " ", "-b", "", "-x", "", "example.com"]);
        let spec = opt.request_spec().expect("flags are valid");
        assert_eq!(spec.user_agent(), None);
        assert_eq!(spec.cookies(), None);
        assert_eq!(spec.proxy(), None);
    }

    #[test]
    fn test_body_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(b"payload from disk")
            .expect("Failed to write body");
        file.flush().expect("Failed to flush file");

        let path = file.path().to_string_lossy().to_string();
        let opt = parse(&["--data-file", &path, "example.com"]);
        let spec = opt.request_spec().expect("flags are valid");
        assert_eq!(spec.body(), b"payload from disk");
    }

    #[test]
    fn test_missing_body_file_is_rejected() {
        let opt = parse(&["--data-file", "/definitely/not/here.bin", "example.com"]);
        let err = opt.request_spec().expect_err("missing file should be rejected");
        assert_eq!(err.field, "data_file");
    }

    #[test]
    fn test_data_conflicts_with_data_file() {
        let result = Opt::try_parse_from([
            "http_inspect",
            "-d",
            "inline",
            "--data-file",
            "body.bin",
            "example.com",
        ]);
        assert!(result.is_err(), "--data and --data-file are exclusive");
    }

    #[test]
    fn test_display_options() {
        let opt = parse(&["--all-headers", "--without-body", "--no-color", "example.com"]);
        let display = opt.display_options();
        assert!(display.show_all_headers);
        assert!(display.hide_body);
        assert!(!display.color);

        let display = parse(&["example.com"]).display_options();
        assert!(!display.show_all_headers);
        assert!(!display.hide_body);
        assert!(display.color);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Opt::try_parse_from(["http_inspect"]).is_err());
    }
}
