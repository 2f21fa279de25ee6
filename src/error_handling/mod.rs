//! Error handling.
//!
//! This module provides:
//! - Error type definitions for configuration, initialization and request execution
//! - Error kinds used to report which stage of a request failed
//! - Categorization of transport errors into those kinds
//!
//! Every executor error is terminal for the single attempt. None are retried.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, Phase};
pub(crate) use categorization::to_execute_error;
pub use types::{ConfigError, ErrorKind, ExecuteError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_kind_labels_are_distinct() {
        let labels: Vec<&str> = ErrorKind::iter().map(|k| k.as_str()).collect();
        let mut deduped = labels.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(labels.len(), deduped.len());
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_execute_error_kind() {
        assert_eq!(
            ExecuteError::RequestConstruction("bad method".into()).kind(),
            ErrorKind::RequestConstruction
        );
        assert_eq!(
            ExecuteError::Timeout(Duration::from_secs(1)).kind(),
            ErrorKind::Timeout
        );
    }

    #[test]
    fn test_timeout_message_mentions_deadline() {
        let err = ExecuteError::Timeout(Duration::from_secs(3));
        assert_eq!(err.to_string(), "request timed out after 3s");
    }

    #[test]
    fn test_transport_errors_do_not_repeat_their_source() {
        use std::error::Error;

        let cause = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("an invalid URL should fail to build");
        let cause_text = cause.to_string();

        let err = ExecuteError::Network(cause);
        assert_eq!(err.to_string(), "network error");
        let source = err.source().expect("the transport error is the source");
        assert_eq!(source.to_string(), cause_text);

        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain.matches(cause_text.as_str()).count(), 1, "{chain}");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::new("header", "missing header name");
        assert_eq!(err.to_string(), "invalid header: missing header name");
    }
}
