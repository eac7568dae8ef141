//! Payment Error Types

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors returned by the config loader and the PayPal client
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Config file did not exist; an empty placeholder was written
    #[error("created empty config file: {}", path.display())]
    ConfigCreated { path: PathBuf },

    /// Required config field is missing or empty
    #[error("missing {0} in paypal config file")]
    MissingField(&'static str),

    /// Config file is not valid JSON
    #[error("invalid paypal config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem error while reading or creating the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Argument rejected before any request was sent
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The HTTP exchange could not be completed (DNS, connect, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// PayPal answered with a status other than the expected one
    #[error("{operation} failed: {status}: {body}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("malformed {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl PaymentError {
    /// HTTP status returned by PayPal, if this is a protocol error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            Self::ConfigCreated { .. }
            | Self::MissingField(_)
            | Self::ConfigParse { .. }
            | Self::Io(_) => "Payment service configuration error.",
            Self::InvalidInput(_) => "Invalid payment request.",
            Self::Transport(_) => "Payment provider unreachable. Please try again.",
            Self::UnexpectedStatus { .. } | Self::Decode { .. } => {
                "Payment processing failed. Please try again."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_message() {
        let err = PaymentError::UnexpectedStatus {
            operation: "authenticate",
            status: StatusCode::FORBIDDEN,
            body: r#"{"error":"invalid_client"}"#.into(),
        };
        assert_eq!(
            err.to_string(),
            r#"authenticate failed: 403 Forbidden: {"error":"invalid_client"}"#
        );
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_missing_field_message() {
        let err = PaymentError::MissingField("client-id");
        assert_eq!(err.to_string(), "missing client-id in paypal config file");
        assert_eq!(err.status(), None);
        assert_eq!(err.user_message(), "Payment service configuration error.");
    }
}
