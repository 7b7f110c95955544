//! Error types for the bfinancial client

use thiserror::Error;

/// Result type alias for bfinancial operations
pub type Result<T> = std::result::Result<T, BfinancialError>;

/// Maximum number of bytes of a response body kept inside an error
pub const MAX_BODY_SNIPPET: usize = 2048;

/// Coarse classification of a [`BfinancialError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was malformed, ambiguous or of an unknown kind
    InvalidRequest,
    /// The remote service could not be reached or did not answer in time
    TransportFailure,
    /// The remote service answered but refused the payment
    RemoteRejected,
    /// The response did not have the expected shape
    DecodeFailure,
    /// The client itself was misconfigured
    Config,
}

/// Main error type for bfinancial operations
#[derive(Error, Debug)]
pub enum BfinancialError {
    /// Bad or ambiguous request
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// HTTP transport error (connection refused, DNS, timeout, ...)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status, or an error reported in the response payload
    #[error("Remote service rejected the payment with status {status}: {}", message.as_deref().unwrap_or(body.as_str()))]
    RemoteRejected {
        status: u16,
        message: Option<String>,
        body: String,
    },

    /// Response body could not be parsed
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Base64 encoding/decoding error
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BfinancialError {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a rejection error from an HTTP status and raw body
    pub fn remote_rejected(status: u16, message: Option<String>, body: &str) -> Self {
        Self::RemoteRejected {
            status,
            message,
            body: snippet(body),
        }
    }

    /// Create a decode error keeping a snippet of the offending body
    pub fn decode(source: serde_json::Error, body: &str) -> Self {
        Self::Decode {
            source,
            body: snippet(body),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::Transport(_) => ErrorKind::TransportFailure,
            Self::RemoteRejected { .. } => ErrorKind::RemoteRejected,
            Self::Decode { .. } | Self::Base64(_) => ErrorKind::DecodeFailure,
            Self::Config { .. } => ErrorKind::Config,
        }
    }

    /// HTTP status carried by a rejection, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the error was caused by the request timing out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Truncate a body to at most [`MAX_BODY_SNIPPET`] bytes on a char boundary
pub(crate) fn snippet(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            BfinancialError::invalid_request("both payloads set").kind(),
            ErrorKind::InvalidRequest
        );
        assert_eq!(
            BfinancialError::remote_rejected(500, None, "boom").kind(),
            ErrorKind::RemoteRejected
        );
        assert_eq!(
            BfinancialError::config("missing token").kind(),
            ErrorKind::Config
        );

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            BfinancialError::decode(json_err, "{").kind(),
            ErrorKind::DecodeFailure
        );
    }

    #[test]
    fn test_remote_rejected_message() {
        let error = BfinancialError::remote_rejected(500, None, "internal error");
        assert_eq!(error.status(), Some(500));
        let msg = error.to_string();
        assert!(msg.contains("500"), "actual: {}", msg);
        assert!(msg.contains("internal error"), "actual: {}", msg);

        let error = BfinancialError::remote_rejected(200, Some("card declined".into()), "{}");
        assert!(error.to_string().contains("card declined"));
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let body = "é".repeat(MAX_BODY_SNIPPET);
        let cut = snippet(&body);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= MAX_BODY_SNIPPET + 3);

        assert_eq!(snippet("short"), "short");
    }
}
