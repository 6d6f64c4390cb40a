use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between the composer and the backend.
///
/// Validation errors (`EmptyMessage`, `Busy`) never reach the network. Transport
/// errors are absorbed by the session as a fallback notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChatError {
    // ── Validation ───────────────────────────────────────────────────────────
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("a request is already in flight")]
    Busy,

    // ── Transport ────────────────────────────────────────────────────────────
    #[error("network error: {0}")]
    Network(String),

    #[error("server error: HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl ChatError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::EmptyMessage | ChatError::Busy)
    }

    pub fn is_transport(&self) -> bool {
        !self.is_validation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_error_display() {
        assert_eq!(ChatError::EmptyMessage.to_string(), "message cannot be empty");
        assert_eq!(ChatError::Busy.to_string(), "a request is already in flight");
        assert_eq!(
            ChatError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(ChatError::Status(502).to_string(), "server error: HTTP 502");
        assert_eq!(
            ChatError::Malformed("eof".to_string()).to_string(),
            "malformed response: eof"
        );
        assert_eq!(
            ChatError::Timeout(Duration::from_secs(30)).to_string(),
            "request timed out after 30s"
        );
    }

    #[test]
    fn test_chat_error_taxonomy() {
        assert!(ChatError::EmptyMessage.is_validation());
        assert!(ChatError::Busy.is_validation());
        assert!(ChatError::Status(500).is_transport());
        assert!(ChatError::Timeout(Duration::from_millis(1)).is_transport());
        assert!(!ChatError::Network(String::new()).is_validation());
    }
}
