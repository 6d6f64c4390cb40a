use std::path::PathBuf;

use thiserror::Error;

/// Errors of the development backend and the terminal client.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Venue catalog errors ─────────────────────────────────────────────────
    #[error("Cannot read venue file {path}: {source}")]
    VenueFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Venue file {path} is not a JSON list of venues: {source}")]
    VenueFileInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Message is required")]
    EmptyMessage,

    #[error("Field '{field_name}' exceeds max length of {max_length} (actual: {actual_length})")]
    FieldTooLong { field_name: String, max_length: usize, actual_length: usize },

    // ── Terminal client errors ───────────────────────────────────────────────
    #[error("Cannot build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("Terminal I/O failed: {0}")]
    Terminal(#[source] std::io::Error),
}

impl AppError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyMessage | AppError::FieldTooLong { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_flagged() {
        assert!(AppError::EmptyMessage.is_validation());
        assert!(AppError::FieldTooLong {
            field_name: "message".to_string(),
            max_length: 10,
            actual_length: 11,
        }
        .is_validation());
        assert!(!AppError::Terminal(std::io::Error::other("closed")).is_validation());
    }

    #[test]
    fn test_empty_message_text_matches_wire_error() {
        assert_eq!(AppError::EmptyMessage.to_string(), "Message is required");
    }
}
