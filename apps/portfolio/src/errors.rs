use thiserror::Error;

/// Library-level error type for content loading and theme persistence.
///
/// Validation failures are not errors; they travel as `FieldErrors` data.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("Content parse error: {0}")]
    ContentParse(#[from] serde_json::Error),

    #[error("Duplicate project id: {0}")]
    DuplicateProjectId(u32),

    #[error("Content has no projects")]
    EmptyProjects,

    #[error("Theme storage error: {0}")]
    ThemeStorage(#[from] std::io::Error),

    #[error("Theme storage format error: {0}")]
    ThemeFormat(String),
}

/// Failure reported by the contact delivery collaborator.
/// Surfaced once as an error toast; never retried automatically.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Contact endpoint rejected message (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Contact delivery is not configured")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message_names_id() {
        let err = PortfolioError::DuplicateProjectId(7);
        assert_eq!(err.to_string(), "Duplicate project id: 7");
    }

    #[test]
    fn test_rejected_message_carries_status() {
        let err = ContactError::Rejected {
            status: 422,
            message: "bad email".to_string(),
        };
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("bad email"));
    }
}
