//! Error types for protocol operations.

/// Errors that can occur when building protocol values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// The year cannot be turned into a date window.
    #[error("invalid window year: {0}")]
    InvalidYear(i32),

    /// An event ordering name was not recognized.
    #[error("unknown event ordering `{0}` (expected newest-first, trusted, or full-scan)")]
    UnknownOrdering(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_year() {
        assert_eq!(
            ProtocolError::InvalidYear(-300_000).to_string(),
            "invalid window year: -300000"
        );
    }

    #[test]
    fn error_display_unknown_ordering() {
        let err = ProtocolError::UnknownOrdering("sideways".to_string());
        assert!(err.to_string().starts_with("unknown event ordering `sideways`"));
    }
}
