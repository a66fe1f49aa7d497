#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Please sign in to save your progress")]
    NotSignedIn,

    #[error("Invalid analytics range: {0}")]
    InvalidRange(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for TrackerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        TrackerError::Validation(errors.to_string())
    }
}

impl TrackerError {
    /// Short user-facing message, the way the shell surfaces it in a toast.
    pub fn toast(&self) -> String {
        match self {
            TrackerError::NotSignedIn => format!("⚠️ {}.", self),
            TrackerError::Validation(msg) => format!("⚠️ {}", msg),
            TrackerError::InvalidRange(_) | TrackerError::InvalidDate(_) => {
                format!("⚠️ {}", self)
            }
            TrackerError::Io(e) => {
                tracing::error!(error = %e, "Storage error");
                "⚠️ Unable to save data right now.".into()
            }
            TrackerError::Serialization(e) => {
                tracing::error!(error = %e, "Serialization error");
                "⚠️ Unable to read tracking data.".into()
            }
            TrackerError::Config(e) => {
                tracing::error!(error = %e, "Configuration error");
                "⚠️ Tracker is misconfigured.".into()
            }
            TrackerError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                "⚠️ Something went wrong.".into()
            }
        }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_signed_in_toast() {
        assert_eq!(
            TrackerError::NotSignedIn.toast(),
            "⚠️ Please sign in to save your progress."
        );
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = TrackerError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "/secret/path",
        ));
        assert!(!err.toast().contains("/secret/path"));
    }
}
