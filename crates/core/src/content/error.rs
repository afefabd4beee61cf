//! Content provisioning error types.

use curio_shared::AppError;
use thiserror::Error;

/// Content provisioning errors.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content identifier is empty.
    #[error("content id is invalid: {0:?}")]
    InvalidInput(String),

    /// No content with the given identifier.
    #[error("content not found: {0}")]
    NotFound(String),

    /// Stored content type is absent or unknown.
    #[error("unsupported content type: {0}")]
    InvalidRequest(String),

    /// Metadata requested for a type outside the known set.
    #[error("invalid content type for metadata: {0}")]
    UnsupportedMetadataType(String),

    /// Content store operation failed.
    #[error("repository error: {0}")]
    Repository(String),
}

impl ContentError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an invalid request error for a stored type value.
    #[must_use]
    pub fn invalid_request(content_type: Option<&str>) -> Self {
        Self::InvalidRequest(content_type.unwrap_or("<none>").to_string())
    }

    /// Create a repository error.
    #[must_use]
    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }
}

impl From<ContentError> for AppError {
    fn from(err: ContentError) -> Self {
        let message = err.to_string();
        match err {
            ContentError::InvalidInput(_) => Self::Unprocessable(message),
            ContentError::NotFound(_) => Self::NotFound(message),
            ContentError::InvalidRequest(_) | ContentError::UnsupportedMetadataType(_) => {
                Self::Validation(message)
            }
            ContentError::Repository(_) => Self::Database(message),
        }
    }
}
