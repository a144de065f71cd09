//! Storage and filesystem-related error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to check existence of {path}: {message}")]
    ExistenceCheckFailed { path: String, message: String },

    #[error("failed to remove cache directory {path}: {message}")]
    RemoveFailed { path: String, message: String },

    #[error("failed to create cache directory {path}: {message}")]
    CreateFailed { path: String, message: String },
}

impl UserFacingError for StorageError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::RemoveFailed { .. } => Some(
                "The cache entry may be partially deleted. Remove it manually (`crdprep clean`) and retry.",
            ),
            Self::CreateFailed { .. } => {
                Some("Check that the data directory is writable by the current user.")
            }
            Self::ExistenceCheckFailed { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::ExistenceCheckFailed { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ExistenceCheckFailed { .. } => "storage.existence_check_failed",
            Self::RemoveFailed { .. } => "storage.remove_failed",
            Self::CreateFailed { .. } => "storage.create_failed",
        };
        Some(code)
    }
}
