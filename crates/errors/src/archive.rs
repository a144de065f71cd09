//! Archive extraction error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ArchiveError {
    #[error("failed to unpack {archive} into {dest}: {message}")]
    ExtractionFailed {
        archive: String,
        dest: String,
        message: String,
    },

    #[error("archive {archive} contains unsafe entry path: {entry}")]
    PathTraversal { archive: String, entry: String },

    #[error("extract task failed: {message}")]
    TaskFailed { message: String },
}

impl UserFacingError for ArchiveError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ExtractionFailed { .. } => Some(
                "The cached archive may be corrupt. Run `crdprep clean` or use --policy always to re-download.",
            ),
            Self::PathTraversal { .. } => {
                Some("The CRD package is malformed; contact the package publisher.")
            }
            Self::TaskFailed { .. } => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ExtractionFailed { .. } => "archive.extraction_failed",
            Self::PathTraversal { .. } => "archive.path_traversal",
            Self::TaskFailed { .. } => "archive.task_failed",
        };
        Some(code)
    }
}
