//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or parsing a content file
///
/// These never reach callers of [`ContentLoader`](super::loader::ContentLoader)'s
/// read operations: they are logged and turned into a skipped file or an absent
/// document.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} front-matter: {message}")]
    FrontMatter {
        format: &'static str,
        message: String,
    },

    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn front_matter(format: &'static str, message: impl ToString) -> Self {
        Self::FrontMatter {
            format,
            message: message.to_string(),
        }
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
