use std::io;
use std::path::PathBuf;

/// Failures that can hit a single note or the settings file.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("front matter in {path} is not valid: {reason}")]
    FrontMatter { path: PathBuf, reason: String },

    #[error("settings file {path} could not be saved: {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TagError {
    /// Attach a path to a front matter failure detected before the path was known.
    pub fn with_path(self, path: &std::path::Path) -> Self {
        match self {
            TagError::FrontMatter { reason, .. } => {
                TagError::FrontMatter { path: path.to_path_buf(), reason }
            }
            other => other,
        }
    }
}
