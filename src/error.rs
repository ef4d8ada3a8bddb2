use std::path::PathBuf;

use thiserror::Error;

/// Problems with the user's input, caught on the UI thread before any worker starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter at least one URL")]
    EmptyInput,

    #[error("Cannot use output folder {}: {reason}", path.display())]
    InvalidDestination { path: PathBuf, reason: String },

    #[error("yt-dlp not found. Please install yt-dlp and make sure it's in your PATH")]
    ToolMissing,
}

/// Outcome of a single item that did not finish normally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// The stop flag was observed. Not a failure.
    #[error("download stopped")]
    Cancelled,

    #[error("{0}")]
    Item(String),
}

impl From<std::io::Error> for DownloadError {
    fn from(e: std::io::Error) -> Self {
        Self::Item(e.to_string())
    }
}
