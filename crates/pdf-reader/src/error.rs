use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewerError {
    #[error("Failed to open {}: {reason}", path.display())]
    DocumentOpen { path: PathBuf, reason: String },

    #[error("Please enter a numeric page number (got \"{0}\")")]
    InvalidPageNumberFormat(String),

    #[error("Please enter a valid page number (1 - {page_count}), got {requested}")]
    OutOfRangePage { requested: i64, page_count: usize },

    #[error("Render failed: {0}")]
    RenderFailed(String),

    #[error("PDF library binding failed: {0}")]
    LibraryBinding(String),

    #[error("Invalid pixmap: {0}")]
    InvalidPixmap(String),
}

impl ViewerError {
    /// Title used when the error is reported through the warning dialog.
    pub fn title(&self) -> &'static str {
        match self {
            Self::DocumentOpen { .. } | Self::LibraryBinding(_) => "Cannot Open Document",
            Self::InvalidPageNumberFormat(_) | Self::OutOfRangePage { .. } => "Warning",
            Self::RenderFailed(_) | Self::InvalidPixmap(_) => "Render Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
