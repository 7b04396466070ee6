use crate::constants::{APP_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Startup settings for the viewer window and the PDFium binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    /// Directory searched for the PDFium shared library before the
    /// executable's directory and the system library path.
    pub pdfium_library_dir: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_title: APP_NAME.to_string(),
            window_size: [DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT],
            pdfium_library_dir: None,
        }
    }
}
