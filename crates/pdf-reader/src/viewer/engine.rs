use super::pixmap::Pixmap;
use crate::error::Result;
use std::path::Path;

/// An opened document. Dropping the value closes it.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Rasterizes page `index` (zero-based) scaled by `scale_x`/`scale_y`.
    fn render_page(&self, index: usize, scale_x: f32, scale_y: f32) -> Result<Pixmap>;
}

pub trait PdfEngine {
    type Document: PdfDocument;

    fn open(&self, path: &Path) -> Result<Self::Document>;
}
