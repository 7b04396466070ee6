use super::engine::{PdfDocument as DocumentHandle, PdfEngine};
use super::pixmap::Pixmap;
use crate::error::{Result, ViewerError};
use pdfium_render::prelude::*;
use std::cell::OnceCell;
use std::path::{Path, PathBuf};

fn library_candidates(explicit_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dir) = explicit_dir {
        candidates.push(Pdfium::pdfium_platform_library_name_at_path(dir));
    }

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(Pdfium::pdfium_platform_library_name_at_path(&exe_dir));
    }

    candidates
}

fn bind_pdfium(explicit_dir: Option<&Path>) -> Result<Pdfium> {
    for library_path in library_candidates(explicit_dir) {
        if !library_path.exists() {
            continue;
        }

        match Pdfium::bind_to_library(&library_path) {
            Ok(bindings) => {
                log::info!("Bound PDFium from {}", library_path.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => log::warn!(
                "Failed to bind PDFium at {}: {}",
                library_path.display(),
                e
            ),
        }
    }

    let bindings = Pdfium::bind_to_system_library().map_err(|e| {
        ViewerError::LibraryBinding(format!(
            "PDFium library not found next to the executable or on the system path: {}",
            e
        ))
    })?;
    log::info!("Bound system PDFium library");

    Ok(Pdfium::new(bindings))
}

/// [`PdfEngine`] backed by PDFium. The library is bound on the first open,
/// so a missing library surfaces as an open error instead of a startup failure.
/// Once bound it stays loaded for the rest of the process.
pub struct PdfiumEngine {
    library_dir: Option<PathBuf>,
    pdfium: OnceCell<&'static Pdfium>,
}

impl PdfiumEngine {
    pub fn new(library_dir: Option<PathBuf>) -> Self {
        Self {
            library_dir,
            pdfium: OnceCell::new(),
        }
    }

    fn pdfium(&self) -> Result<&'static Pdfium> {
        if let Some(pdfium) = self.pdfium.get() {
            return Ok(pdfium);
        }

        let pdfium: &'static Pdfium =
            Box::leak(Box::new(bind_pdfium(self.library_dir.as_deref())?));
        Ok(self.pdfium.get_or_init(|| pdfium))
    }
}

impl PdfEngine for PdfiumEngine {
    type Document = PdfiumDocument;

    fn open(&self, path: &Path) -> Result<PdfiumDocument> {
        if !path.exists() {
            return Err(ViewerError::DocumentOpen {
                path: path.to_path_buf(),
                reason: "file not found".into(),
            });
        }

        let pdfium = self.pdfium()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| ViewerError::DocumentOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(PdfiumDocument {
            file_path: path.to_path_buf(),
            document,
            pdfium,
        })
    }
}

/// An open PDFium document. Dropping it closes the document and its file.
pub struct PdfiumDocument {
    file_path: PathBuf,
    document: PdfDocument<'static>,
    pdfium: &'static Pdfium,
}

impl std::fmt::Debug for PdfiumDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfiumDocument")
            .field("file_path", &self.file_path)
            .field("page_count", &self.page_count())
            .finish()
    }
}

impl Drop for PdfiumDocument {
    fn drop(&mut self) {
        log::debug!("Closed {}", self.file_path.display());
    }
}

fn scaled_dimension(points: f32, scale: f32) -> i32 {
    ((points * scale).round() as i32).max(1)
}

impl DocumentHandle for PdfiumDocument {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn render_page(&self, index: usize, scale_x: f32, scale_y: f32) -> Result<Pixmap> {
        let page = self.document.pages().iter().nth(index).ok_or_else(|| {
            ViewerError::RenderFailed(format!(
                "page {} does not exist in a {} page document",
                index + 1,
                self.page_count()
            ))
        })?;

        let width = scaled_dimension(page.width().value, scale_x);
        let height = scaled_dimension(page.height().value, scale_y);

        let mut bitmap = PdfBitmap::empty(
            width,
            height,
            PdfBitmapFormat::BGRx,
            self.pdfium.bindings(),
        )
        .map_err(|e| ViewerError::RenderFailed(format!("Failed to create bitmap: {:?}", e)))?;

        page.render_into_bitmap(&mut bitmap, width, height, None)
            .map_err(|e| ViewerError::RenderFailed(format!("Failed to render bitmap: {:?}", e)))?;

        let pixel_count = width as usize * height as usize;
        let mut samples = Vec::with_capacity(pixel_count * 3);
        for bgrx in bitmap.as_raw_bytes().chunks_exact(4).take(pixel_count) {
            samples.extend_from_slice(&[bgrx[2], bgrx[1], bgrx[0]]);
        }

        Pixmap::packed(width as u32, height as u32, samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_dimension_rounds() {
        assert_eq!(scaled_dimension(612.0, 1.0), 612);
        assert_eq!(scaled_dimension(612.0, 1.3), 796);
        assert_eq!(scaled_dimension(612.0, 0.1), 61);
    }

    #[test]
    fn test_scaled_dimension_never_zero() {
        assert_eq!(scaled_dimension(2.0, 0.1), 1);
        assert_eq!(scaled_dimension(0.0, 1.0), 1);
    }

    #[test]
    fn test_explicit_directory_is_searched_first() {
        let dir = PathBuf::from("/opt/pdfium/lib");
        let candidates = library_candidates(Some(&dir));
        assert!(candidates[0].starts_with(&dir));
        assert!(!candidates.is_empty());
    }

    #[test]
    fn test_missing_file_fails_before_binding() {
        let engine = PdfiumEngine::new(Some(PathBuf::from("/nonexistent/pdfium")));
        let result = engine.open(Path::new("/nonexistent/missing.pdf"));
        assert!(matches!(result, Err(ViewerError::DocumentOpen { .. })));
        assert!(engine.pdfium.get().is_none());
    }

    #[test]
    fn test_candidates_without_explicit_directory() {
        let candidates = library_candidates(None);
        assert!(candidates.iter().all(|p| !p.starts_with("/opt/pdfium/lib")));
    }

    fn minimal_pdf(page_count: usize) -> Vec<u8> {
        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i + 3)).collect();
        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), page_count),
        ];
        for _ in 0..page_count {
            objects.push("<< /Type /Page /Parent 2 0 R /MediaBox [0 0 100 150] >>".to_string());
        }

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
        }

        let xref = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref
            )
            .as_bytes(),
        );
        pdf
    }

    #[cfg(unix)]
    #[test]
    fn test_open_document_survives_file_replacement() {
        let engine = PdfiumEngine::new(None);
        if engine.pdfium().is_err() {
            eprintln!("PDFium is not installed, skipping");
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.pdf");
        std::fs::write(&path, minimal_pdf(2)).unwrap();

        let document = engine.open(&path).unwrap();
        assert_eq!(document.page_count(), 2);

        // Rendering reads through the open handle, not the path.
        let replacement = dir.path().join("one.pdf");
        std::fs::write(&replacement, minimal_pdf(1)).unwrap();
        std::fs::rename(&replacement, &path).unwrap();
        assert_eq!(document.page_count(), 2);

        let pixmap = document.render_page(1, 1.0, 1.0).unwrap();
        assert_eq!(pixmap.size(), [100, 150]);
        assert!(document.render_page(2, 1.0, 1.0).is_err());

        drop(document);
        let reopened = engine.open(&path).unwrap();
        assert_eq!(reopened.page_count(), 1);
    }
}
