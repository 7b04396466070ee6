use super::command::ViewerCommand;
use super::drag::DragState;
use super::engine::{PdfDocument, PdfEngine};
use crate::constants::*;
use crate::error::{Result, ViewerError};
use egui::{Pos2, Vec2};
use std::path::Path;

/// The image currently on display. Replaced on every render, never reused.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub page_index: usize,
    /// Increases with every render so the display knows to upload a new texture.
    pub generation: u64,
    pub image: egui::ColorImage,
}

/// State of one viewer window: the open document, the page and zoom being
/// shown, and the pan gesture in progress.
pub struct ViewerSession<E: PdfEngine> {
    engine: E,
    document: Option<E::Document>,
    file_name: String,
    page_count: usize,
    current_page: usize,
    zoom_percent: u32,
    drag: DragState,
    image_offset: Vec2,
    rendered: Option<RenderedPage>,
    render_generation: u64,
    pub page_input_text: String,
}

impl<E: PdfEngine> ViewerSession<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            document: None,
            file_name: String::new(),
            page_count: 0,
            current_page: 0,
            zoom_percent: DEFAULT_ZOOM_PERCENT,
            drag: DragState::Idle,
            image_offset: Vec2::ZERO,
            rendered: None,
            render_generation: 0,
            page_input_text: String::new(),
        }
    }

    pub fn dispatch(&mut self, command: ViewerCommand) -> Result<()> {
        match command {
            ViewerCommand::Open(path) => self.open(&path),
            ViewerCommand::Close => {
                self.close();
                Ok(())
            }
            ViewerCommand::PreviousPage => self.previous_page(),
            ViewerCommand::NextPage => self.next_page(),
            ViewerCommand::GoToPage(text) => self.go_to_page(&text),
            ViewerCommand::ZoomIn => self.zoom_in(),
            ViewerCommand::ZoomOut => self.zoom_out(),
            ViewerCommand::DragStart { pos, overflowing } => {
                self.drag_start(pos, overflowing);
                Ok(())
            }
            ViewerCommand::DragMove(pos) => {
                self.drag_move(pos);
                Ok(())
            }
            ViewerCommand::DragEnd => {
                self.drag_end();
                Ok(())
            }
        }
    }

    /// Opens `path`, replacing the current document only once the new one loaded.
    /// The zoom level carries over to the new document.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let document = self.engine.open(path)?;
        self.close();

        let page_count = document.page_count();
        self.document = Some(document);
        self.file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.page_count = page_count;
        self.current_page = 0;
        self.page_input_text = "1".to_string();
        self.image_offset = Vec2::ZERO;
        self.drag.end();

        log::info!("Opened {} ({} pages)", path.display(), page_count);
        self.render()
    }

    pub fn close(&mut self) {
        let Some(document) = self.document.take() else {
            return;
        };
        drop(document);

        log::info!("Closed {}", self.file_name);
        self.file_name.clear();
        self.rendered = None;
        self.page_count = 0;
        self.current_page = 0;
        self.image_offset = Vec2::ZERO;
        self.drag.end();
    }

    pub fn previous_page(&mut self) -> Result<()> {
        if self.document.is_none() || self.current_page == 0 {
            return Ok(());
        }
        self.current_page -= 1;
        self.page_input_text = (self.current_page + 1).to_string();
        self.render()
    }

    pub fn next_page(&mut self) -> Result<()> {
        if self.document.is_none() || self.current_page + 1 >= self.page_count {
            return Ok(());
        }
        self.current_page += 1;
        self.page_input_text = (self.current_page + 1).to_string();
        self.render()
    }

    /// Jumps to the one-based page number typed by the user.
    pub fn go_to_page(&mut self, text: &str) -> Result<()> {
        if self.document.is_none() {
            return Ok(());
        }

        let requested: i64 = text
            .trim()
            .parse()
            .map_err(|_| ViewerError::InvalidPageNumberFormat(text.to_string()))?;

        let index = requested
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .filter(|&index| index < self.page_count)
            .ok_or(ViewerError::OutOfRangePage {
                requested,
                page_count: self.page_count,
            })?;

        log::debug!("Going to page {}", requested);
        self.current_page = index;
        self.page_input_text = requested.to_string();
        self.render()
    }

    pub fn zoom_in(&mut self) -> Result<()> {
        if self.document.is_none() {
            return Ok(());
        }
        self.zoom_percent = self.zoom_percent.saturating_add(ZOOM_STEP_PERCENT);
        log::debug!("Zoom {}%", self.zoom_percent);
        self.render()
    }

    pub fn zoom_out(&mut self) -> Result<()> {
        if self.document.is_none() {
            return Ok(());
        }
        self.zoom_percent = self
            .zoom_percent
            .saturating_sub(ZOOM_STEP_PERCENT)
            .max(MIN_ZOOM_PERCENT);
        log::debug!("Zoom {}%", self.zoom_percent);
        self.render()
    }

    /// Rasterizes the current page at the current zoom and replaces the displayed image.
    /// The new image starts centred, so any pan from the previous image is dropped.
    pub fn render(&mut self) -> Result<()> {
        let Some(document) = self.document.as_ref() else {
            return Ok(());
        };
        if self.current_page >= self.page_count {
            return Ok(());
        }

        let scale = self.zoom_percent as f32 / 100.0;
        let pixmap = document.render_page(self.current_page, scale, scale)?;
        let image = pixmap.to_color_image()?;

        self.render_generation += 1;
        log::debug!(
            "Rendered page {} at {}% ({}x{})",
            self.current_page + 1,
            self.zoom_percent,
            image.size[0],
            image.size[1]
        );

        self.image_offset = Vec2::ZERO;
        self.drag.end();
        self.rendered = Some(RenderedPage {
            page_index: self.current_page,
            generation: self.render_generation,
            image,
        });
        Ok(())
    }

    pub fn drag_start(&mut self, pos: Pos2, overflowing: bool) {
        self.drag.start(pos, overflowing);
    }

    pub fn drag_move(&mut self, pos: Pos2) {
        if let Some(delta) = self.drag.update(pos) {
            self.image_offset += delta;
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    pub fn is_document_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn zoom_percent(&self) -> u32 {
        self.zoom_percent
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn image_offset(&self) -> Vec2 {
        self.image_offset
    }

    pub fn rendered_page(&self) -> Option<&RenderedPage> {
        self.rendered.as_ref()
    }

    pub fn file_name_label(&self) -> &str {
        &self.file_name
    }

    pub fn page_count_label(&self) -> String {
        self.page_count.to_string()
    }

    pub fn zoom_label(&self) -> String {
        format!("{}%", self.zoom_percent)
    }

    pub fn window_title(&self) -> String {
        match &self.rendered {
            Some(page) => format!("{} - Page {}", APP_NAME, page.page_index + 1),
            None => APP_NAME.to_string(),
        }
    }
}
