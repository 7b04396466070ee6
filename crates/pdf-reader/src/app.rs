use crate::ui::viewer_panel::ViewerPanel;
use crate::viewer::engine::PdfEngine;
use crate::viewer::session::ViewerSession;
use eframe::egui;

pub struct PdfReaderApp<E: PdfEngine> {
    session: ViewerSession<E>,
    panel: ViewerPanel,
}

impl<E: PdfEngine> PdfReaderApp<E> {
    pub fn new(engine: E) -> Self {
        Self {
            session: ViewerSession::new(engine),
            panel: ViewerPanel::new(),
        }
    }
}

impl<E: PdfEngine> eframe::App for PdfReaderApp<E> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.show(ctx, &mut self.session);
    }
}
