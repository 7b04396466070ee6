use super::page_view::PageView;
use super::toolbar;
use super::warning::WarningDialog;
use crate::constants::*;
use crate::viewer::command::ViewerCommand;
use crate::viewer::engine::PdfEngine;
use crate::viewer::session::ViewerSession;
use eframe::egui;

/// Lays out the toolbar and page area, then applies the commands they produced.
#[derive(Default)]
pub struct ViewerPanel {
    page_view: PageView,
    warning: WarningDialog,
    pending: Vec<ViewerCommand>,
    shown_title: String,
}

impl ViewerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show<E: PdfEngine>(&mut self, ctx: &egui::Context, session: &mut ViewerSession<E>) {
        let enabled = !self.warning.is_open();

        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::default()
                    .fill(TOOLBAR_BACKGROUND)
                    .inner_margin(8.0),
            )
            .max_height(TOOLBAR_MAX_HEIGHT)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    toolbar::show_toolbar(ui, session, &mut self.pending);
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(PAGE_AREA_BACKGROUND))
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    self.page_view.show(ui, session, &mut self.pending);
                });
            });

        self.apply_pending(session);
        self.warning.show(ctx);
        self.sync_title(ctx, session);
    }

    fn apply_pending<E: PdfEngine>(&mut self, session: &mut ViewerSession<E>) {
        for command in self.pending.drain(..) {
            if let Err(e) = session.dispatch(command) {
                self.warning.report(&e);
            }
        }
    }

    fn sync_title<E: PdfEngine>(&mut self, ctx: &egui::Context, session: &ViewerSession<E>) {
        let title = session.window_title();
        if title != self.shown_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.shown_title = title;
        }
    }
}
