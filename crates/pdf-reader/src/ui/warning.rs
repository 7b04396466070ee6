use crate::error::ViewerError;
use eframe::egui;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Warning {
    title: String,
    message: String,
}

/// Blocking warning window shown for errors raised by viewer commands.
#[derive(Debug, Default)]
pub struct WarningDialog {
    current: Option<Warning>,
}

impl WarningDialog {
    pub fn report(&mut self, error: &ViewerError) {
        log::warn!("{}", error);
        self.current = Some(Warning {
            title: error.title().to_string(),
            message: error.to_string(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(warning) = &self.current else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(warning.title.as_str())
            .id(egui::Id::new("warning_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(warning.message.as_str());
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.dismiss();
        }
    }
}
