use crate::constants::*;
use crate::viewer::command::ViewerCommand;
use crate::viewer::engine::PdfEngine;
use crate::viewer::session::ViewerSession;
use eframe::egui;

fn pick_pdf_file() -> Option<std::path::PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open PDF File")
        .add_filter("PDF", &["pdf"])
        .add_filter("All files", &["*"])
        .pick_file()
}

pub fn show_toolbar<E: PdfEngine>(
    ui: &mut egui::Ui,
    session: &mut ViewerSession<E>,
    commands: &mut Vec<ViewerCommand>,
) {
    ui.horizontal(|ui| {
        ui.label(session.file_name_label());

        if ui.button("Open").clicked() {
            if let Some(path) = pick_pdf_file() {
                commands.push(ViewerCommand::Open(path));
            }
        }

        if ui.button("Previous").clicked() {
            commands.push(ViewerCommand::PreviousPage);
        }

        if ui.button("Next").clicked() {
            commands.push(ViewerCommand::NextPage);
        }

        let input_response = ui.add(
            egui::TextEdit::singleline(&mut session.page_input_text)
                .hint_text("Page")
                .desired_width(PAGE_INPUT_WIDTH),
        );
        let submitted =
            input_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        ui.label("/");
        ui.label(session.page_count_label());

        if ui.button("Go").clicked() || submitted {
            commands.push(ViewerCommand::GoToPage(session.page_input_text.clone()));
        }

        if ui.button("Zoom In").clicked() {
            commands.push(ViewerCommand::ZoomIn);
        }

        let mut zoom_text = session.zoom_label();
        ui.add_enabled(
            false,
            egui::TextEdit::singleline(&mut zoom_text).desired_width(ZOOM_LABEL_WIDTH),
        );

        if ui.button("Zoom Out").clicked() {
            commands.push(ViewerCommand::ZoomOut);
        }

        if ui.button("Close").clicked() {
            commands.push(ViewerCommand::Close);
        }
    });
}
