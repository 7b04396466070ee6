use eframe::egui;
use pdf_reader::app::PdfReaderApp;
use pdf_reader::{PdfiumEngine, ViewerConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();
    log::debug!("Starting with {:?}", config);

    let options = eframe::NativeOptions {
        vsync: true,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.as_str()),
        ..Default::default()
    };

    let library_dir = config.pdfium_library_dir.clone();
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |_cc| {
            let engine = PdfiumEngine::new(library_dir);
            Ok(Box::new(PdfReaderApp::new(engine)))
        }),
    )
}
