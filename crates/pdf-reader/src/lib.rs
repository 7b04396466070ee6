pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod ui;
pub mod viewer;

pub use config::ViewerConfig;
pub use error::{Result, ViewerError};
pub use viewer::command::ViewerCommand;
pub use viewer::drag::DragState;
pub use viewer::engine::{PdfDocument, PdfEngine};
pub use viewer::pdf_loader::PdfiumEngine;
pub use viewer::pixmap::Pixmap;
pub use viewer::session::{RenderedPage, ViewerSession};
