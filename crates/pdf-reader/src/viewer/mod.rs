pub mod command;
pub mod drag;
pub mod engine;
pub mod pdf_loader;
pub mod pixmap;
pub mod session;
