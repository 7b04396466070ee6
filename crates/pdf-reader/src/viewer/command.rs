use egui::Pos2;
use std::path::PathBuf;

/// One user action, as produced by the toolbar and page view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerCommand {
    Open(PathBuf),
    Close,
    PreviousPage,
    NextPage,
    /// Raw text from the page entry, one-based.
    GoToPage(String),
    ZoomIn,
    ZoomOut,
    DragStart { pos: Pos2, overflowing: bool },
    DragMove(Pos2),
    DragEnd,
}
