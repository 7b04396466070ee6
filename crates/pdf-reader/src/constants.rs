use egui::Color32;

pub const DEFAULT_ZOOM_PERCENT: u32 = 100;
pub const ZOOM_STEP_PERCENT: u32 = 10;
pub const MIN_ZOOM_PERCENT: u32 = 10;

pub const APP_NAME: &str = "PDF Viewer";
pub const DEFAULT_WINDOW_WIDTH: f32 = 800.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 600.0;

pub const TOOLBAR_BACKGROUND: Color32 = Color32::from_rgb(0xF2, 0xF2, 0xF2);
pub const TOOLBAR_MAX_HEIGHT: f32 = 60.0;
pub const PAGE_AREA_BACKGROUND: Color32 = Color32::from_rgb(0xDB, 0xDB, 0xDB);

pub const PAGE_INPUT_WIDTH: f32 = 60.0;
pub const ZOOM_LABEL_WIDTH: f32 = 50.0;
