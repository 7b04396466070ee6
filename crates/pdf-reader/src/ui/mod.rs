pub mod page_view;
pub mod toolbar;
pub mod viewer_panel;
pub mod warning;
