//! UI components

pub mod bottom_nav;
pub mod header;
pub mod loader;
pub mod results_panel;
pub mod upload_area;
