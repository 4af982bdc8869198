//! UIコンポーネント

pub mod camera_frame;
pub mod controls;
pub mod error_banner;
pub mod header;
pub mod result_panel;
