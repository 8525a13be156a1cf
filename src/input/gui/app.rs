//! The windowed viewer: event routing, overlay and presenter seam.

pub mod gui_app;
pub mod overlay;
pub mod ports;
