//! GUI input adapter for the texture viewer.
//!
//! This module provides a windowed interface using winit for window management,
//! a pixels-owned wgpu surface for presentation, and egui for the filter label.

pub mod app;
pub mod commands;
pub mod events;

pub use commands::run_gui::RunGuiCommand;
