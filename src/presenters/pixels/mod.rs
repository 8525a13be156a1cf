//! Presentation through a pixels-owned wgpu surface.

mod adapter;
pub mod factory;
mod pipeline;
pub mod presenter;
mod texture;
