//! The full-window quad the image is drawn on.

use bytemuck::{Pod, Zeroable};

use crate::core::data::texture_slice::TextureSlice;

/// Position in clip space plus texture coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl QuadVertex {
    const fn new(x: f32, y: f32, s: f32, t: f32) -> Self {
        Self {
            position: [x, y],
            tex_coords: [s, t],
        }
    }
}

/// Covers clip space with the image's top row at the top of the window.
pub const PLANE: [QuadVertex; 4] = [
    QuadVertex::new(-1.0, -1.0, 0.0, 1.0),
    QuadVertex::new(-1.0, 1.0, 0.0, 0.0),
    QuadVertex::new(1.0, 1.0, 1.0, 0.0),
    QuadVertex::new(1.0, -1.0, 1.0, 1.0),
];

/// Two triangles over the four corners.
pub const RECTANGLE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// The part of [`PLANE`] covered by `slice`, with texture coordinates spanning
/// the slice's own texture.
#[must_use]
pub fn slice_quad(slice: TextureSlice, image_width: u32, image_height: u32) -> [QuadVertex; 4] {
    if slice == TextureSlice::whole(image_width, image_height) {
        return PLANE;
    }

    let image_width = image_width.max(1) as f32;
    let image_height = image_height.max(1) as f32;

    let left = -1.0 + 2.0 * slice.x as f32 / image_width;
    let right = -1.0 + 2.0 * (slice.x + slice.width) as f32 / image_width;
    let top = 1.0 - 2.0 * slice.y as f32 / image_height;
    let bottom = 1.0 - 2.0 * (slice.y + slice.height) as f32 / image_height;

    [
        QuadVertex::new(left, bottom, 0.0, 1.0),
        QuadVertex::new(left, top, 0.0, 0.0),
        QuadVertex::new(right, top, 1.0, 0.0),
        QuadVertex::new(right, bottom, 1.0, 1.0),
    ]
}
