use crate::core::data::texture_slice::TextureSlice;

/// Splits a `width`x`height` image into a row-major grid of slices no larger
/// than `max_size` on either side.
///
/// Returns an empty plan for an empty image or a zero limit.
#[must_use]
pub fn plan_texture_slices(width: u32, height: u32, max_size: u32) -> Vec<TextureSlice> {
    if width == 0 || height == 0 || max_size == 0 {
        return Vec::new();
    }

    let spans = |extent: u32| {
        (0..extent.div_ceil(max_size)).map(move |i| {
            let start = i * max_size;
            (start, max_size.min(extent - start))
        })
    };

    spans(height)
        .flat_map(|(y, slice_height)| {
            spans(width).map(move |(x, slice_width)| TextureSlice {
                x,
                y,
                width: slice_width,
                height: slice_height,
            })
        })
        .collect()
}

/// Slices are never retried below this edge length.
pub const MIN_RETRY_SLICE_SIZE: u32 = 256;

/// Slice edge to retry with after an allocation of `failed_size` texels per
/// side ran out of memory, or `None` once retrying is pointless.
///
/// Slicing keeps the total texel count unchanged; it only helps when the
/// device cannot place one large block. Each retry halves the edge, so every
/// allocation is a quarter of the last, until the floor is reached.
#[must_use]
pub fn smaller_slice_size(failed_size: u32) -> Option<u32> {
    let next = failed_size.div_ceil(2);
    (next >= MIN_RETRY_SLICE_SIZE && next < failed_size).then_some(next)
}
