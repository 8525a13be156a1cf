use rayon::prelude::*;

use crate::core::data::rgba_image::RgbaImage;

/// Number of levels in a full mip chain down to 1x1.
#[must_use]
pub fn mip_level_count(width: u32, height: u32) -> u32 {
    let largest = width.max(height).max(1);
    u32::BITS - largest.leading_zeros()
}

/// Builds the complete mip chain for `base`, `base` itself first.
///
/// Each level halves the previous one (rounding down, never below 1) with a
/// 2x2 box filter. Rows of a level are filtered in parallel.
#[must_use]
pub fn generate_mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let count = if base.width() == 0 || base.height() == 0 {
        1
    } else {
        mip_level_count(base.width(), base.height()) as usize
    };
    let mut levels = Vec::with_capacity(count);
    levels.push(base);

    while levels.len() < count {
        let next = levels.last().map(downsample);
        match next {
            Some(level) => levels.push(level),
            None => break,
        }
    }

    levels
}

/// Halves `source` with a 2x2 box filter. Odd edges reuse the last texel.
#[must_use]
pub fn downsample(source: &RgbaImage) -> RgbaImage {
    let src_width = source.width() as usize;
    let src_height = source.height() as usize;
    let width = (source.width() / 2).max(1);
    let height = (source.height() / 2).max(1);
    let mut level = RgbaImage::new(width, height);
    let src = source.buffer();
    let src_row_bytes = source.row_bytes();
    let dst_row_bytes = level.row_bytes();

    if src_width == 0 || src_height == 0 {
        return level;
    }

    level
        .buffer_mut()
        .par_chunks_mut(dst_row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let y0 = (2 * y).min(src_height - 1);
            let y1 = (2 * y + 1).min(src_height - 1);

            for (x, texel) in row.chunks_exact_mut(4).enumerate() {
                let x0 = (2 * x).min(src_width - 1);
                let x1 = (2 * x + 1).min(src_width - 1);
                let corners = [
                    y0 * src_row_bytes + x0 * 4,
                    y0 * src_row_bytes + x1 * 4,
                    y1 * src_row_bytes + x0 * 4,
                    y1 * src_row_bytes + x1 * 4,
                ];

                for (channel, value) in texel.iter_mut().enumerate() {
                    let sum: u32 = corners.iter().map(|&offset| u32::from(src[offset + channel])).sum();
                    *value = ((sum + 2) / 4) as u8;
                }
            }
        });

    level
}
