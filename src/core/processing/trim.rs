//! Transparent-border trimming.
use image::{RgbaImage, imageops};
use tracing::debug;

/// Pixel rectangle on an image, `x`/`y` inclusive, `width`/`height` in pixels.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Tight bounding box of every pixel whose alpha is non-zero.
///
/// `None` for a fully transparent (or empty) image.
pub fn alpha_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let (cols, rows) = image.dimensions();
    if cols == 0 || rows == 0 {
        return None;
    }
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (row, line) in image.as_raw().chunks_exact(cols as usize * 4).enumerate() {
        let mut opaque = line
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px[3] != 0)
            .map(|(col, _)| col as u32);
        let Some(first) = opaque.next() else {
            continue;
        };
        let last = opaque.last().unwrap_or(first);
        let row = row as u32;
        found = true;
        min_x = min_x.min(first);
        max_x = max_x.max(last);
        min_y = min_y.min(row);
        max_y = row;
    }

    if !found {
        return None;
    }
    Some(BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Crop `image` to its alpha bounding box; a fully transparent image is returned as is.
pub fn trim_transparent(image: RgbaImage) -> RgbaImage {
    match alpha_bounding_box(&image) {
        Some(bbox) => {
            debug!(
                "Trimming {}x{} to {}x{} at ({}, {})",
                image.width(),
                image.height(),
                bbox.width,
                bbox.height,
                bbox.x,
                bbox.y
            );
            imageops::crop_imm(&image, bbox.x, bbox.y, bbox.width, bbox.height).to_image()
        }
        None => {
            debug!("Image is fully transparent; skipping trim");
            image
        }
    }
}
