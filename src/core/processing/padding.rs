use image::RgbaImage;
use tracing::info;

use crate::core::processing::compose::paste;
use crate::types::SpriteSize;

/// Grow (or clip) `image` to exactly `size`, keeping content anchored top-left.
///
/// New area on the right and bottom is fully transparent. Returns `None` when
/// the image already has the requested size.
pub fn pad_to_size(image: &RgbaImage, size: SpriteSize) -> Option<RgbaImage> {
    let (cols, rows) = image.dimensions();
    if (cols, rows) == size.as_tuple() {
        return None;
    }

    info!(
        "Adding padding: cols={}, rows={}, pad_right={}, pad_bottom={}",
        cols,
        rows,
        size.width.saturating_sub(cols),
        size.height.saturating_sub(rows)
    );
    info!("Final dimensions: {}", size);

    let mut padded = RgbaImage::new(size.width, size.height);
    paste(&mut padded, image, 0, 0);
    Some(padded)
}
