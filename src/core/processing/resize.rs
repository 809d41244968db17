use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::SpriteSize;

/// Stretch `image` to exactly `size` with nearest-neighbour sampling.
///
/// Aspect ratio is ignored. Nearest-neighbour keeps pixel-art edges hard.
pub fn resize_rgba_nearest(image: RgbaImage, size: SpriteSize) -> Result<RgbaImage> {
    size.validate()?;
    let (original_cols, original_rows) = image.dimensions();
    if (original_cols, original_rows) == size.as_tuple() {
        return Ok(image);
    }

    info!(
        "Original size: {}x{}, New size: {}",
        original_cols, original_rows, size
    );

    let resize_options = ResizeOptions::new().resize_alg(ResizeAlg::Nearest);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols,
        original_rows,
        image.into_raw(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(size.width, size.height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(size.width, size.height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!("Resized buffer does not match {}", size))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn hits_exact_size_ignoring_aspect() {
        let img = RgbaImage::from_pixel(7, 3, Rgba([1, 2, 3, 255]));
        let out = resize_rgba_nearest(img, SpriteSize::new(16, 16)).unwrap();
        assert_eq!(out.dimensions(), (16, 16));
        assert!(out.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn nearest_keeps_hard_edges() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let out = resize_rgba_nearest(img, SpriteSize::new(8, 2)).unwrap();
        for p in out.pixels() {
            assert!(*p == Rgba([255, 0, 0, 255]) || *p == Rgba([0, 0, 255, 255]));
        }
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(out.get_pixel(7, 1), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn same_size_passes_through() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 9]));
        let out = resize_rgba_nearest(img.clone(), SpriteSize::new(4, 4)).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn zero_target_is_rejected() {
        let img = RgbaImage::new(4, 4);
        assert!(matches!(
            resize_rgba_nearest(img, SpriteSize::new(0, 4)),
            Err(Error::ZeroSize { .. })
        ));
    }
}
