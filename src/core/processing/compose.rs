use image::RgbaImage;
use tracing::{debug, warn};

use crate::core::layout::GridLayout;
use crate::error::{Error, Result};

/// Copy `src` onto `dst` with its top-left corner at `(x, y)`.
///
/// Pixels are replaced, not blended, so transparent source pixels clear the
/// destination. Parts of `src` that fall outside `dst` are clipped.
pub fn paste(dst: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    let (dst_w, dst_h) = dst.dimensions();
    if x >= dst_w || y >= dst_h {
        return;
    }
    let copy_cols = src.width().min(dst_w - x) as usize;
    let copy_rows = src.height().min(dst_h - y) as usize;
    let src_stride = src.width() as usize * 4;
    let dst_stride = dst_w as usize * 4;
    let row_bytes = copy_cols * 4;

    let src_raw = src.as_raw();
    let dst_raw: &mut [u8] = dst;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..copy_rows {
        let src_offset = row * src_stride;
        let dst_offset = (row + y as usize) * dst_stride + x as usize * 4;
        dst_raw[dst_offset..dst_offset + row_bytes]
            .copy_from_slice(&src_raw[src_offset..src_offset + row_bytes]);
    }
}

/// Sheet under construction: a transparent canvas sized by a `GridLayout`.
pub struct SheetCanvas {
    layout: GridLayout,
    image: RgbaImage,
}

impl SheetCanvas {
    /// Allocate the transparent canvas, reporting allocation failure as an error.
    pub fn new(layout: GridLayout) -> Result<Self> {
        let (w, h) = layout.output_image_size;
        let too_large = |detail: &str| {
            Error::Processing(format!("Cannot allocate {}x{} sheet: {}", w, h, detail))
        };
        let len = (w as usize)
            .checked_mul(h as usize)
            .and_then(|px| px.checked_mul(4))
            .ok_or_else(|| too_large("size overflows"))?;
        debug!("Allocating {}x{} sheet canvas ({} bytes)", w, h, len);

        let mut buf = Vec::new();
        buf.try_reserve_exact(len)
            .map_err(|e| too_large(&e.to_string()))?;
        // zero-initialised RGBA is fully transparent black
        buf.resize(len, 0u8);
        let image = RgbaImage::from_raw(w, h, buf)
            .ok_or_else(|| too_large("buffer does not match dimensions"))?;
        Ok(Self { layout, image })
    }

    /// Place the frame at `index` into its grid cell.
    pub fn place(&mut self, index: usize, frame: &RgbaImage) {
        let expected = self.layout.sprite_size;
        if frame.dimensions() != expected.as_tuple() {
            warn!(
                "Frame {} is {}x{}, expected {}; pasting unscaled",
                index,
                frame.width(),
                frame.height(),
                expected
            );
        }
        let (x, y) = self.layout.cell_origin(index);
        paste(&mut self.image, frame, x, y);
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpriteSize;
    use image::Rgba;

    fn solid(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba(px))
    }

    #[test]
    fn paste_replaces_pixels() {
        let mut dst = solid(4, 4, [255, 255, 255, 255]);
        let src = solid(2, 2, [0, 0, 0, 0]);
        paste(&mut dst, &src, 1, 1);
        assert_eq!(dst.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
        assert_eq!(dst.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(dst.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(dst.get_pixel(3, 3), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn paste_clips_at_edges() {
        let mut dst = RgbaImage::new(3, 3);
        let src = solid(4, 4, [9, 9, 9, 255]);
        paste(&mut dst, &src, 2, 1);
        assert_eq!(dst.get_pixel(2, 1), &Rgba([9, 9, 9, 255]));
        assert_eq!(dst.get_pixel(2, 2), &Rgba([9, 9, 9, 255]));
        assert_eq!(dst.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));

        paste(&mut dst, &src, 3, 0);
        paste(&mut dst, &src, 0, 7);
    }

    #[test]
    fn frames_land_in_row_major_cells() {
        let layout = GridLayout::plan(4, SpriteSize::new(2, 2)).unwrap();
        let mut canvas = SheetCanvas::new(layout).unwrap();
        for i in 0..3u8 {
            canvas.place(i as usize, &solid(2, 2, [i + 1, 0, 0, 255]));
        }
        let sheet = canvas.into_image();
        assert_eq!(sheet.dimensions(), (4, 4));
        assert_eq!(sheet.get_pixel(0, 0)[0], 1);
        assert_eq!(sheet.get_pixel(3, 1)[0], 2);
        assert_eq!(sheet.get_pixel(1, 3)[0], 3);
        assert_eq!(sheet.get_pixel(3, 3), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn new_canvas_is_transparent() {
        let layout = GridLayout::plan(5, SpriteSize::new(3, 2)).unwrap();
        let sheet = SheetCanvas::new(layout).unwrap().into_image();
        assert_eq!(sheet.dimensions(), (9, 4));
        assert!(sheet.pixels().all(|p| p == &Rgba([0, 0, 0, 0])));
    }
}
