//! Grid planning for spritesheets.
//!
//! Frames are laid out row-major on a near-square grid with
//! `rows = max(1, floor(sqrt(n)))` and `columns = ceil(n / rows)`, so there are
//! never more rows than columns and always enough cells for every frame.
//! Trailing cells of the last row stay empty.
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::SpriteSize;

/// Derived layout of one sheet. Recomputed for every assembly call.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridLayout {
    pub num_rows: u32,
    pub num_columns: u32,
    pub sprite_size: SpriteSize,
    pub output_image_size: (u32, u32),
}

/// Row and column counts for `frame_count` frames, `None` when there is nothing to place.
pub fn grid_dimensions(frame_count: usize) -> Option<(usize, usize)> {
    if frame_count == 0 {
        return None;
    }
    let rows = frame_count.isqrt().max(1);
    let columns = frame_count.div_ceil(rows);
    Some((rows, columns))
}

impl GridLayout {
    /// Plan the grid for `frame_count` frames of `sprite_size`.
    pub fn plan(frame_count: usize, sprite_size: SpriteSize) -> Result<Self> {
        sprite_size.validate()?;
        let (rows, columns) = grid_dimensions(frame_count).ok_or_else(|| Error::InvalidArgument {
            arg: "total_num_frames",
            value: frame_count.to_string(),
        })?;

        let too_large = || {
            Error::Processing(format!(
                "Sheet for {} frames of {} is too large",
                frame_count, sprite_size
            ))
        };
        let num_rows = u32::try_from(rows).map_err(|_| too_large())?;
        let num_columns = u32::try_from(columns).map_err(|_| too_large())?;
        let sheet_w = num_columns
            .checked_mul(sprite_size.width)
            .ok_or_else(too_large)?;
        let sheet_h = num_rows
            .checked_mul(sprite_size.height)
            .ok_or_else(too_large)?;
        // the whole RGBA8 sheet has to be addressable as one buffer
        (sheet_w as usize)
            .checked_mul(sheet_h as usize)
            .and_then(|px| px.checked_mul(4))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or_else(too_large)?;

        Ok(Self {
            num_rows,
            num_columns,
            sprite_size,
            output_image_size: (sheet_w, sheet_h),
        })
    }

    /// Grid cell `(column, row)` of the frame at `index`.
    pub fn cell(&self, index: usize) -> (u32, u32) {
        let columns = self.num_columns as usize;
        ((index % columns) as u32, (index / columns) as u32)
    }

    /// Top-left pixel of the frame at `index` on the sheet.
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let (col, row) = self.cell(index);
        (col * self.sprite_size.width, row * self.sprite_size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_always_fits_and_stays_wide() {
        for n in 1..=500usize {
            let (rows, cols) = grid_dimensions(n).unwrap();
            assert!(rows * cols >= n, "n={n}: {rows}x{cols} too small");
            assert!(rows <= cols, "n={n}: rows {rows} > cols {cols}");
            let floor_sqrt = (n as f64).sqrt().floor() as usize;
            assert_eq!(rows, floor_sqrt.max(1), "n={n}");
        }
    }

    #[test]
    fn zero_frames_has_no_grid() {
        assert_eq!(grid_dimensions(0), None);
        assert!(matches!(
            GridLayout::plan(0, SpriteSize::new(8, 8)),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn five_frames_on_three_by_two() {
        let layout = GridLayout::plan(5, SpriteSize::new(32, 32)).unwrap();
        assert_eq!((layout.num_rows, layout.num_columns), (2, 3));
        assert_eq!(layout.output_image_size, (96, 64));
        let cells: Vec<_> = (0..5).map(|i| layout.cell(i)).collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
        assert_eq!(layout.cell_origin(4), (32, 32));
    }

    #[test]
    fn non_square_sprites() {
        let layout = GridLayout::plan(10, SpriteSize::new(20, 7)).unwrap();
        assert_eq!((layout.num_rows, layout.num_columns), (3, 4));
        assert_eq!(layout.output_image_size, (80, 21));
    }

    #[test]
    fn rejects_zero_sprite_size() {
        assert!(matches!(
            GridLayout::plan(4, SpriteSize::new(0, 16)),
            Err(Error::ZeroSize { .. })
        ));
    }

    #[test]
    fn reports_overflowing_sheets() {
        let err = GridLayout::plan(4, SpriteSize::new(u32::MAX, 1)).unwrap_err();
        assert!(matches!(err, Error::Processing(_)));
    }

    #[test]
    fn rejects_sheets_whose_pixel_buffer_overflows() {
        // each side fits in u32, the RGBA byte count does not
        let err = GridLayout::plan(1, SpriteSize::new(u32::MAX, u32::MAX)).unwrap_err();
        assert!(matches!(err, Error::Processing(_)));
        assert!(err.to_string().contains("too large"));
    }
}
