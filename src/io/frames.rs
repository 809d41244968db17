//! Frame discovery in a render output directory.
//!
//! Frames are ordered by plain lexical sort of their paths, so the renderer
//! must name them with fixed-width, zero-padded frame numbers
//! (`frame_0001.png`, `frame_0002.png`, ...). Mixed-width numbering is
//! detected and logged, but the lexical order is still what is used.
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::SpriteSize;

fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// List frame files in `dir` with the given extension, sorted lexically.
///
/// Subdirectories and hidden files are ignored.
pub fn list_frame_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::MissingDirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && !is_hidden(&path) && matches_extension(&path, extension) {
            files.push(path);
        }
    }
    files.sort();
    debug!("Found {} .{} frames in {:?}", files.len(), extension, dir);

    if !has_consistent_numbering(&files) {
        warn!(
            "Frame numbers in {:?} are not zero-padded to a common width; lexical order may not match frame order",
            dir
        );
    }
    Ok(files)
}

/// Width of the last run of ASCII digits in the file stem, if any.
fn frame_number_width(path: &Path) -> Option<usize> {
    let stem = path.file_stem()?.to_str()?;
    let end = stem.rfind(|c: char| c.is_ascii_digit())? + 1;
    Some(
        stem[..end]
            .chars()
            .rev()
            .take_while(|c| c.is_ascii_digit())
            .count(),
    )
}

/// True when every numbered frame uses the same digit width.
pub fn has_consistent_numbering(files: &[PathBuf]) -> bool {
    let widths: BTreeSet<usize> = files.iter().filter_map(|f| frame_number_width(f)).collect();
    widths.len() <= 1
}

/// Largest width and height over all `files`, read from image headers only.
pub fn detect_sprite_size(files: &[PathBuf]) -> Result<SpriteSize> {
    let mut size = SpriteSize::new(0, 0);
    for file in files {
        let (w, h) = image::image_dimensions(file)?;
        size.width = size.width.max(w);
        size.height = size.height.max(h);
    }
    size.validate()?;
    Ok(size)
}
