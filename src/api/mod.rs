//! High-level, ergonomic library API: assemble a frame directory into a sheet,
//! normalize single frames or whole directories in place, and run a complete
//! job from `AssemblyParams`. Prefer these entrypoints over the low-level
//! processing modules when integrating the assembler.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::layout::GridLayout;
use crate::core::params::{AssemblyParams, DEFAULT_FRAME_EXTENSION};
use crate::core::processing::compose::SheetCanvas;
use crate::core::processing::padding::pad_to_size;
use crate::core::processing::resize::resize_rgba_nearest;
use crate::core::processing::trim::trim_transparent;
use crate::core::result::AssemblyResult;
use crate::error::{Error, Result};
use crate::io::frames::{detect_sprite_size, list_frame_files};
use crate::io::reader::read_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::{NormalizeMode, SpriteSize};

/// Summary of a directory-wide normalization pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Frames rewritten in place
    pub processed: usize,
    /// Frames already at the target size
    pub skipped: usize,
    /// Frames that failed (only counted with `continue_on_error`)
    pub errors: usize,
}

/// Assemble the `*.png` frames in `frame_dir` into one sheet at `output`.
///
/// Never returns an error: every failure (no frames, frame count mismatch,
/// I/O or decode errors) is reported through `succeeded == false` and a
/// message in `stderr`, with a zeroed layout.
pub fn assemble_frames_into_spritesheet(
    sprite_size: SpriteSize,
    total_num_frames: usize,
    frame_dir: &Path,
    output: &Path,
) -> AssemblyResult {
    assemble_frames_with_extension(
        sprite_size,
        total_num_frames,
        frame_dir,
        output,
        DEFAULT_FRAME_EXTENSION,
    )
}

/// Same as [`assemble_frames_into_spritesheet`] for frames with another extension.
pub fn assemble_frames_with_extension(
    sprite_size: SpriteSize,
    total_num_frames: usize,
    frame_dir: &Path,
    output: &Path,
    extension: &str,
) -> AssemblyResult {
    match try_assemble(sprite_size, total_num_frames, frame_dir, output, extension) {
        Ok(result) => result,
        Err(e) => {
            warn!("Spritesheet assembly failed: {}", e);
            AssemblyResult::failure(Vec::new(), output, e.to_string())
        }
    }
}

/// Frame listing for assembly: a missing directory simply holds no frames,
/// so the frame-count checks decide how the run is reported.
fn list_assembly_frames(frame_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !frame_dir.is_dir() {
        warn!("Frame directory {:?} does not exist", frame_dir);
        return Ok(Vec::new());
    }
    list_frame_files(frame_dir, extension)
}

fn try_assemble(
    sprite_size: SpriteSize,
    total_num_frames: usize,
    frame_dir: &Path,
    output: &Path,
    extension: &str,
) -> Result<AssemblyResult> {
    let files = list_assembly_frames(frame_dir, extension)?;

    if total_num_frames == 0 {
        return Ok(AssemblyResult::failure(
            files,
            output,
            format!("No frames to assemble (total_num_frames={})", total_num_frames),
        ));
    }

    if files.len() != total_num_frames {
        let found = files.len();
        return Ok(AssemblyResult::failure(
            files,
            output,
            format!(
                "Expected {} images, but found {} files",
                total_num_frames, found
            ),
        ));
    }

    let layout = GridLayout::plan(total_num_frames, sprite_size)?;
    info!(
        "Assembling {} frames of {} into {}x{} grid ({}x{} px)",
        total_num_frames,
        sprite_size,
        layout.num_columns,
        layout.num_rows,
        layout.output_image_size.0,
        layout.output_image_size.1
    );

    let mut canvas = SheetCanvas::new(layout)?;
    for (i, frame_path) in files.iter().enumerate() {
        let frame = read_rgba(frame_path)?;
        canvas.place(i, &frame);
    }
    let sheet = canvas.into_image();
    write_rgba_png(output, &sheet)?;

    info!("Spritesheet written: {:?}", output);
    Ok(AssemblyResult::success(files, output, &layout))
}

/// Pad the image at `path` with transparent pixels to exactly `size`, in place.
///
/// Content stays anchored to the upper-left corner. Returns `false` without
/// touching the file when it already has that size.
pub fn pad_image_to_size(path: &Path, size: SpriteSize) -> Result<bool> {
    size.validate()?;
    let image = read_rgba(path)?;
    match pad_to_size(&image, size) {
        Some(padded) => {
            drop(image);
            write_rgba_png(path, &padded)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Trim transparent borders from the image at `path`, then stretch it to exactly
/// `size` (aspect ratio ignored, nearest-neighbour), in place.
///
/// A fully transparent image is not cropped but is still resized.
pub fn trim_and_resize_image_ignore_aspect(path: &Path, size: SpriteSize) -> Result<()> {
    size.validate()?;
    let trimmed = trim_transparent(read_rgba(path)?);
    let resized = resize_rgba_nearest(trimmed, size)?;
    write_rgba_png(path, &resized)
}

/// Apply `mode` to one frame. Returns whether the file was rewritten.
pub fn normalize_frame(path: &Path, size: SpriteSize, mode: NormalizeMode) -> Result<bool> {
    match mode {
        NormalizeMode::Pad => pad_image_to_size(path, size),
        NormalizeMode::TrimResize => {
            trim_and_resize_image_ignore_aspect(path, size)?;
            Ok(true)
        }
    }
}

/// Normalize every frame file in `frame_dir` to `size`.
///
/// Stops at the first failure unless `continue_on_error` is set, in which case
/// failures are logged and counted.
pub fn normalize_directory(
    frame_dir: &Path,
    size: SpriteSize,
    mode: NormalizeMode,
    extension: &str,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let files = list_frame_files(frame_dir, extension)?;
    info!(
        "Normalizing {} frames in {:?} to {} ({})",
        files.len(),
        frame_dir,
        size,
        mode
    );

    let mut report = BatchReport::default();
    for file in &files {
        match normalize_frame(file, size, mode) {
            Ok(true) => report.processed += 1,
            Ok(false) => report.skipped += 1,
            Err(e) if continue_on_error => {
                warn!("Error normalizing {:?}: {}", file, e);
                report.errors += 1;
            }
            Err(e) => {
                return Err(Error::Processing(format!(
                    "Failed to normalize {}: {}",
                    file.display(),
                    e
                )));
            }
        }
    }

    info!(
        "Normalization complete: processed={} skipped={} errors={}",
        report.processed, report.skipped, report.errors
    );
    Ok(report)
}

/// Run a whole job: optional per-frame normalization, then assembly.
///
/// Normalization failures are returned as `Err` and stop the job before any
/// sheet is written. Everything else, including sprite-size detection, comes
/// back as an `Ok` result with `succeeded == false`.
pub fn run_job(params: &AssemblyParams) -> Result<AssemblyResult> {
    let failed = |e: Error| {
        warn!("Spritesheet job failed: {}", e);
        AssemblyResult::failure(Vec::new(), &params.output, e.to_string())
    };

    let files = match list_assembly_frames(&params.frame_dir, &params.frame_extension) {
        Ok(files) => files,
        Err(e) => return Ok(failed(e)),
    };

    let sprite_size = match params.sprite_size {
        Some(size) => size,
        // Let assembly report the missing frames
        None if files.is_empty() => SpriteSize::default(),
        None => match detect_sprite_size(&files) {
            Ok(detected) => {
                info!("Detected sprite size {} from {} frames", detected, files.len());
                detected
            }
            Err(e) => return Ok(failed(e)),
        },
    };

    if let Some(mode) = params.normalize {
        info!("Normalizing {} frames ({})", files.len(), mode);
        for file in &files {
            normalize_frame(file, sprite_size, mode)?;
        }
    }

    Ok(assemble_frames_with_extension(
        sprite_size,
        params.total_frames,
        &params.frame_dir,
        &params.output,
        &params.frame_extension,
    ))
}
