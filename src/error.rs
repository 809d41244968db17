//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec and resizer errors, and provides semantic
//! variants for argument validation and processing failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Sprite size must be positive, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Frame directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Processing error: {0}")]
    Processing(String),
}
