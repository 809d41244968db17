//! Pixel-level primitives operating on decoded RGBA buffers.
pub mod compose;
pub mod padding;
pub mod resize;
pub mod trim;
