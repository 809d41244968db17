//! Core building blocks: grid planning, the assembly result value, job
//! parameters, and the pixel-level processing primitives (compositing,
//! padding, trimming, resizing). These are internal primitives consumed by
//! the high-level `api` module.
pub mod layout;
pub mod params;
pub mod processing;
pub mod result;
