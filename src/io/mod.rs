//! I/O layer: frame discovery in render output directories, RGBA image
//! decoding, PNG `writers`, and a helper to reveal a directory in the
//! system file explorer.
pub mod frames;
pub use frames::{detect_sprite_size, has_consistent_numbering, list_frame_files};

pub mod reader;
pub use reader::read_rgba;

pub mod reveal;
pub use reveal::open_file_explorer;

pub mod writers;
