use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{NormalizeMode, SpriteSize};

pub const DEFAULT_FRAME_EXTENSION: &str = "png";

/// Assembly job parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyParams {
    /// Cell size of every frame on the sheet; `None` means detect from the frames
    pub sprite_size: Option<SpriteSize>,
    /// Number of frames the renderer was expected to produce
    pub total_frames: usize,
    /// Directory holding one image per frame
    pub frame_dir: PathBuf,
    /// Destination of the sheet
    pub output: PathBuf,
    /// If set, every frame is normalized in place before compositing
    pub normalize: Option<NormalizeMode>,
    /// Extension (without dot) of frame files, matched case-insensitively
    pub frame_extension: String,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        Self {
            sprite_size: None,
            total_frames: 0,
            frame_dir: PathBuf::new(),
            output: PathBuf::new(),
            normalize: None,
            frame_extension: DEFAULT_FRAME_EXTENSION.to_string(),
        }
    }
}

impl AssemblyParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| Error::InvalidArgument {
            arg: "config",
            value: format!("{}: {}", path.display(), e),
        })
    }
}
