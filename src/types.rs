//! Shared types and enums used across the crate.
//! Includes `SpriteSize` (the per-frame cell size of a sheet) and
//! `NormalizeMode` (how frames are brought to that size before compositing).
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed (width, height) of every frame in one sheet.
///
/// Serializes as a `[width, height]` pair and parses from `WxH` strings
/// (`64x64`, `128X96`). A single number is read as a square size.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fails with `Error::ZeroSize` unless both sides are positive.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn as_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<[u32; 2]> for SpriteSize {
    fn from([width, height]: [u32; 2]) -> Self {
        Self { width, height }
    }
}

impl From<SpriteSize> for [u32; 2] {
    fn from(size: SpriteSize) -> Self {
        [size.width, size.height]
    }
}

impl From<(u32, u32)> for SpriteSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl FromStr for SpriteSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidArgument {
            arg: "sprite-size",
            value: s.to_string(),
        };
        let trimmed = s.trim();
        let (w, h) = match trimmed.split_once(['x', 'X']) {
            Some((w, h)) => (w.trim(), h.trim()),
            None => (trimmed, trimmed),
        };
        let width = w.parse::<u32>().map_err(|_| invalid())?;
        let height = h.parse::<u32>().map_err(|_| invalid())?;
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }
}

impl std::fmt::Display for SpriteSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// How a frame is brought to the sprite size before compositing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// Grow the canvas with transparent pixels, content anchored top-left.
    Pad,
    /// Crop transparent borders, then stretch to the exact size (nearest-neighbour).
    TrimResize,
}

impl std::fmt::Display for NormalizeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeMode::Pad => write!(f, "Pad"),
            NormalizeMode::TrimResize => write!(f, "TrimResize"),
        }
    }
}
