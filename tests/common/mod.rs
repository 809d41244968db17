//! Shared fixtures for integration tests: small PNG frames on disk.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Opaque colour that encodes the frame index in the red channel.
pub fn frame_colour(index: usize) -> Rgba<u8> {
    Rgba([index as u8 + 1, 100, 200, 255])
}

/// Write `count` solid frames of `w`x`h` named `frame_0001.png`, ... into `dir`.
pub fn write_frames(dir: &Path, count: usize, w: u32, h: u32) -> Vec<PathBuf> {
    fs::create_dir_all(dir).unwrap();
    (0..count)
        .map(|i| {
            let path = dir.join(format!("frame_{:04}.png", i + 1));
            RgbaImage::from_pixel(w, h, frame_colour(i)).save(&path).unwrap();
            path
        })
        .collect()
}

pub fn read(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}
