//! Whole-job runs: normalization followed by assembly.

mod common;

use image::{Rgba, RgbaImage};
use pretty_assertions::assert_eq;
use spritesheet_assembler::{AssemblyParams, NormalizeMode, SpriteSize, run_job};

use common::{frame_colour, read, write_frames};

#[test]
fn pads_mixed_frames_then_assembles() {
    let tmp = tempfile::tempdir().unwrap();
    let frames_dir = tmp.path().join("frames");
    write_frames(&frames_dir, 3, 6, 4);
    RgbaImage::from_pixel(4, 6, frame_colour(3))
        .save(frames_dir.join("frame_0004.png"))
        .unwrap();

    let params = AssemblyParams {
        sprite_size: None,
        total_frames: 4,
        frame_dir: frames_dir.clone(),
        output: tmp.path().join("sheet.png"),
        normalize: Some(NormalizeMode::Pad),
        ..AssemblyParams::default()
    };
    let result = run_job(&params).unwrap();

    assert!(result.succeeded, "stderr: {}", result.stderr);
    assert_eq!((result.args.num_rows, result.args.num_columns), (2, 2));
    assert_eq!(result.args.output_image_size, (12, 12));

    let sheet = read(&params.output);
    // frame 4 sits in cell (1, 1), padded on the right
    assert_eq!(sheet.get_pixel(6, 6), &frame_colour(3));
    assert_eq!(sheet.get_pixel(11, 6), &Rgba([0, 0, 0, 0]));
    // frame 1 padded at the bottom
    assert_eq!(sheet.get_pixel(0, 5), &Rgba([0, 0, 0, 0]));
    assert_eq!(sheet.get_pixel(5, 3), &frame_colour(0));
}

#[test]
fn trim_resize_with_explicit_size() {
    let tmp = tempfile::tempdir().unwrap();
    write_frames(tmp.path(), 2, 10, 3);

    let params = AssemblyParams {
        sprite_size: Some(SpriteSize::new(4, 4)),
        total_frames: 2,
        frame_dir: tmp.path().to_path_buf(),
        output: tmp.path().join("out").join("sheet.png"),
        normalize: Some(NormalizeMode::TrimResize),
        ..AssemblyParams::default()
    };
    let result = run_job(&params).unwrap();

    assert!(result.succeeded, "stderr: {}", result.stderr);
    assert_eq!(result.args.output_image_size, (8, 4));
    assert_eq!(read(&params.output).get_pixel(7, 3), &frame_colour(1));
}

#[test]
fn normalization_failure_stops_the_job() {
    let tmp = tempfile::tempdir().unwrap();
    write_frames(tmp.path(), 1, 2, 2);
    std::fs::write(tmp.path().join("frame_0002.png"), b"nope").unwrap();

    let params = AssemblyParams {
        sprite_size: Some(SpriteSize::new(4, 4)),
        total_frames: 2,
        frame_dir: tmp.path().to_path_buf(),
        output: tmp.path().join("sheet.png"),
        normalize: Some(NormalizeMode::Pad),
        ..AssemblyParams::default()
    };

    assert!(run_job(&params).is_err());
    assert!(!params.output.exists());
}

#[test]
fn missing_frames_are_a_failed_result_not_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let params = AssemblyParams {
        total_frames: 3,
        frame_dir: tmp.path().join("empty"),
        output: tmp.path().join("sheet.png"),
        ..AssemblyParams::default()
    };
    let result = run_job(&params).unwrap();
    assert!(!result.succeeded);
    assert_eq!(result.stderr, "Expected 3 images, but found 0 files");

    std::fs::create_dir(&params.frame_dir).unwrap();
    let result = run_job(&params).unwrap();
    assert!(!result.succeeded);
    assert_eq!(result.stderr, "Expected 3 images, but found 0 files");
}

#[test]
fn undecodable_frame_during_size_detection_is_a_failed_result() {
    let tmp = tempfile::tempdir().unwrap();
    write_frames(tmp.path(), 1, 2, 2);
    std::fs::write(tmp.path().join("frame_0002.png"), b"not an image").unwrap();

    let params = AssemblyParams {
        sprite_size: None,
        total_frames: 2,
        frame_dir: tmp.path().to_path_buf(),
        output: tmp.path().join("sheet.png"),
        ..AssemblyParams::default()
    };
    let result = run_job(&params).unwrap();

    assert!(!result.succeeded);
    assert!(!result.stderr.is_empty());
    assert!(result.args.input_files.is_empty());
    assert!(!params.output.exists());
}
