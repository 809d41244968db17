use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use spritesheet_assembler::{
    AssemblyParams, GridLayout, NormalizeMode, SpriteSize, normalize_directory, open_file_explorer,
    pad_image_to_size, run_job, trim_and_resize_image_ignore_aspect,
};

use super::args::{CliArgs, Command};
use super::errors::AppError;

fn parse_size(size: &str) -> Result<SpriteSize, AppError> {
    let parsed = size.parse::<SpriteSize>().map_err(|e| match e {
        spritesheet_assembler::Error::ZeroSize { .. } => AppError::ZeroSize {
            size: size.to_string(),
        },
        _ => AppError::InvalidSize {
            size: size.to_string(),
        },
    })?;
    Ok(parsed)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_params(
    config: Option<&Path>,
    input_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    frames: Option<usize>,
    size: Option<&str>,
    normalize: Option<NormalizeMode>,
    extension: Option<String>,
) -> Result<AssemblyParams, AppError> {
    let mut params = match config {
        Some(path) => {
            info!("Loading job config from {:?}", path);
            AssemblyParams::from_json_file(path)?
        }
        None => {
            if frames.is_none() {
                return Err(AppError::MissingArgument {
                    arg: "--frames".to_string(),
                });
            }
            AssemblyParams::default()
        }
    };

    if let Some(dir) = input_dir {
        params.frame_dir = dir;
    }
    if let Some(out) = output {
        params.output = out;
    }
    if let Some(n) = frames {
        params.total_frames = n;
    }
    if let Some(s) = size {
        params.sprite_size = Some(parse_size(s)?);
    }
    if normalize.is_some() {
        params.normalize = normalize;
    }
    if let Some(ext) = extension {
        params.frame_extension = ext.trim_start_matches('.').to_string();
    }

    if params.frame_dir.as_os_str().is_empty() {
        return Err(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        });
    }
    if params.output.as_os_str().is_empty() {
        return Err(AppError::MissingArgument {
            arg: "--output".to_string(),
        });
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    match args.command {
        Command::Assemble {
            config,
            input_dir,
            output,
            frames,
            size,
            normalize,
            extension,
            open,
            compact,
        } => {
            let params = build_params(
                config.as_deref(),
                input_dir,
                output,
                frames,
                size.as_deref(),
                normalize,
                extension,
            )?;
            info!(
                "Assembling {} frames from {:?} into {:?}",
                params.total_frames, params.frame_dir, params.output
            );

            let result = run_job(&params)?;
            let json = if compact {
                serde_json::to_string(&result)?
            } else {
                result.to_json_pretty()?
            };
            println!("{}", json);

            if !result.succeeded {
                return Err(AppError::AssemblyFailed {
                    stderr: result.stderr,
                }
                .into());
            }

            if open {
                let dir = result
                    .args
                    .output_file_path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."));
                if let Err(e) = open_file_explorer(dir) {
                    warn!("Could not open file explorer at {:?}: {}", dir, e);
                }
            }
        }
        Command::Pad { path, size } => {
            let size = parse_size(&size)?;
            if pad_image_to_size(&path, size)? {
                info!("Padded {:?} to {}", path, size);
            } else {
                info!("{:?} is already {}; left unchanged", path, size);
            }
        }
        Command::TrimResize { path, size } => {
            let size = parse_size(&size)?;
            trim_and_resize_image_ignore_aspect(&path, size)?;
            info!("Trimmed and resized {:?} to {}", path, size);
        }
        Command::Normalize {
            input_dir,
            size,
            mode,
            extension,
            continue_on_error,
        } => {
            let size = parse_size(&size)?;
            let report = normalize_directory(
                &input_dir,
                size,
                mode,
                extension.trim_start_matches('.'),
                continue_on_error,
            )?;
            println!(
                "processed={} skipped={} errors={}",
                report.processed, report.skipped, report.errors
            );
        }
        Command::Plan { frames, size } => {
            let size = parse_size(&size)?;
            let layout = GridLayout::plan(frames, size)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
    }

    Ok(())
}
