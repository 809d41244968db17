use clap::{Parser, Subcommand};
use std::path::PathBuf;

use spritesheet_assembler::NormalizeMode;

#[derive(Parser)]
#[command(name = "spritesheet", version, about = "Spritesheet assembler CLI")]
pub struct CliArgs {
    /// Enable logging (level from RUST_LOG, debug by default)
    #[arg(long, global = true, default_value_t = false)]
    pub log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble a directory of rendered frames into one spritesheet and print the result as JSON
    Assemble {
        /// JSON job file; flags below override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory containing one image per frame
        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        /// Output spritesheet path (PNG)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of frames the renderer produced
        #[arg(short = 'n', long)]
        frames: Option<usize>,

        /// Sprite size as WIDTHxHEIGHT (e.g. 64x64). Detected from the frames when omitted
        #[arg(short, long)]
        size: Option<String>,

        /// Normalize every frame in place before assembling
        #[arg(long, value_enum)]
        normalize: Option<NormalizeMode>,

        /// Frame file extension
        #[arg(long)]
        extension: Option<String>,

        /// Reveal the output directory in the file explorer on success
        #[arg(long, default_value_t = false)]
        open: bool,

        /// Print single-line JSON
        #[arg(long, default_value_t = false)]
        compact: bool,
    },

    /// Pad one image with transparent pixels to the given size, in place
    Pad {
        /// Image to pad
        path: PathBuf,

        /// Target size as WIDTHxHEIGHT
        #[arg(short, long)]
        size: String,
    },

    /// Trim transparent borders from one image and stretch it to the given size, in place
    TrimResize {
        /// Image to trim and resize
        path: PathBuf,

        /// Target size as WIDTHxHEIGHT
        #[arg(short, long)]
        size: String,
    },

    /// Normalize every frame in a directory, in place
    Normalize {
        /// Directory containing one image per frame
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Target size as WIDTHxHEIGHT
        #[arg(short, long)]
        size: String,

        /// Normalization applied to each frame
        #[arg(short, long, value_enum, default_value_t = NormalizeMode::Pad)]
        mode: NormalizeMode,

        /// Frame file extension
        #[arg(long, default_value = "png")]
        extension: String,

        /// Keep going when a frame fails, counting it as an error
        #[arg(long, default_value_t = false)]
        continue_on_error: bool,
    },

    /// Print the grid layout for a frame count and sprite size as JSON
    Plan {
        /// Number of frames
        #[arg(short = 'n', long)]
        frames: usize,

        /// Sprite size as WIDTHxHEIGHT
        #[arg(short, long)]
        size: String,
    },
}
