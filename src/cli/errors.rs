use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid size parameter: {size}. Must be WIDTHxHEIGHT or a single positive integer")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Spritesheet assembly failed: {stderr}")]
    AssemblyFailed { stderr: String },

    #[error(transparent)]
    Assembler(#[from] spritesheet_assembler::Error),
}
