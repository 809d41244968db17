//! Command Line Interface (CLI) layer for the spritesheet assembler.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the assemble, normalize and
//! plan subcommands. It wires user-provided options to the underlying
//! library functionality exposed via `spritesheet_assembler::api`.
//!
//! If you are embedding the assembler into another application, prefer using
//! the high-level `spritesheet_assembler::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
