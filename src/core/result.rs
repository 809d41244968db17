//! Assembly result value.
//!
//! The shape mirrors the report of the external montage tool the assembler
//! replaced (`args`, `stderr`, `succeeded`), and callers still consume it
//! field-for-field, so the serialized names are fixed.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::layout::GridLayout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyArgs {
    pub input_files: Vec<PathBuf>,
    pub num_columns: u32,
    pub num_rows: u32,
    pub output_file_path: PathBuf,
    pub output_image_size: (u32, u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyResult {
    pub args: AssemblyArgs,
    pub stderr: String,
    pub succeeded: bool,
}

impl AssemblyArgs {
    /// Args with a zeroed layout, used on every failure path.
    pub fn empty(input_files: Vec<PathBuf>, output_file_path: &Path) -> Self {
        Self {
            input_files,
            num_columns: 0,
            num_rows: 0,
            output_file_path: output_file_path.to_path_buf(),
            output_image_size: (0, 0),
        }
    }
}

impl AssemblyResult {
    pub fn success(input_files: Vec<PathBuf>, output_file_path: &Path, layout: &GridLayout) -> Self {
        Self {
            args: AssemblyArgs {
                input_files,
                num_columns: layout.num_columns,
                num_rows: layout.num_rows,
                output_file_path: output_file_path.to_path_buf(),
                output_image_size: layout.output_image_size,
            },
            stderr: String::new(),
            succeeded: true,
        }
    }

    pub fn failure(
        input_files: Vec<PathBuf>,
        output_file_path: &Path,
        stderr: impl Into<String>,
    ) -> Self {
        Self {
            args: AssemblyArgs::empty(input_files, output_file_path),
            stderr: stderr.into(),
            succeeded: false,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
