use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};

/// Open `dir_path` with the platform's file explorer (Explorer, Finder, xdg-open).
pub fn open_file_explorer(dir_path: &Path) -> Result<()> {
    if dir_path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument {
            arg: "dir_path",
            value: String::new(),
        });
    }
    info!("Opening file explorer at {:?}", dir_path);
    open::that(dir_path)?;
    Ok(())
}
