#![doc = r#"
spritesheet-assembler: turn rendered animation frames into tiled spritesheets.

A renderer writes one image per frame into a directory, named so that lexical
order equals frame order (`0001.png`, `0002.png`, ...). This crate lays those
frames out on a near-square grid, composites them onto a transparent RGBA
canvas and writes the sheet as PNG. Two in-place frame normalizers (pad to
size, trim and resize) bring frames of inconsistent size to a common sprite
size first. It powers the `spritesheet` CLI and can be embedded in your own
Rust applications.

Assemble a directory
--------------------
```rust,no_run
use std::path::Path;
use spritesheet_assembler::{assemble_frames_into_spritesheet, SpriteSize};

let result = assemble_frames_into_spritesheet(
    SpriteSize::new(64, 64),
    12,
    Path::new("/tmp/render/frames"),
    Path::new("/out/walk.png"),
);

if result.succeeded {
    println!(
        "{} columns x {} rows -> {:?}",
        result.args.num_columns, result.args.num_rows, result.args.output_file_path
    );
} else {
    eprintln!("assembly failed: {}", result.stderr);
}
```

Grid layout
-----------
For `n` frames the sheet has `rows = max(1, floor(sqrt(n)))` and
`columns = ceil(n / rows)`. Frame `i` goes to cell `(i % columns, i / columns)`,
cells are exactly one sprite in size with no gaps, and unused trailing cells
stay transparent.

```rust
use spritesheet_assembler::{GridLayout, SpriteSize};

let layout = GridLayout::plan(5, SpriteSize::new(32, 32)).unwrap();
assert_eq!((layout.num_rows, layout.num_columns), (2, 3));
assert_eq!(layout.output_image_size, (96, 64));
```

Normalize frames first
----------------------
```rust,no_run
use std::path::Path;
use spritesheet_assembler::{
    pad_image_to_size, trim_and_resize_image_ignore_aspect, SpriteSize,
};

fn main() -> spritesheet_assembler::Result<()> {
    let size = SpriteSize::new(128, 128);
    // Transparent padding on the right/bottom; no-op when already 128x128.
    pad_image_to_size(Path::new("/tmp/render/frames/0001.png"), size)?;
    // Crop transparent borders, then stretch to exactly 128x128.
    trim_and_resize_image_ignore_aspect(Path::new("/tmp/render/frames/0002.png"), size)?;
    Ok(())
}
```

Whole job from a config file
----------------------------
```rust,no_run
use std::path::Path;
use spritesheet_assembler::{run_job, AssemblyParams};

fn main() -> spritesheet_assembler::Result<()> {
    let params = AssemblyParams::from_json_file(Path::new("job.json"))?;
    let result = run_job(&params)?;
    println!("{}", result.to_json_pretty().unwrap_or_default());
    Ok(())
}
```

Error handling
--------------
Assembly never fails with an error: it always returns an `AssemblyResult`
whose `succeeded`/`stderr` fields describe the outcome, and whose JSON form
(`args.inputFiles`, `args.numColumns`, `args.numRows`, `args.outputFilePath`,
`args.outputImageSize`, `stderr`, `succeeded`) is stable. Normalization
returns `spritesheet_assembler::Result<T>` so a corrupt frame stops the batch.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: grid planning, result value, job parameters, pixel primitives.
- [`io`]: frame discovery, decoding, PNG writing.
- [`types`]: `SpriteSize` and `NormalizeMode`.
- [`error`]: crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::layout::GridLayout;
pub use crate::core::params::AssemblyParams;
pub use crate::core::result::{AssemblyArgs, AssemblyResult};
pub use crate::error::{Error, Result};
pub use crate::types::{NormalizeMode, SpriteSize};

// Frame discovery helpers
pub use crate::io::frames::{detect_sprite_size, has_consistent_numbering, list_frame_files};
pub use crate::io::reveal::open_file_explorer;

// High-level API re-exports
pub use crate::api::{
    BatchReport, assemble_frames_into_spritesheet, assemble_frames_with_extension,
    normalize_directory, normalize_frame, pad_image_to_size, run_job,
    trim_and_resize_image_ignore_aspect,
};
