//! Render command.

use std::path::Path;

use tracing::info;

use crate::cli::{load, output};
use crate::core::file::write_private;
use crate::core::render::{self, Format};
use crate::error::Result;

/// Render resolved secrets to stdout or a private file.
pub fn execute(file: &Path, format: Format, out: Option<&Path>) -> Result<()> {
    let secrets = load(file)?;
    let rendered = render::render(&secrets, format)?;

    match out {
        Some(path) => {
            write_private(path, &rendered)?;
            info!(path = %path.display(), %format, "rendered secrets");
            output::success(&format!("wrote {}", output::path(path.display())));
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
