//! Init command - write the fill-in template.

use std::path::Path;

use dialoguer::{Input, Password};
use tracing::info;

use crate::cli::output;
use crate::core::defaults::GITIGNORE_ENTRIES;
use crate::core::file::{write_private, SecretsFile};
use crate::core::gitignore::ensure_gitignore;
use crate::core::names::SecretName;
use crate::core::render;
use crate::error::{ConfigError, Result};

/// Ask for each value on the terminal.
fn prompt() -> Result<SecretsFile> {
    let mut file = SecretsFile::default();
    for name in SecretName::ALL {
        let label = format!("{} ({})", name.as_str(), name.role());
        let value = if name.is_sensitive() {
            Password::new()
                .with_prompt(label)
                .allow_empty_password(true)
                .interact()?
        } else {
            Input::<String>::new()
                .with_prompt(label)
                .default(name.placeholder().to_string())
                .interact_text()?
        };
        file.set(name, value);
    }
    Ok(file)
}

/// Write a secrets file and make sure it is ignored by git.
pub fn execute(path: &Path, force: bool, interactive: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(path.to_path_buf()).into());
    }

    let contents = if interactive {
        render::toml_file(&prompt()?)?
    } else {
        render::template()?
    };
    write_private(path, &contents)?;
    info!(path = %path.display(), interactive, "secrets file written");

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut entries: Vec<&str> = GITIGNORE_ENTRIES.to_vec();
    let file_name = path.file_name().and_then(|n| n.to_str());
    if let Some(name) = file_name {
        if !entries.contains(&name) {
            entries.push(name);
        }
    }
    let added = ensure_gitignore(dir, &entries)?;

    output::success(&format!("initialized {}", output::path(path.display())));
    if !added.is_empty() {
        output::success(&format!("added {} to .gitignore", added.join(", ")));
    }
    if !interactive {
        output::next(&format!(
            "fill in the values, then run {}",
            output::cmd("firmware-secrets check")
        ));
    }
    Ok(())
}
