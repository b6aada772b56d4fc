//! Check command - are the secrets ready to build with?

use std::path::Path;

use tracing::debug;

use crate::cli::{load, output};
use crate::core::file::check_permissions;
use crate::core::inspect::{self, Status};
use crate::error::{Result, ValidationError};

/// Report on every value; with `strict`, fail unless all are filled in.
pub fn execute(file: &Path, strict: bool) -> Result<()> {
    let secrets = load(file)?;
    let report = inspect::report(&secrets);

    output::section("Secrets Check");

    if file.exists() {
        output::kv("file", output::path(file.display()));
        if let Err(e) = check_permissions(file) {
            debug!(error = %e, "permission check failed");
            if strict {
                return Err(e);
            }
            output::warn(&e.to_string());
        }
    } else {
        output::kv("file", format!("{} (not found)", file.display()));
    }
    println!();

    for entry in &report.entries {
        let name = entry.name.as_str();
        match entry.status {
            Status::Set => output::success(&format!("{} ({})", name, entry.source)),
            Status::Placeholder => {
                output::warn(&format!("{} is still a placeholder ({})", name, entry.source))
            }
            Status::Empty => output::warn(&format!("{} is empty ({})", name, entry.source)),
        }
    }

    println!();
    if report.is_ready() {
        output::success("all secrets set");
        return Ok(());
    }

    let unset: Vec<&str> = report.unset().iter().map(|n| n.as_str()).collect();
    if strict {
        return Err(ValidationError::NotReady {
            count: unset.len(),
            names: unset.join(", "),
        }
        .into());
    }

    output::warn(&format!("{} of 6 secrets still need a value", unset.len()));
    if !file.exists() {
        output::next(&format!(
            "create a template with {}",
            output::cmd("firmware-secrets init")
        ));
    }
    Ok(())
}
