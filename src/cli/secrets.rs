//! Read commands: list, get, show.

use std::path::Path;

use serde::Serialize;

use crate::cli::{load, output};
use crate::core::names::SecretName;
use crate::core::store::Source;
use crate::error::Result;

const HIDDEN: &str = "••••••••";

#[derive(Serialize)]
struct ListEntry {
    name: SecretName,
    role: &'static str,
    sensitive: bool,
    source: Source,
}

#[derive(Serialize)]
struct ShowEntry<'a> {
    name: SecretName,
    value: Option<&'a str>,
    fingerprint: String,
    source: Source,
}

/// List names, roles and sources. Never prints values.
pub fn list(file: &Path, json: bool) -> Result<()> {
    let secrets = load(file)?;

    if json {
        let entries: Vec<ListEntry> = secrets
            .iter()
            .map(|(name, _, source)| ListEntry {
                name,
                role: name.role(),
                sensitive: name.is_sensitive(),
                source,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::section("Secrets");
    for (name, _, source) in secrets.iter() {
        output::kv(name.as_str(), format!("{} ({})", name.role(), source));
    }
    Ok(())
}

/// Print one resolved value, unformatted.
pub fn get(file: &Path, name: &str) -> Result<()> {
    let name: SecretName = name.parse()?;
    let secrets = load(file)?;
    println!("{}", secrets.get(name));
    Ok(())
}

/// Show every resolved value. Sensitive values are hidden unless `reveal`.
pub fn show(file: &Path, reveal: bool, json: bool) -> Result<()> {
    let secrets = load(file)?;
    let visible = |name: SecretName| reveal || !name.is_sensitive();

    if json {
        let entries: Vec<ShowEntry> = secrets
            .iter()
            .map(|(name, value, source)| ShowEntry {
                name,
                value: visible(name).then(|| value.expose()),
                fingerprint: value.fingerprint(),
                source,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::section("Secrets");
    for (name, value, source) in secrets.iter() {
        let shown = if visible(name) {
            value.expose().to_string()
        } else {
            format!("{} ({})", HIDDEN, value.fingerprint())
        };
        output::kv(name.as_str(), format!("{}  [{}]", shown, source));
    }
    if !reveal {
        println!();
        output::dimmed("passwords hidden, use --reveal to print them");
    }
    Ok(())
}
