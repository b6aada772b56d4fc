//! Render resolved secrets as TOML, a Rust constants module, or `.env` lines.

use std::fmt;

use chrono::{SecondsFormat, Utc};

use crate::core::file::SecretsFile;
use crate::core::store::Secrets;
use crate::error::Result;

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `secrets.toml` format
    Toml,
    /// Rust module of `pub const` items
    Rust,
    /// `NAME=value` lines
    Env,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Toml => "toml",
            Format::Rust => "rust",
            Format::Env => "env",
        })
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render in the given format.
pub fn render(secrets: &Secrets, format: Format) -> Result<String> {
    match format {
        Format::Toml => toml(secrets),
        Format::Rust => Ok(rust_module(secrets)),
        Format::Env => Ok(env(secrets)),
    }
}

/// Render a [`SecretsFile`] with the do-not-commit header.
pub fn toml_file(file: &SecretsFile) -> Result<String> {
    let mut out = String::new();
    out.push_str("# Firmware secrets. Keep this file out of version control.\n");
    out.push_str(&format!("# Generated by firmware-secrets at {}\n\n", timestamp()));
    out.push_str(&file.to_toml()?);
    Ok(out)
}

/// Render every resolved value in `secrets.toml` format.
pub fn toml(secrets: &Secrets) -> Result<String> {
    let mut file = SecretsFile::default();
    for (name, value, _) in secrets.iter() {
        file.set(name, value.clone());
    }
    toml_file(&file)
}

/// Render a Rust module declaring one `pub const` per name.
///
/// Values are written as escaped string literals, so quotes, backslashes
/// and control characters survive.
pub fn rust_module(secrets: &Secrets) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "//! Firmware secrets. Generated by firmware-secrets at {}.\n",
        timestamp()
    ));
    out.push_str("//! Keep this file out of version control.\n");

    for (name, value, _) in secrets.iter() {
        out.push('\n');
        out.push_str(&format!("/// {}.\n", name.role()));
        out.push_str(&format!(
            "pub const {}: &str = {:?};\n",
            name.as_str(),
            value.expose()
        ));
    }
    out
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || !value.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | '@' | '+' | ',' | '%')
        })
}

/// Quote a value for a `.env` line when needed.
///
/// Anything outside a plain character set is single-quoted, with `'`
/// written as `'\''`, so sourcing the file with `sh` gives back the exact
/// value (no `$` or backtick expansion, newlines kept literally).
pub fn env_value(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\'' => quoted.push_str("'\\''"),
            c => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Render `NAME=value` lines.
pub fn env(secrets: &Secrets) -> String {
    secrets
        .iter()
        .map(|(name, value, _)| format!("{}={}\n", name.as_str(), env_value(value.expose())))
        .collect()
}

/// Template for a fresh secrets file.
pub fn template() -> Result<String> {
    toml_file(&SecretsFile::template())
}
