//! Command-line interface.

pub mod check;
pub mod completions;
pub mod init;
pub mod output;
pub mod render;
pub mod secrets;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::core::defaults;
use crate::core::render::Format;
use crate::core::store::{Secrets, SecretsLoader};
use crate::error::Result;

/// Firmware secrets - WiFi, MQTT and sensor credentials for your build.
#[derive(Parser)]
#[command(
    name = "firmware-secrets",
    about = "Manage WiFi, MQTT and sensor credentials for firmware builds",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Secrets file to read and write
    #[arg(
        long,
        global = true,
        env = defaults::FILE_ENV,
        default_value = defaults::SECRETS_FILE
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Write a fill-in template and protect it in .gitignore
    Init {
        /// Overwrite an existing secrets file
        #[arg(short, long)]
        force: bool,
        /// Prompt for each value instead of writing placeholders
        #[arg(short, long)]
        interactive: bool,
    },

    /// List secret names, roles and where each value comes from
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one resolved value
    Get {
        /// Secret name (e.g., SECRET_SSID or ssid)
        name: String,
    },

    /// Show all resolved values, passwords redacted
    Show {
        /// Print passwords in plaintext
        #[arg(long)]
        reveal: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report placeholders, empty values and file permissions
    Check {
        /// Exit with an error unless every value is filled in
        #[arg(long)]
        strict: bool,
    },

    /// Render resolved values as TOML, a Rust module, or .env lines
    Render {
        /// Output format
        #[arg(short = 'F', long, value_enum, default_value_t = Format::Rust)]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resolve secrets for commands that read them.
pub(crate) fn load(file: &Path) -> Result<Secrets> {
    SecretsLoader::new().file(file).load()
}

/// Execute a command.
pub fn execute(command: Command, file: &Path) -> Result<()> {
    use Command::*;

    match command {
        Init { force, interactive } => init::execute(file, force, interactive),
        List { json } => secrets::list(file, json),
        Get { name } => secrets::get(file, &name),
        Show { reveal, json } => secrets::show(file, reveal, json),
        Check { strict } => check::execute(file, strict),
        Render { format, output } => render::execute(file, format, output.as_deref()),
        Completions { shell } => completions::execute(shell),
    }
}
