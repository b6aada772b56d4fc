//! firmware-secrets - WiFi, MQTT and sensor credentials for firmware builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use firmware_secrets::cli::output;
use firmware_secrets::cli::{execute, Cli};
use firmware_secrets::core::defaults;
use firmware_secrets::error::{ConfigError, Error, ValidationError};

fn hint(e: &Error) -> Option<String> {
    match e {
        Error::Config(ConfigError::NotFound(_)) => Some("run: firmware-secrets init".to_string()),
        Error::Validation(ValidationError::UnknownName(_)) => {
            Some("run: firmware-secrets list".to_string())
        }
        Error::Validation(ValidationError::NotReady { .. }) => {
            Some("edit the secrets file or set SECRET_* environment variables".to_string())
        }
        Error::Validation(ValidationError::InvalidPermissions { path, .. }) => {
            Some(format!("run: chmod 600 {}", path))
        }
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(defaults::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("firmware_secrets=debug")
        } else {
            EnvFilter::new("firmware_secrets=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command, &cli.file) {
        output::error(&e.to_string());
        if let Some(h) = hint(&e) {
            output::hint(&h);
        }
        std::process::exit(1);
    }
}
