//! Default paths and values used throughout firmware-secrets.

/// Local secrets file, relative to the working directory.
pub const SECRETS_FILE: &str = "secrets.toml";

/// Default output name for a rendered Rust constants module.
pub const RUST_MODULE_FILE: &str = "secrets.rs";

/// Default output name for rendered `.env` output.
pub const ENV_FILE: &str = ".env";

/// Unix mode for files holding plaintext secrets.
pub const SECRETS_FILE_MODE: u32 = 0o600;

/// Environment variable overriding the secrets file path.
pub const FILE_ENV: &str = "FIRMWARE_SECRETS_FILE";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FIRMWARE_SECRETS_LOG";

/// Gitignore entries keeping filled-in secrets out of version control.
pub const GITIGNORE_ENTRIES: &[&str] = &[SECRETS_FILE, RUST_MODULE_FILE, ENV_FILE];
