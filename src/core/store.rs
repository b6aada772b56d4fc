//! Runtime secret store.
//!
//! [`Secrets`] is a sealed set of the six values, resolved once at startup
//! from layered sources. Precedence, highest first:
//!
//! 1. environment variables (`[prefix]SECRET_*`)
//! 2. the local secrets file
//! 3. the compiled-in constants
//!
//! A process-wide instance can be installed once with [`init`] and read from
//! anywhere with [`global`].

use std::env::VarError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::core::constants;
use crate::core::file::SecretsFile;
use crate::core::names::SecretName;
use crate::core::value::SecretValue;
use crate::error::{ConfigError, Error, Result};

/// Which layer supplied a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Compiled,
    File,
    Environment,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Compiled => "compiled",
            Source::File => "file",
            Source::Environment => "environment",
        })
    }
}

/// Resolved secrets. Read-only once built.
#[derive(Debug, Clone)]
pub struct Secrets {
    values: [SecretValue; 6],
    sources: [Source; 6],
}

impl Secrets {
    /// Every value from the compiled-in constants.
    pub fn compiled() -> Self {
        Self {
            values: SecretName::ALL.map(|n| SecretValue::from(constants::compiled(n))),
            sources: [Source::Compiled; 6],
        }
    }

    pub fn get(&self, name: SecretName) -> &str {
        self.values[name.index()].expose()
    }

    pub fn value(&self, name: SecretName) -> &SecretValue {
        &self.values[name.index()]
    }

    pub fn source(&self, name: SecretName) -> Source {
        self.sources[name.index()]
    }

    /// All names with their value and source, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SecretName, &SecretValue, Source)> + '_ {
        SecretName::ALL
            .into_iter()
            .map(move |n| (n, self.value(n), self.source(n)))
    }

    /// Convenience accessors for the common consumers.
    pub fn ssid(&self) -> &str {
        self.get(SecretName::Ssid)
    }

    pub fn wifi_password(&self) -> &str {
        self.get(SecretName::WifiPassword)
    }

    pub fn mqtt_server(&self) -> &str {
        self.get(SecretName::MqttServer)
    }

    pub fn mqtt_user(&self) -> &str {
        self.get(SecretName::MqttUser)
    }

    pub fn mqtt_password(&self) -> &str {
        self.get(SecretName::MqttPassword)
    }

    pub fn sensor_password(&self) -> &str {
        self.get(SecretName::SensorPassword)
    }

    fn apply(&mut self, name: SecretName, value: SecretValue, source: Source) {
        self.values[name.index()] = value;
        self.sources[name.index()] = source;
    }
}

/// Builder resolving [`Secrets`] from files and the environment.
#[derive(Debug, Clone)]
pub struct SecretsLoader {
    file: Option<PathBuf>,
    require_file: bool,
    env: bool,
    env_prefix: String,
}

impl Default for SecretsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretsLoader {
    /// Loader with environment overrides on and no file.
    pub fn new() -> Self {
        Self {
            file: None,
            require_file: false,
            env: true,
            env_prefix: String::new(),
        }
    }

    /// Layer a secrets file over the compiled values.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Fail with `ConfigError::NotFound` instead of skipping a missing file.
    pub fn require_file(mut self, required: bool) -> Self {
        self.require_file = required;
        self
    }

    /// Enable or disable environment overrides.
    pub fn env(mut self, enabled: bool) -> Self {
        self.env = enabled;
        self
    }

    /// Prefix prepended to each `SECRET_*` variable name.
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Resolve every name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing required file,
    /// `ConfigError::Parse` for a malformed file, and
    /// `ConfigError::InvalidEnv` for a non-unicode override.
    pub fn load(&self) -> Result<Secrets> {
        let mut secrets = Secrets::compiled();

        if let Some(path) = &self.file {
            match SecretsFile::load(path) {
                Ok(file) => {
                    for name in SecretName::ALL {
                        if let Some(value) = file.get(name) {
                            secrets.apply(name, value.clone(), Source::File);
                        }
                    }
                }
                Err(Error::Config(ConfigError::NotFound(_))) if !self.require_file => {
                    debug!(path = %path.display(), "no secrets file, using compiled values");
                }
                Err(e) => return Err(e),
            }
        }

        if self.env {
            for name in SecretName::ALL {
                let var = format!("{}{}", self.env_prefix, name.as_str());
                match std::env::var(&var) {
                    Ok(value) => {
                        debug!(name = %name, "override from environment");
                        secrets.apply(name, SecretValue::from(value), Source::Environment);
                    }
                    Err(VarError::NotPresent) => {}
                    Err(VarError::NotUnicode(_)) => {
                        return Err(ConfigError::InvalidEnv { var }.into());
                    }
                }
            }
        }

        Ok(secrets)
    }
}

static GLOBAL: OnceLock<Secrets> = OnceLock::new();

/// Install the process-wide secrets.
///
/// # Errors
///
/// Returns `ConfigError::AlreadySet` if secrets were already installed or
/// [`global`] has already been read.
pub fn init(secrets: Secrets) -> Result<&'static Secrets> {
    GLOBAL
        .set(secrets)
        .map_err(|_| ConfigError::AlreadySet)?;
    Ok(global())
}

/// The process-wide secrets, falling back to the compiled values.
pub fn global() -> &'static Secrets {
    GLOBAL.get_or_init(Secrets::compiled)
}
