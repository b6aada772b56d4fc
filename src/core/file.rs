//! The local secrets file (`secrets.toml`).
//!
//! A flat TOML table keyed by `SECRET_*` identifiers. Every key is optional;
//! unknown keys are rejected so a typo does not silently fall back to the
//! compiled value.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::defaults::SECRETS_FILE_MODE;
use crate::core::names::SecretName;
use crate::core::value::SecretValue;
use crate::error::{ConfigError, Result};

/// Contents of a secrets file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretsFile {
    #[serde(rename = "SECRET_SSID", default, skip_serializing_if = "Option::is_none")]
    ssid: Option<SecretValue>,
    #[serde(rename = "SECRET_WIFI_PASSWORD", default, skip_serializing_if = "Option::is_none")]
    wifi_password: Option<SecretValue>,
    #[serde(rename = "SECRET_MQTT_SERVER", default, skip_serializing_if = "Option::is_none")]
    mqtt_server: Option<SecretValue>,
    #[serde(rename = "SECRET_MQTT_USER", default, skip_serializing_if = "Option::is_none")]
    mqtt_user: Option<SecretValue>,
    #[serde(rename = "SECRET_MQTT_PASSWORD", default, skip_serializing_if = "Option::is_none")]
    mqtt_password: Option<SecretValue>,
    #[serde(rename = "SECRET_SENSOR_PASSWORD", default, skip_serializing_if = "Option::is_none")]
    sensor_password: Option<SecretValue>,
}

impl SecretsFile {
    /// A file with every name set to its placeholder.
    pub fn template() -> Self {
        let mut file = Self::default();
        for name in SecretName::ALL {
            file.set(name, name.placeholder());
        }
        file
    }

    fn slot(&self, name: SecretName) -> &Option<SecretValue> {
        match name {
            SecretName::Ssid => &self.ssid,
            SecretName::WifiPassword => &self.wifi_password,
            SecretName::MqttServer => &self.mqtt_server,
            SecretName::MqttUser => &self.mqtt_user,
            SecretName::MqttPassword => &self.mqtt_password,
            SecretName::SensorPassword => &self.sensor_password,
        }
    }

    fn slot_mut(&mut self, name: SecretName) -> &mut Option<SecretValue> {
        match name {
            SecretName::Ssid => &mut self.ssid,
            SecretName::WifiPassword => &mut self.wifi_password,
            SecretName::MqttServer => &mut self.mqtt_server,
            SecretName::MqttUser => &mut self.mqtt_user,
            SecretName::MqttPassword => &mut self.mqtt_password,
            SecretName::SensorPassword => &mut self.sensor_password,
        }
    }

    pub fn get(&self, name: SecretName) -> Option<&SecretValue> {
        self.slot(name).as_ref()
    }

    pub fn set(&mut self, name: SecretName, value: impl Into<SecretValue>) {
        *self.slot_mut(name) = Some(value.into());
    }

    /// Number of names present in the file.
    pub fn len(&self) -> usize {
        SecretName::ALL
            .iter()
            .filter(|n| self.get(**n).is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse file contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        Ok(file)
    }

    /// Load a secrets file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if the TOML is malformed or has unknown keys.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading secrets file");

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let file = Self::parse(&contents)?;

        debug!(present = file.len(), "secrets file loaded");
        Ok(file)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        Ok(contents)
    }

    /// Write the file, owner read/write only on Unix.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving secrets file");
        write_private(path, &self.to_toml()?)
    }
}

/// Write `contents` to `path`, restricting permissions on Unix.
///
/// A new file is created with mode 0600 and an existing one is narrowed to
/// 0600 before any contents are written.
pub fn write_private(path: &Path, contents: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(SECRETS_FILE_MODE);
    }

    let mut file = options.open(path)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(SECRETS_FILE_MODE))?;
    }

    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Check that a secrets file is not readable by group or others (Unix only).
///
/// # Errors
///
/// Returns `ValidationError::InvalidPermissions` if any group/other bit is set.
#[cfg(unix)]
pub fn check_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    use crate::error::ValidationError;

    let metadata = std::fs::metadata(path)?;
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode & 0o077 != 0 {
        return Err(ValidationError::InvalidPermissions {
            path: path.display().to_string(),
            expected: format!("{:o}", SECRETS_FILE_MODE),
            actual: format!("{:o}", actual_mode),
        }
        .into());
    }

    Ok(())
}

/// Permissions are not tracked outside Unix.
#[cfg(not(unix))]
pub fn check_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
