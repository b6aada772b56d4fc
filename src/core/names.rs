//! The closed set of secret names.
//!
//! Every secret the firmware consumes is one of these six names. The
//! `SECRET_*` identifier doubles as the constant name, the build-time
//! environment variable and the key in `secrets.toml`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, ValidationError};

/// A named secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SecretName {
    #[serde(rename = "SECRET_SSID")]
    Ssid,
    #[serde(rename = "SECRET_WIFI_PASSWORD")]
    WifiPassword,
    #[serde(rename = "SECRET_MQTT_SERVER")]
    MqttServer,
    #[serde(rename = "SECRET_MQTT_USER")]
    MqttUser,
    #[serde(rename = "SECRET_MQTT_PASSWORD")]
    MqttPassword,
    #[serde(rename = "SECRET_SENSOR_PASSWORD")]
    SensorPassword,
}

impl SecretName {
    /// All names, in declaration order.
    pub const ALL: [SecretName; 6] = [
        SecretName::Ssid,
        SecretName::WifiPassword,
        SecretName::MqttServer,
        SecretName::MqttUser,
        SecretName::MqttPassword,
        SecretName::SensorPassword,
    ];

    /// The `SECRET_*` identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            SecretName::Ssid => "SECRET_SSID",
            SecretName::WifiPassword => "SECRET_WIFI_PASSWORD",
            SecretName::MqttServer => "SECRET_MQTT_SERVER",
            SecretName::MqttUser => "SECRET_MQTT_USER",
            SecretName::MqttPassword => "SECRET_MQTT_PASSWORD",
            SecretName::SensorPassword => "SECRET_SENSOR_PASSWORD",
        }
    }

    /// Short kebab-case form accepted on the command line.
    pub const fn short(self) -> &'static str {
        match self {
            SecretName::Ssid => "ssid",
            SecretName::WifiPassword => "wifi-password",
            SecretName::MqttServer => "mqtt-server",
            SecretName::MqttUser => "mqtt-user",
            SecretName::MqttPassword => "mqtt-password",
            SecretName::SensorPassword => "sensor-password",
        }
    }

    /// What the value is used for.
    pub const fn role(self) -> &'static str {
        match self {
            SecretName::Ssid => "Wireless network identifier to join",
            SecretName::WifiPassword => "Credential for joining that network",
            SecretName::MqttServer => "Network address (host or IP) of a message-broker endpoint",
            SecretName::MqttUser => "Username for authenticating to the broker",
            SecretName::MqttPassword => "Password for authenticating to the broker",
            SecretName::SensorPassword => {
                "Shared secret used to authenticate a sensor/device for secure operation"
            }
        }
    }

    /// Value shipped in the fill-in template.
    pub const fn placeholder(self) -> &'static str {
        match self {
            SecretName::Ssid => "ssid",
            SecretName::WifiPassword => "pw",
            SecretName::MqttServer => "69.69.69.69",
            SecretName::MqttUser => "mqtt-user",
            SecretName::MqttPassword => "mqtt-password",
            SecretName::SensorPassword => "sensor-password-for-secure-use",
        }
    }

    /// Whether the value must be hidden in output.
    ///
    /// Network name, broker address and broker username are identifiers
    /// rather than credentials.
    pub const fn is_sensitive(self) -> bool {
        !matches!(
            self,
            SecretName::Ssid | SecretName::MqttServer | SecretName::MqttUser
        )
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecretName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SecretName::ALL
            .into_iter()
            .find(|name| {
                name.as_str().eq_ignore_ascii_case(trimmed)
                    || name.short().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ValidationError::UnknownName(s.to_string()).into())
    }
}
