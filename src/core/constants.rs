//! Compile-time secrets.
//!
//! Each constant takes the value of the identically named environment
//! variable present when the crate is built, and falls back to the template
//! placeholder otherwise:
//!
//! ```bash
//! SECRET_SSID=workshop SECRET_WIFI_PASSWORD=hunter2 cargo build --release
//! ```
//!
//! The module is compiled once per crate, so every name has exactly one
//! definition; importing it from several places shares that definition.

use crate::core::names::SecretName;

const fn or_placeholder(injected: Option<&'static str>, name: SecretName) -> &'static str {
    match injected {
        Some(value) => value,
        None => name.placeholder(),
    }
}

/// Wireless network identifier to join.
pub const SECRET_SSID: &str = or_placeholder(option_env!("SECRET_SSID"), SecretName::Ssid);

/// Credential for joining that network.
pub const SECRET_WIFI_PASSWORD: &str = or_placeholder(
    option_env!("SECRET_WIFI_PASSWORD"),
    SecretName::WifiPassword,
);

/// Network address (host or IP) of the MQTT broker.
pub const SECRET_MQTT_SERVER: &str =
    or_placeholder(option_env!("SECRET_MQTT_SERVER"), SecretName::MqttServer);

/// Username for authenticating to the broker.
pub const SECRET_MQTT_USER: &str =
    or_placeholder(option_env!("SECRET_MQTT_USER"), SecretName::MqttUser);

/// Password for authenticating to the broker.
pub const SECRET_MQTT_PASSWORD: &str = or_placeholder(
    option_env!("SECRET_MQTT_PASSWORD"),
    SecretName::MqttPassword,
);

/// Shared secret authenticating the sensor for secure operation.
pub const SECRET_SENSOR_PASSWORD: &str = or_placeholder(
    option_env!("SECRET_SENSOR_PASSWORD"),
    SecretName::SensorPassword,
);

/// Look up the compiled-in value for a name.
pub const fn compiled(name: SecretName) -> &'static str {
    match name {
        SecretName::Ssid => SECRET_SSID,
        SecretName::WifiPassword => SECRET_WIFI_PASSWORD,
        SecretName::MqttServer => SECRET_MQTT_SERVER,
        SecretName::MqttUser => SECRET_MQTT_USER,
        SecretName::MqttPassword => SECRET_MQTT_PASSWORD,
        SecretName::SensorPassword => SECRET_SENSOR_PASSWORD,
    }
}

/// Whether a name was injected at build time rather than left as placeholder.
pub const fn is_injected(name: SecretName) -> bool {
    let injected = match name {
        SecretName::Ssid => option_env!("SECRET_SSID"),
        SecretName::WifiPassword => option_env!("SECRET_WIFI_PASSWORD"),
        SecretName::MqttServer => option_env!("SECRET_MQTT_SERVER"),
        SecretName::MqttUser => option_env!("SECRET_MQTT_USER"),
        SecretName::MqttPassword => option_env!("SECRET_MQTT_PASSWORD"),
        SecretName::SensorPassword => option_env!("SECRET_SENSOR_PASSWORD"),
    };
    injected.is_some()
}
