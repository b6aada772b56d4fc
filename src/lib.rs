//! firmware-secrets - typed secrets for networked sensor firmware.
//!
//! Six named values configure a device: the WiFi network and its password,
//! the MQTT broker address and credentials, and the sensor's shared secret.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write the fill-in template
//! │   ├── secrets       # list / get / show
//! │   ├── check         # Readiness report
//! │   ├── render        # TOML, Rust module, .env output
//! │   └── completions   # Shell completions
//! └── core/             # Library
//!     ├── constants     # Compile-time SECRET_* constants
//!     ├── names         # The six secret names
//!     ├── value         # Zeroizing, redacted secret strings
//!     ├── store         # Layered runtime loader and global instance
//!     ├── file          # secrets.toml format
//!     ├── render        # Output formats
//!     ├── inspect       # Placeholder / empty detection
//!     └── gitignore     # Keep secrets out of git
//! ```
//!
//! # Usage
//!
//! Compile-time, values injected through the build environment:
//!
//! ```
//! use firmware_secrets::SECRET_MQTT_SERVER;
//!
//! assert!(!SECRET_MQTT_SERVER.is_empty());
//! ```
//!
//! Runtime, values resolved from `secrets.toml` and the environment:
//!
//! ```no_run
//! use firmware_secrets::SecretsLoader;
//!
//! let secrets = SecretsLoader::new().file("secrets.toml").load()?;
//! println!("joining {}", secrets.ssid());
//! # Ok::<(), firmware_secrets::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::constants::{
    SECRET_MQTT_PASSWORD, SECRET_MQTT_SERVER, SECRET_MQTT_USER, SECRET_SENSOR_PASSWORD,
    SECRET_SSID, SECRET_WIFI_PASSWORD,
};
pub use crate::core::names::SecretName;
pub use crate::core::store::{Secrets, SecretsLoader, Source};
pub use crate::core::value::SecretValue;
