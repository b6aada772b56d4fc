//! Rebuild when any build-time secret override changes.

const SECRET_VARS: &[&str] = &[
    "SECRET_SSID",
    "SECRET_WIFI_PASSWORD",
    "SECRET_MQTT_SERVER",
    "SECRET_MQTT_USER",
    "SECRET_MQTT_PASSWORD",
    "SECRET_SENSOR_PASSWORD",
];

fn main() {
    for var in SECRET_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
