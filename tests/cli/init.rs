//! Tests for `firmware-secrets init`.

use crate::support::*;

#[test]
fn test_init_writes_template() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    let content = t.read("secrets.toml");
    assert!(content.starts_with("# Firmware secrets"));
    assert!(content.contains("SECRET_SSID = \"ssid\""));
    assert!(content.contains("SECRET_WIFI_PASSWORD = \"pw\""));
    assert!(content.contains("SECRET_MQTT_SERVER = \"69.69.69.69\""));
    assert!(content.contains("SECRET_MQTT_USER = \"mqtt-user\""));
    assert!(content.contains("SECRET_MQTT_PASSWORD = \"mqtt-password\""));
    assert!(content.contains("SECRET_SENSOR_PASSWORD = \"sensor-password-for-secure-use\""));
}

#[cfg(unix)]
#[test]
fn test_init_restricts_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init();
    let mode = std::fs::metadata(t.path("secrets.toml"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[test]
fn test_init_force_narrows_loose_file() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_file(FILLED);
    std::fs::set_permissions(t.path("secrets.toml"), std::fs::Permissions::from_mode(0o644))
        .unwrap();

    assert_success(&t.init_force());
    let mode = std::fs::metadata(t.path("secrets.toml"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_init_updates_gitignore() {
    let t = Test::new();
    t.write(".gitignore", "target/\n");

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, ".gitignore");

    let gitignore = t.read(".gitignore");
    assert!(gitignore.starts_with("target/\n"));
    assert!(gitignore.lines().any(|l| l == "secrets.toml"));
    assert!(gitignore.lines().any(|l| l == "secrets.rs"));
    assert!(gitignore.lines().any(|l| l == ".env"));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_force_overwrites() {
    let t = Test::with_file(FILLED);

    let output = t.init_force();
    assert_success(&output);
    let content = t.read("secrets.toml");
    assert!(!content.contains("makerspace"));
    assert!(content.contains("SECRET_SSID = \"ssid\""));
}

#[test]
fn test_init_custom_file_path() {
    let t = Test::new();
    std::fs::create_dir(t.path("config")).unwrap();

    let output = t
        .cmd()
        .args(["--file", "config/device.toml", "init"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.path("config/device.toml").exists());
    assert!(!t.path("secrets.toml").exists());
    let gitignore = t.read("config/.gitignore");
    assert!(gitignore.lines().any(|l| l == "device.toml"));
}
