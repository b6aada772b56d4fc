//! Tests for `firmware-secrets list/get/show`.

use crate::support::*;

#[test]
fn test_list_shows_names_not_values() {
    let t = Test::with_file(FILLED);

    let output = t.list();
    assert_success(&output);
    for name in NAMES {
        assert_stdout_contains(&output, name);
    }
    assert_stdout_contains(&output, "message-broker endpoint");
    assert_stdout_excludes(&output, "mqtt-s3cret-7781");
    assert_stdout_excludes(&output, "makerspace");
}

#[test]
fn test_list_json() {
    let t = Test::with_file(PARTIAL);

    let output = t.list_json();
    assert_success(&output);
    let entries: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 6);

    assert_eq!(entries[2]["name"], "SECRET_MQTT_SERVER");
    assert_eq!(entries[2]["source"], "file");
    assert_eq!(entries[2]["sensitive"], false);
    assert_eq!(entries[4]["name"], "SECRET_MQTT_PASSWORD");
    assert_eq!(entries[4]["source"], "compiled");
    assert_eq!(entries[4]["sensitive"], true);
}

#[test]
fn test_get_from_file() {
    let t = Test::with_file(FILLED);

    let output = t.get("SECRET_MQTT_SERVER");
    assert_success(&output);
    assert_eq!(stdout(&output), "192.168.1.40\n");
}

#[test]
fn test_get_short_name() {
    let t = Test::with_file(FILLED);

    let output = t.get("sensor-password");
    assert_success(&output);
    assert_eq!(stdout(&output), "sensor-s3cret-4410\n");
}

#[test]
fn test_get_without_file_uses_compiled_value() {
    let t = Test::new();

    let output = t.get("SECRET_SSID");
    assert_success(&output);
    assert_eq!(stdout(&output).trim_end(), firmware_secrets::SECRET_SSID);
}

#[test]
fn test_environment_overrides_file() {
    let t = Test::with_file(FILLED);

    let output = t
        .cmd()
        .env("SECRET_MQTT_USER", "from-env")
        .args(["get", "SECRET_MQTT_USER"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "from-env\n");
}

#[test]
fn test_get_unknown_name_fails() {
    let t = Test::with_file(FILLED);

    let output = t.get("SECRET_API_KEY");
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown secret name");
    assert_stderr_contains(&output, "firmware-secrets list");
}

#[test]
fn test_show_hides_passwords() {
    let t = Test::with_file(FILLED);

    let output = t.show();
    assert_success(&output);
    assert_stdout_contains(&output, "makerspace");
    assert_stdout_contains(&output, "192.168.1.40");
    assert_stdout_contains(&output, "laser-cutter");
    assert_stdout_excludes(&output, "correct horse battery");
    assert_stdout_excludes(&output, "mqtt-s3cret-7781");
    assert_stdout_excludes(&output, "sensor-s3cret-4410");
    assert_stdout_contains(&output, "--reveal");
}

#[test]
fn test_show_reveal() {
    let t = Test::with_file(FILLED);

    let output = t.show_reveal();
    assert_success(&output);
    assert_stdout_contains(&output, "correct horse battery");
    assert_stdout_contains(&output, "mqtt-s3cret-7781");
    assert_stdout_contains(&output, "sensor-s3cret-4410");
}

#[test]
fn test_show_json_redacts_with_fingerprint() {
    let t = Test::with_file(FILLED);

    let output = t.show_json();
    assert_success(&output);
    let out = stdout(&output);
    assert!(!out.contains("mqtt-s3cret-7781"));

    let entries: serde_json::Value = serde_json::from_str(&out).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries[0]["value"], "makerspace");
    assert!(entries[4]["value"].is_null());
    assert_eq!(entries[4]["fingerprint"].as_str().unwrap().len(), 8);
}
