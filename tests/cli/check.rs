//! Tests for `firmware-secrets check`.

use crate::support::*;

#[test]
fn test_check_template_reports_placeholders() {
    let t = Test::init();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "SECRET_SSID is still a placeholder");
    assert_stdout_contains(&output, "6 of 6 secrets still need a value");
}

#[test]
fn test_check_strict_fails_on_placeholders() {
    let t = Test::init();

    let output = t.check_strict();
    assert_failure(&output);
    assert_stderr_contains(&output, "not ready, 6 unset");
    assert_stderr_contains(&output, "SECRET_SENSOR_PASSWORD");
}

#[test]
fn test_check_strict_passes_when_filled() {
    let t = Test::new();
    t.write_private("secrets.toml", FILLED);

    let output = t.check_strict();
    assert_success(&output);
    assert_stdout_contains(&output, "all secrets set");
}

#[test]
fn test_check_flags_empty_value() {
    let t = Test::new();
    t.write_private(
        "secrets.toml",
        &FILLED.replace("\"correct horse battery\"", "\"\""),
    );

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "SECRET_WIFI_PASSWORD is empty");

    let output = t.check_strict();
    assert_failure(&output);
    assert_stderr_contains(&output, "not ready, 1 unset: SECRET_WIFI_PASSWORD");
}

#[test]
fn test_check_without_file_suggests_init() {
    let t = Test::new();

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "not found");
    assert_stdout_contains(&output, "firmware-secrets init");
}

#[cfg(unix)]
#[test]
fn test_check_warns_on_loose_permissions() {
    let t = Test::with_file(FILLED);

    let output = t.check();
    assert_success(&output);
    assert_stdout_contains(&output, "insecure permissions");

    let output = t.check_strict();
    assert_failure(&output);
    assert_stderr_contains(&output, "chmod 600");
}
