use std::fs;
use tempfile::tempdir;

fn run_with_config(name: &str, contents: &str) -> std::process::Output {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join(name);
    fs::write(&config_path, contents).unwrap();

    std::process::Command::new(env!("CARGO_BIN_EXE_seoscope"))
        .arg("tests/static/good-seo.html")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_with_json_config() {
    let output = run_with_config("config.json", r#"{ "output": "json" }"#);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim_start().starts_with('{'));
}

#[test]
fn test_cli_with_toml_config() {
    let output = run_with_config(
        "config.toml",
        r#"
output = "json"

[thresholds]
title_min = 10
title_max = 20
"#,
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"title-length\""));
}

#[test]
fn test_cli_with_yaml_config() {
    let output = run_with_config(
        "config.yaml",
        r#"
output: json
category: social
"#,
    );

    assert!(output.status.success());
}

#[test]
fn test_cli_with_invalid_config() {
    let output = run_with_config("config.json", "{ invalid json }");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse JSON config"));
}

#[test]
fn test_cli_with_unsupported_config_format() {
    let output = run_with_config("config.ini", "output=json");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unsupported config file format"));
}

#[test]
fn test_verbose_from_config_enables_debug_logging() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("seoscope.yaml");
    fs::write(&config_path, "verbose: true\noutput: json\n").unwrap();

    let output = std::process::Command::new(env!("CARGO_BIN_EXE_seoscope"))
        .env_remove("RUST_LOG")
        .arg("tests/static/good-seo.html")
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "stderr was: {}", stderr);
    assert!(stderr.contains("SEO analysis complete"));
}

#[test]
fn test_quiet_by_default() {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_seoscope"))
        .env_remove("RUST_LOG")
        .args(["tests/static/good-seo.html", "--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("DEBUG"));
}
