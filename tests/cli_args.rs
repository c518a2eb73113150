//! Integration tests for CLI argument handling
//!
//! Runs the binary with arguments that make it exit before binding a socket.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calendar-holidays"))
        .args(args)
        .env_remove("HOLIDAY_COUNTRIES")
        .output()
        .expect("Failed to execute calendar-holidays")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calendar-holidays"), "Help should mention the binary name");
    assert!(stdout.contains("--countries"), "Help should mention --countries");
    assert!(stdout.contains("HOLIDAYS_API_URL"), "Help should mention env variables");
}

#[test]
fn test_invalid_country_prints_error_and_exits() {
    let output = run_cli(&["--countries", "UA,Ukraine"]);
    assert!(
        !output.status.success(),
        "Expected invalid country code to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid country code"),
        "Should print error message about invalid country code: {}",
        stderr
    );
}

#[test]
fn test_invalid_port_fails() {
    let output = run_cli(&["--port", "not-a-port"]);
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use calendar_holidays::cli::{parse_country_code, Cli};
    use clap::Parser;

    #[test]
    fn test_cli_countries_flag() {
        let cli = Cli::parse_from(["calendar-holidays", "--countries", "gb,fr"]);
        assert_eq!(cli.countries(), vec!["GB", "FR"]);
    }

    #[test]
    fn test_parse_country_code_invalid_returns_error() {
        assert!(parse_country_code("").is_err());
        assert!(parse_country_code("U5").is_err());
    }
}
