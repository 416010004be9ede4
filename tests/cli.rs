// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 DrDisc

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

use client_treatment_organizer::banner::render_banner;

const NOTICE: &str = "\nNote: GUI not available. Running in console mode.\nPress Enter to exit...\n";

fn organizer() -> Command {
    Command::new(env!("CARGO_BIN_EXE_client-treatment-organizer"))
}

#[test]
fn console_run_prints_banner_then_notice() {
    let dir = tempdir().unwrap();
    let expected = format!("{}{}", render_banner(), NOTICE);

    organizer()
        .current_dir(dir.path())
        .arg("--console")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn console_run_exits_on_closed_stdin() {
    let dir = tempdir().unwrap();

    organizer()
        .current_dir(dir.path())
        .arg("--console")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Press Enter to exit...\n"));
}

#[test]
fn banner_is_identical_across_runs() {
    let dir = tempdir().unwrap();
    let run = || {
        organizer()
            .current_dir(dir.path())
            .args(["--console", "--quiet"])
            .write_stdin("\n")
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn console_mode_from_config_skips_window() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"interface": {"mode": "console"}}"#,
    )
    .unwrap();

    organizer()
        .current_dir(dir.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running in console mode."));
}

#[cfg(all(feature = "gui", target_os = "linux"))]
#[test]
fn gui_mode_without_display_falls_back_to_console() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"interface": {"mode": "gui"}}"#,
    )
    .unwrap();

    organizer()
        .current_dir(dir.path())
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .env_remove("WAYLAND_SOCKET")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(NOTICE))
        .stderr(predicate::str::contains("falling back to console"));
}

#[test]
fn invalid_config_does_not_fail_default_run() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

    organizer()
        .current_dir(dir.path())
        .arg("--console")
        .write_stdin("\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring config"));
}

#[test]
fn generate_then_validate_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    organizer()
        .args(["config", "generate", "-o"])
        .arg(&path)
        .assert()
        .success();

    organizer()
        .arg("--config")
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interface mode: auto"));
}

#[test]
fn validate_rejects_broken_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ broken").unwrap();

    organizer()
        .arg("--config")
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .failure();
}

#[test]
fn shows_version() {
    organizer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.1"));
}
