//! CLI integration tests

use std::process::Command;

use predicates::prelude::*;
use tempfile::TempDir;

fn voice_notes_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voice-notes"))
}

/// Isolate the process from the user's real config
fn isolated<'a>(cmd: &'a mut Command, home: &TempDir) -> &'a mut Command {
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_DATA_HOME", home.path().join(".local/share"))
        .env_remove("VOICE_NOTES_FILE")
        .env_remove("VOICE_NOTES_SPEECH_COMMAND")
}

#[test]
fn help_output() {
    assert_cmd::Command::cargo_bin("voice-notes")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("record"))
                .and(predicate::str::contains("delete"))
                .and(predicate::str::contains("--notes-file"))
                .and(predicate::str::contains("--notify")),
        );
}

#[test]
fn version_output() {
    assert_cmd::Command::cargo_bin("voice-notes")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("voice-notes")
                .and(predicate::str::contains(env!("CARGO_PKG_VERSION"))),
        );
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = isolated(voice_notes_bin().args(["config", "path"]), &home)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voice-notes"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();

    let output = isolated(
        voice_notes_bin().args(["config", "set", "locale", "pt-BR"]),
        &home,
    )
    .output()
    .expect("Failed to execute command");
    assert!(output.status.success());

    let output = isolated(voice_notes_bin().args(["config", "get", "locale"]), &home)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "pt-BR");
}

#[test]
fn config_list_shows_all_keys() {
    let home = TempDir::new().unwrap();
    let output = isolated(voice_notes_bin().args(["config", "list"]), &home)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("notes_file"));
    assert!(stdout.contains("locale"));
    assert!(stdout.contains("speech_command"));
    assert!(stdout.contains("notify"));
}

#[test]
fn config_init_creates_defaults() {
    let home = TempDir::new().unwrap();
    let output = isolated(voice_notes_bin().args(["config", "init"]), &home)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    // A second init refuses to overwrite
    let output = isolated(voice_notes_bin().args(["config", "init"]), &home)
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
}
