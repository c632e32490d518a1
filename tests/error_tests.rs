//! Error scenario integration tests

use std::process::Command;

use tempfile::TempDir;

fn voice_notes_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voice-notes"))
}

fn isolated<'a>(cmd: &'a mut Command, home: &TempDir) -> &'a mut Command {
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("VOICE_NOTES_FILE")
        .env_remove("VOICE_NOTES_SPEECH_COMMAND")
}

#[test]
fn delete_with_malformed_id_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.json");

    let output = isolated(
        voice_notes_bin()
            .arg("--notes-file")
            .arg(&notes)
            .args(["delete", "not-a-uuid"]),
        &home,
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid note id"));
}

#[test]
fn adding_an_empty_note_is_rejected_with_a_warning() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.json");

    let output = isolated(
        voice_notes_bin()
            .arg("--notes-file")
            .arg(&notes)
            .args(["add", ""]),
        &home,
    )
    .output()
    .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Add some content"),
        "Expected empty-save warning, got: {}",
        stderr
    );
    // Nothing was persisted
    assert!(!notes.exists() || std::fs::read_to_string(&notes).unwrap().trim() == "[]");
}

#[test]
fn record_without_speech_support_fails_with_error_toast() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.json");

    // No speech command configured: capability check must fail
    let output = isolated(
        voice_notes_bin()
            .arg("--notes-file")
            .arg(&notes)
            .arg("record"),
        &home,
    )
    .output()
    .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not available"),
        "Expected capability error, got: {}",
        stderr
    );
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = isolated(voice_notes_bin().args(["config", "get", "api_key"]), &home)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = isolated(
        voice_notes_bin().args(["config", "set", "api_key", "value"]),
        &home,
    )
    .output()
    .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown") || stderr.contains("Valid"));
}

#[test]
fn config_set_notify_rejects_non_boolean() {
    let home = TempDir::new().unwrap();
    let output = isolated(
        voice_notes_bin().args(["config", "set", "notify", "maybe"]),
        &home,
    )
    .output()
    .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("true") && stderr.contains("false"));
}
