//! Main app runners for the note commands

use std::process::ExitCode;

use tokio::io::AsyncReadExt;
use uuid::Uuid;

use crate::application::ports::ConfigStore;
use crate::application::{CaptureError, CaptureUseCase, NoteStore};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_engine, create_notifier, JsonFileStorage, XdgConfigStore};

use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        log::warn!("could not load config file: {e}");
        AppConfig::empty()
    });

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

fn storage_for(config: &AppConfig) -> JsonFileStorage {
    JsonFileStorage::new(config.notes_path_or_default())
}

/// List notes, optionally filtered by a search term
pub async fn run_list(config: &AppConfig, query: Option<String>) -> ExitCode {
    let presenter = Presenter::new();
    let store = NoteStore::hydrate(storage_for(config)).await;

    let query = query.unwrap_or_default();
    let matches = store.search(&query);
    presenter.render_notes(&matches, &query);

    ExitCode::from(EXIT_SUCCESS)
}

/// Add a note from arguments, or from stdin when none are given
pub async fn run_add(config: &AppConfig, content: Vec<String>) -> ExitCode {
    let presenter = Presenter::new();

    let content = if content.is_empty() {
        let mut buffer = String::new();
        if let Err(e) = tokio::io::stdin().read_to_string(&mut buffer).await {
            presenter.error(&format!("Failed to read stdin: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
        // Drop the trailing newline most shells and editors append
        buffer.trim_end_matches('\n').to_string()
    } else {
        content.join(" ")
    };

    let mut store = NoteStore::hydrate(storage_for(config)).await;
    let notifier = create_notifier(config.notify_or_default());
    let engine = create_engine(config);
    let mut capture = CaptureUseCase::new(engine, notifier, config.locale_or_default());

    if let Err(e) = capture
        .start_manual_entry()
        .and_then(|_| capture.edit_draft(&content))
    {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    match capture.commit(&mut store).await {
        Ok(note) => {
            presenter.output(&note.id.to_string());
            ExitCode::from(EXIT_SUCCESS)
        }
        // The warning toast has already been raised
        Err(CaptureError::EmptyDraft) => ExitCode::from(EXIT_ERROR),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Record a note by voice until Ctrl-C or the engine finishes
pub async fn run_record(config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let mut store = NoteStore::hydrate(storage_for(config)).await;
    let notifier = create_notifier(config.notify_or_default());
    let engine = create_engine(config);
    let mut capture = CaptureUseCase::new(engine, notifier, config.locale_or_default());

    if let Err(e) = capture.start_recording().await {
        // The error toast has already been raised for unavailability
        log::debug!("recording not started: {e}");
        return ExitCode::from(EXIT_ERROR);
    }

    let mut shutdown = ShutdownSignal::new();
    presenter.start_spinner("Recording… (press Ctrl-C to stop)");

    loop {
        tokio::select! {
            event = capture.recv_event() => {
                match event {
                    Some(event) => {
                        if let Err(e) = capture.apply_event(event) {
                            presenter.stop_spinner();
                            presenter.error(&e.to_string());
                            return ExitCode::from(EXIT_ERROR);
                        }
                        presenter.update_recording_draft(capture.draft());
                    }
                    // Engine finished on its own
                    None => break,
                }
            }
            _ = shutdown.recv() => break,
        }
    }

    presenter.stop_spinner();

    if let Err(e) = capture.stop_recording().await {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    match capture.commit(&mut store).await {
        Ok(note) => {
            presenter.output(&note.id.to_string());
            ExitCode::from(EXIT_SUCCESS)
        }
        // Nothing was transcribed; the warning toast has been raised
        Err(CaptureError::EmptyDraft) => ExitCode::from(EXIT_ERROR),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Delete a note by id
pub async fn run_delete(config: &AppConfig, id: &str) -> ExitCode {
    let presenter = Presenter::new();

    let id = match Uuid::parse_str(id) {
        Ok(id) => id,
        Err(_) => {
            presenter.error(&format!("Invalid note id: \"{}\"", id));
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let mut store = NoteStore::hydrate(storage_for(config)).await;

    match store.delete(id).await {
        Ok(true) => {
            presenter.success("Note deleted.");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(false) => {
            // Deleting an absent note is a no-op, not an error
            presenter.info(&format!("No note with id {}.", id));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
