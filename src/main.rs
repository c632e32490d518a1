//! VoiceNotes CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voice_notes::cli::{
    app::{load_merged_config, run_add, run_delete, run_list, run_record, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use voice_notes::domain::config::AppConfig;
use voice_notes::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Config management bypasses the merged runtime config
    let command = match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        other => other,
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        notes_file: cli.notes_file,
        locale: cli.locale,
        speech_command: cli.speech_command,
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Route to the appropriate runner
    match command {
        None => run_list(&config, None).await,
        Some(Commands::List { query }) => run_list(&config, query).await,
        Some(Commands::Add { content }) => run_add(&config, content).await,
        Some(Commands::Record) => run_record(&config).await,
        Some(Commands::Delete { id }) => run_delete(&config, &id).await,
        Some(Commands::Config { .. }) => unreachable!(), // Handled above
    }
}
