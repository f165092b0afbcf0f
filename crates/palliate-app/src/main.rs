//! Palliate application binary - composition root.
//!
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Build the answer matcher and the document index
//! 4. Run the requested subcommand

mod cli;
mod commands;

use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use palliate_assistant::AnswerMatcher;
use palliate_core::config::PalliateConfig;
use palliate_knowledge::DocumentIndex;
use tokio::io::BufReader;

use cli::{CliArgs, Command};

/// Load the config file. Only a missing file at the default location
/// means built-in defaults; a path the user named must be readable.
fn load_config(path: &Path, explicit: bool) -> palliate_core::Result<PalliateConfig> {
    if explicit || path.exists() {
        PalliateConfig::load(path)
    } else {
        Ok(PalliateConfig::default())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    // Loaded before the subscriber exists; the outcome is logged below.
    let config = load_config(&config_file, args.config_is_explicit())?;

    // Tracing. RUST_LOG wins over --log-level and the config file.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .init();

    tracing::info!("Starting Palliate v{}", env!("CARGO_PKG_VERSION"));
    if config_file.exists() {
        tracing::info!(path = %config_file.display(), "Configuration loaded");
    } else {
        tracing::info!(path = %config_file.display(), "No config file, using built-in defaults");
    }

    // Assistant and knowledge base. Either failing means not ready.
    let matcher = AnswerMatcher::from_config(&config.assistant).map_err(|e| {
        tracing::error!(error = %e, "Rule table rejected");
        e
    })?;
    let index = DocumentIndex::from_config(&config.knowledge).map_err(|e| {
        tracing::error!(error = %e, "Corpus rejected");
        e
    })?;

    let stdout = io::stdout();
    match &args.command {
        Command::Ask { .. } => {
            let utterance = args.command.utterance().unwrap_or_default();
            commands::ask(&matcher, &utterance, &mut stdout.lock())?;
        }
        Command::Search { query, json } => {
            commands::search(&index, query.as_deref(), *json, &mut stdout.lock())?;
        }
        Command::Check => {
            commands::check(&matcher, &index, &mut stdout.lock())?;
        }
        Command::Chat => {
            let reader = BufReader::new(tokio::io::stdin());
            let writer = tokio::io::stdout();
            tokio::select! {
                result = commands::run_chat(&matcher, &config.assistant.greeting, reader, writer) => {
                    let exchanges = result?;
                    tracing::debug!(exchanges, "Chat finished");
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Interrupted, leaving chat");
                }
            }
        }
    }

    stdout.lock().flush()?;
    Ok(())
}
