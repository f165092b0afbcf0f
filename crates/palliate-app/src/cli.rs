//! CLI argument definitions for the Palliate binary.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Palliate: offline caregiver assistant and knowledge search.
#[derive(Parser, Debug)]
#[command(name = "palliate", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ask the assistant one question.
    Ask {
        /// The question; multiple words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        utterance: Vec<String>,
    },
    /// Search the knowledge base. Without a query, lists every document.
    Search {
        query: Option<String>,
        /// Emit matches as a JSON array.
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive conversation on stdin/stdout.
    Chat,
    /// Build the rule table and corpus from config and report their size.
    Check,
}

impl Command {
    /// The `ask` utterance as typed on the command line.
    pub fn utterance(&self) -> Option<String> {
        match self {
            Command::Ask { utterance } => Some(utterance.join(" ")),
            _ => None,
        }
    }
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > PALLIATE_CONFIG env var > ~/.palliate/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = std::env::var_os("PALLIATE_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Whether the config path was named by the user (flag or env var)
    /// rather than taken from the platform default.
    pub fn config_is_explicit(&self) -> bool {
        self.config.is_some() || std::env::var_os("PALLIATE_CONFIG").is_some()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config_level: &str) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config_level.to_string())
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".palliate").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".palliate").join("config.toml");
    }
    PathBuf::from("config.toml")
}
