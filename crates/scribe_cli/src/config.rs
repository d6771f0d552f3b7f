use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::logging::{LogDestination, LogLevel};

pub const DEFAULT_CONFIG_FILE: &str = "scribe.ron";

/// Settings read from the RON config file, before CLI overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
    pub log_file: PathBuf,
    pub require_durable: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::Terminal,
            log_level: LogLevel::Warn,
            log_file: PathBuf::from("scribe.log"),
            require_durable: true,
        }
    }
}

impl Settings {
    /// Flags given on the command line win over the file.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if cli.allow_unsynced {
            self.require_durable = false;
        }
        self
    }
}

/// Loads settings from `explicit`, or from `./scribe.ron` if that exists.
///
/// An explicit file must exist and parse. Problems with the default file only
/// produce a warning, since logging is not set up yet.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => read_settings(path),
        None => Ok(load_default(Path::new(DEFAULT_CONFIG_FILE))),
    }
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse config file {}", path.display()))
}

fn load_default(path: &Path) -> Settings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Settings::default(),
        Err(err) => {
            eprintln!("Warning: Could not read {}: {}", path.display(), err);
            return Settings::default();
        }
    };

    match parse(&content) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Warning: Ignoring {}: {}", path.display(), err);
            Settings::default()
        }
    }
}

fn parse(content: &str) -> Result<Settings, ron::error::SpannedError> {
    ron::from_str(content)
}
