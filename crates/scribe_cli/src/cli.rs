use std::path::PathBuf;

use clap::Parser;

use crate::logging::{LogDestination, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "scribe")]
#[command(about = "Create a text file, removing it again if the write fails", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The text content to write into the file
    #[arg(long, allow_hyphen_values = true)]
    pub text: String,

    /// Path of the text file to create (e.g. output.txt)
    #[arg(long)]
    pub filename: PathBuf,

    /// Settings file in RON format [default: ./scribe.ron when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogDestination>,

    /// Most verbose level that is logged
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Keep the file even if it could not be synced to stable storage
    #[arg(long)]
    pub allow_unsynced: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    pub json: bool,
}
