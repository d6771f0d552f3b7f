mod cli;
mod config;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;
use scribe_core::{FailureKind, WriteRequest};
use scribe_engine::{TransactionalFileWriter, WriteError, WriterConfig};
use scribe_logging::scribe_debug;

use cli::Cli;
use output::Format;

/// Bad arguments or configuration.
const EXIT_USAGE: u8 = 1;
const EXIT_CREATION: u8 = 2;
/// The write failed and the partial file was removed.
const EXIT_WRITE: u8 = 3;
/// The write failed and a partial file is left behind.
const EXIT_DELETION: u8 = 4;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let settings = match config::load(cli.config.as_deref()) {
        Ok(settings) => settings.with_overrides(&cli),
        Err(err) => {
            eprintln!("scribe: {err:#}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    logging::initialize(
        settings.log_destination,
        settings.log_level.into(),
        &settings.log_file,
    );
    scribe_debug!("settings: {:?}", settings);

    let format = if cli.json { Format::Json } else { Format::Human };
    let writer = TransactionalFileWriter::new().with_config(WriterConfig {
        require_durable: settings.require_durable,
    });
    let request = WriteRequest::new(cli.filename, cli.text);

    let (printed, code) = match writer.process(&request) {
        Ok(report) => (output::report_success(&report, format), ExitCode::SUCCESS),
        Err(err) => (
            output::report_failure(&err, format),
            ExitCode::from(exit_code(&err)),
        ),
    };
    if let Err(err) = printed {
        eprintln!("scribe: could not print result: {err:#}");
    }
    code
}

fn exit_code(err: &WriteError) -> u8 {
    match err.kind() {
        FailureKind::Creation => EXIT_CREATION,
        FailureKind::Write => EXIT_WRITE,
        FailureKind::Deletion => EXIT_DELETION,
    }
}
