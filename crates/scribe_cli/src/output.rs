use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use scribe_engine::{FailureKind, WriteError, WriteReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Human,
    Json,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonResult<'a> {
    Success {
        path: &'a Path,
        bytes_written: usize,
        durable: bool,
        handle_closed: bool,
        stages: Vec<String>,
    },
    Failure {
        path: &'a Path,
        kind: &'static str,
        error: String,
    },
}

pub fn report_success(report: &WriteReport, format: Format) -> Result<()> {
    match format {
        Format::Human => {
            println!(
                "wrote {} bytes to {}",
                report.bytes_written,
                report.path.display()
            );
            if !report.durable {
                eprintln!("warning: content was not synced to stable storage");
            }
            if !report.handle_closed {
                eprintln!("warning: file handle was not closed cleanly");
            }
        }
        Format::Json => {
            let result = JsonResult::Success {
                path: &report.path,
                bytes_written: report.bytes_written,
                durable: report.durable,
                handle_closed: report.handle_closed,
                stages: report.stages.iter().map(ToString::to_string).collect(),
            };
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}

pub fn report_failure(err: &WriteError, format: Format) -> Result<()> {
    match format {
        Format::Human => {
            eprintln!("scribe: {err}");
            if err.kind() == FailureKind::Deletion {
                eprintln!(
                    "scribe: a partially written file remains at {}",
                    err.path().display()
                );
            }
        }
        Format::Json => {
            let result = JsonResult::Failure {
                path: err.path(),
                kind: kind_name(err.kind()),
                error: err.to_string(),
            };
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}

fn kind_name(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::Creation => "creation",
        FailureKind::Write => "write",
        FailureKind::Deletion => "deletion",
    }
}
