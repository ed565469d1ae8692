use std::borrow::Borrow;
use std::path::PathBuf;
use thiserror::Error;

use crate::release::Stage;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("Version must be in format X.Y.Z (e.g., 1.15.0), got '{0}'")]
    Format(String),

    #[error("{} not found", .0.display())]
    MissingManifest(PathBuf),

    #[error("Failed to parse {}: {reason}", .path.display())]
    ManifestParse { path: PathBuf, reason: String },

    #[error("Failed to write to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Command failed: {command}{}", exit_suffix(.code))]
    ExternalCommandFailure { command: String, code: Option<i32> },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{stage} failed: {source}")]
    StageFailed {
        stage: Stage,
        source: Box<CliError>,
    },

    #[error("{0}")]
    Generic(String),
}

impl CliError {
    /// The failure underneath any stage wrapping.
    pub fn root(&self) -> &CliError {
        match self {
            CliError::StageFailed { source, .. } => source.root(),
            other => other,
        }
    }
}

fn exit_suffix(code: impl Borrow<Option<i32>>) -> String {
    match code.borrow() {
        Some(code) => format!(" (exit code {code})"),
        None => String::new(),
    }
}
