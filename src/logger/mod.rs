//! Status lines for the release run. Everything goes through `log`, so
//! `RUST_LOG` decides what reaches the terminal.

use colored::*;
use log::{debug, error, info, warn};

/// A finished step.
pub fn success(msg: &str) {
    info!("{} {}", "✓".green(), msg);
}

pub fn info(msg: &str) {
    info!("{} {}", "ℹ".blue(), msg);
}

/// Something worth noticing that does not stop the release.
pub fn warning(msg: &str) {
    warn!("{} {}", "⚠".yellow(), msg);
}

pub fn error(msg: &str) {
    error!("{} {}", "✗".red(), msg);
}

/// Announce the next phase of the run.
pub fn progress(msg: &str) {
    info!("{} {}", "→".blue(), msg);
}

/// Show a git command that changes the repository, right before it runs.
pub fn command(cmd: &str) {
    info!("{} {}", ">".dimmed(), cmd);
}

/// Read-only git calls are logged at debug level.
pub fn query(cmd: &str) {
    debug!("{} {}", ">".dimmed(), cmd);
}
