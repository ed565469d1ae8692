mod changelog;
mod repository;

pub use changelog::{commit_message, tag_message, ChangelogEntry, CommitRange};
pub use repository::SystemGit;

use crate::error::CliError;
use std::path::Path;

/// The version-control operations a release needs. Every call maps to one
/// external command; a non-zero exit is reported as
/// [`CliError::ExternalCommandFailure`].
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    /// All tag names, in whatever order the tool prints them.
    fn list_tags(&self) -> Result<Vec<String>, CliError>;

    /// The most recent tag reachable from HEAD, or `None` when there is none.
    fn latest_tag(&self) -> Result<Option<String>, CliError>;

    /// Non-merge commits in `range`, newest first.
    fn changelog(&self, range: &CommitRange) -> Result<Vec<ChangelogEntry>, CliError>;

    fn stage(&self, path: &Path) -> Result<(), CliError>;

    fn has_staged_changes(&self) -> Result<bool, CliError>;

    fn commit(&self, message: &str) -> Result<(), CliError>;

    fn tag_exists(&self, name: &str) -> Result<bool, CliError>;

    /// Create an annotated tag on HEAD whose message is read from `message_file`.
    fn create_annotated_tag(&self, name: &str, message_file: &Path) -> Result<(), CliError>;

    fn push(&self, remote: &str, refspec: &str) -> Result<(), CliError>;
}
