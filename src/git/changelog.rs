use crate::config;
use crate::version::Version;
use std::fmt;

/// The commits that make up a release: everything after the previous tag,
/// or the whole history for a first release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitRange {
    Since(String),
    All,
}

impl CommitRange {
    pub fn from_previous_tag(previous_tag: Option<&str>) -> Self {
        match previous_tag {
            Some(tag) if !tag.is_empty() => CommitRange::Since(tag.to_string()),
            _ => CommitRange::All,
        }
    }

    pub fn to_revspec(&self) -> String {
        match self {
            CommitRange::Since(tag) => format!("{tag}..HEAD"),
            CommitRange::All => "HEAD".to_string(),
        }
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_revspec())
    }
}

/// One non-merge commit, rendered as `- <summary> (<author>)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub summary: String,
    pub author: String,
}

impl ChangelogEntry {
    pub fn new(summary: impl Into<String>, author: impl Into<String>) -> Self {
        ChangelogEntry {
            summary: summary.into(),
            author: author.into(),
        }
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} ({})", self.summary, self.author)
    }
}

pub fn commit_message(version: &Version) -> String {
    format!("{} {}", config::COMMIT_MESSAGE_PREFIX, version)
}

/// Body of the annotated release tag.
pub fn tag_message(version: &Version, entries: &[ChangelogEntry]) -> String {
    let lines = entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{} {}\n\n{}", config::TAG_MESSAGE_PREFIX, version, lines)
}
