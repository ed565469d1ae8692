use crate::config;
use crate::error::CliError;
use crate::git::{self, ChangelogEntry, CommitRange, Vcs};
use crate::logger;
use crate::manifest::{Manifest, ManifestUpdate};
use crate::version::{self, Version};
use log::debug;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The steps of a release, in the order they run. The first failing step
/// aborts the run and names itself in the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Manifest,
    Changelog,
    Staging,
    Commit,
    Tag,
    Push,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Manifest => "manifest update",
            Stage::Changelog => "changelog",
            Stage::Staging => "staging",
            Stage::Commit => "commit",
            Stage::Tag => "tag",
            Stage::Push => "push",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug)]
pub struct ReleaseConfig {
    pub workdir: PathBuf,
    pub manifest_file: String,
    pub remote: String,
}

impl ReleaseConfig {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        ReleaseConfig {
            workdir: workdir.into(),
            manifest_file: config::MANIFEST_FILE.to_string(),
            remote: config::DEFAULT_REMOTE.to_string(),
        }
    }

    pub fn from_current_dir() -> Result<Self, CliError> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.workdir.join(&self.manifest_file)
    }
}

impl Default for ReleaseConfig {
    /// Release from the current directory, or from `.` when it cannot be read.
    fn default() -> Self {
        Self::from_current_dir().unwrap_or_else(|e| {
            debug!("Could not read the current directory: {e}");
            Self::new(".")
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagOutcome {
    Created,
    AlreadyExists,
}

/// What a completed release did.
#[derive(Clone, Debug)]
pub struct ReleaseReport {
    pub version: Version,
    pub manifest: ManifestUpdate,
    pub previous_tag: Option<String>,
    pub range: CommitRange,
    pub changelog: Vec<ChangelogEntry>,
    pub committed: bool,
    pub tag: TagOutcome,
}

pub struct Release<'a, V: Vcs> {
    config: &'a ReleaseConfig,
    vcs: &'a V,
}

impl<'a, V: Vcs> Release<'a, V> {
    pub fn new(config: &'a ReleaseConfig, vcs: &'a V) -> Self {
        Release { config, vcs }
    }

    /// Run every stage for `version`. Nothing is rolled back on failure:
    /// whatever earlier stages did (manifest write, commit, tag) stays.
    pub fn run(&self, version: &Version) -> Result<ReleaseReport, CliError> {
        logger::progress(&format!("Releasing {version}"));

        let manifest = self.stage(Stage::Manifest, || self.update_manifest(version))?;

        let (previous_tag, range, changelog) =
            self.stage(Stage::Changelog, || self.collect_changelog())?;

        logger::progress("Starting git operations");
        self.stage(Stage::Staging, || {
            self.vcs.stage(Path::new(&self.config.manifest_file))
        })?;
        let committed = self.stage(Stage::Commit, || self.commit(version))?;
        let tag = self.stage(Stage::Tag, || self.tag(version, &changelog))?;

        logger::progress("Pushing to remote");
        self.stage(Stage::Push, || self.push(version))?;

        logger::success(&format!("Release {version} completed successfully!"));
        Ok(ReleaseReport {
            version: version.clone(),
            manifest,
            previous_tag,
            range,
            changelog,
            committed,
            tag,
        })
    }

    fn stage<T>(
        &self,
        stage: Stage,
        step: impl FnOnce() -> Result<T, CliError>,
    ) -> Result<T, CliError> {
        debug!("Running stage: {stage}");
        step().map_err(|source| CliError::StageFailed {
            stage,
            source: Box::new(source),
        })
    }

    fn update_manifest(&self, version: &Version) -> Result<ManifestUpdate, CliError> {
        let mut manifest = Manifest::load(self.config.manifest_path())?;
        let update = manifest.set_version(version)?;

        match &update {
            ManifestUpdate::AlreadySet => logger::info(&format!(
                "Version is already set to {version} in {}",
                self.config.manifest_file
            )),
            ManifestUpdate::Updated { previous } => logger::success(&format!(
                "Updated {} version from {} to {version}",
                self.config.manifest_file,
                previous.as_deref().unwrap_or("unknown")
            )),
        }
        Ok(update)
    }

    fn collect_changelog(
        &self,
    ) -> Result<(Option<String>, CommitRange, Vec<ChangelogEntry>), CliError> {
        logger::progress("Generating changelog");
        let previous_tag = self.vcs.latest_tag()?;
        let range = CommitRange::from_previous_tag(previous_tag.as_deref());

        match &range {
            CommitRange::Since(tag) => {
                logger::info(&format!("Collecting commits from {tag} to HEAD"))
            }
            CommitRange::All => logger::info("First release! Collecting all commits"),
        }

        let entries = self.vcs.changelog(&range)?;
        debug!("Collected {} changelog entries from {range}", entries.len());
        Ok((previous_tag, range, entries))
    }

    fn commit(&self, version: &Version) -> Result<bool, CliError> {
        if !self.vcs.has_staged_changes()? {
            logger::info(&format!(
                "No changes to commit ({} was already up to date)",
                self.config.manifest_file
            ));
            return Ok(false);
        }
        self.vcs.commit(&git::commit_message(version))?;
        Ok(true)
    }

    fn tag(&self, version: &Version, changelog: &[ChangelogEntry]) -> Result<TagOutcome, CliError> {
        if self.vcs.tag_exists(version.as_str())? {
            logger::info(&format!("Tag {version} already exists"));
            return Ok(TagOutcome::AlreadyExists);
        }

        // Removed when dropped, so every early return below cleans it up too.
        let mut message_file = tempfile::Builder::new()
            .prefix(config::TAG_MESSAGE_FILE_PREFIX)
            .suffix(".txt")
            .tempfile()?;
        message_file.write_all(git::tag_message(version, changelog).as_bytes())?;
        message_file.flush()?;

        self.vcs
            .create_annotated_tag(version.as_str(), message_file.path())?;
        message_file.close()?;

        logger::success(&format!("Created annotated tag {version}"));
        Ok(TagOutcome::Created)
    }

    fn push(&self, version: &Version) -> Result<(), CliError> {
        self.vcs.push(&self.config.remote, "HEAD")?;
        self.vcs.push(&self.config.remote, version.as_str())
    }
}

/// The text shown when no version is given: known tags in version order,
/// then the usage line.
pub fn usage(vcs: &impl Vcs) -> String {
    let mut tags = vcs.list_tags().unwrap_or_else(|e| {
        debug!("Could not list tags: {e}");
        Vec::new()
    });
    version::sort_tags(&mut tags);

    let mut text = String::new();
    if !tags.is_empty() {
        text.push_str("Existing tags:\n");
        for tag in &tags {
            text.push_str(&format!(" - {tag}\n"));
        }
        text.push('\n');
    }
    text.push_str(&format!("Usage: {}\n", config::USAGE));
    text
}
