use super::{ChangelogEntry, CommitRange, Vcs};
use crate::error::CliError;
use crate::logger;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Separates summary from author in `git log` output.
const FIELD_SEPARATOR: char = '\u{1f}';

/// Version control through the system `git` binary, run inside `workdir`.
#[derive(Debug, Clone)]
pub struct SystemGit {
    workdir: PathBuf,
}

impl SystemGit {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        SystemGit {
            workdir: workdir.into(),
        }
    }

    fn git_cmd<I, S>(&self, args: I) -> (Command, String)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.workdir);

        let mut rendered = String::from("git");
        for arg in args {
            let arg = arg.as_ref();
            rendered.push(' ');
            rendered.push_str(&quote(&arg.to_string_lossy()));
            cmd.arg(arg);
        }
        (cmd, rendered)
    }

    /// Run a read-only command and hand back its raw output.
    fn query<I, S>(&self, args: I) -> Result<(Output, String), CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (mut cmd, rendered) = self.git_cmd(args);
        logger::query(&rendered);
        let output = cmd.output().map_err(|e| {
            CliError::Generic(format!("Failed to execute '{rendered}': {e}"))
        })?;
        Ok((output, rendered))
    }

    /// Run a read-only command that must succeed and return its stdout.
    fn capture<I, S>(&self, args: I) -> Result<String, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (output, rendered) = self.query(args)?;
        if !output.status.success() {
            log::debug!("{}", String::from_utf8_lossy(&output.stderr).trim());
            return Err(CliError::ExternalCommandFailure {
                command: rendered,
                code: output.status.code(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a mutating command with the terminal attached, echoing it first.
    fn run<I, S>(&self, args: I) -> Result<(), CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (mut cmd, rendered) = self.git_cmd(args);
        logger::command(&rendered);
        let status = cmd.status().map_err(|e| {
            CliError::Generic(format!("Failed to execute '{rendered}': {e}"))
        })?;

        if status.success() {
            Ok(())
        } else {
            logger::error(&format!("Command failed: {rendered}"));
            Err(CliError::ExternalCommandFailure {
                command: rendered,
                code: status.code(),
            })
        }
    }
}

impl Vcs for SystemGit {
    fn list_tags(&self) -> Result<Vec<String>, CliError> {
        Ok(non_empty_lines(&self.capture(["tag", "-l"])?))
    }

    fn latest_tag(&self) -> Result<Option<String>, CliError> {
        let (output, _) = self.query(["describe", "--tags", "--abbrev=0"])?;
        if !output.status.success() {
            return Ok(None);
        }
        let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok((!tag.is_empty()).then_some(tag))
    }

    fn changelog(&self, range: &CommitRange) -> Result<Vec<ChangelogEntry>, CliError> {
        let revspec = range.to_revspec();
        let stdout = self.capture([
            "log",
            revspec.as_str(),
            "--pretty=format:%s%x1f%an",
            "--no-merges",
        ])?;

        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| match line.split_once(FIELD_SEPARATOR) {
                Some((summary, author)) => ChangelogEntry::new(summary, author),
                None => ChangelogEntry::new(line, ""),
            })
            .collect())
    }

    fn stage(&self, path: &Path) -> Result<(), CliError> {
        self.run([OsStr::new("add"), OsStr::new("--"), path.as_os_str()])
    }

    fn has_staged_changes(&self) -> Result<bool, CliError> {
        let (output, rendered) = self.query(["diff", "--cached", "--quiet"])?;
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            code => Err(CliError::ExternalCommandFailure {
                command: rendered,
                code,
            }),
        }
    }

    fn commit(&self, message: &str) -> Result<(), CliError> {
        self.run(["commit", "-m", message])
    }

    fn tag_exists(&self, name: &str) -> Result<bool, CliError> {
        let stdout = self.capture(["tag", "-l", name])?;
        Ok(stdout.lines().any(|line| line.trim() == name))
    }

    fn create_annotated_tag(&self, name: &str, message_file: &Path) -> Result<(), CliError> {
        self.run([
            OsStr::new("tag"),
            OsStr::new("-a"),
            OsStr::new(name),
            OsStr::new("-F"),
            message_file.as_os_str(),
        ])
    }

    fn push(&self, remote: &str, refspec: &str) -> Result<(), CliError> {
        self.run(["push", remote, refspec])
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Quote an argument for display when it contains whitespace.
fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}
