use crate::error::CliError;
use crate::git::SystemGit;
use crate::logger;
use crate::release::{self, Release, ReleaseConfig};
use crate::version::Version;
use structopt::StructOpt;

pub trait Command {
    fn execute(&self) -> Result<(), CliError>;
}

#[derive(Debug, Default, StructOpt)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct ReleaseCommand {
    #[structopt(name = "VERSION", help = "Version to release, in X.Y.Z format")]
    version: Option<String>,
}

impl ReleaseCommand {
    pub fn new(version: Option<String>) -> Self {
        ReleaseCommand { version }
    }
}

impl Command for ReleaseCommand {
    fn execute(&self) -> Result<(), CliError> {
        let config = ReleaseConfig::from_current_dir()?;
        let git = SystemGit::new(&config.workdir);

        let Some(raw) = self.version.as_deref() else {
            print!("{}", release::usage(&git));
            return Err(CliError::Usage(crate::config::USAGE.to_string()));
        };

        let version: Version = raw.parse()?;
        let report = Release::new(&config, &git).run(&version)?;

        if report.changelog.is_empty() {
            logger::warning("No commits were found for the changelog");
        }
        Ok(())
    }
}
