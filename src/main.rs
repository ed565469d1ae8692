include!(concat!(env!("OUT_DIR"), "/sentry_dsn.rs"));

use cutrelease::cli::{Command, ReleaseCommand};
use cutrelease::error::CliError;
use env_logger::{Builder, Env};
use sentry::ClientInitGuard;
use structopt::clap::ErrorKind;
use structopt::StructOpt;

fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let mut _guard: Option<ClientInitGuard> = None;

    if SENTRY_DSN != "undefined" {
        _guard = Some(sentry::init((
            SENTRY_DSN,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        )));
    }

    // Anything other than a single version argument gets the usage listing.
    let cmd = match ReleaseCommand::from_args_safe() {
        Ok(cmd) => cmd,
        Err(e) if matches!(e.kind, ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("{}", e.message);
            ReleaseCommand::new(None)
        }
    };

    match cmd.execute() {
        Ok(()) => {}
        Err(CliError::Usage(_)) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
