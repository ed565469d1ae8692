use crate::config;
use crate::error::CliError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(config::VERSION_REGEX).expect("version pattern is valid"));

/// A release version of the form `X.Y.Z`, used both as the manifest value
/// and as the tag name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn parse(input: &str) -> Result<Self, CliError> {
        if VERSION_PATTERN.is_match(input) {
            Ok(Version(input.to_string()))
        } else {
            Err(CliError::Format(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Version {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Order two tag names by semantic version. Tags that are not versions
/// sort before all versions, in plain string order.
pub fn compare_tags(a: &str, b: &str) -> Ordering {
    match (
        semver::Version::parse(a.trim_start_matches('v')),
        semver::Version::parse(b.trim_start_matches('v')),
    ) {
        (Ok(a_version), Ok(b_version)) => a_version.cmp(&b_version).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Greater,
        (Err(_), Ok(_)) => Ordering::Less,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

pub fn sort_tags(tags: &mut [String]) {
    tags.sort_by(|a, b| compare_tags(a, b));
}
