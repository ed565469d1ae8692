use crate::config;
use crate::error::CliError;
use crate::version::Version;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// The project metadata file carrying the release version.
///
/// Keys keep the order they had on disk, so a rewrite only touches the
/// `version` value.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestUpdate {
    AlreadySet,
    Updated { previous: Option<String> },
}

impl Manifest {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(CliError::MissingManifest(path));
        }

        let content = fs::read_to_string(&path)?;
        let document = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                return Err(CliError::ManifestParse {
                    path,
                    reason: "top-level value is not an object".to_string(),
                })
            }
            Err(e) => {
                return Err(CliError::ManifestParse {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        Ok(Manifest { path, document })
    }

    /// The current `version` value, if it is present and a string.
    pub fn version(&self) -> Option<&str> {
        self.document.get("version").and_then(Value::as_str)
    }

    /// Set the version in memory and write the file back, unless it already
    /// holds `version`.
    pub fn set_version(&mut self, version: &Version) -> Result<ManifestUpdate, CliError> {
        if self.version() == Some(version.as_str()) {
            return Ok(ManifestUpdate::AlreadySet);
        }

        let previous = self.version().map(String::from);
        self.document
            .insert("version".to_string(), Value::String(version.to_string()));
        self.save()?;

        Ok(ManifestUpdate::Updated { previous })
    }

    /// Render the document with four-space indentation and a single trailing
    /// newline. Slashes and non-ASCII characters are written as-is.
    pub fn to_pretty_string(&self) -> Result<String, CliError> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(config::MANIFEST_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.document
            .serialize(&mut serializer)
            .map_err(|e| CliError::Generic(format!("Failed to serialize manifest: {e}")))?;

        let mut rendered = String::from_utf8(buffer)
            .map_err(|e| CliError::Generic(format!("Manifest is not valid UTF-8: {e}")))?;
        rendered.push('\n');
        Ok(rendered)
    }

    fn save(&self) -> Result<(), CliError> {
        let content = self.to_pretty_string()?;
        fs::write(&self.path, content).map_err(|source| CliError::WriteFailure {
            path: self.path.clone(),
            source,
        })
    }
}
