use crate::core::io::filetype::StructureFiletype;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading configuration: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// How the retrieval backend should behave.
///
/// Consumed by backend implementations (which own caching and download) and
/// by the CLI when it describes a retrieval plan; the core resolution logic
/// itself is configuration-free.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct RetrievalConfig {
    /// Directory where fetched source files are kept; `None` leaves the
    /// choice to the backend.
    pub cache_dir: Option<PathBuf>,
    /// Whether entries missing from the local cache may be fetched from the
    /// archive.
    pub fetch_remote: bool,
    /// Preferred source file format when both are available.
    pub preferred_filetype: StructureFiletype,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            fetch_remote: true,
            preferred_filetype: StructureFiletype::Cif,
        }
    }
}

impl RetrievalConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
