//! Terminal Configuration
//!
//! Loaded from TOML. Every field has a default, so an empty file is a valid
//! configuration and reproduces the stock WebPi terminal.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::fs::{FsError, VirtualFs};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid seed entry: {0}")]
    Seed(#[from] FsError),

    #[error("starting directory does not exist: {0}")]
    MissingCwd(String),
}

/// A file to place in the tree at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    pub path: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Reported by `whoami` and shown in the prompt.
    pub user: String,
    pub hostname: String,
    /// Print `date` in UTC.
    pub utc: bool,
    /// Directories to create. When this or `files` is non-empty the default
    /// seed is replaced.
    pub dirs: Vec<String>,
    pub files: Vec<SeedFile>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: "pi".to_string(),
            hostname: "webpi".to_string(),
            utc: false,
            dirs: Vec::new(),
            files: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build the file system described by this configuration.
    pub fn build_fs(&self) -> Result<VirtualFs, ConfigError> {
        if self.dirs.is_empty() && self.files.is_empty() {
            return Ok(VirtualFs::seeded());
        }
        let mut fs = VirtualFs::new();
        for dir in &self.dirs {
            fs.add_dir(dir)?;
        }
        for file in &self.files {
            fs.add_file(&file.path, &file.content)?;
        }
        Ok(fs)
    }
}
