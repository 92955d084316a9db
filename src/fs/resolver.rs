//! Path Resolution
//!
//! Resolves a `cd`-style argument against the current directory. Confinement
//! is checked on the normalized string before the tree is consulted.

use thiserror::Error;

use super::path::{self, VirtualPath, HOME};
use super::types::FileSystem;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The normalized path escaped every home root.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The path is missing or names a file.
    #[error("no such file or directory: {0}")]
    NotFound(String),
}

/// Resolve `argument` against `current` into an existing directory.
///
/// An empty argument means `~`.
pub async fn resolve(
    fs: &dyn FileSystem,
    current: &VirtualPath,
    argument: &str,
) -> Result<VirtualPath, ResolveError> {
    if argument.is_empty() {
        return Ok(VirtualPath::home());
    }

    let candidate = path::normalize(&path::join(&current.to_string(), argument));
    if candidate == HOME {
        return Ok(VirtualPath::home());
    }
    if !candidate.starts_with('~') {
        return Err(ResolveError::PermissionDenied(argument.to_string()));
    }

    let target = VirtualPath::parse(&candidate)
        .map_err(|_| ResolveError::NotFound(argument.to_string()))?;
    if fs.is_dir(&target).await {
        Ok(target)
    } else {
        Err(ResolveError::NotFound(argument.to_string()))
    }
}
