//! File System Types
//!
//! Core types and traits for the virtual file system.

use async_trait::async_trait;
use std::collections::BTreeMap;
use thiserror::Error;

use super::path::VirtualPath;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("EINVAL: invalid argument, {operation} '{path}'")]
    InvalidPath { path: String, operation: String },
}

impl FsError {
    pub(crate) fn not_found(path: impl ToString, operation: &str) -> Self {
        FsError::NotFound { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn not_directory(path: impl ToString, operation: &str) -> Self {
        FsError::NotDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn is_directory(path: impl ToString, operation: &str) -> Self {
        FsError::IsDirectory { path: path.to_string(), operation: operation.to_string() }
    }

    pub(crate) fn invalid_path(path: impl ToString, operation: &str) -> Self {
        FsError::InvalidPath { path: path.to_string(), operation: operation.to_string() }
    }
}

/// A node in the tree. Directories own their children, so a node can only
/// ever have one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    Directory(BTreeMap<String, FsNode>),
    File(String),
}

impl FsNode {
    pub fn empty_dir() -> Self {
        FsNode::Directory(BTreeMap::new())
    }
}

/// File status information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsStat {
    pub is_file: bool,
    pub is_directory: bool,
}

impl From<&FsNode> for FsStat {
    fn from(node: &FsNode) -> Self {
        match node {
            FsNode::File(_) => FsStat { is_file: true, is_directory: false },
            FsNode::Directory(_) => FsStat { is_file: false, is_directory: true },
        }
    }
}

/// Read-only view of the virtual file system used by commands.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Get file/directory information. Files are not traversable, so a path
    /// that descends through one is not found.
    async fn stat(&self, path: &VirtualPath) -> Result<FsStat, FsError>;

    /// Sorted child names of a directory.
    async fn readdir(&self, path: &VirtualPath) -> Result<Vec<String>, FsError>;

    /// Read a file's text; directories are an error.
    async fn read_file(&self, path: &VirtualPath) -> Result<String, FsError>;

    /// Check if a path exists
    async fn exists(&self, path: &VirtualPath) -> bool {
        self.stat(path).await.is_ok()
    }

    /// Check if a path exists and is a directory
    async fn is_dir(&self, path: &VirtualPath) -> bool {
        matches!(self.stat(path).await, Ok(FsStat { is_directory: true, .. }))
    }

    /// Names of the home roots (`~`, `~bin`, ...), sorted.
    fn home_roots(&self) -> Vec<String>;
}
