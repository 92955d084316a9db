//! Virtual Paths
//!
//! A `VirtualPath` is a non-empty list of segments whose first segment names
//! a home root (`~`, `~bin`, ...). The string form joins segments with `/`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::FsError;

/// The default home root.
pub const HOME: &str = "~";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VirtualPath {
    segments: Vec<String>,
}

impl VirtualPath {
    /// The `~` path.
    pub fn home() -> Self {
        Self { segments: vec![HOME.to_string()] }
    }

    /// Parse a path string such as `~`, `~bin` or `~/docs/notes`.
    ///
    /// Empty and `.` segments are skipped; `..` is rejected because a
    /// `VirtualPath` is always lexically normalized.
    pub fn parse(path: &str) -> Result<Self, FsError> {
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty() && *s != ".")
            .map(String::from)
            .collect();

        match segments.first() {
            Some(first) if first.starts_with('~') => {}
            _ => return Err(FsError::invalid_path(path, "parse")),
        }
        if segments.iter().any(|s| s == "..") {
            return Err(FsError::invalid_path(path, "parse"));
        }
        Ok(Self { segments })
    }

    /// Name of the home root this path lives under.
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// Segments below the home root.
    pub fn below_root(&self) -> &[String] {
        &self.segments[1..]
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// Append `name` as a single literal segment. No normalization happens,
    /// so `child("..")` names an entry called `..`, which never exists.
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self { segments }
    }

    /// Parent directory, or `None` for a home root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self { segments: self.segments[..self.segments.len() - 1].to_vec() })
    }
}

impl Default for VirtualPath {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for VirtualPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

impl std::str::FromStr for VirtualPath {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VirtualPath {
    type Error = FsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VirtualPath> for String {
    fn from(path: VirtualPath) -> Self {
        path.to_string()
    }
}

// ============================================================================
// Lexical path utilities
// ============================================================================

/// Whether `arg` replaces the base when joined: `/`-absolute paths and
/// tilde paths (`~`, `~/x`, `~bin`) are rooted.
pub fn is_rooted(arg: &str) -> bool {
    arg.starts_with('/') || arg.starts_with('~')
}

/// Join `arg` onto `base` without touching the file system.
pub fn join(base: &str, arg: &str) -> String {
    if is_rooted(arg) || base.is_empty() {
        arg.to_string()
    } else if base.ends_with('/') {
        format!("{}{}", base, arg)
    } else {
        format!("{}/{}", base, arg)
    }
}

/// Collapse redundant separators, `.` and `..` the way POSIX `normpath` does.
///
/// A leading `/` is kept. In a relative path a `..` that has nothing to pop
/// is kept, and an empty result becomes `.`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let initial_slashes = if path.starts_with("//") && !path.starts_with("///") {
        2
    } else if path.starts_with('/') {
        1
    } else {
        0
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part != ".." || (initial_slashes == 0 && parts.is_empty()) || parts.last() == Some(&"..") {
            parts.push(part);
        } else if !parts.is_empty() {
            parts.pop();
        }
    }

    let normalized = format!("{}{}", "/".repeat(initial_slashes), parts.join("/"));
    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}
