//! Virtual File System Implementation
//!
//! An in-memory tree of home roots. It is built once at startup through the
//! `&mut self` constructors below and is read-only once shared.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::path::{VirtualPath, HOME};
use super::types::*;

const README: &str = "# Welcome to WebPi!\n\nThis is your simulated Raspberry Pi environment.";
const MY_SCRIPT: &str = "print(\"Hello from WebPi!\")\nimport os\nprint(os.getcwd())";
const MYCOMMAND: &str = "echo \"This is a custom command output\"";

/// Default tree content.
const SEED: &[(&str, &str)] = &[
    ("~/README.md", README),
    ("~/my_script.py", MY_SCRIPT),
    ("~bin/mycommand", MYCOMMAND),
];

/// In-memory virtual file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFs {
    /// Children of the sentinel root: the home roots, each a directory.
    roots: BTreeMap<String, FsNode>,
}

impl VirtualFs {
    /// Create a file system holding only an empty `~`.
    pub fn new() -> Self {
        let mut roots = BTreeMap::new();
        roots.insert(HOME.to_string(), FsNode::empty_dir());
        Self { roots }
    }

    /// The default WebPi content.
    pub fn seeded() -> Self {
        let mut fs = Self::new();
        for (path, content) in SEED {
            if let Err(e) = fs.add_file(path, content) {
                log::error!("skipping built-in seed entry {}: {}", path, e);
            }
        }
        fs
    }

    /// Create a directory and any missing parents. Existing directories are
    /// left alone.
    pub fn add_dir(&mut self, path: &str) -> Result<(), FsError> {
        let vpath = VirtualPath::parse(path)?;
        self.ensure_dir(&vpath, path).map(|_| ())
    }

    /// Create or replace a file, creating missing parent directories.
    pub fn add_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let vpath = VirtualPath::parse(path)?;
        let parent = vpath.parent().ok_or_else(|| FsError::is_directory(path, "write"))?;
        let name = vpath.segments().last().cloned().unwrap_or_default();

        let dir = self.ensure_dir(&parent, path)?;
        if let Some(FsNode::Directory(_)) = dir.get(&name) {
            return Err(FsError::is_directory(path, "write"));
        }
        dir.insert(name, FsNode::File(content.to_string()));
        Ok(())
    }

    /// Walk `path` from the sentinel root.
    pub fn lookup(&self, path: &VirtualPath) -> Result<&FsNode, FsError> {
        let mut node = self
            .roots
            .get(path.root())
            .ok_or_else(|| FsError::not_found(path, "lookup"))?;
        for segment in path.below_root() {
            node = match node {
                FsNode::Directory(children) => children
                    .get(segment)
                    .ok_or_else(|| FsError::not_found(path, "lookup"))?,
                FsNode::File(_) => return Err(FsError::not_found(path, "lookup")),
            };
        }
        Ok(node)
    }

    /// Sorted child names of a directory.
    pub fn list_directory(&self, path: &VirtualPath) -> Result<Vec<String>, FsError> {
        match self.lookup(path)? {
            FsNode::Directory(children) => Ok(children.keys().cloned().collect()),
            FsNode::File(_) => Err(FsError::not_directory(path, "scandir")),
        }
    }

    /// Text of a file.
    pub fn read_text(&self, path: &VirtualPath) -> Result<&str, FsError> {
        match self.lookup(path)? {
            FsNode::File(text) => Ok(text),
            FsNode::Directory(_) => Err(FsError::is_directory(path, "read")),
        }
    }

    fn ensure_dir(
        &mut self,
        path: &VirtualPath,
        requested: &str,
    ) -> Result<&mut BTreeMap<String, FsNode>, FsError> {
        let mut node = self
            .roots
            .entry(path.root().to_string())
            .or_insert_with(FsNode::empty_dir);
        for segment in path.below_root() {
            node = match node {
                FsNode::Directory(children) => {
                    children.entry(segment.clone()).or_insert_with(FsNode::empty_dir)
                }
                FsNode::File(_) => return Err(FsError::not_directory(requested, "mkdir")),
            };
        }
        match node {
            FsNode::Directory(children) => Ok(children),
            FsNode::File(_) => Err(FsError::not_directory(requested, "mkdir")),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// FileSystem trait implementation
// ============================================================================

#[async_trait]
impl FileSystem for VirtualFs {
    async fn stat(&self, path: &VirtualPath) -> Result<FsStat, FsError> {
        self.lookup(path).map(FsStat::from)
    }

    async fn readdir(&self, path: &VirtualPath) -> Result<Vec<String>, FsError> {
        self.list_directory(path)
    }

    async fn read_file(&self, path: &VirtualPath) -> Result<String, FsError> {
        self.read_text(path).map(str::to_string)
    }

    fn home_roots(&self) -> Vec<String> {
        self.roots.keys().cloned().collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
