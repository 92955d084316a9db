use crate::fs::VirtualPath;

/// The session's current directory.
///
/// Only a successful `cd` moves it, and `cd` only yields existing
/// directories, so the cursor never dangles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCursor {
    path: VirtualPath,
}

impl SessionCursor {
    pub fn new(path: VirtualPath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &VirtualPath {
        &self.path
    }

    pub(crate) fn move_to(&mut self, path: VirtualPath) {
        self.path = path;
    }
}
