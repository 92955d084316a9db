use serde::{Deserialize, Serialize};

use crate::fs::VirtualPath;

/// A single line typed at the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub command: String,
}

impl CommandRequest {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

/// Result of a dispatched command.
///
/// `new_path` is the cursor after the command; it differs from the cursor
/// before only after a successful `cd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub output: String,
    pub error: String,
    pub new_path: VirtualPath,
}

impl CommandResponse {
    pub fn is_error(&self) -> bool {
        !self.error.is_empty()
    }
}
