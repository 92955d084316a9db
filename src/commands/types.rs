// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;

use crate::fs::{FileSystem, VirtualPath};
use crate::script::ScriptEvaluator;

/// 命令执行结果
///
/// At most one of `output`/`error` carries the outcome; both are empty for
/// commands like `clear`. `new_cwd` is set only by a successful `cd`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub output: String,
    pub error: String,
    pub new_cwd: Option<VirtualPath>,
}

impl CommandResult {
    pub fn success(output: String) -> Self {
        Self { output, ..Default::default() }
    }

    pub fn error(error: String) -> Self {
        Self { error, ..Default::default() }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn change_dir(path: VirtualPath) -> Self {
        Self { new_cwd: Some(path), ..Default::default() }
    }
}

/// 命令执行上下文
#[derive(Clone)]
pub struct CommandContext {
    /// Everything after the first space, unparsed.
    pub args: String,
    pub cwd: VirtualPath,
    pub fs: Arc<dyn FileSystem>,
    pub user: String,
    /// Print `date` in UTC instead of local time.
    pub utc: bool,
    pub evaluator: Arc<dyn ScriptEvaluator>,
}

/// 命令 trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_constructors() {
        let r = CommandResult::success("hi".to_string());
        assert_eq!(r.output, "hi");
        assert!(r.error.is_empty());
        assert!(r.new_cwd.is_none());

        let r = CommandResult::error("bad".to_string());
        assert!(r.output.is_empty());
        assert_eq!(r.error, "bad");

        let r = CommandResult::change_dir(VirtualPath::home());
        assert_eq!(r.new_cwd, Some(VirtualPath::home()));
        assert_eq!(CommandResult::empty(), CommandResult::default());
    }
}
