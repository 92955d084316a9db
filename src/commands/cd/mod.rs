// src/commands/cd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{resolve, ResolveError};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        match resolve(ctx.fs.as_ref(), &ctx.cwd, &ctx.args).await {
            Ok(target) => CommandResult::change_dir(target),
            Err(ResolveError::PermissionDenied(arg)) => {
                log::warn!("cd outside of home denied: {} (from {})", arg, ctx.cwd);
                CommandResult::error(format!("cd: permission denied: {}", arg))
            }
            Err(ResolveError::NotFound(arg)) => {
                CommandResult::error(format!("cd: no such file or directory: {}", arg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{make_ctx, make_ctx_with_fs};
    use crate::fs::{VirtualFs, VirtualPath};

    fn with_bin_dir() -> VirtualFs {
        let mut fs = VirtualFs::seeded();
        fs.add_dir("~/bin").unwrap();
        fs
    }

    #[tokio::test]
    async fn test_cd_no_args_goes_home() {
        let result = CdCommand.execute(make_ctx("", "~bin")).await;
        assert_eq!(result.new_cwd, Some(VirtualPath::home()));
        assert_eq!(result.error, "");
    }

    #[tokio::test]
    async fn test_cd_other_home_root() {
        let result = CdCommand.execute(make_ctx("~bin", "~")).await;
        assert_eq!(result.new_cwd.map(|p| p.to_string()), Some("~bin".to_string()));
    }

    #[tokio::test]
    async fn test_cd_dotdot_from_subdir() {
        let result = CdCommand.execute(make_ctx_with_fs("..", "~/bin", with_bin_dir())).await;
        assert_eq!(result.new_cwd, Some(VirtualPath::home()));
    }

    #[tokio::test]
    async fn test_cd_dotdot_from_home_denied() {
        let result = CdCommand.execute(make_ctx("..", "~")).await;
        assert_eq!(result.error, "cd: permission denied: ..");
        assert_eq!(result.output, "");
        assert!(result.new_cwd.is_none());
    }

    #[tokio::test]
    async fn test_cd_missing_directory() {
        let result = CdCommand.execute(make_ctx("nowhere", "~")).await;
        assert_eq!(result.error, "cd: no such file or directory: nowhere");
        assert!(result.new_cwd.is_none());
    }

    #[tokio::test]
    async fn test_cd_into_file_fails() {
        let result = CdCommand.execute(make_ctx("README.md", "~")).await;
        assert_eq!(result.error, "cd: no such file or directory: README.md");
    }

    #[tokio::test]
    async fn test_cd_absolute_path_denied() {
        let result = CdCommand.execute(make_ctx("/tmp", "~")).await;
        assert_eq!(result.error, "cd: permission denied: /tmp");
    }
}
