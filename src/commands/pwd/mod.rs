// src/commands/pwd/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::success(ctx.cwd.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;

    #[tokio::test]
    async fn test_pwd_home() {
        let result = PwdCommand.execute(make_ctx("", "~")).await;
        assert_eq!(result.output, "~");
    }

    #[tokio::test]
    async fn test_pwd_nested() {
        let result = PwdCommand.execute(make_ctx("", "~/docs/notes")).await;
        assert_eq!(result.output, "~/docs/notes");
    }

    #[tokio::test]
    async fn test_pwd_ignore_args() {
        let result = PwdCommand.execute(make_ctx("ignored args", "~bin")).await;
        assert_eq!(result.output, "~bin");
    }
}
