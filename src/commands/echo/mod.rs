// src/commands/echo/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    // No flags, quoting or expansion: the argument string is the output.
    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::success(ctx.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;

    #[tokio::test]
    async fn test_echo_verbatim() {
        let result = EchoCommand.execute(make_ctx("hello   $HOME \"quoted\" -n", "~")).await;
        assert_eq!(result.output, "hello   $HOME \"quoted\" -n");
        assert_eq!(result.error, "");
    }

    #[tokio::test]
    async fn test_echo_empty() {
        let result = EchoCommand.execute(make_ctx("", "~")).await;
        assert_eq!(result, CommandResult::empty());
    }
}
