// src/commands/ls/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    // Arguments are ignored; only the current directory is listed.
    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        match ctx.fs.readdir(&ctx.cwd).await {
            Ok(names) => CommandResult::success(names.join("\n")),
            Err(_) => CommandResult::error(format!(
                "ls: cannot access '{}': No such file or directory",
                ctx.cwd
            )),
        }
    }
}
