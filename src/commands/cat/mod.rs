// src/commands/cat/mod.rs
use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    // The whole argument string is one file name looked up directly in the
    // current directory; it is never path-resolved.
    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let filename = &ctx.args;
        let path = ctx.cwd.child(filename);
        match ctx.fs.read_file(&path).await {
            Ok(content) => CommandResult::success(content),
            Err(_) => CommandResult::error(format!("cat: {}: No such file or directory", filename)),
        }
    }
}
