use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct NanoCommand;

#[async_trait]
impl Command for NanoCommand {
    fn name(&self) -> &'static str {
        "nano"
    }

    // Stub: nothing is opened or written.
    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        CommandResult::success(format!(
            "Simulating nano editor for '{}'. (No actual editor here yet)",
            ctx.args
        ))
    }
}
