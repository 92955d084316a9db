use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    // The front-end clears its own display.
    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::make_ctx;

    #[tokio::test]
    async fn test_clear_outputs_nothing() {
        let result = ClearCommand.execute(make_ctx("", "~")).await;
        assert_eq!(result.output, "");
        assert_eq!(result.error, "");
        assert!(result.new_cwd.is_none());
    }
}
