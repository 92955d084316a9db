use async_trait::async_trait;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct PythonCommand;

const NO_SCRIPT: &str = "Python interactive shell is not simulated here. Please run a script.";

#[async_trait]
impl Command for PythonCommand {
    fn name(&self) -> &'static str {
        "python"
    }

    // The script must be a file directly in the current directory. Its text
    // goes to the evaluator, which never runs it.
    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        let script_name = ctx.args.trim();
        if script_name.is_empty() {
            return CommandResult::success(NO_SCRIPT.to_string());
        }

        let path = ctx.cwd.child(script_name);
        match ctx.fs.read_file(&path).await {
            Ok(text) => {
                log::debug!("handing {} to script evaluator", path);
                let captured = ctx.evaluator.run(script_name, &text);
                CommandResult {
                    output: captured.output,
                    error: captured.error,
                    new_cwd: None,
                }
            }
            Err(_) => CommandResult::error(format!(
                "python: can't open file '{}': No such file or directory",
                script_name
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::test_support::{make_ctx, make_ctx_with_fs};
    use crate::fs::VirtualFs;
    use crate::script::{ScriptEvaluator, ScriptOutput};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_python_no_args() {
        let result = PythonCommand.execute(make_ctx("   ", "~")).await;
        assert_eq!(result.output, NO_SCRIPT);
        assert_eq!(result.error, "");
    }

    #[tokio::test]
    async fn test_python_missing_script() {
        let result = PythonCommand.execute(make_ctx("nope.py", "~")).await;
        assert_eq!(result.output, "");
        assert_eq!(result.error, "python: can't open file 'nope.py': No such file or directory");
    }

    #[tokio::test]
    async fn test_python_directory_target() {
        let mut fs = VirtualFs::seeded();
        fs.add_dir("~/pkg").unwrap();
        let result = PythonCommand.execute(make_ctx_with_fs("pkg", "~", fs)).await;
        assert_eq!(result.error, "python: can't open file 'pkg': No such file or directory");
    }

    #[tokio::test]
    async fn test_python_script_is_not_executed() {
        let result = PythonCommand.execute(make_ctx(" my_script.py ", "~")).await;
        assert_eq!(result.output, "");
        assert!(!result.error.contains("Hello from WebPi!"));
        assert_eq!(
            result.error,
            "python: cannot execute 'my_script.py': script execution is not available in this environment"
        );
    }

    struct Recording;

    impl ScriptEvaluator for Recording {
        fn run(&self, name: &str, text: &str) -> ScriptOutput {
            ScriptOutput { output: format!("{}:{}", name, text.lines().count()), error: String::new() }
        }
    }

    #[tokio::test]
    async fn test_python_uses_injected_evaluator() {
        let mut ctx = make_ctx("my_script.py", "~");
        ctx.evaluator = Arc::new(Recording);
        let result = PythonCommand.execute(ctx).await;
        assert_eq!(result.output, "my_script.py:3");
    }
}
