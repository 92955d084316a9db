//! Command Dispatch
//!
//! Maps an input line to a registered command and runs it against a cursor.
//! The dispatcher never mutates the cursor itself; the caller commits
//! `new_path`.

use std::sync::Arc;

use crate::commands::{create_default_registry, CommandContext, CommandRegistry};
use crate::fs::FileSystem;
use crate::parser::parse_command_line;
use crate::script::{MockEvaluator, ScriptEvaluator};

use super::session::SessionCursor;
use super::types::CommandResponse;

/// Per-dispatcher settings passed to every command.
#[derive(Debug, Clone)]
pub struct DispatcherOptions {
    pub user: String,
    pub utc: bool,
}

impl Default for DispatcherOptions {
    fn default() -> Self {
        Self { user: "pi".to_string(), utc: false }
    }
}

pub struct Dispatcher {
    fs: Arc<dyn FileSystem>,
    registry: CommandRegistry,
    evaluator: Arc<dyn ScriptEvaluator>,
    options: DispatcherOptions,
}

impl Dispatcher {
    /// Dispatcher with the built-in commands and the mock script evaluator.
    pub fn new(fs: Arc<dyn FileSystem>, options: DispatcherOptions) -> Self {
        Self::with_parts(fs, create_default_registry(), Arc::new(MockEvaluator), options)
    }

    pub fn with_parts(
        fs: Arc<dyn FileSystem>,
        registry: CommandRegistry,
        evaluator: Arc<dyn ScriptEvaluator>,
        options: DispatcherOptions,
    ) -> Self {
        Self { fs, registry, evaluator, options }
    }

    pub fn fs(&self) -> &Arc<dyn FileSystem> {
        &self.fs
    }

    /// Run `command` at `cursor`. Every failure is reported in `error`.
    pub async fn dispatch(&self, command: &str, cursor: &SessionCursor) -> CommandResponse {
        let cwd = cursor.path().clone();
        let line = match parse_command_line(command) {
            Some(line) => line,
            None => {
                return CommandResponse { output: String::new(), error: String::new(), new_path: cwd };
            }
        };

        let cmd = match self.registry.get(line.name) {
            Some(cmd) => cmd,
            None => {
                log::debug!("unknown command: {}", line.name);
                return CommandResponse {
                    output: String::new(),
                    error: format!("{}: command not found", line.name),
                    new_path: cwd,
                };
            }
        };

        log::debug!("dispatch {} at {} (args: {:?})", line.name, cwd, line.args);
        let ctx = CommandContext {
            args: line.args.to_string(),
            cwd: cwd.clone(),
            fs: self.fs.clone(),
            user: self.options.user.clone(),
            utc: self.options.utc,
            evaluator: self.evaluator.clone(),
        };
        let result = cmd.execute(ctx).await;

        CommandResponse {
            output: result.output,
            error: result.error,
            new_path: result.new_cwd.unwrap_or(cwd),
        }
    }
}
