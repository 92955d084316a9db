//! Terminal Session
//!
//! Ties together the file system, the dispatcher and the single session
//! cursor. All callers share one cursor.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::{ConfigError, ShellConfig};
use crate::fs::{FileSystem, VirtualPath};
use crate::script::ScriptEvaluator;

use super::dispatcher::{Dispatcher, DispatcherOptions};
use super::session::SessionCursor;
use super::types::{CommandRequest, CommandResponse};

/// Options for creating a Terminal.
#[derive(Default)]
pub struct TerminalOptions {
    pub config: ShellConfig,
    /// File system instance (defaults to the one described by `config`)
    pub fs: Option<Arc<dyn FileSystem>>,
    /// Script evaluator (defaults to `MockEvaluator`)
    pub evaluator: Option<Arc<dyn ScriptEvaluator>>,
    /// Starting directory (defaults to `~`)
    pub cwd: Option<VirtualPath>,
}

pub struct Terminal {
    dispatcher: Dispatcher,
    cursor: Mutex<SessionCursor>,
    /// Non-blank command lines in the order they ran.
    history: Mutex<Vec<String>>,
    user: String,
    hostname: String,
}

impl Terminal {
    /// Create a new terminal. Fails if the configured seed is invalid or the
    /// starting directory does not exist.
    pub async fn new(options: TerminalOptions) -> Result<Self, ConfigError> {
        let TerminalOptions { config, fs, evaluator, cwd } = options;

        let fs: Arc<dyn FileSystem> = match fs {
            Some(fs) => fs,
            None => Arc::new(config.build_fs()?),
        };

        let cwd = cwd.unwrap_or_default();
        if !fs.is_dir(&cwd).await {
            return Err(ConfigError::MissingCwd(cwd.to_string()));
        }

        let dispatcher_options = DispatcherOptions { user: config.user.clone(), utc: config.utc };
        let dispatcher = match evaluator {
            Some(evaluator) => Dispatcher::with_parts(
                fs,
                crate::commands::create_default_registry(),
                evaluator,
                dispatcher_options,
            ),
            None => Dispatcher::new(fs, dispatcher_options),
        };

        log::info!(
            "terminal ready: {}@{} at {} ({} home roots)",
            config.user,
            config.hostname,
            cwd,
            dispatcher.fs().home_roots().len()
        );

        Ok(Self {
            dispatcher,
            cursor: Mutex::new(SessionCursor::new(cwd)),
            history: Mutex::new(Vec::new()),
            user: config.user,
            hostname: config.hostname,
        })
    }

    /// Execute one command line and commit the resulting cursor.
    ///
    /// The cursor lock is held for the whole dispatch so concurrent `cd`s
    /// cannot lose updates.
    pub async fn exec(&self, command: &str) -> CommandResponse {
        let mut cursor = self.cursor.lock().await;
        let line = command.trim();
        if !line.is_empty() {
            self.history.lock().await.push(line.to_string());
        }
        let response = self.dispatcher.dispatch(command, &cursor).await;
        if response.new_path != *cursor.path() {
            log::debug!("cwd {} -> {}", cursor.path(), response.new_path);
            cursor.move_to(response.new_path.clone());
        }
        response
    }

    /// Handle a wire request.
    pub async fn handle(&self, request: &CommandRequest) -> CommandResponse {
        self.exec(&request.command).await
    }

    /// Get current working directory.
    pub async fn cwd(&self) -> VirtualPath {
        self.cursor.lock().await.path().clone()
    }

    /// Commands run so far, oldest first. Navigating them is up to the
    /// front-end.
    pub async fn history(&self) -> Vec<String> {
        self.history.lock().await.clone()
    }

    /// `pi@webpi:~$ `
    pub async fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.hostname, self.cwd().await)
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}

// ============================================================================
// Tests
// ============================================================================
