//! Script Evaluation
//!
//! `python` hands script text to a `ScriptEvaluator`. The only evaluator in
//! this crate is `MockEvaluator`, which never interprets the text.

pub mod mock;

pub use mock::MockEvaluator;

/// Captured result of "running" a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptOutput {
    pub output: String,
    pub error: String,
}

pub trait ScriptEvaluator: Send + Sync {
    /// Produce captured output for the script `name` with contents `text`.
    fn run(&self, name: &str, text: &str) -> ScriptOutput;
}
