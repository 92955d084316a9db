use super::{ScriptEvaluator, ScriptOutput};

/// Deterministic stand-in for a script runner. The result depends only on
/// the script name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEvaluator;

impl ScriptEvaluator for MockEvaluator {
    fn run(&self, name: &str, _text: &str) -> ScriptOutput {
        ScriptOutput {
            output: String::new(),
            error: format!(
                "python: cannot execute '{}': script execution is not available in this environment",
                name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_never_evaluates() {
        let out = MockEvaluator.run("evil.py", "import os\nos.system('rm -rf /')\nprint('hi')");
        assert_eq!(out.output, "");
        assert_eq!(
            out.error,
            "python: cannot execute 'evil.py': script execution is not available in this environment"
        );
    }

    #[test]
    fn test_mock_is_deterministic() {
        let a = MockEvaluator.run("a.py", "print(1)");
        let b = MockEvaluator.run("a.py", "print(2)");
        assert_eq!(a, b);
    }
}
