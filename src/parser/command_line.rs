/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub name: &'a str,
    /// Everything after the first space, possibly empty. Not re-trimmed.
    pub args: &'a str,
}

/// Split a raw input line into command name and argument string.
///
/// The line is trimmed first; a blank line yields `None`.
pub fn parse_command_line(input: &str) -> Option<CommandLine<'_>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (name, args) = trimmed.split_once(' ').unwrap_or((trimmed, ""));
    Some(CommandLine { name, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_only() {
        assert_eq!(parse_command_line("ls"), Some(CommandLine { name: "ls", args: "" }));
    }

    #[test]
    fn test_splits_on_first_space_only() {
        assert_eq!(
            parse_command_line("echo hello world"),
            Some(CommandLine { name: "echo", args: "hello world" })
        );
    }

    #[test]
    fn test_inner_spacing_is_preserved() {
        assert_eq!(
            parse_command_line("echo  two  spaces"),
            Some(CommandLine { name: "echo", args: " two  spaces" })
        );
    }

    #[test]
    fn test_outer_whitespace_is_trimmed() {
        assert_eq!(
            parse_command_line("  cd docs \n"),
            Some(CommandLine { name: "cd", args: "docs" })
        );
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        assert_eq!(
            parse_command_line("ls\t-l"),
            Some(CommandLine { name: "ls\t-l", args: "" })
        );
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command_line(""), None);
        assert_eq!(parse_command_line("   \t"), None);
    }
}
