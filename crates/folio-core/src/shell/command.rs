/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Trimmed, lowercased input
    pub line: String,
    pub kind: CommandKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// `q` / `:q`
    Close,
    /// `pwd`
    Pwd,
    /// `cd [arg]`
    Cd(Option<String>),
    /// `cat [arg]`
    Cat(Option<String>),
    /// Anything else; only the first word matters
    Other { root: String },
}

impl Command {
    /// Parse one line of input. Returns `None` for blank input.
    ///
    /// Input is case-insensitive: it is trimmed, lowercased and split on
    /// whitespace; the words after the first are rejoined with single spaces.
    pub fn parse(input: &str) -> Option<Self> {
        let line = input.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let root = words.next()?.to_string();
        let arg = words.collect::<Vec<_>>().join(" ");
        let arg = (!arg.is_empty()).then_some(arg);

        let kind = match root.as_str() {
            "q" | ":q" => CommandKind::Close,
            "pwd" => CommandKind::Pwd,
            "cd" => CommandKind::Cd(arg),
            "cat" => CommandKind::Cat(arg),
            _ => CommandKind::Other { root },
        };

        Some(Self { line, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(input: &str) -> CommandKind {
        Command::parse(input).unwrap().kind
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("   \t "), None);
    }

    #[test]
    fn test_roots() {
        assert_eq!(kind("q"), CommandKind::Close);
        assert_eq!(kind(":Q"), CommandKind::Close);
        assert_eq!(kind("  PWD "), CommandKind::Pwd);
        assert_eq!(kind("cd"), CommandKind::Cd(None));
        assert_eq!(kind("cat"), CommandKind::Cat(None));
        assert_eq!(
            kind("Projects"),
            CommandKind::Other {
                root: "projects".to_string()
            }
        );
    }

    #[test]
    fn test_arguments_are_normalized() {
        assert_eq!(kind("CD   Projects"), CommandKind::Cd(Some("projects".to_string())));
        assert_eq!(
            kind("cat  Quiz    App "),
            CommandKind::Cat(Some("quiz app".to_string()))
        );
    }

    #[test]
    fn test_line_keeps_inner_spacing() {
        let cmd = Command::parse("  LS   -la ").unwrap();
        assert_eq!(cmd.line, "ls   -la");
    }
}
