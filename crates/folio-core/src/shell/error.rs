use thiserror::Error;

/// A rejected command. The message is what the shell shows on its error line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("directory not found: {dir}")]
    DirectoryNotFound { dir: String },

    #[error("already in home directory")]
    AlreadyHome,

    #[error("file not found: {file}")]
    FileNotFound { file: String },

    #[error("cat is available inside ~/projects, ~/experience, ~/education")]
    CatUnavailable,

    #[error("usage: {usage}")]
    Usage { usage: &'static str },

    #[error("command not found: {input}")]
    CommandNotFound { input: String },
}

pub(crate) const CD_USAGE: &str = "cd <directory>";
pub(crate) const CAT_USAGE: &str = "cat <file>";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ShellError::DirectoryNotFound {
                dir: "nosuchdir".to_string()
            }
            .to_string(),
            "directory not found: nosuchdir"
        );
        assert_eq!(
            ShellError::AlreadyHome.to_string(),
            "already in home directory"
        );
        assert_eq!(
            ShellError::Usage { usage: CAT_USAGE }.to_string(),
            "usage: cat <file>"
        );
        assert_eq!(
            ShellError::CommandNotFound {
                input: "ls -la".to_string()
            }
            .to_string(),
            "command not found: ls -la"
        );
    }
}
