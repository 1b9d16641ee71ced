use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("version is required")]
    VersionRequired,
    #[error("invalid version: {0}")]
    InvalidVersion(String),
    #[error("unknown arguments: {}", .0.join(" "))]
    UnknownArguments(Vec<String>),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("help displayed")]
    Helped,

    #[error("directory {} already exists", .0.display())]
    AlreadyExists(PathBuf),
    #[error("go{0} is not installed")]
    NotInstalled(String),

    #[error("configuration error: {0}")]
    Config(String),
    #[error("download: failed to create temporary file: {0}")]
    FailedToCreateTempFile(#[source] io::Error),
    #[error("download: {0}")]
    HTTPFailed(#[source] reqwest::Error),
    #[error("download: stream ended after {received} of {expected} bytes")]
    UnexpectedEof { received: u64, expected: u64 },
    #[error("download: failed to write archive: {0}")]
    FailedToWriteFile(#[source] io::Error),
    #[error("unzip: {0}")]
    ExtractionFailed(#[source] zip::result::ZipError),
    #[error("unzip: illegal file path: {0}")]
    IllegalPath(String),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run {}: {source}", .path.display())]
    FailedToSpawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("process exited with code {0}")]
    ChildExit(i32),
}

impl CommandError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CommandError::Io {
            path: path.into(),
            source,
        }
    }

    /// Conditions that are part of normal usage. Their message is user-facing and
    /// they never carry an underlying cause worth showing.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            CommandError::Parse(_)
                | CommandError::UnknownCommand(_)
                | CommandError::Helped
                | CommandError::AlreadyExists(_)
                | CommandError::NotInstalled(_)
                | CommandError::UnexpectedEof { .. }
                | CommandError::IllegalPath(_)
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::ChildExit(code) => *code,
            CommandError::Parse(_)
            | CommandError::UnknownCommand(_)
            | CommandError::Helped
            | CommandError::AlreadyExists(_)
            | CommandError::NotInstalled(_)
            | CommandError::UnexpectedEof { .. }
            | CommandError::IllegalPath(_) => 1,
            CommandError::Config(_)
            | CommandError::FailedToCreateTempFile(_)
            | CommandError::HTTPFailed(_)
            | CommandError::FailedToWriteFile(_)
            | CommandError::ExtractionFailed(_)
            | CommandError::Io { .. }
            | CommandError::FailedToSpawn { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_exit_code_is_proxied() {
        assert_eq!(CommandError::ChildExit(3).exit_code(), 3);
        assert!(!CommandError::ChildExit(3).is_expected());
    }

    #[test]
    fn expected_conditions_exit_with_one() {
        let errors = [
            CommandError::UnknownCommand("instal".to_string()),
            CommandError::Helped,
            CommandError::from(ParseError::VersionRequired),
            CommandError::from(ParseError::InvalidVersion("1.x".to_string())),
            CommandError::from(ParseError::UnknownArguments(vec!["--force".to_string()])),
            CommandError::AlreadyExists(PathBuf::from("/tmp/1.21.0")),
            CommandError::NotInstalled("1.21.0".to_string()),
            CommandError::UnexpectedEof {
                received: 1,
                expected: 2,
            },
            CommandError::IllegalPath("../evil".to_string()),
        ];

        for err in errors {
            assert!(err.is_expected(), "{err} should be expected");
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn unexpected_errors_exit_with_one() {
        let err = CommandError::io("/nowhere", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!err.is_expected());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn messages_carry_the_offending_token() {
        let err = CommandError::from(ParseError::InvalidVersion("go1.x".to_string()));
        assert_eq!(err.to_string(), "invalid version: go1.x");

        let err = ParseError::UnknownArguments(vec!["--a".to_string(), "--b".to_string()]);
        assert_eq!(err.to_string(), "unknown arguments: --a --b");
    }
}
