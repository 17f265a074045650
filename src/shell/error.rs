use std::io::{self, Write};
use thiserror::Error;

pub const INVALID_INPUT: &str = "Invalid input";

/// Failure reported by a filesystem adapter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FsError {
    #[error("no such file or directory")]
    NotFound,
    #[error("file already exists")]
    AlreadyExists,
    #[error("{0}")]
    Other(String),
}

impl From<io::Error> for FsError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound,
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists,
            _ => FsError::Other(err.to_string()),
        }
    }
}

/// Failure of a single shell command. Never fatal to the session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Missing argument, or a target rejected before touching the filesystem.
    #[error("{}", INVALID_INPUT)]
    InvalidInput,
    #[error(transparent)]
    Fs(#[from] FsError),
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Fs(err.into())
    }
}

impl CommandError {
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CommandError::InvalidInput
                | CommandError::Fs(FsError::NotFound)
                | CommandError::Fs(FsError::AlreadyExists)
        )
    }

    /// Text shown to the user: input errors collapse to one fixed message,
    /// everything else keeps the OS message.
    pub fn user_message(&self) -> String {
        match self {
            CommandError::Fs(FsError::Other(msg)) => msg.clone(),
            _ => INVALID_INPUT.to_string(),
        }
    }
}

pub fn report(err: &CommandError, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_kinds_map_to_variants() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(FsError::from(not_found), FsError::NotFound);

        let exists = io::Error::from(io::ErrorKind::AlreadyExists);
        assert_eq!(FsError::from(exists), FsError::AlreadyExists);

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        assert_eq!(FsError::from(denied), FsError::Other("permission denied".to_string()));
    }

    #[test]
    fn test_input_errors_share_message() {
        for err in [
            CommandError::InvalidInput,
            CommandError::Fs(FsError::NotFound),
            CommandError::Fs(FsError::AlreadyExists),
        ] {
            assert!(err.is_input_error());
            assert_eq!(err.user_message(), "Invalid input");
        }
    }

    #[test]
    fn test_operation_error_passes_message_through() {
        let err = CommandError::Fs(FsError::Other("Is a directory (os error 21)".to_string()));
        assert!(!err.is_input_error());

        let mut out = Vec::new();
        report(&err, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Is a directory (os error 21)\n");
    }
}
