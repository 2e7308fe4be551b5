// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Every ExtractError is collapsed to the fallback notes before it reaches stdout
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Changelog unavailable at {path}: {source}")]
    ChangelogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No version supplied")]
    EmptyVersion,

    #[error("Regular expression error: {0}")]
    RegexError(String),

    #[error("Section not found for version {0}")]
    SectionNotFound(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changelog_unavailable_message_names_path() {
        let err = ExtractError::ChangelogUnavailable {
            path: PathBuf::from("docs/CHANGELOG.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("docs/CHANGELOG.md"), "Message should name the path: {}", msg);
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_app_error_wraps_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let app: AppError = io.into();
        assert_eq!(app.to_string(), "I/O error: stdout closed");
    }
}
