use std::io;

use thiserror::Error;

/// Library-wide error type for reorg operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The target directory is not the root of a git working tree.
    #[error("{path} is not a git repository root (no .git found). Run 'git init' first.")]
    NotARepository { path: String },

    /// Layout file failed validation.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Layout file declares a schema this build does not understand.
    #[error("Unsupported layout schema version {found} (expected {expected})")]
    UnsupportedLayoutVersion { found: u32, expected: u32 },

    /// A path escapes the repository root.
    #[error("Path '{0}' escapes the repository root")]
    PathTraversal(String),

    /// Relocation source exists but is not a regular file.
    #[error("Cannot relocate '{path}': not a regular file")]
    InvalidSource { path: String },

    /// Relocation destination is already occupied.
    #[error("Cannot move '{path}' to '{destination}': destination exists")]
    RelocationConflict { path: String, destination: String },

    /// Git execution failed.
    #[error("Git error running '{command}': {details}")]
    GitError { command: String, details: String },

    /// Report serialization failed.
    #[error("Failed to serialize {what}: {details}")]
    Serialization { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn invalid_layout<S: Into<String>>(message: S) -> Self {
        AppError::InvalidLayout(message.into())
    }

    pub(crate) fn git(command: impl Into<String>, err: impl std::fmt::Display) -> Self {
        AppError::GitError { command: command.into(), details: err.to_string() }
    }

    /// Whether the failure happened before any change to the working tree.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            AppError::NotARepository { .. }
                | AppError::InvalidLayout(_)
                | AppError::UnsupportedLayoutVersion { .. }
                | AppError::PathTraversal(_)
                | AppError::TomlParseError(_)
        )
    }
}
