//! Repository-level filesystem operations.
//!
//! This port provides file I/O scoped to the repository root. All paths are
//! `RepoPath`s, which cannot escape the root.

use std::path::Path;

use crate::domain::{AppError, RepoPath};

/// Port for low-level repository filesystem operations.
pub trait RepositoryFilesystem {
    /// The repository root all paths resolve against.
    fn root(&self) -> &Path;

    /// Check whether anything occupies the path, without following symlinks.
    fn exists(&self, path: &RepoPath) -> bool;

    /// Check whether a path is a regular file.
    fn is_file(&self, path: &RepoPath) -> bool;

    /// Create a directory and its parents. Returns `true` if it did not exist before.
    fn create_dir_all(&self, path: &RepoPath) -> Result<bool, AppError>;

    /// Read raw file bytes, or `None` if the file does not exist.
    fn read_bytes(&self, path: &RepoPath) -> Result<Option<Vec<u8>>, AppError>;

    /// Write UTF-8 content, creating parent directories as needed.
    fn write_file(&self, path: &RepoPath, content: &str) -> Result<(), AppError>;
}
