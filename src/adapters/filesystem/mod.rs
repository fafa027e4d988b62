//! Filesystem adapter for the `RepositoryFilesystem` port.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, RepoPath};
use crate::ports::RepositoryFilesystem;

/// Filesystem-backed store rooted at a repository directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl RepositoryFilesystem for FilesystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &RepoPath) -> bool {
        // a dangling symlink still occupies the path
        fs::symlink_metadata(path.under(&self.root)).is_ok()
    }

    fn is_file(&self, path: &RepoPath) -> bool {
        path.under(&self.root).is_file()
    }

    fn create_dir_all(&self, path: &RepoPath) -> Result<bool, AppError> {
        let full_path = path.under(&self.root);
        if full_path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(full_path)?;
        Ok(true)
    }

    fn read_bytes(&self, path: &RepoPath) -> Result<Option<Vec<u8>>, AppError> {
        match fs::read(path.under(&self.root)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_file(&self, path: &RepoPath, content: &str) -> Result<(), AppError> {
        let full_path = path.under(&self.root);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(full_path, content)?;
        Ok(())
    }
}
