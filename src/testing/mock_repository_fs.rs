//! Test double for `RepositoryFilesystem`.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, RepoPath};
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
#[derive(Debug)]
pub struct MockRepositoryFs {
    root: PathBuf,
    pub files: Mutex<BTreeMap<String, Vec<u8>>>,
    pub dirs: Mutex<BTreeSet<String>>,
}

impl MockRepositoryFs {
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/mock-repo"),
            files: Mutex::new(BTreeMap::new()),
            dirs: Mutex::new(BTreeSet::new()),
        }
    }

    /// Seed a file, registering its parent directories.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.insert_parents(path);
        self.files.lock().unwrap().insert(path.to_string(), content.as_bytes().to_vec());
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.insert_parents(path);
        self.dirs.lock().unwrap().insert(path.to_string());
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).map(|bytes| String::from_utf8_lossy(bytes).to_string())
    }

    fn insert_parents(&self, path: &str) {
        let mut dirs = self.dirs.lock().unwrap();
        let mut current = path;
        while let Some((parent, _)) = current.rsplit_once('/') {
            dirs.insert(parent.to_string());
            current = parent;
        }
    }
}

impl Default for MockRepositoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &RepoPath) -> bool {
        self.is_file(path) || self.dirs.lock().unwrap().contains(path.as_str())
    }

    fn is_file(&self, path: &RepoPath) -> bool {
        self.files.lock().unwrap().contains_key(path.as_str())
    }

    fn create_dir_all(&self, path: &RepoPath) -> Result<bool, AppError> {
        if self.is_file(path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "Mock file is in the way",
            )));
        }
        self.insert_parents(path.as_str());
        Ok(self.dirs.lock().unwrap().insert(path.as_str().to_string()))
    }

    fn read_bytes(&self, path: &RepoPath) -> Result<Option<Vec<u8>>, AppError> {
        Ok(self.files.lock().unwrap().get(path.as_str()).cloned())
    }

    fn write_file(&self, path: &RepoPath, content: &str) -> Result<(), AppError> {
        self.insert_parents(path.as_str());
        self.files.lock().unwrap().insert(path.as_str().to_string(), content.as_bytes().to_vec());
        Ok(())
    }
}
