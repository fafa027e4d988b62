use crate::ports::{Git, RepositoryFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, G: Git> {
    filesystem: F,
    git: G,
}

impl<F: RepositoryFilesystem, G: Git> AppContext<F, G> {
    /// Create a new application context.
    pub fn new(filesystem: F, git: G) -> Self {
        Self { filesystem, git }
    }

    /// Get a reference to the repository filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the git repository.
    pub fn git(&self) -> &G {
        &self.git
    }
}
