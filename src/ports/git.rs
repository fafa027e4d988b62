use crate::domain::{AppError, RepoPath};

/// Version-control operations the reorganizer needs from the working tree.
///
/// Implementations are bound to a single repository root; obtaining one is
/// the precondition check.
pub trait Git {
    /// Whether `path` is present in the index.
    fn is_tracked(&self, path: &RepoPath) -> Result<bool, AppError>;

    /// Move a file on disk and register it at `to` in the index.
    ///
    /// Untracked sources are moved and staged at their new location.
    fn move_path(&self, from: &RepoPath, to: &RepoPath) -> Result<(), AppError>;

    /// Stage every addition, modification and deletion in the working tree.
    ///
    /// Returns the number of changes staged relative to HEAD, counting a
    /// rename once.
    fn stage_all(&self) -> Result<usize, AppError>;

    /// Commit the current index onto HEAD. Returns the new commit SHA.
    fn commit_index(&self, message: &str) -> Result<String, AppError>;
}
