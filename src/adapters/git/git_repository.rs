use std::fs;
use std::path::{Path, PathBuf};

use git2::{DiffFindOptions, IndexAddOption, Repository};

use crate::domain::{AppError, RepoPath};
use crate::ports::Git;

/// libgit2-backed repository rooted at a working-tree root.
pub struct GitRepositoryAdapter {
    root: PathBuf,
    repo: Repository,
}

impl std::fmt::Debug for GitRepositoryAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitRepositoryAdapter").field("root", &self.root).finish()
    }
}

impl GitRepositoryAdapter {
    /// Open the repository whose working tree is exactly `root`.
    ///
    /// Parent directories are not searched: a subdirectory of a repository,
    /// a bare repository, or a plain directory all fail with `NotARepository`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        let not_a_repository = || AppError::NotARepository { path: root.display().to_string() };

        let repo = Repository::open(&root).map_err(|_| not_a_repository())?;
        let workdir = repo.workdir().ok_or_else(not_a_repository)?;
        if !same_directory(workdir, &root) {
            return Err(not_a_repository());
        }

        Ok(Self { root, repo })
    }

    fn index(&self) -> Result<git2::Index, AppError> {
        self.repo.index().map_err(|e| AppError::git("git2::Repository::index", e))
    }

    fn head_tree(&self) -> Result<Option<git2::Tree<'_>>, AppError> {
        match self.repo.head() {
            Ok(head) => {
                let tree = head
                    .peel_to_tree()
                    .map_err(|e| AppError::git("git2::Reference::peel_to_tree", e))?;
                Ok(Some(tree))
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(None),
            Err(e) => Err(AppError::git("git2::Repository::head", e)),
        }
    }
}

fn same_directory(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl Git for GitRepositoryAdapter {
    fn is_tracked(&self, path: &RepoPath) -> Result<bool, AppError> {
        let index = self.index()?;
        Ok(index.get_path(path.as_path(), 0).is_some())
    }

    fn move_path(&self, from: &RepoPath, to: &RepoPath) -> Result<(), AppError> {
        let mut index = self.index()?;
        let tracked = index.get_path(from.as_path(), 0).is_some();

        fs::rename(from.under(&self.root), to.under(&self.root))?;

        if tracked {
            index.remove_path(from.as_path()).map_err(|e| {
                AppError::git(format!("git2::Index::remove_path {}", from), e)
            })?;
        }
        index
            .add_path(to.as_path())
            .map_err(|e| AppError::git(format!("git2::Index::add_path {}", to), e))?;
        index.write().map_err(|e| AppError::git("git2::Index::write", e))?;

        Ok(())
    }

    fn stage_all(&self) -> Result<usize, AppError> {
        let mut index = self.index()?;
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .map_err(|e| AppError::git("git2::Index::add_all", e))?;
        index.update_all(["*"], None).map_err(|e| AppError::git("git2::Index::update_all", e))?;
        index.write().map_err(|e| AppError::git("git2::Index::write", e))?;

        let head_tree = self.head_tree()?;
        let mut diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)
            .map_err(|e| AppError::git("git2::Repository::diff_tree_to_index", e))?;
        // a move counts once
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))
            .map_err(|e| AppError::git("git2::Diff::find_similar", e))?;

        Ok(diff.deltas().len())
    }

    fn commit_index(&self, message: &str) -> Result<String, AppError> {
        let mut index = self.index()?;
        let tree_id = index.write_tree().map_err(|e| AppError::git("git2::Index::write_tree", e))?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .map_err(|e| AppError::git("git2::Repository::find_tree", e))?;

        let signature =
            self.repo.signature().map_err(|e| AppError::git("git2::Repository::signature", e))?;

        let parents = match self.repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .map_err(|e| AppError::git("git2::Reference::peel_to_commit", e))?;
                vec![commit]
            }
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => vec![],
            Err(e) => return Err(AppError::git("git2::Repository::head", e)),
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)
            .map_err(|e| AppError::git("git2::Repository::commit", e))?;

        Ok(oid.to_string())
    }
}
