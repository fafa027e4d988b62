//! Git adapter backed by libgit2.

mod git_repository;

pub use git_repository::GitRepositoryAdapter;
