//! API facade for the application.
//!
//! Glues together context creation, layout loading and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::assets::EmbeddedLayoutAssets;
use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::git::GitRepositoryAdapter;
use crate::app::{AppContext, commands::reorganize, config::load_layout};

pub use crate::domain::{AppError, Layout, ReorganizeEvent, ReorganizeReport};

/// Options for a reorganization run.
#[derive(Debug, Clone, Default)]
pub struct ReorganizeOptions {
    /// Repository root; the current directory when unset.
    pub root: Option<PathBuf>,
    /// Alternative layout file; the embedded default when unset.
    pub layout: Option<PathBuf>,
}

/// Reorganize the repository in the current directory with the default layout.
pub fn reorganize() -> Result<ReorganizeReport, AppError> {
    reorganize_with(ReorganizeOptions::default())
}

/// Reorganize the repository rooted at `root` with the default layout.
pub fn reorganize_at(root: impl Into<PathBuf>) -> Result<ReorganizeReport, AppError> {
    reorganize_with(ReorganizeOptions { root: Some(root.into()), layout: None })
}

/// Reorganize a repository as described by `options`.
///
/// The repository check and layout validation both happen before the
/// working tree is touched.
pub fn reorganize_with(options: ReorganizeOptions) -> Result<ReorganizeReport, AppError> {
    reorganize_observed(options, |_| Ok(()))
}

/// Like [`reorganize_with`], handing each step to `observer` as it completes.
///
/// Events already delivered stay valid when a later step fails. An error
/// returned by the observer aborts the run.
pub fn reorganize_observed<O>(
    options: ReorganizeOptions,
    observer: O,
) -> Result<ReorganizeReport, AppError>
where
    O: FnMut(ReorganizeEvent<'_>) -> Result<(), AppError>,
{
    let root = match options.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let git = GitRepositoryAdapter::open(&root)?;
    let layout = load_layout(options.layout.as_deref(), &EmbeddedLayoutAssets::new())?;

    let ctx = AppContext::new(FilesystemStore::new(root), git);
    reorganize::execute(&ctx, &layout, observer)
}

/// Load and validate a layout without touching any repository.
pub fn check_layout(path: Option<&Path>) -> Result<Layout, AppError> {
    load_layout(path, &EmbeddedLayoutAssets::new())
}
