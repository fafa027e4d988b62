//! Outcome of a reorganization run, step by step.

use serde::Serialize;

use super::RepoPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryStatus {
    Created,
    Existing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionedDirectory {
    pub path: RepoPath,
    pub status: DirectoryStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RelocationOutcome {
    /// Source moved; `tracked` is false when the source was not yet under version control.
    Moved { source: RepoPath, destination: RepoPath, tracked: bool },
    /// Source absent at the root.
    Skipped { source: RepoPath },
}

impl RelocationOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, RelocationOutcome::Moved { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    /// No file existed at the path.
    Created,
    /// Existing content already matched.
    Unchanged,
    /// Existing content differed and was replaced.
    Overwritten,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenTemplate {
    pub path: RepoPath,
    pub status: WriteStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommitOutcome {
    Committed { sha: String, changes: usize },
    /// Staged tree matched HEAD; no commit was created.
    NothingToCommit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorganizeReport {
    pub root: String,
    pub directories: Vec<ProvisionedDirectory>,
    pub relocations: Vec<RelocationOutcome>,
    pub templates: Vec<WrittenTemplate>,
    pub guidance: Vec<String>,
    pub commit: CommitOutcome,
}

impl ReorganizeReport {
    pub fn moved_count(&self) -> usize {
        self.relocations.iter().filter(|r| r.is_moved()).count()
    }
}

/// One step of a run, emitted as soon as it completes.
///
/// Events arrive in run order: directories, relocations, templates, guidance,
/// then the commit. A failing step ends the stream early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorganizeEvent<'a> {
    Directory(&'a ProvisionedDirectory),
    Relocation(&'a RelocationOutcome),
    Template(&'a WrittenTemplate),
    Guidance(&'a [String]),
    Commit(&'a CommitOutcome),
}
