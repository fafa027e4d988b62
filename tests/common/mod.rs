//! Shared testing harness for `reorg` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use git2::{IndexAddOption, Repository, Signature};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Sources the built-in layout relocates, with their destinations.
pub const RELOCATIONS: [(&str, &str); 7] = [
    ("arxiv_paper.tex", "paper"),
    ("arxiv_paper.pdf", "paper"),
    ("fig1_main_results.png", "paper"),
    ("fig2_configuration_analysis.png", "paper"),
    ("quantum_campaign_log.csv", "data"),
    ("quantum_campaign_no_entanglement.csv", "data"),
    ("quantum_campaign_b3.csv", "data"),
];

pub const DIRECTORIES: [&str; 4] = ["paper", "data", "code", "figures"];

/// Generated files and the embedded content they must match.
pub const TEMPLATES: [(&str, &str); 5] = [
    (
        "data/data_dictionary.md",
        include_str!("../../src/assets/layout/templates/data_dictionary.md"),
    ),
    ("code/README.md", include_str!("../../src/assets/layout/templates/code_readme.md")),
    ("requirements.txt", include_str!("../../src/assets/layout/templates/requirements.txt")),
    ("CITATION.cff", include_str!("../../src/assets/layout/templates/CITATION.cff")),
    ("figures/README.md", include_str!("../../src/assets/layout/templates/figures_readme.md")),
];

/// Testing harness providing an isolated repository for CLI exercises.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create an isolated directory holding a freshly initialized git repository.
    pub fn new() -> Self {
        let ctx = Self::without_identity();

        let repo = ctx.repo();
        let mut config = repo.config().expect("Failed to open git config");
        config.set_str("user.name", "Test User").expect("Failed to configure git user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to configure git user.email");

        ctx
    }

    /// Create a fresh repository with no committer identity configured.
    pub fn without_identity() -> Self {
        let ctx = Self::without_repository();
        Repository::init(&ctx.work_dir).expect("Failed to git init");
        ctx
    }

    /// Create an isolated directory with no version-control metadata.
    pub fn without_repository() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the repository root used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `reorg` binary at the repository root.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `reorg` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("reorg").expect("Failed to locate reorg binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("GIT_CONFIG_NOSYSTEM", "1");
        cmd
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.work_dir.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(full, content).expect("Failed to write file");
    }

    /// Read a file relative to the repository root.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.work_dir.join(path))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e))
    }

    /// Write every relocatable source, each with distinct content.
    pub fn write_all_sources(&self) {
        for (source, _) in RELOCATIONS {
            self.write(source, &format!("contents of {}\n", source));
        }
    }

    fn repo(&self) -> Repository {
        Repository::open(&self.work_dir).expect("Failed to open test repository")
    }

    /// Stage everything and commit it.
    pub fn commit_all(&self, message: &str) {
        let repo = self.repo();
        let mut index = repo.index().expect("index");
        index.add_all(["*"], IndexAddOption::DEFAULT, None).expect("git add");
        index.write().expect("index write");
        let tree = repo.find_tree(index.write_tree().expect("write tree")).expect("tree");
        let signature = Signature::now("Test User", "test@example.com").expect("signature");
        let parents = match repo.head() {
            Ok(head) => vec![head.peel_to_commit().expect("head commit")],
            Err(_) => vec![],
        };
        let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
        repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)
            .expect("git commit");
    }

    /// Number of commits reachable from HEAD (0 for an unborn branch).
    pub fn commit_count(&self) -> usize {
        let repo = self.repo();
        if repo.head().is_err() {
            return 0;
        }
        let mut walk = repo.revwalk().expect("revwalk");
        walk.push_head().expect("push head");
        walk.count()
    }

    /// Message of the HEAD commit.
    pub fn head_message(&self) -> String {
        let repo = self.repo();
        let commit = repo.head().and_then(|h| h.peel_to_commit()).expect("head commit");
        commit.message().unwrap_or_default().to_string()
    }

    /// Paths touched by the HEAD commit, with renames counted once.
    pub fn head_changes(&self) -> Vec<(git2::Delta, String)> {
        let repo = self.repo();
        let commit = repo.head().and_then(|h| h.peel_to_commit()).expect("head commit");
        let tree = commit.tree().expect("tree");
        let parent_tree = commit.parent(0).ok().map(|p| p.tree().expect("parent tree"));
        let mut diff =
            repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None).expect("diff");
        diff.find_similar(Some(git2::DiffFindOptions::new().renames(true))).expect("renames");
        diff.deltas()
            .map(|d| {
                let path = d.new_file().path().expect("path").to_string_lossy().to_string();
                (d.status(), path)
            })
            .collect()
    }

    /// Whether the working tree has anything not committed.
    pub fn is_clean(&self) -> bool {
        let repo = self.repo();
        let statuses = repo.statuses(None).expect("statuses");
        statuses.is_empty()
    }

    /// Every file under the work directory except `.git/`, with contents.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut files = BTreeMap::new();
        collect_files(&self.work_dir, &self.work_dir, &mut files);
        files
    }

    /// Every directory under the work directory except `.git/`.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        collect_dirs(&self.work_dir, &self.work_dir, &mut dirs);
        dirs.sort();
        dirs
    }

    /// Assert the repository matches the fully reorganized layout for `moved` sources.
    pub fn assert_reorganized(&self, moved: &[&str]) {
        for dir in DIRECTORIES {
            assert!(self.work_dir.join(dir).is_dir(), "{}/ should exist", dir);
        }
        for (source, destination) in RELOCATIONS {
            let target = self.work_dir.join(destination).join(source);
            if moved.contains(&source) {
                assert!(target.is_file(), "{} should be in {}/", source, destination);
            } else {
                assert!(!target.exists(), "{} should not be in {}/", source, destination);
            }
            assert!(!self.work_dir.join(source).exists(), "{} should not remain at root", source);
        }
        for (path, content) in TEMPLATES {
            assert_eq!(self.read(path), content, "{} should match its template", path);
        }
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut BTreeMap<PathBuf, Vec<u8>>) {
    for entry in fs::read_dir(dir).expect("read_dir") {
        let path = entry.expect("entry").path();
        if path.file_name().is_some_and(|n| n == ".git") {
            continue;
        }
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).expect("relative").to_path_buf();
            out.insert(rel, fs::read(&path).expect("read"));
        }
    }
}

fn collect_dirs(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).expect("read_dir") {
        let path = entry.expect("entry").path();
        if path.is_dir() && !path.file_name().is_some_and(|n| n == ".git") {
            out.push(path.strip_prefix(root).expect("relative").to_path_buf());
            collect_dirs(root, &path, out);
        }
    }
}
