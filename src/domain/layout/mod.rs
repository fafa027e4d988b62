//! Reorganization layout: the static tables that drive a run.
//!
//! A layout names the destination directories, the relocation table, the
//! template documents to generate, the guidance shown after generation and the
//! commit message. It is pure data; adding or removing a file never changes
//! control flow.

mod document;

use std::collections::HashSet;

use serde::Serialize;

use super::{AppError, RepoPath};

pub use document::{CommitSection, LayoutDocument, RelocationEntry, TemplateEntry};

/// Layout schema understood by this build.
pub const LAYOUT_SCHEMA_VERSION: u32 = 1;

/// A directory created (if absent) before any relocation runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DestinationDirectory(RepoPath);

impl DestinationDirectory {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        RepoPath::new(raw).map(Self)
    }

    pub fn path(&self) -> &RepoPath {
        &self.0
    }
}

impl std::fmt::Display for DestinationDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/", self.0)
    }
}

/// Move one root-level file into a destination directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationRule {
    pub source: RepoPath,
    pub destination: DestinationDirectory,
}

impl RelocationRule {
    /// Path the source occupies after the move.
    pub fn target(&self) -> Result<RepoPath, AppError> {
        self.destination.path().join(self.source.file_name())
    }
}

/// A file written with fixed content on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDocument {
    pub path: RepoPath,
    pub content: String,
}

/// Validated layout ready to execute.
#[derive(Debug, Clone)]
pub struct Layout {
    directories: Vec<DestinationDirectory>,
    relocations: Vec<RelocationRule>,
    templates: Vec<TemplateDocument>,
    guidance: Vec<String>,
    commit_message: String,
}

impl Layout {
    /// Validate a parsed document, resolving `asset` templates through `resolve_asset`.
    pub fn from_document<F>(document: LayoutDocument, resolve_asset: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if document.schema_version != LAYOUT_SCHEMA_VERSION {
            return Err(AppError::UnsupportedLayoutVersion {
                found: document.schema_version,
                expected: LAYOUT_SCHEMA_VERSION,
            });
        }

        let mut directories = Vec::with_capacity(document.directories.len());
        for raw in &document.directories {
            let dir = DestinationDirectory::new(raw)?;
            if directories.contains(&dir) {
                return Err(AppError::invalid_layout(format!("duplicate directory '{}'", raw)));
            }
            directories.push(dir);
        }

        let mut relocations = Vec::with_capacity(document.relocations.len());
        let mut sources = HashSet::new();
        for entry in &document.relocations {
            let source = RepoPath::new(&entry.source)?;
            let destination = DestinationDirectory::new(&entry.destination)?;
            if !directories.contains(&destination) {
                return Err(AppError::invalid_layout(format!(
                    "relocation of '{}' targets undeclared directory '{}'",
                    source, destination
                )));
            }
            if !sources.insert(source.clone()) {
                return Err(AppError::invalid_layout(format!(
                    "duplicate relocation source '{}'",
                    source
                )));
            }
            let rule = RelocationRule { source, destination };
            rule.target()?;
            relocations.push(rule);
        }

        let mut templates = Vec::with_capacity(document.templates.len());
        let mut template_paths = HashSet::new();
        for entry in document.templates {
            let path = RepoPath::new(&entry.path)?;
            if !template_paths.insert(path.clone()) {
                return Err(AppError::invalid_layout(format!(
                    "duplicate template path '{}'",
                    path
                )));
            }
            let content = match (entry.content, entry.asset) {
                (Some(content), None) => content,
                (None, Some(asset)) => resolve_asset(&asset).ok_or_else(|| {
                    AppError::invalid_layout(format!(
                        "template '{}' references missing asset '{}'",
                        path, asset
                    ))
                })?,
                _ => {
                    return Err(AppError::invalid_layout(format!(
                        "template '{}' must set exactly one of 'content' or 'asset'",
                        path
                    )));
                }
            };
            templates.push(TemplateDocument { path, content });
        }

        let commit_message = document.commit.message.trim().to_string();
        if commit_message.is_empty() {
            return Err(AppError::invalid_layout("commit message is empty"));
        }

        Ok(Self {
            directories,
            relocations,
            templates,
            guidance: document.guidance,
            commit_message,
        })
    }

    pub fn directories(&self) -> &[DestinationDirectory] {
        &self.directories
    }

    pub fn relocations(&self) -> &[RelocationRule] {
        &self.relocations
    }

    pub fn templates(&self) -> &[TemplateDocument] {
        &self.templates
    }

    pub fn guidance(&self) -> &[String] {
        &self.guidance
    }

    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }
}
