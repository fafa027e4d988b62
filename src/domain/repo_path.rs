use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::AppError;

/// A path relative to the repository root.
///
/// Guarantees:
/// - Non-empty
/// - Relative, with `/` separators
/// - No `.`/`..` components, so it can never escape the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RepoPath(String);

impl RepoPath {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::invalid_layout("empty path"));
        }
        if trimmed.contains('\\') {
            return Err(AppError::invalid_layout(format!(
                "path '{}' must use '/' separators",
                raw
            )));
        }

        if trimmed.starts_with('/') || Path::new(trimmed).has_root() {
            return Err(AppError::PathTraversal(raw.to_string()));
        }
        for segment in trimmed.split('/') {
            match segment {
                ".." => return Err(AppError::PathTraversal(raw.to_string())),
                "" | "." => {
                    return Err(AppError::invalid_layout(format!(
                        "path '{}' has empty or '.' segments",
                        raw
                    )));
                }
                _ => {}
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Join a child segment path onto this one.
    pub fn join(&self, child: &str) -> Result<Self, AppError> {
        Self::new(&format!("{}/{}", self.0, child))
    }

    /// Absolute location under `root`.
    pub fn under(&self, root: &Path) -> PathBuf {
        root.join(self.as_path())
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RepoPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RepoPath::new(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for RepoPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
