//! TOML shape of a layout file.

use serde::Deserialize;

use crate::domain::AppError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutDocument {
    pub schema_version: u32,
    pub directories: Vec<String>,
    #[serde(default)]
    pub relocations: Vec<RelocationEntry>,
    #[serde(default)]
    pub templates: Vec<TemplateEntry>,
    #[serde(default)]
    pub guidance: Vec<String>,
    pub commit: CommitSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelocationEntry {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateEntry {
    pub path: String,
    pub content: Option<String>,
    pub asset: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommitSection {
    pub message: String,
}

impl LayoutDocument {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(content)?)
    }
}
