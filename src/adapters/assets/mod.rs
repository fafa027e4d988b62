//! Layout assets compiled into the binary.

use include_dir::{Dir, include_dir};

use crate::domain::AppError;
use crate::ports::LayoutAssets;

static LAYOUT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/layout");

const LAYOUT_FILE: &str = "layout.toml";
const TEMPLATES_DIR: &str = "templates";

/// `LayoutAssets` served from the embedded `src/assets/layout` tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLayoutAssets;

impl EmbeddedLayoutAssets {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutAssets for EmbeddedLayoutAssets {
    fn default_layout(&self) -> Result<String, AppError> {
        LAYOUT_DIR
            .get_file(LAYOUT_FILE)
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
            .ok_or_else(|| AppError::invalid_layout("embedded layout.toml is missing"))
    }

    fn template(&self, name: &str) -> Option<String> {
        LAYOUT_DIR
            .get_file(format!("{}/{}", TEMPLATES_DIR, name))
            .and_then(|file| file.contents_utf8())
            .map(str::to_string)
    }
}
