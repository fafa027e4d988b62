//! Layout loading from the embedded default or a user-supplied file.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Layout, LayoutDocument};
use crate::ports::LayoutAssets;

/// Load and validate the layout to execute.
///
/// With `override_path` unset the embedded default is used. Asset references
/// in either source resolve against the embedded template directory.
pub fn load_layout<A: LayoutAssets>(
    override_path: Option<&Path>,
    assets: &A,
) -> Result<Layout, AppError> {
    let content = match override_path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AppError::invalid_layout(format!("cannot read {}: {}", path.display(), e))
        })?,
        None => assets.default_layout()?,
    };

    let document = LayoutDocument::parse(&content)?;
    Layout::from_document(document, |name| assets.template(name))
}
