use crate::domain::AppError;

/// Source of the built-in layout and the template bodies it references.
pub trait LayoutAssets {
    /// TOML text of the default layout.
    fn default_layout(&self) -> Result<String, AppError>;

    /// Body of a named template asset.
    fn template(&self, name: &str) -> Option<String>;
}
