mod git;
mod layout_assets;
mod repository_filesystem;

pub use git::Git;
pub use layout_assets::LayoutAssets;
pub use repository_filesystem::RepositoryFilesystem;
