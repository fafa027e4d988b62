pub mod error;
pub mod layout;
pub mod report;
mod repo_path;

pub use error::AppError;
pub use layout::{
    DestinationDirectory, LAYOUT_SCHEMA_VERSION, Layout, LayoutDocument, RelocationRule,
    TemplateDocument,
};
pub use repo_path::RepoPath;
pub use report::{
    CommitOutcome, DirectoryStatus, ProvisionedDirectory, RelocationOutcome, ReorganizeEvent,
    ReorganizeReport, WriteStatus, WrittenTemplate,
};
