//! reorg: reorganize a flat research-artifact repository into
//! `paper/`, `data/`, `code/` and `figures/` with one history-preserving commit.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    ReorganizeOptions, check_layout, reorganize, reorganize_at, reorganize_observed,
    reorganize_with,
};
pub use domain::{
    AppError, CommitOutcome, DirectoryStatus, Layout, RelocationOutcome, ReorganizeEvent,
    ReorganizeReport, WriteStatus,
};
