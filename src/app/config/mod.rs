//! Configuration loaders.
//!
//! Pure layout parsing and validation live in `domain::layout`; this module
//! chooses where the layout text comes from.

mod load_layout;

pub use load_layout::load_layout;
