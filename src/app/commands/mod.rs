pub mod output;
pub mod reorganize;
