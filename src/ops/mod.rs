//! High-level operations

pub mod prepare;

pub use prepare::{load_project, PrepareOptions, Project};
