//! Shared utilities

pub mod config;
pub mod context;
pub mod fs;

pub use config::{BuildFile, ToolchainConfig};
pub use context::GlobalContext;
