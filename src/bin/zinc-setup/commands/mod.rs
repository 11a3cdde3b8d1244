//! Command implementations

pub mod classpath;
pub mod completions;
pub mod inputs;
pub mod resolve;
pub mod toolchain;
