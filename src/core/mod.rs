//! Core data structures for zinc-setup.
//!
//! - Artifact descriptors (filename matching for toolchain jars)
//! - Build settings and toolchain locations

pub mod artifact;
pub mod settings;

pub use artifact::ArtifactDescriptor;
pub use settings::{CompileOrder, Settings, SettingsBuilder, SettingsError, ToolchainLocation};
