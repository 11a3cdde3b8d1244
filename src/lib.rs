//! zinc-setup - Scala toolchain resolution and compile-input assembly
//!
//! This crate prepares everything an incremental Scala compiler needs for a
//! single compile pass: it picks the compiler, library, and extra jars out of
//! a pool of candidates, assembles the classpath, and packages the result as
//! immutable [`CompileInputs`].

pub mod compile;
pub mod core;
pub mod ops;
pub mod toolchain;
pub mod util;

pub use crate::compile::{build_inputs, AnalysisCache, CompileInputs, Position, PositionMapper};
pub use crate::core::{ArtifactDescriptor, CompileOrder, Settings, ToolchainLocation};
pub use toolchain::{ArtifactClassifier, ResolvedToolchain, Resolver, ToolchainDefaults};
pub use util::context::GlobalContext;
