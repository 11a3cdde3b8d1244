//! Compile-input assembly.
//!
//! Turns settings and a resolved toolchain into the immutable
//! [`CompileInputs`] consumed by the compiler-invocation engine.

pub mod classpath;
pub mod inputs;
pub mod position;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use classpath::assemble;
pub use inputs::{build_inputs, CompileInputs};
pub use position::{Position, PositionMapper};

/// Handle to the analysis left behind by a previous compile.
///
/// Only the incremental-state store reads or writes the cache; this crate
/// just forwards the handle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisCache {
    pub path: Option<PathBuf>,
}

impl AnalysisCache {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        AnalysisCache {
            path: Some(path.into()),
        }
    }
}
