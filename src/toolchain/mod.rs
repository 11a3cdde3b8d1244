//! Scala toolchain resolution.
//!
//! Resolution priority (each tier fills only what earlier tiers left open):
//! 1. Explicit artifacts from the `ToolchainLocation`
//! 2. Classification of the location's scan candidates
//! 3. Bundled defaults shipped with the distribution

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::ArtifactDescriptor;

mod classify;
mod resolve;

pub use classify::{ArtifactClassifier, ClassifiedArtifacts};
pub use resolve::Resolver;

/// Artifact name of the Scala compiler.
pub const COMPILER_NAME: &str = "scala-compiler";

/// Artifact name of the Scala runtime library.
pub const LIBRARY_NAME: &str = "scala-library";

/// Artifact name of the reflection support jar bundled as an extra.
pub const REFLECT_NAME: &str = "scala-reflect";

/// Auxiliary jars shipped in Scala distributions that must never be put on
/// the compiler's classpath.
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "jansi.jar",
    "jline.jar",
    "scala-partest.jar",
    "scala-swing.jar",
    "scalacheck.jar",
    "scalap.jar",
];

/// The fully resolved `{compiler, library, extra}` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedToolchain {
    pub compiler: PathBuf,
    pub library: PathBuf,
    pub extra: Vec<PathBuf>,
}

impl ResolvedToolchain {
    /// All toolchain jars, compiler first.
    pub fn jars(&self) -> impl Iterator<Item = &Path> {
        [self.compiler.as_path(), self.library.as_path()]
            .into_iter()
            .chain(self.extra.iter().map(PathBuf::as_path))
    }
}

/// Read-only toolchain defaults, built once at startup and handed to a
/// [`Resolver`].
#[derive(Debug, Clone)]
pub struct ToolchainDefaults {
    compiler: ArtifactDescriptor,
    library: ArtifactDescriptor,
    extra: Vec<ArtifactDescriptor>,
    bundled_dir: PathBuf,
    excluded: HashSet<String>,
}

impl ToolchainDefaults {
    /// Standard Scala defaults with bundled jars under `bundled_dir`.
    pub fn new(bundled_dir: impl Into<PathBuf>) -> Self {
        ToolchainDefaults {
            compiler: ArtifactDescriptor::new(COMPILER_NAME, None),
            library: ArtifactDescriptor::new(LIBRARY_NAME, None),
            extra: vec![ArtifactDescriptor::new(REFLECT_NAME, None)],
            bundled_dir: bundled_dir.into(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the compiler descriptor.
    pub fn with_compiler(mut self, compiler: ArtifactDescriptor) -> Self {
        self.compiler = compiler;
        self
    }

    /// Replace the library descriptor.
    pub fn with_library(mut self, library: ArtifactDescriptor) -> Self {
        self.library = library;
        self
    }

    /// Replace the bundled extra artifacts.
    pub fn with_extra(mut self, extra: Vec<ArtifactDescriptor>) -> Self {
        self.extra = extra;
        self
    }

    /// Replace the set of excluded file names.
    pub fn with_excluded(mut self, excluded: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.excluded = excluded.into_iter().map(Into::into).collect();
        self
    }

    pub fn compiler(&self) -> &ArtifactDescriptor {
        &self.compiler
    }

    pub fn library(&self) -> &ArtifactDescriptor {
        &self.library
    }

    pub fn extra(&self) -> &[ArtifactDescriptor] {
        &self.extra
    }

    pub fn bundled_dir(&self) -> &Path {
        &self.bundled_dir
    }

    pub fn excluded(&self) -> &HashSet<String> {
        &self.excluded
    }

    /// Classifier built from the compiler and library descriptors.
    pub fn classifier(&self) -> ArtifactClassifier {
        ArtifactClassifier::new(self.compiler.clone(), self.library.clone())
    }

    /// Bundled compiler jar.
    pub fn bundled_compiler(&self) -> PathBuf {
        self.bundled_dir.join(self.compiler.default_file_name())
    }

    /// Bundled library jar.
    pub fn bundled_library(&self) -> PathBuf {
        self.bundled_dir.join(self.library.default_file_name())
    }

    /// Bundled extra jars, in declaration order.
    pub fn bundled_extra(&self) -> Vec<PathBuf> {
        self.extra
            .iter()
            .map(|d| self.bundled_dir.join(d.default_file_name()))
            .collect()
    }
}

impl Default for ToolchainDefaults {
    fn default() -> Self {
        ToolchainDefaults::new("lib")
    }
}
