//! Artifact classification.
//!
//! Splits a flat list of candidate jars into the Scala compiler, the Scala
//! library, and everything else.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::ArtifactDescriptor;

/// Result of a successful classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedArtifacts {
    pub compiler: PathBuf,
    pub library: PathBuf,
    pub extra: Vec<PathBuf>,
}

/// Classifies candidate artifacts using a compiler and a library descriptor.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    compiler: ArtifactDescriptor,
    library: ArtifactDescriptor,
}

impl ArtifactClassifier {
    pub fn new(compiler: ArtifactDescriptor, library: ArtifactDescriptor) -> Self {
        ArtifactClassifier { compiler, library }
    }

    pub fn compiler(&self) -> &ArtifactDescriptor {
        &self.compiler
    }

    pub fn library(&self) -> &ArtifactDescriptor {
        &self.library
    }

    /// Classify `candidates`, ignoring any whose file name is in `excluded`.
    ///
    /// The compiler pattern is checked before the library pattern, so a file
    /// matching both is only ever a compiler candidate. The first match of
    /// each kind wins; surplus matches are dropped. Returns `None` unless
    /// both a compiler and a library are found.
    pub fn classify(
        &self,
        candidates: &[PathBuf],
        excluded: &HashSet<String>,
    ) -> Option<ClassifiedArtifacts> {
        let mut compilers = Vec::new();
        let mut libraries = Vec::new();
        let mut extra = Vec::new();

        for candidate in candidates {
            let Some(name) = file_name(candidate) else {
                extra.push(candidate.clone());
                continue;
            };

            if excluded.contains(name) {
                continue;
            }

            if self.compiler.matches(name) {
                compilers.push(candidate);
            } else if self.library.matches(name) {
                libraries.push(candidate);
            } else {
                extra.push(candidate.clone());
            }
        }

        let compiler = compilers.first()?;
        let library = libraries.first()?;

        Some(ClassifiedArtifacts {
            compiler: (*compiler).clone(),
            library: (*library).clone(),
            extra,
        })
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}
