//! Toolchain resolver.

use crate::core::ToolchainLocation;

use super::{ClassifiedArtifacts, ResolvedToolchain, ToolchainDefaults};

/// Resolves a [`ToolchainLocation`] into a [`ResolvedToolchain`].
///
/// Resolution never fails: anything not given explicitly or found by the
/// scan falls back to the bundled defaults.
#[derive(Debug, Clone)]
pub struct Resolver {
    defaults: ToolchainDefaults,
}

impl Resolver {
    pub fn new(defaults: ToolchainDefaults) -> Self {
        Resolver { defaults }
    }

    /// Resolve the compiler, library, and extra artifacts.
    pub fn resolve(&self, location: &ToolchainLocation) -> ResolvedToolchain {
        let scanned = self.scan(location);

        let compiler = location
            .compiler
            .clone()
            .or_else(|| scanned.as_ref().map(|s| s.compiler.clone()))
            .unwrap_or_else(|| self.defaults.bundled_compiler());

        let library = location
            .library
            .clone()
            .or_else(|| scanned.as_ref().map(|s| s.library.clone()))
            .unwrap_or_else(|| self.defaults.bundled_library());

        let mut extra = location.extra.clone();
        match scanned {
            Some(s) => extra.extend(s.extra),
            None => extra.extend(self.defaults.bundled_extra()),
        }

        tracing::debug!(
            "Resolved Scala toolchain: compiler={}, library={}, {} extra",
            compiler.display(),
            library.display(),
            extra.len()
        );

        ResolvedToolchain {
            compiler,
            library,
            extra,
        }
    }

    fn scan(&self, location: &ToolchainLocation) -> Option<ClassifiedArtifacts> {
        if location.candidates.is_empty() {
            return None;
        }

        let classified = self
            .defaults
            .classifier()
            .classify(&location.candidates, self.defaults.excluded());

        if classified.is_none() {
            tracing::debug!(
                "No {} / {} pair among {} candidate artifacts, using bundled defaults",
                self.defaults.compiler(),
                self.defaults.library(),
                location.candidates.len()
            );
        }

        classified
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new(ToolchainDefaults::default())
    }
}
