//! Filesystem utilities.
//!
//! These perform the directory listing that the resolver itself never does:
//! turning scan directories and a Scala home into candidate jar files, and
//! source directories into source files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::artifact::ARCHIVE_EXTENSION;
use crate::core::ToolchainLocation;

/// Source file extensions picked up from source directories.
pub const SOURCE_EXTENSIONS: &[&str] = &["scala", "java"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

/// List the jars directly inside `dir`, sorted by path.
pub fn list_jars(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut jars = Vec::new();

    for entry in
        fs::read_dir(dir).with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, &[ARCHIVE_EXTENSION]) {
            jars.push(path);
        }
    }

    jars.sort();
    Ok(jars)
}

/// Jars under `home/lib`, or nothing if that directory does not exist.
pub fn home_artifacts(home: &Path) -> Result<Vec<PathBuf>> {
    let lib = home.join("lib");
    if !lib.is_dir() {
        tracing::warn!("Scala home has no lib directory: {}", home.display());
        return Ok(Vec::new());
    }
    list_jars(&lib)
}

/// Expand candidate entries: directories become the jars they contain,
/// anything else is kept as given.
pub fn expand_candidates(candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut expanded = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.is_dir() {
            expanded.extend(list_jars(candidate)?);
        } else {
            expanded.push(candidate.clone());
        }
    }
    Ok(expanded)
}

/// Produce a location whose candidates are concrete jar files.
///
/// Jars from the home directory come first, followed by the expanded
/// candidate list. Explicit artifacts are left untouched.
pub fn expand_location(location: &ToolchainLocation) -> Result<ToolchainLocation> {
    let mut candidates = match &location.home {
        Some(home) => home_artifacts(home)?,
        None => Vec::new(),
    };
    candidates.extend(expand_candidates(&location.candidates)?);

    tracing::debug!("{} candidate Scala artifacts", candidates.len());

    Ok(ToolchainLocation {
        candidates,
        ..location.clone()
    })
}

/// Expand source entries: directories are walked for `.scala` and `.java`
/// files (sorted per directory), files are kept in place.
pub fn collect_sources(entries: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for entry in entries {
        if !entry.is_dir() {
            sources.push(entry.clone());
            continue;
        }

        let mut found = Vec::new();
        for item in WalkDir::new(entry).follow_links(true) {
            let item =
                item.with_context(|| format!("failed to walk directory: {}", entry.display()))?;
            if item.file_type().is_file() && has_extension(item.path(), SOURCE_EXTENSIONS) {
                found.push(item.into_path());
            }
        }
        found.sort();
        sources.extend(found);
    }

    Ok(sources)
}
