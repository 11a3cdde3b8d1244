//! Global context for zinc-setup operations.
//!
//! Provides centralized access to the working directory and config paths.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::config::{global_config_dir, project_toolchain_config_path, BUILD_FILE_NAME};

/// Error locating the project build file.
#[derive(Debug, Error)]
pub enum BuildFileError {
    #[error("could not find `{}` in `{}` or any parent directory", BUILD_FILE_NAME, .dir.display())]
    NotFound { dir: PathBuf },
}

/// Global context for zinc-setup operations.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    cwd: PathBuf,
    config_dir: Option<PathBuf>,
}

impl GlobalContext {
    /// Create a context rooted at the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(GlobalContext::with_cwd(cwd))
    }

    /// Create a context rooted at `cwd`.
    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        GlobalContext {
            cwd: cwd.into(),
            config_dir: global_config_dir(),
        }
    }

    /// Override the global config directory.
    pub fn with_config_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.config_dir = dir;
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Global toolchain config (`~/.zinc/toolchain.toml`), if a home exists.
    pub fn global_toolchain_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|d| d.join("toolchain.toml"))
    }

    /// Project toolchain config for the project rooted at `root`.
    pub fn project_toolchain_path(&self, root: &Path) -> PathBuf {
        project_toolchain_config_path(root)
    }

    /// Directory holding `zinc.toml`, or cwd when there is none.
    pub fn project_root(&self) -> PathBuf {
        self.find_build_file()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Find `zinc.toml` starting from cwd and searching upward.
    pub fn find_build_file(&self) -> Result<PathBuf, BuildFileError> {
        let mut current = self.cwd.clone();
        loop {
            let candidate = current.join(BUILD_FILE_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(BuildFileError::NotFound {
                    dir: self.cwd.clone(),
                });
            }
        }
    }
}
