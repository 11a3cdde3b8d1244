//! Configuration file support for zinc-setup.
//!
//! A project describes its compile in `zinc.toml`:
//!
//! ```toml
//! [build]
//! sources = ["src/main/scala"]
//! output = "target/classes"
//! classpath = ["libs/foo.jar"]
//! scalac_options = ["-deprecation"]
//! compile_order = "mixed"
//!
//! [scala]
//! path = ["/opt/scala/lib"]
//! ```
//!
//! Toolchain overrides are stored separately:
//! - Global: `~/.zinc/toolchain.toml`
//! - Project: `.zinc/toolchain.toml`
//!
//! Project overrides take precedence over global ones, and both only fill
//! what `zinc.toml` leaves unset.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{
    ArtifactDescriptor, CompileOrder, Settings, SettingsBuilder, SettingsError, ToolchainLocation,
};
use crate::toolchain::ToolchainDefaults;

/// Name of the project build file.
pub const BUILD_FILE_NAME: &str = "zinc.toml";

/// Project build file (`zinc.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildFile {
    /// Build settings
    pub build: BuildSection,

    /// Scala toolchain location
    pub scala: ToolchainLocation,
}

/// `[build]` table of the build file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Source files or directories
    pub sources: Vec<PathBuf>,

    /// Class file output directory
    pub output: Option<PathBuf>,

    /// Explicit classpath entries
    pub classpath: Vec<PathBuf>,

    /// Options passed to the Scala compiler
    pub scalac_options: Vec<String>,

    /// Options passed to the Java compiler
    pub javac_options: Vec<String>,

    /// Compile Java sources only (no Scala library on the classpath)
    pub java_only: bool,

    /// Scala/Java compile order
    pub compile_order: Option<String>,

    /// Analysis cache from the previous compile
    pub analysis_cache: Option<PathBuf>,
}

impl BuildFile {
    /// Load a build file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read build file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse build file: {}", path.display()))
    }

    /// Parse the configured compile order, defaulting to mixed.
    pub fn compile_order(&self) -> Result<CompileOrder, SettingsError> {
        match &self.build.compile_order {
            Some(s) => Ok(s.parse()?),
            None => Ok(CompileOrder::default()),
        }
    }

    /// Rebase every relative path onto `root`.
    pub fn rebase(mut self, root: &Path) -> Self {
        let join = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = root.join(&*p);
            }
        };

        self.build.sources.iter_mut().for_each(join);
        self.build.output.iter_mut().for_each(join);
        self.build.classpath.iter_mut().for_each(join);
        self.build.analysis_cache.iter_mut().for_each(join);
        self.scala.compiler.iter_mut().for_each(join);
        self.scala.library.iter_mut().for_each(join);
        self.scala.extra.iter_mut().for_each(join);
        self.scala.candidates.iter_mut().for_each(join);
        self.scala.home.iter_mut().for_each(join);
        self
    }

    /// Start a [`SettingsBuilder`] from the `[build]` table.
    ///
    /// `sources` must already be expanded into individual files and
    /// `location` is the final toolchain location (build file merged with
    /// toolchain overrides).
    pub fn settings_builder(
        &self,
        sources: Vec<PathBuf>,
        location: ToolchainLocation,
    ) -> Result<SettingsBuilder, SettingsError> {
        let mut builder = Settings::builder()
            .sources(sources)
            .classpath(self.build.classpath.iter().cloned())
            .scalac_options(self.build.scalac_options.iter().cloned())
            .javac_options(self.build.javac_options.iter().cloned())
            .java_only(self.build.java_only)
            .toolchain(location)
            .compile_order(self.compile_order()?);

        if let Some(output) = &self.build.output {
            builder = builder.output_dir(output.clone());
        }

        Ok(builder)
    }
}

/// Toolchain override configuration (`toolchain.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Explicit toolchain location overrides
    pub toolchain: ToolchainLocation,

    /// Replacement bundled defaults
    pub defaults: DefaultsSettings,
}

/// `[defaults]` table of the toolchain file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsSettings {
    /// Directory holding the bundled jars
    pub bundled_dir: Option<PathBuf>,

    /// Compiler artifact name (default `scala-compiler`)
    pub compiler: Option<String>,

    /// Library artifact name (default `scala-library`)
    pub library: Option<String>,

    /// Extra artifact names (default `["scala-reflect"]`)
    pub extra: Option<Vec<String>>,

    /// File names never classified (default: jline, jansi, scalap, ...)
    pub excluded: Option<Vec<String>>,
}

impl ToolchainConfig {
    /// Load toolchain configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read toolchain config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse toolchain config: {}", path.display()))
    }

    /// Load toolchain configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to load toolchain config from {}: {:#}",
                    path.display(),
                    e
                );
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Save toolchain configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self)
            .with_context(|| "failed to serialize toolchain config")?;

        std::fs::write(path, contents)
            .with_context(|| format!("failed to write toolchain config: {}", path.display()))?;

        Ok(())
    }

    /// Check if any toolchain override is configured.
    pub fn has_overrides(&self) -> bool {
        self.toolchain.has_explicit()
            || !self.toolchain.candidates.is_empty()
            || self.toolchain.home.is_some()
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: ToolchainConfig) {
        let tc = other.toolchain;
        if tc.compiler.is_some() {
            self.toolchain.compiler = tc.compiler;
        }
        if tc.library.is_some() {
            self.toolchain.library = tc.library;
        }
        if !tc.extra.is_empty() {
            self.toolchain.extra = tc.extra;
        }
        if !tc.candidates.is_empty() {
            self.toolchain.candidates = tc.candidates;
        }
        if tc.home.is_some() {
            self.toolchain.home = tc.home;
        }

        let d = other.defaults;
        if d.bundled_dir.is_some() {
            self.defaults.bundled_dir = d.bundled_dir;
        }
        if d.compiler.is_some() {
            self.defaults.compiler = d.compiler;
        }
        if d.library.is_some() {
            self.defaults.library = d.library;
        }
        if d.extra.is_some() {
            self.defaults.extra = d.extra;
        }
        if d.excluded.is_some() {
            self.defaults.excluded = d.excluded;
        }
    }

    /// Build the toolchain defaults, falling back to `bundled_dir` when the
    /// config does not name one.
    pub fn toolchain_defaults(&self, bundled_dir: &Path) -> ToolchainDefaults {
        let d = &self.defaults;
        let dir = d.bundled_dir.as_deref().unwrap_or(bundled_dir);
        let mut defaults = ToolchainDefaults::new(dir);

        if let Some(name) = &d.compiler {
            defaults = defaults.with_compiler(ArtifactDescriptor::new(name.as_str(), None));
        }
        if let Some(name) = &d.library {
            defaults = defaults.with_library(ArtifactDescriptor::new(name.as_str(), None));
        }
        if let Some(names) = &d.extra {
            defaults = defaults.with_extra(
                names
                    .iter()
                    .map(|n| ArtifactDescriptor::new(n.as_str(), None))
                    .collect(),
            );
        }
        if let Some(excluded) = &d.excluded {
            defaults = defaults.with_excluded(excluded.iter().cloned());
        }

        defaults
    }
}

/// Load merged toolchain configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.zinc/toolchain.toml)
/// 2. Global config (~/.zinc/toolchain.toml)
/// 3. Defaults
pub fn load_toolchain_config(global_path: &Path, project_path: &Path) -> ToolchainConfig {
    let mut config = ToolchainConfig::default();

    if global_path.exists() {
        let global = ToolchainConfig::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = ToolchainConfig::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global zinc-setup config directory (~/.zinc).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".zinc"))
}

/// Get the project toolchain config path (.zinc/toolchain.toml).
pub fn project_toolchain_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".zinc").join("toolchain.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_file_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(BUILD_FILE_NAME);

        std::fs::write(
            &path,
            r#"
[build]
sources = ["src/Main.scala"]
output = "target/classes"
classpath = ["libs/foo.jar"]
scalac_options = ["-deprecation", "-feature"]
compile_order = "java-then-scala"

[scala]
path = ["/opt/scala/lib/scala-compiler.jar"]
home = "/opt/scala"
"#,
        )
        .unwrap();

        let file = BuildFile::load(&path).unwrap();
        assert_eq!(file.build.sources, vec![PathBuf::from("src/Main.scala")]);
        assert_eq!(file.build.output, Some(PathBuf::from("target/classes")));
        assert_eq!(file.build.scalac_options, vec!["-deprecation", "-feature"]);
        assert_eq!(file.compile_order().unwrap(), CompileOrder::JavaThenScala);
        assert_eq!(
            file.scala.candidates,
            vec![PathBuf::from("/opt/scala/lib/scala-compiler.jar")]
        );
        assert_eq!(file.scala.home, Some(PathBuf::from("/opt/scala")));
    }

    #[test]
    fn test_build_file_invalid_compile_order() {
        let mut file = BuildFile::default();
        file.build.compile_order = Some("backwards".to_string());
        let err = file.compile_order().unwrap_err();
        assert!(err.to_string().contains("invalid compile order"));
    }

    #[test]
    fn test_build_file_rebase() {
        let mut file = BuildFile::default();
        file.build.output = Some(PathBuf::from("out"));
        file.build.classpath = vec![PathBuf::from("libs/a.jar"), PathBuf::from("/abs/b.jar")];
        file.scala.library = Some(PathBuf::from("lib/scala-library.jar"));

        let file = file.rebase(Path::new("/proj"));

        assert_eq!(file.build.output, Some(PathBuf::from("/proj/out")));
        assert_eq!(
            file.build.classpath,
            vec![PathBuf::from("/proj/libs/a.jar"), PathBuf::from("/abs/b.jar")]
        );
        assert_eq!(
            file.scala.library,
            Some(PathBuf::from("/proj/lib/scala-library.jar"))
        );
    }

    #[test]
    fn test_build_file_settings_require_output() {
        let file = BuildFile::default();
        let err = file
            .settings_builder(vec![PathBuf::from("A.scala")], ToolchainLocation::default())
            .unwrap()
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("no output directory"));
    }

    #[test]
    fn test_toolchain_config_default() {
        let config = ToolchainConfig::default();
        assert!(config.toolchain.compiler.is_none());
        assert!(config.toolchain.extra.is_empty());
        assert!(!config.has_overrides());
    }

    #[test]
    fn test_toolchain_config_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".zinc").join("toolchain.toml");

        let mut config = ToolchainConfig::default();
        config.toolchain.compiler = Some(PathBuf::from("/opt/scala/lib/scala-compiler.jar"));
        config.defaults.excluded = Some(vec!["jline.jar".to_string()]);

        config.save(&config_path).unwrap();

        let loaded = ToolchainConfig::load(&config_path).unwrap();
        assert_eq!(
            loaded.toolchain.compiler,
            Some(PathBuf::from("/opt/scala/lib/scala-compiler.jar"))
        );
        assert_eq!(loaded.defaults.excluded, Some(vec!["jline.jar".to_string()]));
        assert!(loaded.has_overrides());
    }

    #[test]
    fn test_load_toolchain_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            r#"
[toolchain]
compiler = "/global/scala-compiler.jar"
library = "/global/scala-library.jar"

[defaults]
bundled_dir = "/global/lib"
"#,
        )
        .unwrap();

        std::fs::write(
            &project_path,
            r#"
[toolchain]
compiler = "/project/scala-compiler.jar"
"#,
        )
        .unwrap();

        let config = load_toolchain_config(&global_path, &project_path);

        assert_eq!(
            config.toolchain.compiler,
            Some(PathBuf::from("/project/scala-compiler.jar"))
        );
        assert_eq!(
            config.toolchain.library,
            Some(PathBuf::from("/global/scala-library.jar"))
        );
        assert_eq!(config.defaults.bundled_dir, Some(PathBuf::from("/global/lib")));
    }

    #[test]
    fn test_malformed_toolchain_config_falls_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("toolchain.toml");
        std::fs::write(&path, "[toolchain\ncompiler = ").unwrap();

        let config = ToolchainConfig::load_or_default(&path);
        assert!(!config.has_overrides());
    }

    #[test]
    fn test_toolchain_defaults_from_config() {
        let mut config = ToolchainConfig::default();
        config.defaults.library = Some("scala3-library_3".to_string());
        config.defaults.extra = Some(vec![]);

        let defaults = config.toolchain_defaults(Path::new("/dist/lib"));

        assert_eq!(
            defaults.bundled_library(),
            PathBuf::from("/dist/lib/scala3-library_3.jar")
        );
        assert_eq!(
            defaults.bundled_compiler(),
            PathBuf::from("/dist/lib/scala-compiler.jar")
        );
        assert!(defaults.bundled_extra().is_empty());
    }
}
