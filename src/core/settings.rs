//! Build settings consumed by the toolchain resolver and input builder.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error building a [`Settings`] value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("no output directory configured")]
    MissingOutputDir,

    #[error("no source files to compile")]
    NoSources,

    #[error(transparent)]
    InvalidCompileOrder(#[from] CompileOrderParseError),
}

/// Order in which Scala and Java sources are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompileOrder {
    /// Scala and Java sources are passed together to the Scala compiler
    #[default]
    Mixed,
    /// Java sources first, then Scala sources
    #[serde(alias = "JavaThenScala")]
    JavaThenScala,
    /// Scala sources first, then Java sources
    #[serde(alias = "ScalaThenJava")]
    ScalaThenJava,
}

impl CompileOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileOrder::Mixed => "mixed",
            CompileOrder::JavaThenScala => "java-then-scala",
            CompileOrder::ScalaThenJava => "scala-then-java",
        }
    }
}

impl fmt::Display for CompileOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompileOrder {
    type Err = CompileOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mixed" => Ok(CompileOrder::Mixed),
            "java-then-scala" | "javathenscala" => Ok(CompileOrder::JavaThenScala),
            "scala-then-java" | "scalathenjava" => Ok(CompileOrder::ScalaThenJava),
            _ => Err(CompileOrderParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid compile order string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid compile order '{0}', valid values: mixed, java-then-scala, scala-then-java")]
pub struct CompileOrderParseError(pub String);

/// Where to find the Scala toolchain artifacts.
///
/// Explicit paths always win over anything found by scanning
/// `candidates`. `home` is only a hint: callers that want it expanded list
/// `home/lib/*.jar` and add the results to `candidates` before resolving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainLocation {
    /// Explicit compiler artifact
    pub compiler: Option<PathBuf>,
    /// Explicit library artifact
    pub library: Option<PathBuf>,
    /// Explicit extra artifacts, in order
    pub extra: Vec<PathBuf>,
    /// Candidate artifacts to classify
    #[serde(alias = "path")]
    pub candidates: Vec<PathBuf>,
    /// Scala home directory hint
    pub home: Option<PathBuf>,
}

impl ToolchainLocation {
    /// Check whether any explicit artifact is configured.
    pub fn has_explicit(&self) -> bool {
        self.compiler.is_some() || self.library.is_some() || !self.extra.is_empty()
    }

    /// Fill explicit fields that are unset here from `other`.
    ///
    /// Fields already set in `self` are kept.
    pub fn fill_from(&mut self, other: &ToolchainLocation) {
        if self.compiler.is_none() {
            self.compiler = other.compiler.clone();
        }
        if self.library.is_none() {
            self.library = other.library.clone();
        }
        if self.extra.is_empty() {
            self.extra = other.extra.clone();
        }
        if self.candidates.is_empty() {
            self.candidates = other.candidates.clone();
        }
        if self.home.is_none() {
            self.home = other.home.clone();
        }
    }
}

/// Immutable settings for one compile invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    sources: Vec<PathBuf>,
    output_dir: PathBuf,
    classpath: Vec<PathBuf>,
    scalac_options: Vec<String>,
    javac_options: Vec<String>,
    java_only: bool,
    toolchain: ToolchainLocation,
    compile_order: CompileOrder,
    verbose: bool,
}

impl Settings {
    /// Start building settings.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Classpath entries supplied by the caller, in order.
    pub fn classpath(&self) -> &[PathBuf] {
        &self.classpath
    }

    pub fn scalac_options(&self) -> &[String] {
        &self.scalac_options
    }

    pub fn javac_options(&self) -> &[String] {
        &self.javac_options
    }

    /// True when only Java sources are compiled and no Scala library is needed.
    pub fn java_only(&self) -> bool {
        self.java_only
    }

    pub fn toolchain(&self) -> &ToolchainLocation {
        &self.toolchain
    }

    pub fn compile_order(&self) -> CompileOrder {
        self.compile_order
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// Builder for [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    sources: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    classpath: Vec<PathBuf>,
    scalac_options: Vec<String>,
    javac_options: Vec<String>,
    java_only: bool,
    toolchain: ToolchainLocation,
    compile_order: CompileOrder,
    verbose: bool,
    allow_empty_sources: bool,
}

impl SettingsBuilder {
    /// Add a source file.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(path.into());
        self
    }

    /// Add multiple source files.
    pub fn sources(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.sources.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Append explicit classpath entries.
    pub fn classpath(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.classpath.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn scalac_options(mut self, opts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.scalac_options.extend(opts.into_iter().map(Into::into));
        self
    }

    pub fn javac_options(mut self, opts: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.javac_options.extend(opts.into_iter().map(Into::into));
        self
    }

    pub fn java_only(mut self, java_only: bool) -> Self {
        self.java_only = java_only;
        self
    }

    pub fn toolchain(mut self, location: ToolchainLocation) -> Self {
        self.toolchain = location;
        self
    }

    pub fn compile_order(mut self, order: CompileOrder) -> Self {
        self.compile_order = order;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Permit settings with no sources (used when only inspecting the toolchain).
    pub fn allow_empty_sources(mut self, allow: bool) -> Self {
        self.allow_empty_sources = allow;
        self
    }

    /// Validate and build the settings.
    pub fn build(self) -> Result<Settings, SettingsError> {
        let output_dir = self.output_dir.ok_or(SettingsError::MissingOutputDir)?;

        if self.sources.is_empty() && !self.allow_empty_sources {
            return Err(SettingsError::NoSources);
        }

        Ok(Settings {
            sources: self.sources,
            output_dir,
            classpath: self.classpath,
            scalac_options: self.scalac_options,
            javac_options: self.javac_options,
            java_only: self.java_only,
            toolchain: self.toolchain,
            compile_order: self.compile_order,
            verbose: self.verbose,
        })
    }
}
