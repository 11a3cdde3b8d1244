//! Loading a project and preparing its compile inputs.
//!
//! This is the glue the CLI uses: read `zinc.toml`, merge toolchain
//! overrides, list candidate jars and sources, then run the pure resolver
//! and input builder.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::compile::{build_inputs, AnalysisCache, CompileInputs};
use crate::core::Settings;
use crate::toolchain::{ResolvedToolchain, Resolver};
use crate::util::config::{load_toolchain_config, BuildFile};
use crate::util::{fs, GlobalContext};

/// Options for loading a project.
#[derive(Debug, Clone, Default)]
pub struct PrepareOptions {
    /// Build file to load (default: search upward from cwd)
    pub build_file: Option<PathBuf>,

    /// Bundled jar directory used when no config names one
    pub bundled_dir: PathBuf,

    /// Permit a build file without sources
    pub allow_empty_sources: bool,

    /// Report extra detail (candidate jars) in command output
    pub verbose: bool,
}

/// A loaded project, ready for resolution.
#[derive(Debug, Clone)]
pub struct Project {
    pub settings: Settings,
    pub resolver: Resolver,
    pub analysis_cache: AnalysisCache,
}

impl Project {
    /// Resolve the Scala toolchain for this project.
    pub fn resolve_toolchain(&self) -> ResolvedToolchain {
        self.resolver.resolve(self.settings.toolchain())
    }

    /// Resolve the toolchain and build the compile inputs.
    pub fn compile_inputs(&self) -> CompileInputs<AnalysisCache> {
        build_inputs(
            &self.settings,
            self.resolve_toolchain(),
            self.analysis_cache.clone(),
        )
    }
}

/// Load the project described by `opts`.
pub fn load_project(ctx: &GlobalContext, opts: &PrepareOptions) -> Result<Project> {
    let build_path = match &opts.build_file {
        Some(path) if path.is_relative() => ctx.cwd().join(path),
        Some(path) => path.clone(),
        None => ctx.find_build_file()?,
    };
    let root = build_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ctx.cwd().to_path_buf());

    tracing::debug!("Loading build file {}", build_path.display());
    let build_file = BuildFile::load(&build_path)?.rebase(&root);

    let global = ctx.global_toolchain_path().unwrap_or_default();
    let toolchain_config = load_toolchain_config(&global, &ctx.project_toolchain_path(&root));

    let mut location = build_file.scala.clone();
    location.fill_from(&toolchain_config.toolchain);
    let location = fs::expand_location(&location)?;

    let sources = fs::collect_sources(&build_file.build.sources)?;
    let settings = build_file
        .settings_builder(sources, location)?
        .allow_empty_sources(opts.allow_empty_sources)
        .verbose(opts.verbose)
        .build()?;

    let resolver = Resolver::new(toolchain_config.toolchain_defaults(&opts.bundled_dir));

    let analysis_cache = AnalysisCache {
        path: build_file.build.analysis_cache.clone(),
    };

    Ok(Project {
        settings,
        resolver,
        analysis_cache,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    fn context(tmp: &TempDir) -> GlobalContext {
        GlobalContext::with_cwd(tmp.path()).with_config_dir(Some(tmp.path().join("global")))
    }

    #[test]
    fn test_load_project_scans_configured_dir() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("zinc.toml"),
            r#"
[build]
sources = ["src"]
output = "out"
classpath = ["libs/foo.jar"]

[scala]
path = ["scala-lib"]
"#,
        );
        write(&tmp.path().join("src/Main.scala"), "object Main");
        write(&tmp.path().join("scala-lib/scala-compiler-2.11.8.jar"), "");
        write(&tmp.path().join("scala-lib/scala-library-2.11.8.jar"), "");
        write(&tmp.path().join("scala-lib/jline.jar"), "");

        let project = load_project(&context(&tmp), &PrepareOptions::default()).unwrap();
        let inputs = project.compile_inputs();

        let lib = tmp.path().join("scala-lib");
        assert_eq!(
            inputs.toolchain().compiler,
            lib.join("scala-compiler-2.11.8.jar")
        );
        assert!(inputs.toolchain().extra.is_empty());
        assert_eq!(
            inputs.classpath(),
            &[
                tmp.path().join("out"),
                lib.join("scala-library-2.11.8.jar"),
                tmp.path().join("libs/foo.jar"),
            ]
        );
        assert_eq!(inputs.sources(), &[tmp.path().join("src/Main.scala")]);
    }

    #[test]
    fn test_project_override_fills_unset_fields() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("zinc.toml"),
            r#"
[build]
sources = ["A.scala"]
output = "out"
"#,
        );
        write(
            &tmp.path().join(".zinc/toolchain.toml"),
            r#"
[toolchain]
compiler = "/custom/scala-compiler.jar"
"#,
        );

        let opts = PrepareOptions {
            bundled_dir: PathBuf::from("/dist/lib"),
            ..Default::default()
        };
        let project = load_project(&context(&tmp), &opts).unwrap();
        let toolchain = project.resolve_toolchain();

        assert_eq!(toolchain.compiler, PathBuf::from("/custom/scala-compiler.jar"));
        assert_eq!(toolchain.library, PathBuf::from("/dist/lib/scala-library.jar"));
        assert_eq!(
            toolchain.extra,
            vec![PathBuf::from("/dist/lib/scala-reflect.jar")]
        );
    }

    #[test]
    fn test_analysis_cache_is_rebased() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("zinc.toml"),
            r#"
[build]
sources = ["A.scala"]
output = "out"
analysis_cache = "target/analysis.bin"
"#,
        );

        let project = load_project(&context(&tmp), &PrepareOptions::default()).unwrap();
        assert_eq!(
            project.compile_inputs().previous(),
            &AnalysisCache::at(tmp.path().join("target/analysis.bin"))
        );
    }

    #[test]
    fn test_verbose_flag_reaches_settings() {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("zinc.toml"),
            r#"
[build]
sources = ["A.scala"]
output = "out"
"#,
        );

        let quiet = load_project(&context(&tmp), &PrepareOptions::default()).unwrap();
        assert!(!quiet.settings.verbose());

        let opts = PrepareOptions {
            verbose: true,
            ..Default::default()
        };
        let loud = load_project(&context(&tmp), &opts).unwrap();
        assert!(loud.settings.verbose());
    }

    #[test]
    fn test_missing_build_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_project(&context(&tmp), &PrepareOptions::default()).unwrap_err();
        assert!(err.to_string().contains("zinc.toml"));
    }
}
