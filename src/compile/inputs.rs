//! Compile inputs handed to the compiler-invocation engine.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::{CompileOrder, Settings};
use crate::toolchain::ResolvedToolchain;

use super::classpath;
use super::position::PositionMapper;

/// Everything the compiler-invocation engine needs for one compile pass.
///
/// `R` is the previous-result handle owned by the incremental-state store.
/// It is carried through untouched.
#[derive(Debug, Clone, Serialize)]
pub struct CompileInputs<R> {
    toolchain: ResolvedToolchain,
    classpath: Vec<PathBuf>,
    sources: Vec<PathBuf>,
    output_dir: PathBuf,
    scalac_options: Vec<String>,
    javac_options: Vec<String>,
    compile_order: CompileOrder,
    #[serde(skip)]
    position_mapper: PositionMapper,
    previous: R,
}

impl<R> CompileInputs<R> {
    /// Replace the diagnostic position mapper.
    pub fn with_position_mapper(mut self, mapper: PositionMapper) -> Self {
        self.position_mapper = mapper;
        self
    }

    pub fn toolchain(&self) -> &ResolvedToolchain {
        &self.toolchain
    }

    /// The classpath in search order.
    pub fn classpath(&self) -> &[PathBuf] {
        &self.classpath
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn scalac_options(&self) -> &[String] {
        &self.scalac_options
    }

    pub fn javac_options(&self) -> &[String] {
        &self.javac_options
    }

    pub fn compile_order(&self) -> CompileOrder {
        self.compile_order
    }

    pub fn position_mapper(&self) -> &PositionMapper {
        &self.position_mapper
    }

    pub fn previous(&self) -> &R {
        &self.previous
    }

    /// Consume the inputs, returning the previous-result handle.
    pub fn into_previous(self) -> R {
        self.previous
    }
}

/// Combine settings, a resolved toolchain, and the previous result into
/// compile inputs.
pub fn build_inputs<R>(
    settings: &Settings,
    toolchain: ResolvedToolchain,
    previous: R,
) -> CompileInputs<R> {
    let classpath = classpath::assemble(
        settings.output_dir(),
        &toolchain.library,
        settings.java_only(),
        settings.classpath(),
    );

    CompileInputs {
        toolchain,
        classpath,
        sources: settings.sources().to_vec(),
        output_dir: settings.output_dir().to_path_buf(),
        scalac_options: settings.scalac_options().to_vec(),
        javac_options: settings.javac_options().to_vec(),
        compile_order: settings.compile_order(),
        position_mapper: PositionMapper::identity(),
        previous,
    }
}
