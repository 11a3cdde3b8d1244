//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// zinc-setup - Resolve the Scala toolchain and assemble compile inputs
#[derive(Parser)]
#[command(name = "zinc-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to zinc.toml (defaults to searching upward from the current directory)
    #[arg(long, global = true)]
    pub build_file: Option<PathBuf>,

    /// Directory holding the bundled Scala jars
    #[arg(long, global = true, env = "ZINC_SETUP_BUNDLED_DIR", default_value = "lib")]
    pub bundled_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved Scala compiler, library, and extra jars
    Resolve(ResolveArgs),

    /// Print the compilation classpath
    Classpath(ClasspathArgs),

    /// Emit the full compile inputs as JSON
    Inputs,

    /// Toolchain override management
    Toolchain(ToolchainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ClasspathArgs {
    /// Print one entry per line instead of a joined path list
    #[arg(long)]
    pub lines: bool,
}

#[derive(Args)]
pub struct ToolchainArgs {
    #[command(subcommand)]
    pub command: ToolchainCommands,
}

#[derive(Subcommand)]
pub enum ToolchainCommands {
    /// Show the merged toolchain override configuration
    Show,

    /// Set toolchain overrides for this project
    Override(ToolchainOverrideArgs),
}

#[derive(Args)]
pub struct ToolchainOverrideArgs {
    /// Scala compiler jar
    #[arg(long)]
    pub compiler: Option<PathBuf>,

    /// Scala library jar
    #[arg(long)]
    pub library: Option<PathBuf>,

    /// Extra toolchain jars
    #[arg(long)]
    pub extra: Vec<PathBuf>,

    /// Jars or directories to scan for the toolchain
    #[arg(long)]
    pub path: Vec<PathBuf>,

    /// Scala home directory
    #[arg(long)]
    pub home: Option<PathBuf>,

    /// Write to the global config instead of the project config
    #[arg(long)]
    pub global: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
