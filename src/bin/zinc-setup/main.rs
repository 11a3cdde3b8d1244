//! zinc-setup CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use zinc_setup::ops::PrepareOptions;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("zinc_setup=debug")
    } else {
        EnvFilter::new("zinc_setup=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let opts = PrepareOptions {
        build_file: cli.build_file,
        bundled_dir: cli.bundled_dir,
        allow_empty_sources: false,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, opts),
        Commands::Classpath(args) => commands::classpath::execute(args, opts),
        Commands::Inputs => commands::inputs::execute(opts),
        Commands::Toolchain(args) => commands::toolchain::execute(args, opts),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
