//! `zinc-setup toolchain` command

use anyhow::{bail, Context, Result};

use crate::cli::{ToolchainArgs, ToolchainCommands, ToolchainOverrideArgs};
use zinc_setup::ops::PrepareOptions;
use zinc_setup::util::config::{load_toolchain_config, ToolchainConfig};
use zinc_setup::GlobalContext;

pub fn execute(args: ToolchainArgs, opts: PrepareOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    match args.command {
        ToolchainCommands::Show => show_toolchain(&ctx, &opts),
        ToolchainCommands::Override(override_args) => override_toolchain(&ctx, override_args),
    }
}

fn show_toolchain(ctx: &GlobalContext, opts: &PrepareOptions) -> Result<()> {
    let global = ctx.global_toolchain_path().unwrap_or_default();
    let project = ctx.project_toolchain_path(&ctx.project_root());
    let config = load_toolchain_config(&global, &project);
    let defaults = config.toolchain_defaults(&opts.bundled_dir);

    println!("Toolchain overrides:");
    println!();
    let tc = &config.toolchain;
    match &tc.compiler {
        Some(p) => println!("  compiler: {}", p.display()),
        None => println!("  compiler: not set"),
    }
    match &tc.library {
        Some(p) => println!("  library:  {}", p.display()),
        None => println!("  library:  not set"),
    }
    for jar in &tc.extra {
        println!("  extra:    {}", jar.display());
    }
    for path in &tc.candidates {
        println!("  path:     {}", path.display());
    }
    if let Some(home) = &tc.home {
        println!("  home:     {}", home.display());
    }

    println!();
    println!("Bundled defaults:");
    println!();
    println!("  compiler: {}", defaults.bundled_compiler().display());
    println!("  library:  {}", defaults.bundled_library().display());
    for jar in defaults.bundled_extra() {
        println!("  extra:    {}", jar.display());
    }

    let mut excluded: Vec<_> = defaults.excluded().iter().cloned().collect();
    excluded.sort();
    println!("  excluded: {}", excluded.join(", "));

    Ok(())
}

fn override_toolchain(ctx: &GlobalContext, args: ToolchainOverrideArgs) -> Result<()> {
    let path = if args.global {
        ctx.global_toolchain_path()
            .context("could not determine the home directory for the global config")?
    } else {
        ctx.project_toolchain_path(&ctx.project_root())
    };

    let mut update = ToolchainConfig::default();
    update.toolchain.compiler = args.compiler;
    update.toolchain.library = args.library;
    update.toolchain.extra = args.extra;
    update.toolchain.candidates = args.path;
    update.toolchain.home = args.home;

    if !update.has_overrides() {
        bail!(
            "no overrides given\n\
             help: pass at least one of --compiler, --library, --extra, --path, --home"
        );
    }

    let mut config = ToolchainConfig::load_or_default(&path);
    config.merge(update);
    config.save(&path)?;

    println!("Wrote toolchain overrides to {}", path.display());

    Ok(())
}
