//! `zinc-setup resolve` command

use anyhow::{Context, Result};

use crate::cli::ResolveArgs;
use zinc_setup::ops::{load_project, PrepareOptions};
use zinc_setup::GlobalContext;

pub fn execute(args: ResolveArgs, mut opts: PrepareOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    opts.allow_empty_sources = true;
    let project = load_project(&ctx, &opts)?;
    let toolchain = project.resolve_toolchain();

    if args.json {
        let json = serde_json::to_string_pretty(&toolchain)
            .context("failed to serialize resolved toolchain")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Scala toolchain:");
    println!();
    println!("  compiler: {}", toolchain.compiler.display());
    println!("  library:  {}", toolchain.library.display());
    if toolchain.extra.is_empty() {
        println!("  extra:    (none)");
    } else {
        for (i, jar) in toolchain.extra.iter().enumerate() {
            let label = if i == 0 { "extra:" } else { "" };
            println!("  {:<9} {}", label, jar.display());
        }
    }

    let candidates = &project.settings.toolchain().candidates;
    if project.settings.verbose() && !candidates.is_empty() {
        println!();
        println!("Scanned {} candidate jar(s):", candidates.len());
        for jar in candidates {
            println!("  {}", jar.display());
        }
    }

    Ok(())
}
