//! `zinc-setup classpath` command

use anyhow::{Context, Result};

use crate::cli::ClasspathArgs;
use zinc_setup::ops::{load_project, PrepareOptions};
use zinc_setup::GlobalContext;

pub fn execute(args: ClasspathArgs, mut opts: PrepareOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    opts.allow_empty_sources = true;
    let project = load_project(&ctx, &opts)?;
    let inputs = project.compile_inputs();

    if args.lines {
        for entry in inputs.classpath() {
            println!("{}", entry.display());
        }
        return Ok(());
    }

    let joined = std::env::join_paths(inputs.classpath())
        .context("classpath entry contains the path separator")?;
    println!("{}", joined.to_string_lossy());

    Ok(())
}
