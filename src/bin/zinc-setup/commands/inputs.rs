//! `zinc-setup inputs` command

use anyhow::{Context, Result};

use zinc_setup::ops::{load_project, PrepareOptions};
use zinc_setup::GlobalContext;

pub fn execute(opts: PrepareOptions) -> Result<()> {
    let ctx = GlobalContext::new()?;

    let project = load_project(&ctx, &opts)?;
    let inputs = project.compile_inputs();

    tracing::debug!(
        "Prepared {} sources with {} classpath entries",
        inputs.sources().len(),
        inputs.classpath().len()
    );

    let json =
        serde_json::to_string_pretty(&inputs).context("failed to serialize compile inputs")?;
    println!("{}", json);

    Ok(())
}
