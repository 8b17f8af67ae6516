use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::info;

use summitseq_dataset::DatasetConfig;

use crate::consts::PKG_NAME;

pub fn run_config(matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .context("--output is required")?;
    let path = Path::new(output);

    if path.exists() && !matches.get_flag("force") {
        bail!("{} already exists; pass --force to overwrite it", output);
    }

    DatasetConfig::default()
        .to_file(path)
        .with_context(|| format!("Failed to write configuration to {}", output))?;

    info!("Wrote example {} configuration to {}", PKG_NAME, output);
    Ok(())
}
