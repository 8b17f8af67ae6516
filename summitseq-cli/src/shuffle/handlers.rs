use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use summitseq_core::models::RegionSet;
use summitseq_core::utils::get_chrom_sizes;
use summitseq_dataset::sampler::check_contract;
use summitseq_dataset::{Backend, BedtoolsSampler, NegativeSampler, ShuffleSampler};

use crate::center::handlers::write_intervals;

pub fn run_shuffle(matches: &ArgMatches) -> Result<()> {
    let positives_path = matches
        .get_one::<String>("positives")
        .context("--positives is required")?;
    let sizes_path = matches
        .get_one::<String>("chrom-sizes")
        .context("--chrom-sizes is required")?;
    let output = matches
        .get_one::<String>("output")
        .context("--output is required")?;

    let seed = matches
        .get_one::<String>("seed")
        .map(|s| s.parse::<u64>())
        .transpose()
        .context("--seed must be a non-negative integer")?;
    let max_tries: u32 = matches
        .get_one::<String>("max-tries")
        .context("--max-tries is required")?
        .parse()
        .context("--max-tries must be a positive integer")?;
    let backend: Backend = matches
        .get_one::<String>("backend")
        .context("--backend is required")?
        .parse()?;
    let bedtools_bin = matches
        .get_one::<String>("bedtools-bin")
        .context("--bedtools-bin is required")?;

    let positives = RegionSet::try_from(positives_path.as_str())
        .with_context(|| format!("Failed to load BED file {}", positives_path))?;
    let chrom_sizes = get_chrom_sizes(sizes_path)
        .with_context(|| format!("Failed to load chrom sizes from {}", sizes_path))?;

    let mut sampler: Box<dyn NegativeSampler> = match backend {
        Backend::Native => Box::new(ShuffleSampler::new(seed, max_tries)),
        Backend::Bedtools => Box::new(BedtoolsSampler::new(bedtools_bin, seed, max_tries)),
    };

    let negatives = sampler
        .sample(&positives, &chrom_sizes)
        .context("Negative sampling failed")?;
    check_contract(&positives, &negatives)?;

    write_intervals(&negatives, Path::new(output))?;
    info!("Wrote {} negative regions to {}", negatives.len(), output);

    Ok(())
}
