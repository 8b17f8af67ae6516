use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use summitseq_core::models::RegionSet;
use summitseq_dataset::{Backend, BedtoolsExtractor, GenomeAssembly, SequenceExtractor};
use summitseq_io::FastaWrite;

pub fn run_getfasta(matches: &ArgMatches) -> Result<()> {
    let bed_path = matches
        .get_one::<String>("bed")
        .context("--bed is required")?;
    let genome_path = matches
        .get_one::<String>("genome")
        .context("--genome is required")?;
    let output = matches
        .get_one::<String>("output")
        .context("--output is required")?;
    let backend: Backend = matches
        .get_one::<String>("backend")
        .context("--backend is required")?
        .parse()?;
    let bedtools_bin = matches
        .get_one::<String>("bedtools-bin")
        .context("--bedtools-bin is required")?;

    let intervals = RegionSet::try_from(bed_path.as_str())
        .with_context(|| format!("Failed to load BED file {}", bed_path))?;

    let extractor: Box<dyn SequenceExtractor> = match backend {
        Backend::Native => Box::new(
            GenomeAssembly::try_from(genome_path.as_str())
                .with_context(|| format!("Failed to load genome from {}", genome_path))?,
        ),
        Backend::Bedtools => Box::new(BedtoolsExtractor::new(bedtools_bin, genome_path)),
    };

    let records = extractor
        .extract(&intervals)
        .context("Sequence extraction failed")?;

    let output_path = Path::new(output);
    let written = match output_path.extension().is_some_and(|ext| ext == "gz") {
        true => records.write_fasta_gz(output_path),
        false => records.write_fasta(output_path),
    };
    written.with_context(|| format!("Failed to write {}", output))?;

    info!("Wrote {} sequences to {}", records.len(), output);
    Ok(())
}
