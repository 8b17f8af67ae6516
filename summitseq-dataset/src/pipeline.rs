//! End-to-end dataset build.
//!
//! Stages run strictly in order and the first failure aborts the run; files
//! already written are left in place.
//!
//! 1. read and center the peaks, write `<prefix>_positive.bed`
//! 2. sample negatives, write `<prefix>_negative.bed`
//! 3. extract both sets, write `<prefix>_positive.fa` and `<prefix>_negative.fa`
//! 4. write `<prefix>_summary.json`
use std::path::Path;

use log::info;

use summitseq_core::models::{RegionSet, peak::read_peaks};
use summitseq_core::utils::get_chrom_sizes;
use summitseq_io::{BedWrite, FastaWrite};

use crate::centering::center_peaks;
use crate::config::{Backend, DatasetConfig};
use crate::errors::{DatasetError, Result};
use crate::extract::{BedtoolsExtractor, GenomeAssembly, SequenceExtractor};
use crate::sampler::{BedtoolsSampler, NegativeSampler, ShuffleSampler, check_contract};
use crate::summary::RunSummary;

fn write_intervals(region_set: &RegionSet, path: &Path, compress: bool) -> Result<()> {
    match compress {
        true => region_set.write_bed_gz(path)?,
        false => region_set.write_bed(path)?,
    }
    info!("Wrote {} regions to {}", region_set.len(), path.display());
    Ok(())
}

///
/// Build the dataset described by `config` with the given collaborators.
///
/// # Arguments
/// - config: inputs, window length and output prefix
/// - sampler: places the negative regions
/// - extractor: turns intervals into FASTA records
pub fn run_pipeline(
    config: &DatasetConfig,
    sampler: &mut dyn NegativeSampler,
    extractor: &dyn SequenceExtractor,
) -> Result<RunSummary> {
    config.validate()?;
    let paths = config.output_paths();

    info!("Reading peaks from {}", config.input_peaks.display());
    let peaks = read_peaks(&config.input_peaks)?;

    let centered = center_peaks(&peaks, config.half_length(), config.keep_names)?;
    if centered.positives.is_empty() {
        return Err(DatasetError::EmptyPositiveSet(config.input_peaks.clone()));
    }
    let positives = centered.positives;
    info!(
        "Centered {} peaks into {} windows of {}bp ({}bp total)",
        peaks.len(),
        positives.len(),
        config.window_length,
        positives.nucleotides_length()
    );
    write_intervals(&positives, &paths.positive_bed, config.compress_intervals)?;

    let chrom_sizes = get_chrom_sizes(&config.genome_sizes)?;
    let negatives = sampler.sample(&positives, &chrom_sizes)?;
    check_contract(&positives, &negatives)?;
    write_intervals(&negatives, &paths.negative_bed, config.compress_intervals)?;

    let positive_records = extractor.extract(&positives)?;
    positive_records.write_fasta(&paths.positive_fasta)?;
    info!(
        "Wrote {} positive sequences to {}",
        positive_records.len(),
        paths.positive_fasta.display()
    );

    let negative_records = extractor.extract(&negatives)?;
    negative_records.write_fasta(&paths.negative_fasta)?;
    info!(
        "Wrote {} negative sequences to {}",
        negative_records.len(),
        paths.negative_fasta.display()
    );

    let summary = RunSummary {
        window_length: config.window_length,
        backend: config.backend,
        seed: sampler.seed(),
        peaks: peaks.len(),
        positives: positives.len(),
        dropped: centered.dropped.len(),
        negatives: negatives.len(),
        positives_per_chrom: positives.chrom_counts(),
        negatives_per_chrom: negatives.chrom_counts(),
        positive_identifier: positives.identifier(),
        negative_identifier: negatives.identifier(),
        outputs: paths,
    };
    summary.to_file(&summary.outputs.summary)?;

    info!(
        "Dataset complete: {} positive and {} negative sequences",
        summary.positives, summary.negatives
    );

    Ok(summary)
}

///
/// Build the dataset with the collaborators selected by `config.backend`.
pub fn run(config: &DatasetConfig) -> Result<RunSummary> {
    config.validate()?;

    match config.backend {
        Backend::Native => {
            let genome = GenomeAssembly::try_from(config.genome_sequence.as_path())?;
            let mut sampler = ShuffleSampler::new(config.seed, config.max_tries);
            run_pipeline(config, &mut sampler, &genome)
        }
        Backend::Bedtools => {
            let mut sampler =
                BedtoolsSampler::new(&config.bedtools_bin, config.seed, config.max_tries);
            let extractor = BedtoolsExtractor::new(&config.bedtools_bin, &config.genome_sequence);
            run_pipeline(config, &mut sampler, &extractor)
        }
    }
}
