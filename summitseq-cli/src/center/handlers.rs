use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use summitseq_core::models::{RegionSet, peak::read_peaks};
use summitseq_dataset::{DatasetConfig, center_peaks};
use summitseq_io::BedWrite;

/// Write `.gz` paths compressed, anything else as plain BED.
pub fn write_intervals(region_set: &RegionSet, path: &Path) -> Result<()> {
    let result = match path.extension().is_some_and(|ext| ext == "gz") {
        true => region_set.write_bed_gz(path),
        false => region_set.write_bed(path),
    };
    result.with_context(|| format!("Failed to write {}", path.display()))
}

pub fn run_center(matches: &ArgMatches) -> Result<()> {
    let peaks_path = matches
        .get_one::<String>("peaks")
        .context("--peaks is required")?;
    let output = matches
        .get_one::<String>("output")
        .context("--output is required")?;
    let window_length: u32 = matches
        .get_one::<String>("window-length")
        .context("--window-length is required")?
        .parse()
        .context("--window-length must be a positive even integer")?;

    let config = DatasetConfig {
        window_length,
        ..DatasetConfig::default()
    };
    config.validate()?;

    let peaks =
        read_peaks(peaks_path).with_context(|| format!("Failed to read peaks from {}", peaks_path))?;
    let centered = center_peaks(&peaks, config.half_length(), matches.get_flag("keep-names"))
        .with_context(|| format!("Failed to center peaks from {}", peaks_path))?;

    write_intervals(&centered.positives, Path::new(output))?;
    info!(
        "Wrote {} windows to {} ({} peaks dropped)",
        centered.positives.len(),
        output,
        centered.dropped.len()
    );

    Ok(())
}
