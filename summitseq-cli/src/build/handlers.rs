use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use summitseq_core::utils::remove_all_extensions;
use summitseq_dataset::{Backend, DatasetConfig, run};

fn parse_flag<T: std::str::FromStr>(matches: &ArgMatches, id: &str) -> Result<Option<T>> {
    matches
        .get_one::<String>(id)
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| anyhow::anyhow!("--{} must be a non-negative integer, got '{}'", id, raw))
        })
        .transpose()
}

/// Default prefix: the peak file name without extensions, next to the peak file.
fn default_prefix(peaks: &Path) -> PathBuf {
    peaks.with_file_name(remove_all_extensions(peaks))
}

///
/// Merge the optional config file with the command line flags.
pub fn config_from_matches(matches: &ArgMatches) -> Result<DatasetConfig> {
    let from_file = match matches.get_one::<String>("config") {
        Some(path) => Some(
            DatasetConfig::from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path))?,
        ),
        None => None,
    };

    let peaks = matches.get_one::<String>("peaks").map(PathBuf::from);
    let sizes = matches.get_one::<String>("chrom-sizes").map(PathBuf::from);
    let genome = matches.get_one::<String>("genome").map(PathBuf::from);
    let prefix = matches.get_one::<String>("output-prefix").map(PathBuf::from);

    let mut config = match from_file {
        Some(config) => config,
        None => {
            let input_peaks = peaks.clone().context("--peaks is required without --config")?;
            DatasetConfig {
                output_prefix: default_prefix(&input_peaks),
                input_peaks,
                genome_sizes: sizes
                    .clone()
                    .context("--chrom-sizes is required without --config")?,
                genome_sequence: genome
                    .clone()
                    .context("--genome is required without --config")?,
                ..DatasetConfig::default()
            }
        }
    };

    if let Some(peaks) = peaks {
        config.input_peaks = peaks;
    }
    if let Some(sizes) = sizes {
        config.genome_sizes = sizes;
    }
    if let Some(genome) = genome {
        config.genome_sequence = genome;
    }
    if let Some(prefix) = prefix {
        config.output_prefix = prefix;
    }
    if let Some(window_length) = parse_flag::<u32>(matches, "window-length")? {
        config.window_length = window_length;
    }
    if let Some(seed) = parse_flag::<u64>(matches, "seed")? {
        config.seed = Some(seed);
    }
    if let Some(max_tries) = parse_flag::<u32>(matches, "max-tries")? {
        config.max_tries = max_tries;
    }
    if let Some(backend) = matches.get_one::<String>("backend") {
        config.backend = backend.parse::<Backend>()?;
    }
    if let Some(bin) = matches.get_one::<String>("bedtools-bin") {
        config.bedtools_bin = PathBuf::from(bin);
    }
    if matches.get_flag("keep-names") {
        config.keep_names = true;
    }
    if matches.get_flag("compress") {
        config.compress_intervals = true;
    }

    config.validate()?;
    Ok(config)
}

pub fn run_build(matches: &ArgMatches) -> Result<()> {
    let config = config_from_matches(matches)?;

    info!(
        "Building dataset from {} with {} backend",
        config.input_peaks.display(),
        config.backend
    );

    let summary = run(&config).with_context(|| {
        format!(
            "Failed to build dataset from {}",
            config.input_peaks.display()
        )
    })?;

    info!(
        "Wrote {} and {}",
        summary.outputs.positive_fasta.display(),
        summary.outputs.negative_fasta.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::build::cli::create_build_cli;

    fn matches_from(argv: &[&str]) -> ArgMatches {
        create_build_cli().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_flags_only() {
        let matches = matches_from(&[
            "build",
            "--peaks",
            "data/ctcf.narrowPeak.gz",
            "--chrom-sizes",
            "hg38.chrom.sizes",
            "--genome",
            "hg38.fa",
            "--seed",
            "5",
        ]);
        let config = config_from_matches(&matches).unwrap();

        assert_eq!(config.output_prefix, PathBuf::from("data/ctcf"));
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.window_length, 100);
        assert_eq!(config.backend, Backend::Native);
    }

    #[rstest]
    fn test_missing_required_without_config() {
        let matches = matches_from(&["build", "--peaks", "ctcf.narrowPeak"]);
        let err = config_from_matches(&matches).unwrap_err();
        assert!(err.to_string().contains("--chrom-sizes"));
    }

    #[rstest]
    fn test_flags_override_config_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("summitseq.toml");
        DatasetConfig {
            window_length: 200,
            seed: Some(1),
            ..DatasetConfig::default()
        }
        .to_file(&path)
        .unwrap();

        let matches = matches_from(&[
            "build",
            "--config",
            path.to_str().unwrap(),
            "--seed",
            "9",
            "--backend",
            "bedtools",
            "--keep-names",
        ]);
        let config = config_from_matches(&matches).unwrap();

        assert_eq!(config.window_length, 200);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.backend, Backend::Bedtools);
        assert!(config.keep_names);
        assert_eq!(config.output_prefix, PathBuf::from("dataset"));
    }

    #[rstest]
    #[case("101")]
    #[case("abc")]
    fn test_bad_window_length(#[case] raw: &str) {
        let matches = matches_from(&[
            "build",
            "-p",
            "ctcf.narrowPeak",
            "-g",
            "hg38.chrom.sizes",
            "-f",
            "hg38.fa",
            "-w",
            raw,
        ]);
        assert!(config_from_matches(&matches).is_err());
    }
}
