//! End-to-end dataset builds on the fixture data: narrowPeak + chrom sizes + FASTA → labeled FASTA pair

use std::io::Write;
use std::path::{Path, PathBuf};

use bio::io::fasta;
use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::{TempDir, tempdir};

use summitseq_core::models::{Region, RegionSet};
use summitseq_core::utils::ChromSizes;
use summitseq_dataset::{
    DatasetConfig, DatasetError, GenomeAssembly, NegativeSampler, RunSummary, ShuffleSampler,
    run, run_pipeline,
};

fn get_test_path(file_name: &str) -> PathBuf {
    std::env::current_dir()
        .unwrap()
        .join("../tests/data")
        .join(file_name)
}

fn read_fasta(path: &Path) -> Vec<(String, Vec<u8>)> {
    fasta::Reader::from_file(path)
        .unwrap()
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r.id().to_string(), r.seq().to_vec())
        })
        .collect()
}

fn write_peaks(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("peaks.narrowPeak");
    let mut f = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(f, "{}", line).unwrap();
    }
    path
}

#[fixture]
fn workdir() -> TempDir {
    tempdir().unwrap()
}

fn fixture_config(workdir: &TempDir) -> DatasetConfig {
    DatasetConfig {
        input_peaks: get_test_path("dummy.narrowPeak"),
        genome_sizes: get_test_path("dummy.chrom.sizes"),
        genome_sequence: get_test_path("dummy.fa"),
        output_prefix: workdir.path().join("out/dummy"),
        seed: Some(42),
        ..DatasetConfig::default()
    }
}

#[rstest]
fn test_build_dataset_end_to_end(workdir: TempDir) {
    let config = fixture_config(&workdir);
    let summary = run(&config).unwrap();
    let paths = config.output_paths();

    // positives: five windows in input order, the peak at chr1:10 is dropped
    let positives = RegionSet::try_from(paths.positive_bed.as_path()).unwrap();
    let expected = RegionSet::try_from(get_test_path("dummy_positive.bed")).unwrap();
    assert_eq!(positives.regions, expected.regions);
    assert_eq!(summary.peaks, 6);
    assert_eq!(summary.dropped, 1);

    // negatives: same chromosome per index, none overlapping a positive or each other
    let negatives = RegionSet::try_from(paths.negative_bed.as_path()).unwrap();
    assert_eq!(negatives.len(), 5);
    assert_eq!(negatives.chrom_counts(), positives.chrom_counts());
    for (i, negative) in negatives.iter().enumerate() {
        assert_eq!(negative.chr, positives.regions[i].chr);
        assert_eq!(negative.width(), 100);
        assert!(positives.iter().all(|p| !p.overlaps(negative)));
        assert!(
            negatives
                .iter()
                .enumerate()
                .all(|(j, other)| i == j || !other.overlaps(negative))
        );
    }

    // fasta: one record per interval, headers in interval order
    let positive_fasta = read_fasta(&paths.positive_fasta);
    let negative_fasta = read_fasta(&paths.negative_fasta);
    assert_eq!(positive_fasta.len(), 5);
    assert_eq!(negative_fasta.len(), 5);
    for ((header, seq), region) in positive_fasta.iter().zip(positives.iter()) {
        assert_eq!(header, &region.coordinates());
        assert_eq!(seq.len(), 100);
    }
    for ((header, seq), region) in negative_fasta.iter().zip(negatives.iter()) {
        assert_eq!(header, &region.coordinates());
        assert_eq!(seq.len(), 100);
    }
    assert_eq!(&positive_fasta[0].1[..4], b"ACGT");
    assert_eq!(&positive_fasta[2].1[..4], b"GATC");

    // summary
    let written = RunSummary::from_file(&paths.summary).unwrap();
    assert_eq!(written, summary);
    assert_eq!(written.seed, Some(42));
    assert_eq!(written.positives_per_chrom["chr1"], 3);
    assert_eq!(written.negatives_per_chrom["chr2"], 2);
    assert_eq!(written.positive_identifier, positives.identifier());
}

#[rstest]
fn test_same_seed_same_dataset(workdir: TempDir) {
    let first = fixture_config(&workdir);
    let second = DatasetConfig {
        output_prefix: workdir.path().join("again/dummy"),
        ..first.clone()
    };

    let first_summary = run(&first).unwrap();
    let second_summary = run(&second).unwrap();

    assert_eq!(
        first_summary.negative_identifier,
        second_summary.negative_identifier
    );
    assert_eq!(
        std::fs::read_to_string(first.output_paths().negative_fasta).unwrap(),
        std::fs::read_to_string(second.output_paths().negative_fasta).unwrap()
    );
}

#[rstest]
fn test_malformed_record_names_line(workdir: TempDir) {
    let peaks = write_peaks(
        workdir.path(),
        &[
            "chr1\t1000\t1150\tpeak_1\t500\t.\t12.5\t8.1\t6.2\t30",
            "chr1\t1400\t1600\tpeak_3\t800\t.\t20.4\t15.2\t12.9\tsummit",
        ],
    );
    let config = DatasetConfig {
        input_peaks: peaks,
        ..fixture_config(&workdir)
    };

    let err = run(&config).unwrap_err();
    assert!(err.is_malformed_record());
    assert!(err.to_string().contains("line 2"), "{}", err);
    assert!(!config.output_paths().positive_bed.exists());
}

#[rstest]
fn test_every_peak_dropped(workdir: TempDir) {
    let peaks = write_peaks(
        workdir.path(),
        &["chr1\t10\t40\tpeak_2\t120\t.\t3.1\t2.0\t1.4\t5"],
    );
    let config = DatasetConfig {
        input_peaks: peaks,
        ..fixture_config(&workdir)
    };

    assert!(matches!(
        run(&config),
        Err(DatasetError::EmptyPositiveSet(_))
    ));
}

#[rstest]
fn test_window_past_chromosome_end(workdir: TempDir) {
    // summit at chr2:1480, window [1430, 1530) on a 1500bp chromosome
    let peaks = write_peaks(
        workdir.path(),
        &["chr2\t1400\t1500\tpeak_end\t100\t.\t1.0\t1.0\t1.0\t80"],
    );
    let config = DatasetConfig {
        input_peaks: peaks,
        ..fixture_config(&workdir)
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, DatasetError::CollaboratorFailure(_)));

    // the positive interval list is written before extraction fails
    let positives = RegionSet::try_from(config.output_paths().positive_bed.as_path()).unwrap();
    assert_eq!(positives.regions, vec![Region::new("chr2", 1430, 1530)]);
    assert!(!config.output_paths().positive_fasta.exists());
}

#[rstest]
fn test_impossible_placement(workdir: TempDir) {
    let sizes = workdir.path().join("tiny.chrom.sizes");
    std::fs::write(&sizes, "chr1\t100\n").unwrap();
    let peaks = write_peaks(
        workdir.path(),
        &["chr1\t0\t100\tpeak\t100\t.\t1.0\t1.0\t1.0\t50"],
    );
    let config = DatasetConfig {
        input_peaks: peaks,
        genome_sizes: sizes,
        max_tries: 20,
        ..fixture_config(&workdir)
    };

    let err = run(&config).unwrap_err();
    assert!(matches!(err, DatasetError::CollaboratorFailure(_)));
    assert!(!config.output_paths().negative_bed.exists());
}

#[rstest]
#[case(0)]
#[case(99)]
fn test_invalid_window_length(workdir: TempDir, #[case] window_length: u32) {
    let config = DatasetConfig {
        window_length,
        ..fixture_config(&workdir)
    };
    assert!(matches!(run(&config), Err(DatasetError::InvalidConfig(_))));
}

#[rstest]
fn test_wider_windows(workdir: TempDir) {
    let config = DatasetConfig {
        window_length: 200,
        ..fixture_config(&workdir)
    };
    let summary = run(&config).unwrap();

    // peak_1 (summit 1030) and peak_6 (summit 360) still fit, peak_4 (summit 250) too
    assert_eq!(summary.dropped, 1);
    let positives = RegionSet::try_from(config.output_paths().positive_bed.as_path()).unwrap();
    assert!(positives.region_widths().iter().all(|w| *w == 200));
    assert_eq!(positives.regions[0], Region::new("chr1", 930, 1130));
}

#[rstest]
fn test_keep_names_and_compressed_intervals(workdir: TempDir) {
    let config = DatasetConfig {
        keep_names: true,
        compress_intervals: true,
        ..fixture_config(&workdir)
    };
    run(&config).unwrap();

    let paths = config.output_paths();
    assert!(paths.positive_bed.to_string_lossy().ends_with("_positive.bed.gz"));

    let positives = RegionSet::try_from(paths.positive_bed.as_path()).unwrap();
    assert_eq!(positives.regions[0].rest.as_deref(), Some("peak_1"));

    let negatives = RegionSet::try_from(paths.negative_bed.as_path()).unwrap();
    assert!(negatives.iter().all(|r| r.rest.is_none()));
}

/// A sampler that ignores its contract and returns the positives themselves.
struct EchoSampler;

impl NegativeSampler for EchoSampler {
    fn sample(
        &mut self,
        positives: &RegionSet,
        _chrom_sizes: &ChromSizes,
    ) -> summitseq_dataset::Result<RegionSet> {
        Ok(positives.clone())
    }
}

#[rstest]
fn test_sampler_contract_is_enforced(workdir: TempDir) {
    let config = fixture_config(&workdir);
    let genome = GenomeAssembly::try_from(config.genome_sequence.as_path()).unwrap();

    let err = run_pipeline(&config, &mut EchoSampler, &genome).unwrap_err();
    assert!(matches!(err, DatasetError::CollaboratorFailure(_)));
}

#[rstest]
fn test_run_pipeline_with_explicit_collaborators(workdir: TempDir) {
    let config = fixture_config(&workdir);
    let genome = GenomeAssembly::try_from(config.genome_sequence.as_path()).unwrap();
    let mut sampler = ShuffleSampler::new(Some(42), 1000);

    let summary = run_pipeline(&config, &mut sampler, &genome).unwrap();
    assert_eq!(summary, run(&fixture_config(&workdir)).unwrap());
}
