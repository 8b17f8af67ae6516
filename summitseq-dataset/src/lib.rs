//! Labeled sequence datasets from peak calls.
//!
//! This crate turns a narrowPeak-like file into a positive/negative pair of
//! FASTA files for sequence classifiers:
//!
//! - centering every peak on its summit with a fixed-width window
//! - placing one random, non-overlapping negative window per positive window
//! - extracting the reference sequence of both sets
//!
//! Sampling and extraction sit behind the [`NegativeSampler`] and
//! [`SequenceExtractor`] traits, with a native and a `bedtools` backed
//! implementation of each.
//!
//! # Example
//!
//! ```no_run
//! use summitseq_dataset::{DatasetConfig, run};
//!
//! let config = DatasetConfig {
//!     input_peaks: "ctcf.narrowPeak".into(),
//!     genome_sizes: "hg38.chrom.sizes".into(),
//!     genome_sequence: "hg38.fa".into(),
//!     output_prefix: "out/ctcf".into(),
//!     seed: Some(42),
//!     ..DatasetConfig::default()
//! };
//!
//! let summary = run(&config).unwrap();
//! println!("{} positives, {} negatives", summary.positives, summary.negatives);
//! ```

pub mod centering;
pub mod config;
pub mod errors;
pub mod extract;
pub mod pipeline;
pub mod sampler;
pub mod summary;
pub mod tools;

// re-exports
pub use centering::{CenteredPeaks, center_peaks};
pub use config::{Backend, DatasetConfig, OutputPaths};
pub use errors::{DatasetError, Result};
pub use extract::{BedtoolsExtractor, GenomeAssembly, SequenceExtractor};
pub use pipeline::{run, run_pipeline};
pub use sampler::{BedtoolsSampler, NegativeSampler, ShuffleSampler};
pub use summary::RunSummary;
