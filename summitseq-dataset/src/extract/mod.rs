//! Sequence extraction.
//!
//! A [`SequenceExtractor`] returns one FASTA record per interval, in interval
//! order, with a `chr:start-end` header and the exact reference bases of
//! `[start, end)`. Nothing is truncated: an interval that does not lie fully
//! on a known chromosome fails the extraction.
pub mod bedtools;
pub mod genome;

pub use bedtools::BedtoolsExtractor;
pub use genome::GenomeAssembly;

use indicatif::{ProgressBar, ProgressStyle};

use summitseq_core::models::{FastaRecord, RegionSet};

use crate::errors::Result;

pub trait SequenceExtractor {
    ///
    /// Extract the reference sequence of every interval.
    ///
    /// # Arguments
    /// - intervals: the intervals to extract, in output order
    fn extract(&self, intervals: &RegionSet) -> Result<Vec<FastaRecord>>;
}

pub(crate) fn extraction_progress(len: usize, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message(message);
    pb
}
