//! Negative region sampling.
//!
//! A [`NegativeSampler`] turns the positive windows into the same number of
//! random windows: one per positive, on the same chromosome, with the same
//! width, overlapping neither a positive nor another negative.
pub mod bedtools;
pub mod shuffle;

pub use bedtools::BedtoolsSampler;
pub use shuffle::ShuffleSampler;

use summitseq_core::models::RegionSet;
use summitseq_core::utils::ChromSizes;
use summitseq_overlaprs::GenomeIndex;

use crate::errors::{DatasetError, Result};

pub trait NegativeSampler {
    ///
    /// Place one negative region for every positive region.
    ///
    /// # Arguments
    /// - positives: the centered windows, in output order
    /// - chrom_sizes: chromosome lengths bounding each placement
    fn sample(&mut self, positives: &RegionSet, chrom_sizes: &ChromSizes) -> Result<RegionSet>;

    /// Seed driving the random placement, if the sampler has one.
    fn seed(&self) -> Option<u64> {
        None
    }
}

///
/// Verify that `negatives` is a valid answer for `positives`: same length,
/// pairwise identical chromosome and width, and no overlap with a positive or
/// another negative.
pub fn check_contract(positives: &RegionSet, negatives: &RegionSet) -> Result<()> {
    if positives.len() != negatives.len() {
        return Err(DatasetError::CollaboratorFailure(format!(
            "sampler returned {} regions for {} positives",
            negatives.len(),
            positives.len()
        )));
    }

    let mut index = GenomeIndex::from(positives);

    for (positive, negative) in positives.iter().zip(negatives.iter()) {
        if positive.chr != negative.chr || positive.width() != negative.width() {
            return Err(DatasetError::CollaboratorFailure(format!(
                "negative {} does not match positive {} in chromosome and width",
                negative.coordinates(),
                positive.coordinates()
            )));
        }
        if let Some(hit) = index.find_overlaps(negative).first() {
            // positives were indexed first, so their insertion order is below positives.len()
            let kind = match hit.rest.as_deref().and_then(|idx| idx.parse::<usize>().ok()) {
                Some(idx) if idx < positives.len() => "positive",
                _ => "negative",
            };
            return Err(DatasetError::CollaboratorFailure(format!(
                "negative {} overlaps {} {}",
                negative.coordinates(),
                kind,
                hit.coordinates()
            )));
        }
        index.insert(negative);
    }

    Ok(())
}
