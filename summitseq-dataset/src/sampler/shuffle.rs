use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use summitseq_core::models::{Region, RegionSet};
use summitseq_core::utils::ChromSizes;
use summitseq_overlaprs::GenomeIndex;

use crate::config::DEFAULT_MAX_TRIES;
use crate::errors::{DatasetError, Result};
use crate::sampler::NegativeSampler;

///
/// In-process equivalent of `bedtools shuffle -chrom -noOverlapping` with the
/// positives as exclusion set.
///
/// Every negative is drawn uniformly in `[0, size - width]` on the chromosome
/// of its positive and rejected while it overlaps anything already placed.
///
#[derive(Debug, Clone)]
pub struct ShuffleSampler {
    rng: StdRng,
    seed: u64,
    max_tries: u32,
}

impl Default for ShuffleSampler {
    fn default() -> Self {
        ShuffleSampler::new(None, DEFAULT_MAX_TRIES)
    }
}

impl ShuffleSampler {
    /// A sampler drawing from `seed`, or from a fresh random seed when `None`.
    pub fn new(seed: Option<u64>, max_tries: u32) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        ShuffleSampler {
            rng: StdRng::seed_from_u64(seed),
            seed,
            max_tries: max_tries.max(1),
        }
    }

    fn place(&mut self, positive: &Region, chrom_size: u32, index: &GenomeIndex) -> Option<Region> {
        let width = positive.width();
        let last_start = chrom_size - width;

        for _ in 0..self.max_tries {
            let start = self.rng.random_range(0..=last_start);
            let candidate = Region::new(&positive.chr, start, start + width);
            if !index.overlaps(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

impl NegativeSampler for ShuffleSampler {
    fn sample(&mut self, positives: &RegionSet, chrom_sizes: &ChromSizes) -> Result<RegionSet> {
        let mut index = GenomeIndex::from(positives);
        let mut negatives = Vec::with_capacity(positives.len());

        for positive in positives {
            let chrom_size = *chrom_sizes.get(&positive.chr).ok_or_else(|| {
                DatasetError::CollaboratorFailure(format!(
                    "chromosome {} is missing from the chromosome sizes",
                    positive.chr
                ))
            })?;

            if positive.width() > chrom_size {
                return Err(DatasetError::CollaboratorFailure(format!(
                    "region of width {} does not fit on {} (length {})",
                    positive.width(),
                    positive.chr,
                    chrom_size
                )));
            }

            let negative = self.place(positive, chrom_size, &index).ok_or_else(|| {
                DatasetError::CollaboratorFailure(format!(
                    "no free placement for a {}bp region on {} after {} tries",
                    positive.width(),
                    positive.chr,
                    self.max_tries
                ))
            })?;

            debug!("Placed {} for {}", negative.coordinates(), positive.coordinates());
            index.insert(&negative);
            negatives.push(negative);
        }

        info!(
            "Sampled {} negative regions (seed {})",
            negatives.len(),
            self.seed
        );

        Ok(RegionSet::from(negatives))
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::sampler::check_contract;

    #[fixture]
    fn positives() -> RegionSet {
        RegionSet::from(vec![
            Region::new("chr1", 980, 1080),
            Region::new("chr1", 1450, 1550),
            Region::new("chr2", 200, 300),
            Region::new("chr2", 770, 870),
            Region::new("chr1", 310, 410),
        ])
    }

    #[fixture]
    fn chrom_sizes() -> ChromSizes {
        HashMap::from([("chr1".to_string(), 2000), ("chr2".to_string(), 1500)])
    }

    #[rstest]
    fn test_sample_honors_contract(positives: RegionSet, chrom_sizes: ChromSizes) {
        let mut sampler = ShuffleSampler::new(Some(42), 1000);
        let negatives = sampler.sample(&positives, &chrom_sizes).unwrap();

        assert_eq!(negatives.len(), positives.len());
        assert_eq!(negatives.chrom_counts(), positives.chrom_counts());
        check_contract(&positives, &negatives).unwrap();

        for negative in &negatives {
            assert!(negative.end <= chrom_sizes[&negative.chr]);
        }
    }

    #[rstest]
    fn test_same_seed_same_negatives(positives: RegionSet, chrom_sizes: ChromSizes) {
        let first = ShuffleSampler::new(Some(7), 1000)
            .sample(&positives, &chrom_sizes)
            .unwrap();
        let second = ShuffleSampler::new(Some(7), 1000)
            .sample(&positives, &chrom_sizes)
            .unwrap();

        assert_eq!(first.regions, second.regions);
    }

    #[rstest]
    fn test_seed_is_reported() {
        assert_eq!(ShuffleSampler::new(Some(3), 10).seed(), Some(3));
        assert!(ShuffleSampler::default().seed().is_some());
    }

    #[rstest]
    fn test_impossible_placement() {
        let positives = RegionSet::from(vec![Region::new("chr1", 0, 100)]);
        let chrom_sizes = HashMap::from([("chr1".to_string(), 150)]);

        let err = ShuffleSampler::new(Some(1), 50)
            .sample(&positives, &chrom_sizes)
            .unwrap_err();
        assert!(matches!(err, DatasetError::CollaboratorFailure(_)));
        assert!(err.to_string().contains("after 50 tries"));
    }

    #[rstest]
    fn test_missing_chromosome(chrom_sizes: ChromSizes) {
        let positives = RegionSet::from(vec![Region::new("chrX", 0, 100)]);
        let err = ShuffleSampler::new(Some(1), 10)
            .sample(&positives, &chrom_sizes)
            .unwrap_err();
        assert!(err.to_string().contains("chrX"));
    }

    #[rstest]
    fn test_region_wider_than_chromosome() {
        let positives = RegionSet::from(vec![Region::new("chr1", 0, 100)]);
        let chrom_sizes = HashMap::from([("chr1".to_string(), 80)]);

        let err = ShuffleSampler::new(Some(1), 10)
            .sample(&positives, &chrom_sizes)
            .unwrap_err();
        assert!(matches!(err, DatasetError::CollaboratorFailure(_)));
    }

    #[rstest]
    fn test_exact_fit() {
        // the only free slot on chr1 is [100, 200)
        let positives = RegionSet::from(vec![Region::new("chr1", 0, 100)]);
        let chrom_sizes = HashMap::from([("chr1".to_string(), 200)]);

        let negatives = ShuffleSampler::new(Some(11), 10_000)
            .sample(&positives, &chrom_sizes)
            .unwrap();
        assert_eq!(negatives.regions, vec![Region::new("chr1", 100, 200)]);
    }
}
