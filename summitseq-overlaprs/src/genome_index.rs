//! Genome-wide exclusion index.
//!
//! [`GenomeIndex`] keeps one [`Bits`] per chromosome so a candidate region can
//! be checked against everything already placed on its chromosome, and then be
//! added to the index itself once accepted.
//!
//! ```
//! use summitseq_overlaprs::GenomeIndex;
//! use summitseq_core::models::{Region, RegionSet};
//!
//! let positives = RegionSet::from(vec![
//!     Region::new("chr1", 980, 1080),
//!     Region::new("chr2", 200, 300),
//! ]);
//!
//! let mut index = GenomeIndex::from(&positives);
//! assert!(index.overlaps(&Region::new("chr1", 1000, 1100)));
//! assert!(!index.overlaps(&Region::new("chr1", 1080, 1180)));
//!
//! index.insert(&Region::new("chr1", 1080, 1180));
//! assert!(index.overlaps(&Region::new("chr1", 1100, 1200)));
//! ```
use fxhash::FxHashMap;

use summitseq_core::models::{Interval, Region, RegionSet};

use crate::{Bits, Overlapper};

/// Per-chromosome overlap index. Each stored interval carries the insertion
/// order of the region it came from.
#[derive(Debug, Clone, Default)]
pub struct GenomeIndex {
    index_maps: FxHashMap<String, Bits<u32, usize>>,
    size: usize,
}

impl From<&RegionSet> for GenomeIndex {
    fn from(region_set: &RegionSet) -> Self {
        let mut per_chrom: FxHashMap<String, Vec<Interval<u32, usize>>> = FxHashMap::default();

        for (idx, region) in region_set.regions.iter().enumerate() {
            per_chrom.entry(region.chr.clone()).or_default().push(Interval {
                start: region.start,
                end: region.end,
                val: idx,
            });
        }

        let index_maps = per_chrom
            .into_iter()
            .map(|(chr, intervals)| (chr, Bits::build(intervals)))
            .collect();

        GenomeIndex {
            index_maps,
            size: region_set.len(),
        }
    }
}

impl GenomeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `region` overlaps anything stored on its chromosome.
    pub fn overlaps(&self, region: &Region) -> bool {
        self.index_maps
            .get(&region.chr)
            .is_some_and(|bits| bits.any_overlap(region.start, region.end))
    }

    /// All stored regions overlapping `region`; the insertion order ends up in `rest`.
    pub fn find_overlaps(&self, region: &Region) -> Vec<Region> {
        let Some(bits) = self.index_maps.get(&region.chr) else {
            return Vec::new();
        };

        bits.find_iter(region.start, region.end)
            .map(|iv| Region {
                chr: region.chr.clone(),
                start: iv.start,
                end: iv.end,
                rest: Some(iv.val.to_string()),
            })
            .collect()
    }

    /// Add `region` to the index.
    pub fn insert(&mut self, region: &Region) {
        let interval = Interval {
            start: region.start,
            end: region.end,
            val: self.size,
        };

        self.index_maps
            .entry(region.chr.clone())
            .or_insert_with(|| Bits::build(Vec::new()))
            .insert(interval);
        self.size += 1;
    }

    /// Number of regions in the index.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}
