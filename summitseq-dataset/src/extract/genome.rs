use std::collections::HashMap;
use std::path::Path;

use bio::io::fasta;
use log::{info, warn};

use summitseq_core::CoreError;
use summitseq_core::models::{FastaRecord, Region, RegionSet};
use summitseq_core::utils::get_dynamic_reader;

use crate::errors::{DatasetError, Result};
use crate::extract::{SequenceExtractor, extraction_progress};

/// A reference genome held in memory, one sequence per chromosome.
#[derive(Debug, Clone, Default)]
pub struct GenomeAssembly {
    seq_map: HashMap<String, Vec<u8>>,
}

impl TryFrom<&str> for GenomeAssembly {
    type Error = DatasetError;

    fn try_from(value: &str) -> Result<Self> {
        GenomeAssembly::try_from(Path::new(value))
    }
}

impl TryFrom<&Path> for GenomeAssembly {
    type Error = DatasetError;

    ///
    /// Create a new [GenomeAssembly] from a fasta file (plain or gzipped).
    /// The record id is used as the chromosome name.
    ///
    fn try_from(value: &Path) -> Result<GenomeAssembly> {
        let genome = fasta::Reader::new(get_dynamic_reader(value)?);

        let mut seq_map: HashMap<String, Vec<u8>> = HashMap::new();
        for record in genome.records() {
            let record = record.map_err(|source| CoreError::FileReadError {
                path: value.display().to_string(),
                source,
            })?;
            if seq_map
                .insert(record.id().to_string(), record.seq().to_owned())
                .is_some()
            {
                warn!(
                    "Duplicate reference sequence {} in {}; keeping the later record",
                    record.id(),
                    value.display()
                );
            }
        }

        info!(
            "Loaded {} reference sequences from {}",
            seq_map.len(),
            value.display()
        );

        Ok(GenomeAssembly { seq_map })
    }
}

impl From<HashMap<String, Vec<u8>>> for GenomeAssembly {
    fn from(seq_map: HashMap<String, Vec<u8>>) -> Self {
        GenomeAssembly { seq_map }
    }
}

impl GenomeAssembly {
    /// Bases of `coords`, borrowed from the loaded reference.
    pub fn seq_from_region(&self, coords: &Region) -> Result<&[u8]> {
        let chr = &coords.chr;
        let start = coords.start as usize;
        let end = coords.end as usize;

        let seq = self.seq_map.get(chr).ok_or_else(|| {
            DatasetError::CollaboratorFailure(format!(
                "Unknown chromosome found in region set: {}",
                chr
            ))
        })?;

        if end <= seq.len() && start <= end {
            Ok(&seq[start..end])
        } else {
            Err(DatasetError::CollaboratorFailure(format!(
                "Invalid range: start={}, end={} for chromosome {} with length {}",
                start,
                end,
                chr,
                seq.len()
            )))
        }
    }

    pub fn contains_chr(&self, chr: &str) -> bool {
        self.seq_map.contains_key(chr)
    }

    pub fn len(&self) -> usize {
        self.seq_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_map.is_empty()
    }
}

impl SequenceExtractor for GenomeAssembly {
    fn extract(&self, intervals: &RegionSet) -> Result<Vec<FastaRecord>> {
        if let Some(chr) = intervals.iter_chroms().find(|chr| !self.contains_chr(chr)) {
            return Err(DatasetError::CollaboratorFailure(format!(
                "Unknown chromosome found in region set: {}",
                chr
            )));
        }

        let pb = extraction_progress(intervals.len(), "Extracting sequences");

        let mut records = Vec::with_capacity(intervals.len());
        for region in intervals {
            records.push(FastaRecord::from_region(region, self.seq_from_region(region)?));
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(records)
    }
}
