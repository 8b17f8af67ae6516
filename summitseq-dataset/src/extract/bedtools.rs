use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use bio::io::fasta;
use log::info;
use tempfile::TempDir;

use summitseq_core::models::{FastaRecord, Region, RegionSet};
use summitseq_io::BedWrite;

use crate::errors::{DatasetError, Result};
use crate::extract::{SequenceExtractor, extraction_progress};
use crate::tools::run_tool;

///
/// Sequence extraction through `bedtools getfasta`.
///
/// bedtools skips intervals that run off a chromosome with only a warning, so
/// the record count is checked against the interval count.
///
#[derive(Debug, Clone)]
pub struct BedtoolsExtractor {
    pub bedtools_bin: PathBuf,
    pub genome: PathBuf,
}

impl BedtoolsExtractor {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(bedtools_bin: P, genome: Q) -> Self {
        BedtoolsExtractor {
            bedtools_bin: bedtools_bin.as_ref().to_owned(),
            genome: genome.as_ref().to_owned(),
        }
    }
}

impl SequenceExtractor for BedtoolsExtractor {
    fn extract(&self, intervals: &RegionSet) -> Result<Vec<FastaRecord>> {
        if intervals.is_empty() {
            return Ok(Vec::new());
        }

        let scratch = TempDir::new()?;
        let bed_path = scratch.path().join("intervals.bed");
        let fasta_path = scratch.path().join("intervals.fa");

        // BED3 only, so getfasta names every record chr:start-end
        let bed3 = RegionSet::from(
            intervals
                .iter()
                .map(|r| Region::new(&r.chr, r.start, r.end))
                .collect::<Vec<_>>(),
        );
        bed3.write_bed(&bed_path)?;

        run_tool(
            &self.bedtools_bin,
            [
                OsStr::new("getfasta"),
                OsStr::new("-fi"),
                self.genome.as_os_str(),
                OsStr::new("-bed"),
                bed_path.as_os_str(),
                OsStr::new("-fo"),
                fasta_path.as_os_str(),
            ],
        )?;

        let reader = fasta::Reader::from_file(&fasta_path).map_err(|e| {
            DatasetError::CollaboratorFailure(format!("bedtools getfasta wrote no output: {}", e))
        })?;

        let pb = extraction_progress(intervals.len(), "Reading bedtools getfasta output");
        let mut records = Vec::with_capacity(intervals.len());
        for (region, record) in intervals.iter().zip(reader.records()) {
            let record = record.map_err(|e| {
                DatasetError::CollaboratorFailure(format!(
                    "unreadable bedtools getfasta output: {}",
                    e
                ))
            })?;
            if record.seq().len() != region.width() as usize {
                return Err(DatasetError::CollaboratorFailure(format!(
                    "bedtools getfasta returned {} bases for {}",
                    record.seq().len(),
                    region.coordinates()
                )));
            }
            records.push(FastaRecord::from_region(region, record.seq()));
            pb.inc(1);
        }
        pb.finish_and_clear();

        if records.len() != intervals.len() {
            return Err(DatasetError::CollaboratorFailure(format!(
                "bedtools getfasta returned {} records for {} intervals",
                records.len(),
                intervals.len()
            )));
        }

        info!("bedtools getfasta extracted {} sequences", records.len());
        Ok(records)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use std::os::unix::fs::PermissionsExt;

    use pretty_assertions::assert_eq;
    use rstest::*;

    /// Install a fake `bedtools` that writes `fasta` to the `-fo` argument.
    fn fake_bedtools(dir: &Path, fasta: &str) -> PathBuf {
        let script = dir.join("bedtools");
        std::fs::write(
            &script,
            format!(
                "#!/bin/sh\nwhile [ \"$1\" != \"-fo\" ]; do shift; done\nprintf '{}' > \"$2\"\n",
                fasta
            ),
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[fixture]
    fn intervals() -> RegionSet {
        RegionSet::from(vec![Region::new("chr1", 0, 8), Region::new("chr2", 4, 8)])
    }

    #[rstest]
    fn test_getfasta(intervals: RegionSet) {
        let tempdir = tempfile::tempdir().unwrap();
        let bin = fake_bedtools(
            tempdir.path(),
            ">chr1:0-8\\nACGTACGT\\n>chr2:4-8\\ngatc\\n",
        );

        let records = BedtoolsExtractor::new(&bin, "genome.fa")
            .extract(&intervals)
            .unwrap();

        assert_eq!(
            records,
            vec![
                FastaRecord::from_region(&Region::new("chr1", 0, 8), b"ACGTACGT"),
                FastaRecord::from_region(&Region::new("chr2", 4, 8), b"gatc"),
            ]
        );
    }

    #[rstest]
    fn test_getfasta_skipped_interval(intervals: RegionSet) {
        let tempdir = tempfile::tempdir().unwrap();
        let bin = fake_bedtools(tempdir.path(), ">chr1:0-8\\nACGTACGT\\n");

        let err = BedtoolsExtractor::new(&bin, "genome.fa")
            .extract(&intervals)
            .unwrap_err();
        assert!(err.to_string().contains("1 records for 2 intervals"));
    }

    #[rstest]
    fn test_getfasta_empty_input() {
        let extractor = BedtoolsExtractor::new("bedtools", "genome.fa");
        assert!(extractor.extract(&RegionSet::default()).unwrap().is_empty());
    }
}
