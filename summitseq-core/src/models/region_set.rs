use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};

use crate::errors::{CoreError, Result};
use crate::models::Region;
use crate::utils::{get_dynamic_reader, is_header_line};

///
/// RegionSet struct, the representation of an interval list such as a bed file.
///
/// Unlike a BED reader that normalizes its input, a RegionSet keeps regions in
/// the order they were added: the i-th negative region is paired with the
/// i-th positive one.
///
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

pub struct RegionSetIterator<'a> {
    region_set: &'a RegionSet,
    index: usize,
}

impl TryFrom<&Path> for RegionSet {
    type Error = CoreError;

    ///
    /// Create a new [RegionSet] from a bed file (plain or gzipped).
    ///
    /// # Arguments:
    /// - value: path to bed file on disk.
    fn try_from(value: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(value)?;

        let mut regions: Vec<Region> = Vec::new();
        let mut header = String::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end_matches('\r');

            if line.trim().is_empty() {
                continue;
            }
            if is_header_line(line) {
                header.push_str(line);
                continue;
            }

            regions.push(parse_bed_line(line, index + 1)?);
        }

        if regions.is_empty() {
            return Err(CoreError::EmptyRegionSet(value.display().to_string()));
        }

        Ok(RegionSet {
            regions,
            header: Some(header).filter(|h| !h.is_empty()),
            path: Some(value.to_owned()),
        })
    }
}

fn parse_bed_line(line: &str, line_number: usize) -> Result<Region> {
    let parts: Vec<&str> = line.split('\t').collect();
    if parts.len() < 3 {
        return Err(CoreError::RegionParseError {
            line: line_number,
            reason: format!("expected at least 3 columns: {:?}", parts),
        });
    }

    let start: u32 = parts[1].parse().map_err(|_| CoreError::RegionParseError {
        line: line_number,
        reason: format!("Error in parsing start position: {:?}", parts),
    })?;
    let end: u32 = parts[2].parse().map_err(|_| CoreError::RegionParseError {
        line: line_number,
        reason: format!("Error in parsing end position: {:?}", parts),
    })?;

    if start >= end {
        return Err(CoreError::RegionParseError {
            line: line_number,
            reason: format!("start must be smaller than end: {}-{}", start, end),
        });
    }

    Ok(Region {
        chr: parts[0].to_owned(),
        start,
        end,
        rest: Some(parts[3..].join("\t")).filter(|s| !s.is_empty()),
    })
}

impl TryFrom<&str> for RegionSet {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = CoreError;

    fn try_from(value: PathBuf) -> Result<Self> {
        RegionSet::try_from(value.as_path())
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet {
            regions,
            header: None,
            path: None,
        }
    }
}

impl<'a> Iterator for RegionSetIterator<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        let region = self.region_set.regions.get(self.index)?;
        self.index += 1;
        Some(region)
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = RegionSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RegionSetIterator {
            region_set: self,
            index: 0,
        }
    }
}

impl RegionSet {
    pub fn iter(&self) -> RegionSetIterator<'_> {
        self.into_iter()
    }

    ///
    /// Calculate identifier for RegionSet
    ///
    /// The identifier is based on the unsorted first 3 columns, so two sets
    /// holding the same regions in a different order get different identifiers.
    ///
    /// # Returns
    /// String containing RegionSet identifier
    pub fn identifier(&self) -> String {
        let chrs: Vec<&str> = self.regions.iter().map(|r| r.chr.as_str()).collect();
        let starts: Vec<String> = self.regions.iter().map(|r| r.start.to_string()).collect();
        let ends: Vec<String> = self.regions.iter().map(|r| r.end.to_string()).collect();

        let combined = format!(
            "{},{},{}",
            md5_hex(&chrs.join(",")),
            md5_hex(&starts.join(",")),
            md5_hex(&ends.join(","))
        );

        md5_hex(&combined)
    }

    ///
    /// Iterate unique chromosomes located in RegionSet
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &String> {
        let unique_chroms: HashSet<&String> = self.regions.iter().map(|r| &r.chr).collect();
        unique_chroms.into_iter()
    }

    ///
    /// Number of regions per chromosome, ordered by chromosome name
    ///
    pub fn chrom_counts(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for region in &self.regions {
            *counts.entry(region.chr.clone()).or_default() += 1;
        }
        counts
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    ///
    /// Calculate all regions width
    ///
    pub fn region_widths(&self) -> Vec<u32> {
        self.regions.iter().map(|r| r.width()).collect()
    }

    ///
    /// Get total nucleotide count
    ///
    pub fn nucleotides_length(&self) -> u64 {
        self.regions.iter().map(|r| r.width() as u64).sum()
    }
}

fn md5_hex(value: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(value);
    format!("{:x}", hasher.finalize())
}

impl Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionSet with {} regions.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    #[fixture]
    fn regions() -> RegionSet {
        RegionSet::from(vec![
            Region::new("chr2", 200, 300),
            Region::new("chr1", 980, 1080),
            Region::new("chr1", 310, 410),
        ])
    }

    #[rstest]
    fn test_iter_keeps_input_order(regions: RegionSet) {
        let starts: Vec<u32> = regions.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![200, 980, 310]);
        assert_eq!(regions.iter().count(), (&regions).into_iter().count());
    }

    #[rstest]
    fn test_open_from_path() {
        let region_set = RegionSet::try_from(get_test_path("dummy_positive.bed")).unwrap();
        assert_eq!(region_set.len(), 5);
        assert!(region_set.header.is_some());
        assert_eq!(region_set.regions[0], Region::new("chr1", 980, 1080));
    }

    #[rstest]
    fn test_open_missing_file() {
        let err = RegionSet::try_from("no/such/file.bed").unwrap_err();
        assert!(matches!(err, CoreError::FileReadError { .. }));
    }

    #[rstest]
    fn test_open_rejects_bad_coordinates() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bad.bed");
        std::fs::write(&path, "chr1\t10\t20\nchr1\tten\t20\n").unwrap();

        let err = RegionSet::try_from(path.as_path()).unwrap_err();
        assert!(matches!(err, CoreError::RegionParseError { line: 2, .. }));
    }

    #[rstest]
    fn test_open_empty_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.bed");
        std::fs::write(&path, "track name=empty\n").unwrap();

        let err = RegionSet::try_from(path.as_path()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyRegionSet(_)));
    }

    #[rstest]
    fn test_chrom_counts(regions: RegionSet) {
        let counts = regions.chrom_counts();
        assert_eq!(counts.get("chr1"), Some(&2));
        assert_eq!(counts.get("chr2"), Some(&1));
        assert_eq!(regions.iter_chroms().count(), 2);
    }

    #[rstest]
    fn test_identifier_depends_on_order(regions: RegionSet) {
        let mut reordered = regions.clone();
        reordered.regions.reverse();

        assert_eq!(regions.identifier(), regions.clone().identifier());
        assert_ne!(regions.identifier(), reordered.identifier());
        assert_eq!(regions.identifier().len(), 32);
    }

    #[rstest]
    fn test_widths(regions: RegionSet) {
        assert_eq!(regions.region_widths(), vec![100, 100, 100]);
        assert_eq!(regions.nucleotides_length(), 300);
        assert_eq!(regions.to_string(), "RegionSet with 3 regions.");
    }
}
