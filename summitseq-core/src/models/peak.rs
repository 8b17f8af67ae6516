use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::errors::{CoreError, Result};
use crate::models::Region;
use crate::utils::{get_dynamic_reader, is_header_line};

/// narrowPeak column holding the chromosome (0-based index).
pub const CHROM_COLUMN: usize = 0;
/// narrowPeak column holding `chromStart`.
pub const START_COLUMN: usize = 1;
/// narrowPeak column holding the peak name.
pub const NAME_COLUMN: usize = 3;
/// narrowPeak column holding the summit offset relative to `chromStart`.
pub const SUMMIT_COLUMN: usize = 9;

///
/// One called peak. Only the chromosome, the peak start and the summit offset
/// are kept; every other narrowPeak column is ignored.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct PeakRecord {
    pub chr: String,
    pub chrom_start: u32,
    pub summit_offset: u32,
    pub name: Option<String>,
    /// 1-based line number in the source file
    pub line: usize,
}

impl PeakRecord {
    pub fn new(chr: &str, chrom_start: u32, summit_offset: u32, line: usize) -> Self {
        PeakRecord {
            chr: chr.to_string(),
            chrom_start,
            summit_offset,
            name: None,
            line,
        }
    }

    ///
    /// Parse one tab-separated narrowPeak line.
    ///
    /// # Arguments
    /// - line: the raw line, without the trailing newline
    /// - line_number: 1-based position of the line, used in error messages
    pub fn parse(line: &str, line_number: usize) -> Result<Self> {
        let fields: Vec<&str> = line.split('\t').collect();

        if fields.len() <= SUMMIT_COLUMN {
            return Err(CoreError::MalformedRecord {
                line: line_number,
                reason: format!(
                    "expected at least {} tab-separated columns, found {}",
                    SUMMIT_COLUMN + 1,
                    fields.len()
                ),
            });
        }

        let chr = fields[CHROM_COLUMN].trim();
        if chr.is_empty() {
            return Err(CoreError::MalformedRecord {
                line: line_number,
                reason: "empty chromosome name".to_string(),
            });
        }

        let chrom_start = parse_coordinate(fields[START_COLUMN], "chromStart", line_number)?;
        let summit_offset = parse_coordinate(fields[SUMMIT_COLUMN], "summit offset", line_number)?;

        let name = Some(fields[NAME_COLUMN].trim())
            .filter(|s| !s.is_empty() && *s != ".")
            .map(str::to_string);

        Ok(PeakRecord {
            chr: chr.to_string(),
            chrom_start,
            summit_offset,
            name,
            line: line_number,
        })
    }

    /// Absolute summit position, `chromStart + summitOffset`.
    pub fn summit(&self) -> u64 {
        self.chrom_start as u64 + self.summit_offset as u64
    }

    ///
    /// Window of `2 * half_length` bases centered on the summit.
    ///
    /// Returns `Ok(None)` when the window would start before coordinate 0.
    /// There is no check against the chromosome end. A window ending past the
    /// u32 coordinate space is a [`CoreError::MalformedRecord`].
    pub fn centered(&self, half_length: u32) -> Result<Option<Region>> {
        let summit = self.summit();
        let Some(start) = summit.checked_sub(half_length as u64) else {
            return Ok(None);
        };
        let end = summit + half_length as u64;

        let (Ok(start), Ok(end)) = (u32::try_from(start), u32::try_from(end)) else {
            return Err(CoreError::MalformedRecord {
                line: self.line,
                reason: format!(
                    "window end {} is beyond the largest supported coordinate {}",
                    end,
                    u32::MAX
                ),
            });
        };

        Ok(Some(Region {
            chr: self.chr.clone(),
            start,
            end,
            rest: None,
        }))
    }
}

fn parse_coordinate(raw: &str, column: &str, line_number: usize) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CoreError::MalformedRecord {
            line: line_number,
            reason: format!("{} is not a non-negative integer: '{}'", column, raw.trim()),
        })
}

///
/// Read every peak record of a narrowPeak-like file (plain or gzipped).
///
/// Blank lines and `track`/`browser`/`#` header lines are skipped. The first
/// malformed record aborts the read.
pub fn read_peaks<P: AsRef<Path>>(path: P) -> Result<Vec<PeakRecord>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    let mut peaks = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');

        if line.trim().is_empty() || is_header_line(line) {
            continue;
        }

        peaks.push(PeakRecord::parse(line, index + 1)?);
    }

    debug!("Read {} peak records from {}", peaks.len(), path.as_ref().display());
    Ok(peaks)
}
