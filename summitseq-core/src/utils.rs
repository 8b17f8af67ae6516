use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::warn;

use crate::errors::{CoreError, Result};

/// Chromosome name to chromosome length.
pub type ChromSizes = HashMap<String, u32>;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).map_err(|source| CoreError::FileReadError {
        path: path.display().to_string(),
        source,
    })?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

/// Lines carrying BED/narrowPeak headers rather than records.
pub fn is_header_line(line: &str) -> bool {
    line.starts_with("browser") || line.starts_with("track") || line.starts_with('#')
}

///
/// Read a chrom sizes file: one `name<whitespace>length` pair per line.
///
/// Blank lines and `#` comments are skipped; anything else that isn't a name
/// followed by a non-negative integer is an error naming the line.
pub fn get_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<ChromSizes> {
    let reader = get_dynamic_reader(path.as_ref())?;
    let mut chrom_sizes: ChromSizes = HashMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        let (Some(name), Some(size)) = (parts.next(), parts.next()) else {
            return Err(CoreError::ChromSizesError {
                line: index + 1,
                reason: format!("expected '<name> <length>', found '{}'", trimmed),
            });
        };

        let size = size.parse::<u32>().map_err(|_| CoreError::ChromSizesError {
            line: index + 1,
            reason: format!("length is not a non-negative integer: '{}'", size),
        })?;

        if let Some(previous) = chrom_sizes.insert(name.to_string(), size) {
            warn!(
                "Duplicate chromosome {} at line {} of {} (was {}, now {})",
                name,
                index + 1,
                path.as_ref().display(),
                previous,
                size
            );
        }
    }

    Ok(chrom_sizes)
}

///
/// Strip every extension from a file name: `peaks.narrowPeak.gz` -> `peaks`.
///
pub fn remove_all_extensions(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    match file_name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}
