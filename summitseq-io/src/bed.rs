use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::warn;

use summitseq_core::models::RegionSet;

use crate::error::{Result, WriteError};

pub trait BedWrite {
    ///
    /// Write data to disk as bed file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write data to disk as bed.gz file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

/// Create parent directories and open `path` for writing.
pub(crate) fn create_output(path: &Path) -> Result<File> {
    if path.exists() {
        warn!("{} already exists. Overwriting existing file", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| WriteError::ParentDirectoryCreation(path.to_owned(), e))?;
    }

    File::create(path).map_err(|e| WriteError::Write(path.to_owned(), e))
}

fn write_regions<W: Write>(region_set: &RegionSet, out: &mut W) -> std::io::Result<()> {
    for region in region_set {
        writeln!(out, "{}", region.as_string())?;
    }
    Ok(())
}

impl BedWrite for RegionSet {
    fn write_bed<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(create_output(path)?);

        write_regions(self, &mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| WriteError::Write(path.to_owned(), e))
    }

    fn write_bed_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let file = create_output(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        write_regions(self, &mut encoder)
            .and_then(|_| encoder.finish())
            .and_then(|mut inner| inner.flush())
            .map_err(|e| WriteError::Write(path.to_owned(), e))
    }
}
