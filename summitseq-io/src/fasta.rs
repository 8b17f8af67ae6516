use std::io::{BufWriter, Write};
use std::path::Path;

use bio::io::fasta;
use flate2::Compression;
use flate2::write::GzEncoder;

use summitseq_core::models::FastaRecord;

use crate::bed::create_output;
use crate::error::{Result, WriteError};

pub trait FastaWrite {
    ///
    /// Write records to disk as a FASTA file, one sequence line per record
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_fasta<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write records to disk as a gzipped FASTA file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_fasta_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

fn write_records<W: Write>(records: &[FastaRecord], out: W) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(out);
    for record in records {
        writer.write(&record.header, None, &record.sequence)?;
    }
    writer.flush()
}

impl FastaWrite for [FastaRecord] {
    fn write_fasta<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let file = create_output(path)?;

        write_records(self, BufWriter::new(file)).map_err(|e| WriteError::Write(path.to_owned(), e))
    }

    fn write_fasta_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        let file = create_output(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());

        write_records(self, &mut encoder)
            .and_then(|_| encoder.finish())
            .and_then(|mut inner| inner.flush())
            .map_err(|e| WriteError::Write(path.to_owned(), e))
    }
}
