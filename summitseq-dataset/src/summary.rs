use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{Backend, OutputPaths};
use crate::errors::Result;

/// What a dataset build produced, written next to the artifacts as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub window_length: u32,
    pub backend: Backend,
    pub seed: Option<u64>,
    /// peak records read from the input
    pub peaks: usize,
    pub positives: usize,
    /// peaks whose window would start before position 0
    pub dropped: usize,
    pub negatives: usize,
    pub positives_per_chrom: BTreeMap<String, usize>,
    pub negatives_per_chrom: BTreeMap<String, usize>,
    /// md5 identifiers of the two interval lists
    pub positive_identifier: String,
    pub negative_identifier: String,
    pub outputs: OutputPaths,
}

impl RunSummary {
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}
