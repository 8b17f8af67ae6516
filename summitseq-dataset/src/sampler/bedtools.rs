use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use tempfile::TempDir;

use summitseq_core::models::RegionSet;
use summitseq_core::utils::ChromSizes;
use summitseq_io::BedWrite;

use crate::errors::{DatasetError, Result};
use crate::sampler::NegativeSampler;
use crate::tools::run_tool;

///
/// Negative sampling through `bedtools shuffle`.
///
/// The positives are used both as the regions to shuffle and as the exclusion
/// set; `-chrom` keeps each region on its chromosome and `-noOverlapping`
/// keeps the shuffled regions apart.
///
#[derive(Debug, Clone)]
pub struct BedtoolsSampler {
    pub bedtools_bin: PathBuf,
    pub seed: Option<u64>,
    pub max_tries: u32,
}

impl BedtoolsSampler {
    pub fn new<P: AsRef<Path>>(bedtools_bin: P, seed: Option<u64>, max_tries: u32) -> Self {
        BedtoolsSampler {
            bedtools_bin: bedtools_bin.as_ref().to_owned(),
            seed,
            max_tries,
        }
    }

    fn args(&self, positives: &Path, sizes: &Path) -> Vec<String> {
        let mut args = vec![
            "shuffle".to_string(),
            "-i".to_string(),
            positives.display().to_string(),
            "-g".to_string(),
            sizes.display().to_string(),
            "-excl".to_string(),
            positives.display().to_string(),
            "-chrom".to_string(),
            "-noOverlapping".to_string(),
            "-maxTries".to_string(),
            self.max_tries.to_string(),
        ];
        if let Some(seed) = self.seed {
            args.push("-seed".to_string());
            args.push(seed.to_string());
        }
        args
    }
}

/// Write a chrom sizes table, sorted by name, the way `bedtools -g` reads it.
fn write_chrom_sizes(chrom_sizes: &ChromSizes, path: &Path) -> Result<()> {
    let mut names: Vec<&String> = chrom_sizes.keys().collect();
    names.sort();

    let mut writer = BufWriter::new(File::create(path)?);
    for name in names {
        writeln!(writer, "{}\t{}", name, chrom_sizes[name])?;
    }
    writer.flush()?;
    Ok(())
}

impl NegativeSampler for BedtoolsSampler {
    fn sample(&mut self, positives: &RegionSet, chrom_sizes: &ChromSizes) -> Result<RegionSet> {
        if positives.is_empty() {
            return Ok(RegionSet::default());
        }

        let scratch = TempDir::new()?;
        let positives_path = scratch.path().join("positives.bed");
        let sizes_path = scratch.path().join("chrom.sizes");
        let shuffled_path = scratch.path().join("shuffled.bed");

        positives.write_bed(&positives_path)?;
        write_chrom_sizes(chrom_sizes, &sizes_path)?;

        let output = run_tool(&self.bedtools_bin, self.args(&positives_path, &sizes_path))?;
        std::fs::write(&shuffled_path, &output.stdout)?;

        let mut negatives = RegionSet::try_from(shuffled_path.as_path()).map_err(|e| {
            DatasetError::CollaboratorFailure(format!("unreadable bedtools shuffle output: {}", e))
        })?;
        negatives.path = None;
        for region in negatives.regions.iter_mut() {
            region.rest = None;
        }

        info!("bedtools shuffle placed {} negative regions", negatives.len());

        Ok(negatives)
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}
