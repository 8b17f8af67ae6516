use std::ffi::OsString;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{DatasetError, Result};

pub const DEFAULT_WINDOW_LENGTH: u32 = 100;
pub const DEFAULT_MAX_TRIES: u32 = 1000;
pub const DEFAULT_BEDTOOLS_BIN: &str = "bedtools";

/// Which implementation runs the sampling and extraction stages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process sampler and extractor.
    #[default]
    Native,
    /// Shell out to `bedtools shuffle` and `bedtools getfasta`.
    Bedtools,
}

impl FromStr for Backend {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Backend::Native),
            "bedtools" => Ok(Backend::Bedtools),
            other => Err(DatasetError::InvalidConfig(format!(
                "unknown backend '{}', expected 'native' or 'bedtools'",
                other
            ))),
        }
    }
}

impl Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Native => write!(f, "native"),
            Backend::Bedtools => write!(f, "bedtools"),
        }
    }
}

/// Parameters of one dataset build.
///
/// Example TOML:
/// ```toml
/// input_peaks = "peaks.narrowPeak"
/// genome_sizes = "hg38.chrom.sizes"
/// genome_sequence = "hg38.fa"
/// output_prefix = "out/ctcf"
/// window_length = 100
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub input_peaks: PathBuf,
    pub genome_sizes: PathBuf,
    pub genome_sequence: PathBuf,
    /// Naming root of every artifact: `<prefix>_positive.bed`, `<prefix>_negative.fa`, ...
    pub output_prefix: PathBuf,
    /// Total width of each centered window; must be even.
    #[serde(default = "default_window_length")]
    pub window_length: u32,
    #[serde(default)]
    pub seed: Option<u64>,
    /// Placement attempts per negative region before giving up.
    #[serde(default = "default_max_tries")]
    pub max_tries: u32,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_bedtools_bin")]
    pub bedtools_bin: PathBuf,
    /// Carry the peak name into the 4th column of the positive interval list.
    #[serde(default)]
    pub keep_names: bool,
    /// Write interval lists as `.bed.gz`.
    #[serde(default)]
    pub compress_intervals: bool,
}

fn default_window_length() -> u32 {
    DEFAULT_WINDOW_LENGTH
}

fn default_max_tries() -> u32 {
    DEFAULT_MAX_TRIES
}

fn default_bedtools_bin() -> PathBuf {
    PathBuf::from(DEFAULT_BEDTOOLS_BIN)
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            input_peaks: PathBuf::from("peaks.narrowPeak"),
            genome_sizes: PathBuf::from("genome.chrom.sizes"),
            genome_sequence: PathBuf::from("genome.fa"),
            output_prefix: PathBuf::from("dataset"),
            window_length: DEFAULT_WINDOW_LENGTH,
            seed: None,
            max_tries: DEFAULT_MAX_TRIES,
            backend: Backend::Native,
            bedtools_bin: default_bedtools_bin(),
            keep_names: false,
            compress_intervals: false,
        }
    }
}

impl DatasetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Half of the window; each window spans `summit - half .. summit + half`.
    pub fn half_length(&self) -> u32 {
        self.window_length / 2
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_length == 0 {
            return Err(DatasetError::InvalidConfig(
                "window_length must be positive".to_string(),
            ));
        }
        if self.window_length % 2 != 0 {
            return Err(DatasetError::InvalidConfig(format!(
                "window_length must be even so the summit sits in the middle, got {}",
                self.window_length
            )));
        }
        if self.max_tries == 0 {
            return Err(DatasetError::InvalidConfig(
                "max_tries must be at least 1".to_string(),
            ));
        }
        if self.output_prefix.as_os_str().is_empty() {
            return Err(DatasetError::InvalidConfig(
                "output_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn output_paths(&self) -> OutputPaths {
        let bed_ext = match self.compress_intervals {
            true => "bed.gz",
            false => "bed",
        };

        OutputPaths {
            positive_bed: self.artifact(&format!("_positive.{}", bed_ext)),
            negative_bed: self.artifact(&format!("_negative.{}", bed_ext)),
            positive_fasta: self.artifact("_positive.fa"),
            negative_fasta: self.artifact("_negative.fa"),
            summary: self.artifact("_summary.json"),
        }
    }

    fn artifact(&self, suffix: &str) -> PathBuf {
        let mut name: OsString = self.output_prefix.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }
}

/// Every file a dataset build writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputPaths {
    pub positive_bed: PathBuf,
    pub negative_bed: PathBuf,
    pub positive_fasta: PathBuf,
    pub negative_fasta: PathBuf,
    pub summary: PathBuf,
}
