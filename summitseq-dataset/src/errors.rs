use std::path::PathBuf;

use thiserror::Error;

use summitseq_core::CoreError;
use summitseq_io::WriteError;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// Reading peaks, chrom sizes or interval lists failed; includes malformed peak records.
    #[error(transparent)]
    Input(#[from] CoreError),

    #[error(transparent)]
    Output(#[from] WriteError),

    /// The negative sampler or the sequence extractor could not honor its contract.
    #[error("Collaborator failure: {0}")]
    CollaboratorFailure(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No peak in {0} yields a window inside the chromosome; nothing to sample or extract")]
    EmptyPositiveSet(PathBuf),

    #[error("Can't parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Can't serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    /// Whether this error comes from a peak record that could not be parsed.
    pub fn is_malformed_record(&self) -> bool {
        matches!(self, DatasetError::Input(CoreError::MalformedRecord { .. }))
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
