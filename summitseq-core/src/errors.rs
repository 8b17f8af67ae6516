use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Malformed peak record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Error parsing region at line {line}: {reason}")]
    RegionParseError { line: usize, reason: String },

    #[error("Malformed chrom sizes entry at line {line}: {reason}")]
    ChromSizesError { line: usize, reason: String },

    #[error("Corrupted file. 0 regions found in the file: {0}")]
    EmptyRegionSet(String),

    #[error("Can't read file {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
