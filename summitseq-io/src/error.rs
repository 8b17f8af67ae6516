use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for summitseq-io operations.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Failed to create parent directories for file.
    #[error("Failed to create parent directories for {0}")]
    ParentDirectoryCreation(PathBuf, #[source] io::Error),

    /// Failed to create or write the output file.
    #[error("Failed to write {0}")]
    Write(PathBuf, #[source] io::Error),
}

/// Result type alias for summitseq-io operations.
pub type Result<T> = std::result::Result<T, WriteError>;
