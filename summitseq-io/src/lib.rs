//! # Writers for summitseq artifacts.
//!
//! Interval lists are written as BED3 (optionally gzipped) through [`BedWrite`],
//! FASTA datasets through [`FastaWrite`]. Both create missing parent
//! directories and overwrite existing files.
//!
pub mod bed;
pub mod error;
pub mod fasta;

// re-expose core functions
pub use bed::*;
pub use error::*;
pub use fasta::*;
