//! # Core models for summitseq
//!
//! Data structures shared by every summitseq crate: peak records read from
//! narrowPeak-like files, genomic regions and region sets in 0-based half-open
//! coordinates, FASTA records, plus small file utilities (gzip-aware readers and
//! chromosome size tables).
//!
//! ```rust
//! use summitseq_core::models::{PeakRecord, Region};
//!
//! let peak = PeakRecord::new("chr1", 1000, 30, 1);
//! let window = peak.centered(50)?;
//!
//! assert_eq!(window, Some(Region::new("chr1", 980, 1080)));
//! # Ok::<(), summitseq_core::CoreError>(())
//! ```
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::{CoreError, Result};
