//! Interval overlap index for summitseq.
//!
//! Negative regions must never overlap a positive window or each other. This
//! crate provides the data structures used to enforce that while sampling:
//!
//! - [`Bits`]: Binary Interval Search over the intervals of one chromosome,
//!   with cheap overlap counts and incremental inserts;
//! - [`GenomeIndex`]: one [`Bits`] per chromosome, built from a
//!   [`RegionSet`](summitseq_core::models::RegionSet).
//!
//! ## Quick Start
//!
//! ```rust
//! use summitseq_overlaprs::{Bits, Overlapper, Interval};
//!
//! let windows = vec![
//!     Interval { start: 980u32, end: 1080, val: "peak_1" },
//!     Interval { start: 1450, end: 1550, val: "peak_3" },
//! ];
//!
//! let bits = Bits::build(windows);
//! let hits: Vec<&str> = bits.find_iter(1000, 1500).map(|iv| iv.val).collect();
//! assert_eq!(hits, vec!["peak_1", "peak_3"]);
//! ```

/// Binary Interval Search implementation.
///
/// See [`Bits`] for details.
pub mod bits;

/// Genome-wide interval indexing.
///
/// See [`GenomeIndex`] for details.
pub mod genome_index;

/// Core traits for overlap operations.
///
/// See [`Overlapper`] for the main trait.
pub mod traits;

// re-exports
pub use self::bits::Bits;
pub use self::genome_index::GenomeIndex;
pub use self::traits::{Interval, Overlapper};
