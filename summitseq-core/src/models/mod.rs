pub mod fasta_record;
pub mod interval;
pub mod peak;
pub mod region;
pub mod region_set;

// re-export for cleaner imports
pub use self::fasta_record::FastaRecord;
pub use self::interval::Interval;
pub use self::peak::PeakRecord;
pub use self::region::Region;
pub use self::region_set::RegionSet;
