use crate::models::Region;

///
/// One FASTA entry: the header (without `>`) and the raw sequence bytes.
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct FastaRecord {
    pub header: String,
    pub sequence: Vec<u8>,
}

impl FastaRecord {
    /// Build a record for `region`; the header is `chr:start-end`.
    pub fn from_region(region: &Region, sequence: &[u8]) -> Self {
        FastaRecord {
            header: region.coordinates(),
            sequence: sequence.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
