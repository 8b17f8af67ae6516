use log::{debug, info};

use summitseq_core::models::{PeakRecord, RegionSet};

use crate::errors::Result;

/// Positive windows and the peaks that could not be centered.
#[derive(Debug, Clone, Default)]
pub struct CenteredPeaks {
    pub positives: RegionSet,
    pub dropped: Vec<PeakRecord>,
}

impl CenteredPeaks {
    pub fn n_dropped(&self) -> usize {
        self.dropped.len()
    }
}

///
/// Recenter every peak on its summit with a fixed-width window.
///
/// A peak whose window would begin before coordinate 0 is dropped and reported
/// in [`CenteredPeaks::dropped`]; the remaining windows keep the input order.
/// A window ending past the u32 coordinate space fails the whole run as a
/// malformed record.
///
/// # Arguments
/// - peaks: parsed peak records
/// - half_length: half of the window width
/// - keep_names: put the peak name into the 4th column of each window
pub fn center_peaks(
    peaks: &[PeakRecord],
    half_length: u32,
    keep_names: bool,
) -> Result<CenteredPeaks> {
    let mut regions = Vec::with_capacity(peaks.len());
    let mut dropped = Vec::new();

    for peak in peaks {
        match peak.centered(half_length)? {
            Some(mut region) => {
                if keep_names {
                    region.rest = peak.name.clone();
                }
                regions.push(region);
            }
            None => {
                debug!(
                    "Dropping peak at {}:{} (line {}): summit {} is closer than {} to the chromosome start",
                    peak.chr,
                    peak.chrom_start,
                    peak.line,
                    peak.summit(),
                    half_length
                );
                dropped.push(peak.clone());
            }
        }
    }

    if !dropped.is_empty() {
        info!(
            "Dropped {} of {} peaks whose window would start before position 0",
            dropped.len(),
            peaks.len()
        );
    }

    Ok(CenteredPeaks {
        positives: RegionSet::from(regions),
        dropped,
    })
}
