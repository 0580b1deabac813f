//! Bounded frequency table of component labels
//!
//! Counts how many voxels carry each label in a label volume. The table
//! has a fixed capacity: labels at or beyond it are clamped into the
//! last slot. That merges high-numbered labels (lossy), so each
//! clamping pass is reported once through `log::warn!` and the number
//! of clamped tallies stays queryable on the table.
//!
//! Label 0 is background and is never tallied; negative labels (only
//! possible in `I16` volumes) are treated as background too.

use crate::error::{RegionError, RegionResult};
use neurovol_core::Volume;

/// Bounded per-label voxel counter
///
/// # Examples
///
/// ```
/// use neurovol_core::Volume;
/// use neurovol_region::FrequencyTable;
///
/// let vol = Volume::from_u8_data(1, 2, 2, vec![0, 2, 2, 5]).unwrap();
/// let table = FrequencyTable::from_volume(&vol, 100).unwrap();
/// assert_eq!(table.count(2), 2);
/// assert_eq!(table.count(5), 1);
/// assert_eq!(table.count(0), 0); // background is never tallied
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: Vec<u64>,
    clamped: u64,
}

impl FrequencyTable {
    /// Create an empty table holding labels `0..capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidCapacity`] if `capacity < 2`
    /// (slot 0 is reserved for background and at least one real label
    /// slot is required).
    pub fn with_capacity(capacity: usize) -> RegionResult<Self> {
        if capacity < 2 {
            return Err(RegionError::InvalidCapacity(capacity));
        }
        Ok(FrequencyTable {
            counts: vec![0; capacity],
            clamped: 0,
        })
    }

    /// Build the label census of a volume.
    ///
    /// Labels `>= capacity` are clamped into slot `capacity - 1`; a
    /// single warning is logged per call if any clamping occurred, and
    /// the clamp count is available via [`FrequencyTable::clamped`].
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnsupportedType`] unless the source is a
    /// label representation (`U8` or `I16`), or
    /// [`RegionError::InvalidCapacity`] for a capacity below 2.
    pub fn from_volume(src: &Volume, capacity: usize) -> RegionResult<Self> {
        if !src.voxel_type().is_label() {
            return Err(RegionError::UnsupportedType {
                expected: "u8 or i16 label volume",
                actual: src.voxel_type(),
            });
        }
        let mut table = Self::with_capacity(capacity)?;
        for v in src.values() {
            let label = v as i64;
            if label <= 0 {
                continue;
            }
            table.tally(label as usize);
        }
        if table.clamped > 0 {
            log::warn!(
                "label table capacity {} exceeded: {} voxels clamped into the last slot",
                capacity,
                table.clamped
            );
        }
        Ok(table)
    }

    /// Tally one occurrence of `label`, clamping into the last slot if
    /// it is at or beyond capacity.
    pub fn tally(&mut self, label: usize) {
        let last = self.counts.len() - 1;
        if label > last {
            self.clamped += 1;
            self.counts[last] += 1;
        } else {
            self.counts[label] += 1;
        }
    }

    /// Get the count for `label` (0 for labels beyond capacity).
    #[inline]
    pub fn count(&self, label: usize) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Get the table capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.counts.len()
    }

    /// Number of tallies that were clamped into the last slot.
    #[inline]
    pub fn clamped(&self) -> u64 {
        self.clamped
    }

    /// Find the most frequent label, ignoring background.
    ///
    /// Returns `(label, count)` for the label with the highest count
    /// among labels `>= 1`, or `None` if every such count is zero.
    /// Ties break toward the lowest label (ascending scan, strict
    /// improvement required to replace the current best).
    pub fn dominant(&self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (label, &count) in self.counts.iter().enumerate().skip(1) {
            if count > 0 && best.map_or(true, |(_, c)| count > c) {
                best = Some((label, count));
            }
        }
        best
    }
}
