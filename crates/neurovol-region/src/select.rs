//! Component selection by label frequency
//!
//! Two consumers of the bounded [`FrequencyTable`] census:
//!
//! - [`size_filter`] keeps every component whose voxel count reaches a
//!   threshold (used to prune small connected regions)
//! - [`dominant_selector`] keeps only the single most frequent
//!   component (used to isolate the main structure)
//!
//! Both read a label volume (`U8` or `I16`, label 0 = background) and
//! produce a fresh binary volume of the same dimensions; the source is
//! never modified.

use crate::error::{RegionError, RegionResult};
use crate::freq::FrequencyTable;
use neurovol_core::{Volume, VoxelType};

/// Historical table capacity for [`size_filter`].
///
/// An arbitrary upper bound on distinct labels, kept from the legacy
/// toolkit; labels beyond it clamp into the last slot.
pub const SIZE_FILTER_CAPACITY: usize = 10_000;

/// Historical table capacity for [`dominant_selector`].
pub const DOMINANT_CAPACITY: usize = 20_000;

/// Keep the components with at least `msize` voxels.
///
/// Output voxel is 1 iff the source voxel carries a label whose total
/// count reaches `msize`. Background (label 0) always maps to 0, even
/// for `msize <= 0`. An all-background source is valid and yields an
/// all-zero output.
///
/// Uses a table of [`SIZE_FILTER_CAPACITY`] label slots; see
/// [`size_filter_with_capacity`] to override.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedType`] unless the source is a
/// `U8` or `I16` label volume.
pub fn size_filter(src: &Volume, msize: i32) -> RegionResult<Volume> {
    size_filter_with_capacity(src, msize, SIZE_FILTER_CAPACITY)
}

/// [`size_filter`] with an explicit table capacity.
pub fn size_filter_with_capacity(
    src: &Volume,
    msize: i32,
    capacity: usize,
) -> RegionResult<Volume> {
    let table = FrequencyTable::from_volume(src, capacity)?;

    let mut out = src.create_template(VoxelType::Binary);
    for (idx, v) in src.values().enumerate() {
        let label = v as i64;
        if label <= 0 {
            continue;
        }
        let count = table.count(label.min(capacity as i64 - 1) as usize);
        if msize <= 0 || count >= msize as u64 {
            out.set_value_at(idx, 1.0);
        }
    }
    Ok(out)
}

/// Keep only the most frequent component.
///
/// Finds the label with the highest voxel count (ties break toward the
/// lowest label) and marks exactly its voxels in the output.
///
/// Uses a table of [`DOMINANT_CAPACITY`] label slots; see
/// [`dominant_selector_with_capacity`] to override.
///
/// # Errors
///
/// - [`RegionError::UnsupportedType`] unless the source is a `U8` or
///   `I16` label volume.
/// - [`RegionError::EmptyInput`] if the source is entirely background.
pub fn dominant_selector(src: &Volume) -> RegionResult<Volume> {
    dominant_selector_with_capacity(src, DOMINANT_CAPACITY)
}

/// [`dominant_selector`] with an explicit table capacity.
pub fn dominant_selector_with_capacity(src: &Volume, capacity: usize) -> RegionResult<Volume> {
    let table = FrequencyTable::from_volume(src, capacity)?;
    let (dominant, _) = table.dominant().ok_or(RegionError::EmptyInput)?;

    let mut out = src.create_template(VoxelType::Binary);
    for (idx, v) in src.values().enumerate() {
        let label = v as i64;
        if label <= 0 {
            continue;
        }
        // Clamped labels share the last slot, so a clamped dominant
        // label matches every label that landed there.
        if label.min(capacity as i64 - 1) as usize == dominant {
            out.set_value_at(idx, 1.0);
        }
    }
    Ok(out)
}
