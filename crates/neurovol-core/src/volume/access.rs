//! Normalized voxel access
//!
//! Every representation can be read and written as `f64`, which lets
//! the analysis routines traverse a volume once instead of carrying one
//! code path per element type. The original C toolkit duplicated each
//! scan per representation behind switch/macro dispatch; here a single
//! generic accessor does the dispatch per element.
//!
//! # Conversion semantics
//!
//! - Reads widen losslessly for every integer type and `f32`; `f64`
//!   reads are the identity.
//! - Writes to integer types truncate toward zero and saturate at the
//!   target type's bounds (NaN stores 0).
//! - Writes to a binary volume store 1 for any non-zero value.

use super::{Volume, VolumeData};
use crate::error::{Error, Result};

impl Volume {
    /// Read the voxel at `(band, row, col)` as a normalized `f64`.
    ///
    /// Returns `None` if any coordinate is out of bounds.
    pub fn get_value(&self, band: u32, row: u32, col: u32) -> Option<f64> {
        self.index_of(band, row, col).map(|i| self.value_at(i))
    }

    /// Read the voxel at flat storage index `idx` as a normalized `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len`.
    #[inline]
    pub fn value_at(&self, idx: usize) -> f64 {
        match self.data() {
            VolumeData::Binary(v) => v[idx] as f64,
            VolumeData::U8(v) => v[idx] as f64,
            VolumeData::I8(v) => v[idx] as f64,
            VolumeData::I16(v) => v[idx] as f64,
            VolumeData::I32(v) => v[idx] as f64,
            VolumeData::F32(v) => v[idx] as f64,
            VolumeData::F64(v) => v[idx],
        }
    }

    /// Write the voxel at `(band, row, col)` from a normalized `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any coordinate is out of
    /// bounds.
    pub fn set_value(&mut self, band: u32, row: u32, col: u32, val: f64) -> Result<()> {
        match self.index_of(band, row, col) {
            Some(i) => {
                self.set_value_at(i, val);
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { band, row, col }),
        }
    }

    /// Write the voxel at flat storage index `idx` from a normalized
    /// `f64`, converting per the representation rules above.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= len`.
    #[inline]
    pub fn set_value_at(&mut self, idx: usize, val: f64) {
        match self.data_mut() {
            VolumeData::Binary(v) => v[idx] = (val != 0.0) as u8,
            VolumeData::U8(v) => v[idx] = val as u8,
            VolumeData::I8(v) => v[idx] = val as i8,
            VolumeData::I16(v) => v[idx] = val as i16,
            VolumeData::I32(v) => v[idx] = val as i32,
            VolumeData::F32(v) => v[idx] = val as f32,
            VolumeData::F64(v) => v[idx] = val,
        }
    }

    /// Iterate over all voxels as normalized `f64` in storage order
    /// (band-major, row-major, column-minor).
    pub fn values(&self) -> Values<'_> {
        Values { vol: self, idx: 0 }
    }
}

/// Iterator over the voxels of a [`Volume`] as normalized `f64` values.
///
/// Created by [`Volume::values`].
#[derive(Debug, Clone)]
pub struct Values<'a> {
    vol: &'a Volume,
    idx: usize,
}

impl Iterator for Values<'_> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.idx >= self.vol.len() {
            return None;
        }
        let v = self.vol.value_at(self.idx);
        self.idx += 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.vol.len() - self.idx;
        (rem, Some(rem))
    }
}

impl ExactSizeIterator for Values<'_> {}
