//! Element-wise volume operations
//!
//! Small utilities shared by the analysis routines and their callers:
//! logical complement of a binary mask, foreground counting, and
//! constant fill.

use super::{Volume, VolumeData, VoxelType};
use crate::error::{Error, Result};

impl Volume {
    /// Logical complement of a binary volume (0 ↔ 1).
    ///
    /// Returns a new volume; the source is unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] if the volume is not binary.
    pub fn complement(&self) -> Result<Volume> {
        match self.data() {
            VolumeData::Binary(v) => {
                let data = v.iter().map(|&x| 1 - (x != 0) as u8).collect();
                Volume::from_data(self.bands(), self.rows(), self.cols(), VolumeData::Binary(data))
            }
            _ => Err(Error::UnsupportedType {
                expected: "binary",
                actual: self.voxel_type(),
            }),
        }
    }

    /// Count the voxels with a non-zero value.
    pub fn count_nonzero(&self) -> usize {
        match self.data() {
            VolumeData::Binary(v) => v.iter().filter(|&&x| x != 0).count(),
            VolumeData::U8(v) => v.iter().filter(|&&x| x != 0).count(),
            VolumeData::I8(v) => v.iter().filter(|&&x| x != 0).count(),
            VolumeData::I16(v) => v.iter().filter(|&&x| x != 0).count(),
            VolumeData::I32(v) => v.iter().filter(|&&x| x != 0).count(),
            VolumeData::F32(v) => v.iter().filter(|&&x| x != 0.0).count(),
            VolumeData::F64(v) => v.iter().filter(|&&x| x != 0.0).count(),
        }
    }

    /// Set every voxel to `val`, converted per the representation rules
    /// of [`Volume::set_value_at`].
    pub fn fill(&mut self, val: f64) {
        for i in 0..self.len() {
            self.set_value_at(i, val);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement() {
        let vol = Volume::from_binary_data(1, 2, 2, vec![1, 0, 0, 1]).unwrap();
        let comp = vol.complement().unwrap();
        let vals: Vec<f64> = comp.values().collect();
        assert_eq!(vals, vec![0.0, 1.0, 1.0, 0.0]);
        // Involution
        let back = comp.complement().unwrap();
        assert_eq!(back.values().collect::<Vec<_>>(), vol.values().collect::<Vec<_>>());
    }

    #[test]
    fn test_complement_rejects_nonbinary() {
        let vol = Volume::new(1, 2, 2, VoxelType::U8).unwrap();
        assert!(matches!(
            vol.complement(),
            Err(Error::UnsupportedType { expected: "binary", .. })
        ));
    }

    #[test]
    fn test_count_nonzero() {
        let vol = Volume::from_i16_data(1, 2, 3, vec![0, 5, -2, 0, 0, 7]).unwrap();
        assert_eq!(vol.count_nonzero(), 3);
    }

    #[test]
    fn test_fill() {
        let mut vol = Volume::new(2, 2, 2, VoxelType::Binary).unwrap();
        vol.fill(1.0);
        assert_eq!(vol.count_nonzero(), 8);
        vol.fill(0.0);
        assert_eq!(vol.count_nonzero(), 0);
    }
}
