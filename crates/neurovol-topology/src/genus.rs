//! Euler characteristic of a binary volume
//!
//! Morgenthaler's local-pattern-counting algorithm: tally four pattern
//! counts over every foreground voxel's 2x2x2 neighborhood and combine
//! them into the Euler characteristic. 26-connectivity reuses the same
//! counting pass through the standard complement duality: the working
//! volume is initialized to foreground and receives the complemented
//! source.

use crate::error::{TopologyError, TopologyResult};
use neurovol_core::{Volume, VoxelType};

/// Neighbor-adjacency convention for 3D binary shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// Face adjacency (6 neighbors)
    Six,
    /// Face, edge, and vertex adjacency (26 neighbors)
    TwentySix,
}

impl Connectivity {
    /// Create a `Connectivity` from its raw neighbor count.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::InvalidConnectivity`] unless `value`
    /// is 6 or 26.
    pub fn from_value(value: i32) -> TopologyResult<Self> {
        match value {
            6 => Ok(Connectivity::Six),
            26 => Ok(Connectivity::TwentySix),
            other => Err(TopologyError::InvalidConnectivity(other)),
        }
    }

    /// Get the raw neighbor count.
    pub fn value(self) -> i32 {
        match self {
            Connectivity::Six => 6,
            Connectivity::TwentySix => 26,
        }
    }
}

/// Compute the Euler characteristic of a binary volume.
///
/// Builds a working buffer padded by one band, row, and column beyond
/// the source, filled with 0 (6-connectivity) or 1 (26-connectivity),
/// then copies the source into the unpadded sub-region, complemented
/// for 26-connectivity. A single pass over the unpadded index range
/// tallies the four Morgenthaler pattern counts `psi1..psi4` and
/// returns `psi1 - psi2 + psi3 - psi4`.
///
/// The scan order over `(band, row, col)` is fixed, so the result is
/// deterministic; the source is never modified.
///
/// # Errors
///
/// - [`TopologyError::UnsupportedType`] if the source is not binary.
/// - [`TopologyError::VolumeTooSmall`] if any dimension is below 2.
///
/// # Examples
///
/// ```
/// use neurovol_core::{Volume, VoxelType};
/// use neurovol_topology::{Connectivity, euler_characteristic};
///
/// // A single foreground voxel is a ball: Euler characteristic 1
/// let mut vol = Volume::new(2, 2, 2, VoxelType::Binary).unwrap();
/// vol.set_value(0, 0, 0, 1.0).unwrap();
/// assert_eq!(euler_characteristic(&vol, Connectivity::Six).unwrap(), 1);
/// ```
pub fn euler_characteristic(src: &Volume, connectivity: Connectivity) -> TopologyResult<i64> {
    if src.voxel_type() != VoxelType::Binary {
        return Err(TopologyError::UnsupportedType {
            expected: "binary",
            actual: src.voxel_type(),
        });
    }
    let (nb, nr, nc) = src.dimensions();
    if nb < 2 || nr < 2 || nc < 2 {
        return Err(TopologyError::VolumeTooSmall {
            bands: nb,
            rows: nr,
            cols: nc,
        });
    }

    let (nb, nr, nc) = (nb as usize, nr as usize, nc as usize);
    let (wr, wc) = (nr + 1, nc + 1);
    let complement = connectivity == Connectivity::TwentySix;

    // Function-scoped working buffer: padding border pre-filled with the
    // connectivity's baseline value, source copied into the sub-region.
    let mut work = vec![complement as u8; (nb + 1) * wr * wc];
    let mut src_idx = 0usize;
    for b in 0..nb {
        for r in 0..nr {
            for c in 0..nc {
                let fg = src.value_at(src_idx) != 0.0;
                src_idx += 1;
                work[(b * wr + r) * wc + c] = (fg != complement) as u8;
            }
        }
    }

    let at = |b: usize, r: usize, c: usize| work[(b * wr + r) * wc + c];

    let mut psi1 = 0i64;
    let mut psi2 = 0i64;
    let mut psi3 = 0i64;
    let mut psi4 = 0i64;
    for b in 0..nb {
        for r in 0..nr {
            for c in 0..nc {
                if at(b, r, c) == 0 {
                    continue;
                }
                let x1 = at(b, r + 1, c);
                let x2 = at(b, r, c + 1);
                let x3 = at(b, r + 1, c + 1);
                let x4 = at(b + 1, r, c);
                let x5 = at(b + 1, r + 1, c);
                let x6 = at(b + 1, r, c + 1);
                let x7 = at(b + 1, r + 1, c + 1);

                psi1 += 1;
                psi2 += (x1 + x2 + x4) as i64;
                psi3 += ((x1 & x2 & x3) + (x1 & x4 & x5) + (x2 & x4 & x6)) as i64;
                psi4 += (x1 & x2 & x3 & x4 & x5 & x6 & x7) as i64;
            }
        }
    }

    Ok(psi1 - psi2 + psi3 - psi4)
}
