//! Error types for neurovol-topology

use thiserror::Error;

use neurovol_core::VoxelType;

/// Errors that can occur during topology computations
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] neurovol_core::Error),

    /// Unsupported voxel type for this operation
    #[error("unsupported voxel type: expected {expected}, got {actual:?}")]
    UnsupportedType {
        expected: &'static str,
        actual: VoxelType,
    },

    /// Volume too small for the 2x2x2 pattern scan
    #[error("volume too small: {bands}x{rows}x{cols}, every dimension must be >= 2")]
    VolumeTooSmall {
        bands: u32,
        rows: u32,
        cols: u32,
    },

    /// Connectivity value other than 6 or 26
    #[error("invalid connectivity: {0} (must be 6 or 26)")]
    InvalidConnectivity(i32),
}

/// Result type for topology operations
pub type TopologyResult<T> = Result<T, TopologyError>;
