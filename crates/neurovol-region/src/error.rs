//! Error types for neurovol-region

use thiserror::Error;

use neurovol_core::VoxelType;

/// Errors that can occur during labeled-component analysis
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] neurovol_core::Error),

    /// Unsupported voxel type for this operation
    #[error("unsupported voxel type: expected {expected}, got {actual:?}")]
    UnsupportedType {
        expected: &'static str,
        actual: VoxelType,
    },

    /// Invalid table capacity
    #[error("invalid table capacity: {0}")]
    InvalidCapacity(usize),

    /// No foreground labels in the source volume
    #[error("empty input: no foreground labels to select from")]
    EmptyInput,
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
