//! Error types for neurovol-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! The original C toolkit used integer return codes with error/warning
//! macros; this module replaces those with Rust's `Result<T, Error>`
//! pattern. Recoverable conditions (label overflow) are not errors and
//! are reported through the producing type instead.

use thiserror::Error;

use crate::volume::VoxelType;

/// Neurovol core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid volume dimensions
    #[error("invalid volume dimensions: {bands}x{rows}x{cols}")]
    InvalidDimension {
        bands: u32,
        rows: u32,
        cols: u32,
    },

    /// Raw data length does not match the volume dimensions
    #[error("data length {actual} doesn't match {bands}x{rows}x{cols} = {expected}")]
    DataSizeMismatch {
        bands: u32,
        rows: u32,
        cols: u32,
        expected: usize,
        actual: usize,
    },

    /// Voxel coordinates out of bounds
    #[error("voxel index out of bounds: ({band}, {row}, {col})")]
    IndexOutOfBounds { band: u32, row: u32, col: u32 },

    /// Unsupported voxel type for this operation
    #[error("unsupported voxel type: expected {expected}, got {actual:?}")]
    UnsupportedType {
        expected: &'static str,
        actual: VoxelType,
    },

    /// Invalid bit width for a voxel type
    #[error("invalid voxel width: {0} bits")]
    InvalidWidth(u32),

    /// Value range too narrow to derive a histogram binning
    #[error("degenerate value range: [{min}, {max}]")]
    DegenerateRange { min: f64, max: f64 },

    /// Too few samples to compute the requested statistic
    #[error("not enough samples for statistics: {0}")]
    NoSamples(usize),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for neurovol core operations
pub type Result<T> = std::result::Result<T, Error>;
