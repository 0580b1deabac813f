//! Neurovol Core - Volume container and statistics
//!
//! This crate provides the fundamental data structure used throughout
//! the neurovol volumetric analysis toolkit:
//!
//! - [`Volume`] - multi-band 3D typed raster, the shared substrate of
//!   every analysis routine
//! - [`VoxelType`] / [`VolumeData`] - the closed set of voxel
//!   representations and their typed storage
//! - [`HistogramResult`] - adaptive histogram with mean/std, via
//!   [`Volume::compute_histogram`]
//!
//! Voxels are addressed `(band, row, col)`, band-major. Every
//! representation can be read and written as a normalized `f64`, so
//! the analysis routines in the sibling crates traverse volumes
//! generically instead of per element type.

pub mod error;
pub mod volume;

pub use error::{Error, Result};
pub use volume::{
    HistogramResult, MIN_RANGE, NEAR_ZERO_TOL, Values, Volume, VolumeData, VoxelType,
};
