//! Neurovol - Volumetric raster analysis for neuroimaging pipelines
//!
//! Structural and statistical summaries of typed voxel volumes:
//!
//! - Frequency-table analysis of labeled components (prune components
//!   by size, isolate the dominant one)
//! - Adaptive histogram and mean/std over any voxel representation
//! - Euler characteristic of binary shapes (Morgenthaler's algorithm)
//!
//! All routines are pure, single-pass functions over an in-memory
//! [`Volume`]; file I/O and argument parsing live with the caller.
//!
//! # Example
//!
//! ```
//! use neurovol::{Volume, region};
//!
//! // Keep only components with at least two voxels
//! let labels = Volume::from_u8_data(1, 2, 3, vec![1, 1, 0, 0, 2, 0]).unwrap();
//! let kept = region::size_filter(&labels, 2).unwrap();
//! assert_eq!(kept.count_nonzero(), 2);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use neurovol_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use neurovol_region as region;
pub use neurovol_topology as topology;
