//! neurovol-region - Labeled-component frequency analysis
//!
//! This crate prunes or isolates labeled components by voxel count:
//!
//! - **Frequency table** - bounded per-label census with overflow
//!   clamping
//! - **Size filter** - keep components with at least a threshold
//!   number of voxels
//! - **Dominant selector** - keep only the most frequent component
//!
//! # Examples
//!
//! ```
//! use neurovol_core::Volume;
//! use neurovol_region::{dominant_selector, size_filter};
//!
//! // A label volume: label 1 covers 3 voxels, label 2 covers 1
//! let labels = Volume::from_u8_data(1, 2, 2, vec![1, 1, 1, 2]).unwrap();
//!
//! let big = size_filter(&labels, 2).unwrap();
//! assert_eq!(big.count_nonzero(), 3);
//!
//! let main = dominant_selector(&labels).unwrap();
//! assert_eq!(main.count_nonzero(), 3);
//! ```

pub mod error;
pub mod freq;
pub mod select;

// Re-export core types
pub use neurovol_core;

pub use error::{RegionError, RegionResult};
pub use freq::FrequencyTable;
pub use select::{
    DOMINANT_CAPACITY, SIZE_FILTER_CAPACITY, dominant_selector, dominant_selector_with_capacity,
    size_filter, size_filter_with_capacity,
};
