//! neurovol-topology - Digital topology for binary volumes
//!
//! Computes the Euler characteristic ("genus") of a 3D binary shape
//! with Morgenthaler's local-pattern-counting algorithm, under 6- or
//! 26-connectivity.
//!
//! # Examples
//!
//! ```
//! use neurovol_core::{Volume, VoxelType};
//! use neurovol_topology::{Connectivity, euler_characteristic};
//!
//! // A solid cube is a ball: Euler characteristic 1
//! let mut vol = Volume::new(4, 4, 4, VoxelType::Binary).unwrap();
//! vol.fill(1.0);
//! assert_eq!(euler_characteristic(&vol, Connectivity::Six).unwrap(), 1);
//! ```

pub mod error;
pub mod genus;

// Re-export core types
pub use neurovol_core;

pub use error::{TopologyError, TopologyResult};
pub use genus::{Connectivity, euler_characteristic};
