//! Volume - The main 3D raster container
//!
//! The `Volume` structure is the fundamental data type in neurovol.
//! It is a multi-band 3D array of one of a closed set of numeric voxel
//! representations.
//!
//! # Storage layout
//!
//! - Voxels are addressed by `(band, row, col)`
//! - Storage is a single contiguous typed buffer, band-major /
//!   row-major / column-minor: the voxel at `(b, r, c)` lives at index
//!   `(b * rows + r) * cols + c`
//! - Binary volumes store one byte per voxel holding 0 or 1 (unpacked)
//!
//! # Shape model
//!
//! Dimensions are fixed at creation; contents are mutable through the
//! normalized `f64` accessors ([`Volume::set_value`] and friends).

mod access;
mod histogram;
mod ops;

pub use access::Values;
pub use histogram::{HistogramResult, MIN_RANGE, NEAR_ZERO_TOL};

use crate::error::{Error, Result};

/// Voxel representation (element type of a volume)
///
/// The closed set of numeric representations a [`Volume`] can carry.
/// All algorithms dispatch on this enum instead of duplicating code
/// per element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelType {
    /// 1-bit binary mask (stored unpacked, one byte per voxel)
    Binary,
    /// Unsigned 8-bit
    U8,
    /// Signed 8-bit
    I8,
    /// Signed 16-bit
    I16,
    /// Signed 32-bit
    I32,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl VoxelType {
    /// Create a `VoxelType` from a raw bit count.
    ///
    /// Signed integer widths are assumed for 16 and 32 bits; 8 bits maps
    /// to unsigned (the common label representation). Floating types are
    /// not reachable through this constructor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if `bits` is not 1, 8, 16, or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(VoxelType::Binary),
            8 => Ok(VoxelType::U8),
            16 => Ok(VoxelType::I16),
            32 => Ok(VoxelType::I32),
            _ => Err(Error::InvalidWidth(bits)),
        }
    }

    /// Get the number of bits per voxel.
    pub fn bits(self) -> u32 {
        match self {
            VoxelType::Binary => 1,
            VoxelType::U8 | VoxelType::I8 => 8,
            VoxelType::I16 => 16,
            VoxelType::I32 | VoxelType::F32 => 32,
            VoxelType::F64 => 64,
        }
    }

    /// Check whether this representation can carry component labels.
    ///
    /// Label volumes are restricted to `U8` and `I16`; label 0 is
    /// reserved for background.
    pub fn is_label(self) -> bool {
        matches!(self, VoxelType::U8 | VoxelType::I16)
    }

    /// Check whether this is a floating-point representation.
    pub fn is_float(self) -> bool {
        matches!(self, VoxelType::F32 | VoxelType::F64)
    }
}

/// Typed voxel storage
///
/// One variant per [`VoxelType`], each a flat `Vec` in band-major order.
#[derive(Debug, Clone)]
pub enum VolumeData {
    /// Binary mask data (values 0 or 1)
    Binary(Vec<u8>),
    /// Unsigned 8-bit data
    U8(Vec<u8>),
    /// Signed 8-bit data
    I8(Vec<i8>),
    /// Signed 16-bit data
    I16(Vec<i16>),
    /// Signed 32-bit data
    I32(Vec<i32>),
    /// 32-bit float data
    F32(Vec<f32>),
    /// 64-bit float data
    F64(Vec<f64>),
}

impl VolumeData {
    fn zeroed(vtype: VoxelType, len: usize) -> Self {
        match vtype {
            VoxelType::Binary => VolumeData::Binary(vec![0; len]),
            VoxelType::U8 => VolumeData::U8(vec![0; len]),
            VoxelType::I8 => VolumeData::I8(vec![0; len]),
            VoxelType::I16 => VolumeData::I16(vec![0; len]),
            VoxelType::I32 => VolumeData::I32(vec![0; len]),
            VoxelType::F32 => VolumeData::F32(vec![0.0; len]),
            VoxelType::F64 => VolumeData::F64(vec![0.0; len]),
        }
    }

    fn len(&self) -> usize {
        match self {
            VolumeData::Binary(v) => v.len(),
            VolumeData::U8(v) => v.len(),
            VolumeData::I8(v) => v.len(),
            VolumeData::I16(v) => v.len(),
            VolumeData::I32(v) => v.len(),
            VolumeData::F32(v) => v.len(),
            VolumeData::F64(v) => v.len(),
        }
    }

    fn voxel_type(&self) -> VoxelType {
        match self {
            VolumeData::Binary(_) => VoxelType::Binary,
            VolumeData::U8(_) => VoxelType::U8,
            VolumeData::I8(_) => VoxelType::I8,
            VolumeData::I16(_) => VoxelType::I16,
            VolumeData::I32(_) => VoxelType::I32,
            VolumeData::F32(_) => VoxelType::F32,
            VolumeData::F64(_) => VoxelType::F64,
        }
    }
}

/// Volume - Multi-band 3D typed raster
///
/// # Examples
///
/// ```
/// use neurovol_core::{Volume, VoxelType};
///
/// // Create a 3-band 64x64 signed-16 volume
/// let vol = Volume::new(3, 64, 64, VoxelType::I16).unwrap();
/// assert_eq!(vol.bands(), 3);
/// assert_eq!(vol.rows(), 64);
/// assert_eq!(vol.cols(), 64);
/// assert_eq!(vol.len(), 3 * 64 * 64);
/// ```
#[derive(Debug, Clone)]
pub struct Volume {
    /// Number of bands (outermost dimension)
    bands: u32,
    /// Number of rows per band
    rows: u32,
    /// Number of columns per row
    cols: u32,
    /// The voxel data (flat, band-major)
    data: VolumeData,
}

impl Volume {
    /// Create a new volume with the specified dimensions and voxel type.
    ///
    /// The voxel data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any dimension is 0.
    pub fn new(bands: u32, rows: u32, cols: u32, vtype: VoxelType) -> Result<Self> {
        let len = Self::checked_len(bands, rows, cols)?;
        Ok(Volume {
            bands,
            rows,
            cols,
            data: VolumeData::zeroed(vtype, len),
        })
    }

    /// Create a volume from a typed data buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if any dimension is 0, or
    /// [`Error::DataSizeMismatch`] if the buffer length does not equal
    /// `bands * rows * cols`.
    pub fn from_data(bands: u32, rows: u32, cols: u32, data: VolumeData) -> Result<Self> {
        let expected = Self::checked_len(bands, rows, cols)?;
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                bands,
                rows,
                cols,
                expected,
                actual: data.len(),
            });
        }
        Ok(Volume {
            bands,
            rows,
            cols,
            data,
        })
    }

    /// Create an unsigned 8-bit volume from raw values.
    pub fn from_u8_data(bands: u32, rows: u32, cols: u32, data: Vec<u8>) -> Result<Self> {
        Self::from_data(bands, rows, cols, VolumeData::U8(data))
    }

    /// Create a signed 16-bit volume from raw values.
    pub fn from_i16_data(bands: u32, rows: u32, cols: u32, data: Vec<i16>) -> Result<Self> {
        Self::from_data(bands, rows, cols, VolumeData::I16(data))
    }

    /// Create a 64-bit float volume from raw values.
    pub fn from_f64_data(bands: u32, rows: u32, cols: u32, data: Vec<f64>) -> Result<Self> {
        Self::from_data(bands, rows, cols, VolumeData::F64(data))
    }

    /// Create a binary volume from raw values.
    ///
    /// Any non-zero byte is stored as 1.
    pub fn from_binary_data(bands: u32, rows: u32, cols: u32, data: Vec<u8>) -> Result<Self> {
        let data = data.into_iter().map(|v| (v != 0) as u8).collect();
        Self::from_data(bands, rows, cols, VolumeData::Binary(data))
    }

    fn checked_len(bands: u32, rows: u32, cols: u32) -> Result<usize> {
        if bands == 0 || rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { bands, rows, cols });
        }
        Ok((bands as usize) * (rows as usize) * (cols as usize))
    }

    /// Get the number of bands.
    #[inline]
    pub fn bands(&self) -> u32 {
        self.bands
    }

    /// Get the number of rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Get the number of columns.
    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Get the dimensions as `(bands, rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.bands, self.rows, self.cols)
    }

    /// Get the voxel representation.
    #[inline]
    pub fn voxel_type(&self) -> VoxelType {
        self.data.voxel_type()
    }

    /// Get the total number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the volume contains no voxels.
    ///
    /// Always false for a constructed volume (dimensions are positive),
    /// but kept for `len`/`is_empty` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Get raw access to the typed voxel data.
    #[inline]
    pub fn data(&self) -> &VolumeData {
        &self.data
    }

    /// Get mutable raw access to the typed voxel data.
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut VolumeData {
        &mut self.data
    }

    /// Compute the flat storage index of `(band, row, col)`.
    ///
    /// Returns `None` if any coordinate is out of bounds.
    #[inline]
    pub fn index_of(&self, band: u32, row: u32, col: u32) -> Option<usize> {
        if band >= self.bands || row >= self.rows || col >= self.cols {
            return None;
        }
        Some(
            ((band as usize) * (self.rows as usize) + (row as usize)) * (self.cols as usize)
                + (col as usize),
        )
    }

    /// Create a new zeroed volume with the same dimensions as this one
    /// and the given voxel type.
    pub fn create_template(&self, vtype: VoxelType) -> Self {
        // Dimensions already validated at construction.
        Volume {
            bands: self.bands,
            rows: self.rows,
            cols: self.cols,
            data: VolumeData::zeroed(vtype, self.data.len()),
        }
    }
}
