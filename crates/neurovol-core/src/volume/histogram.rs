//! Adaptive histogram and statistics for volumes
//!
//! Computes a value-distribution histogram plus mean/std over a volume
//! of any representation, picking the binning from the discovered value
//! range. The tiering and the epsilon conventions reproduce the legacy
//! toolkit behavior exactly; see the constants below.

use super::{Volume, VoxelType};
use crate::error::{Error, Result};

/// Values within this tolerance of zero are treated as absent data and
/// excluded from range discovery and accumulation.
///
/// Legacy convention: floating background voxels are "not there" rather
/// than samples at zero. Preserved verbatim from the C toolkit.
pub const NEAR_ZERO_TOL: f64 = 1e-5;

/// Minimum value range required to derive a meaningful binning.
pub const MIN_RANGE: f64 = 1e-4;

/// Histogram of a volume's values, with the accumulated sample moments.
///
/// Produced by [`Volume::compute_histogram`]. `counts` has one entry
/// per bin; `low`/`high` are the (rounded) bounds the bins span. `mean`
/// and `std` are computed over the accumulated samples only: near-zero
/// values and any ignored bin contribute to neither.
#[derive(Debug, Clone)]
pub struct HistogramResult {
    /// Per-bin occurrence counts
    pub counts: Vec<u32>,
    /// Lower bound of the binned range
    pub low: f64,
    /// Upper bound of the binned range
    pub high: f64,
    /// Mean of the accumulated samples
    pub mean: f64,
    /// Sample standard deviation (n-1 divisor)
    pub std: f64,
}

impl HistogramResult {
    /// Get the number of bins.
    #[inline]
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Total number of counted samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }
}

/// Round `x` to the nearest multiple of `step`, half away from zero.
#[inline]
fn round_to_step(x: f64, step: f64) -> f64 {
    step * (x / step).round()
}

/// Pick the binning bounds and bin count for the discovered range.
///
/// Tier policy (legacy, for non-`U8` sources):
///
/// | range `u`        | bounds rounding            | bins |
/// |------------------|----------------------------|------|
/// | `u < 11`         | floor(min), ceil(max)      | 101  |
/// | `11 <= u < 501`  | nearest 10, min forced to 0 if positive  | 201 |
/// | `501 <= u < 1010`| nearest 100, min forced to 0 if positive | 201 |
/// | `u >= 1010`      | nearest 200, min forced to 0 if in (0,100) | 401 |
fn select_binning(xmin: f64, xmax: f64) -> (f64, f64, usize) {
    let u = xmax - xmin;
    if u < 11.0 {
        (xmin.floor(), xmax.ceil(), 101)
    } else if u < 501.0 {
        let mut low = round_to_step(xmin, 10.0);
        if low > 0.0 {
            low = 0.0;
        }
        (low, round_to_step(xmax, 10.0), 201)
    } else if u < 1010.0 {
        let mut low = round_to_step(xmin, 100.0);
        if low > 0.0 {
            low = 0.0;
        }
        (low, round_to_step(xmax, 100.0), 201)
    } else {
        let mut low = round_to_step(xmin, 200.0);
        if xmin > 0.0 && xmin < 100.0 {
            low = 0.0;
        }
        (low, round_to_step(xmax, 200.0), 401)
    }
}

impl Volume {
    /// Compute the adaptive histogram and mean/std of this volume.
    ///
    /// Scans every voxel as a normalized `f64`. Values within
    /// [`NEAR_ZERO_TOL`] of zero are skipped entirely (legacy
    /// "absent data" convention). The remaining values determine the
    /// range; the binning is fixed at 256 bins over `[0, 255]` for
    /// `U8` sources and tiered by range width otherwise.
    ///
    /// Each surviving value lands in bin
    /// `round((bins - 1) * (v - low) / (high - low))`, clamped to the
    /// bin range. If `ignore_bin` is `Some(i)`, values landing in bin
    /// `i` are excluded from both the counts and the mean/std
    /// accumulators; pass `None` to accumulate everything.
    ///
    /// # Errors
    ///
    /// - [`Error::NoSamples`] if no value survives the near-zero
    ///   exclusion, or fewer than two values are accumulated (sample
    ///   variance undefined).
    /// - [`Error::DegenerateRange`] if the surviving values span less
    ///   than [`MIN_RANGE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use neurovol_core::Volume;
    ///
    /// let vol = Volume::from_f64_data(1, 1, 5, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// let hist = vol.compute_histogram(None).unwrap();
    /// assert_eq!(hist.bin_count(), 101);
    /// assert!((hist.mean - 3.0).abs() < 1e-12);
    /// ```
    pub fn compute_histogram(&self, ignore_bin: Option<usize>) -> Result<HistogramResult> {
        // Range discovery over the non-near-zero values.
        let mut xmin = f64::INFINITY;
        let mut xmax = f64::NEG_INFINITY;
        let mut seen = 0usize;
        for v in self.values() {
            if v.abs() < NEAR_ZERO_TOL {
                continue;
            }
            xmin = xmin.min(v);
            xmax = xmax.max(v);
            seen += 1;
        }
        if seen == 0 {
            return Err(Error::NoSamples(0));
        }
        if (xmax - xmin).abs() < MIN_RANGE {
            return Err(Error::DegenerateRange { min: xmin, max: xmax });
        }

        let (low, high, bins) = if self.voxel_type() == VoxelType::U8 {
            (0.0, 255.0, 256)
        } else {
            select_binning(xmin, xmax)
        };

        // Accumulation. Values landing in the ignored bin contribute to
        // neither the counts nor the moments, but are still visited.
        let scale = (bins - 1) as f64 / (high - low);
        let mut counts = vec![0u32; bins];
        let mut n = 0usize;
        let mut sum = 0.0f64;
        let mut sum2 = 0.0f64;
        for v in self.values() {
            if v.abs() < NEAR_ZERO_TOL {
                continue;
            }
            let bin = (((v - low) * scale).round() as i64).clamp(0, bins as i64 - 1) as usize;
            if ignore_bin == Some(bin) {
                continue;
            }
            counts[bin] += 1;
            sum += v;
            sum2 += v * v;
            n += 1;
        }

        if n < 2 {
            return Err(Error::NoSamples(n));
        }
        let mean = sum / n as f64;
        let std = ((sum2 - n as f64 * mean * mean) / (n as f64 - 1.0)).sqrt();

        Ok(HistogramResult {
            counts,
            low,
            high,
            mean,
            std,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vol_of(values: Vec<f64>) -> Volume {
        let n = values.len() as u32;
        Volume::from_f64_data(1, 1, n, values).unwrap()
    }

    #[test]
    fn test_round_to_step_half_away_from_zero() {
        assert_eq!(round_to_step(15.0, 10.0), 20.0);
        assert_eq!(round_to_step(-15.0, 10.0), -20.0);
        assert_eq!(round_to_step(14.9, 10.0), 10.0);
        assert_eq!(round_to_step(250.0, 100.0), 300.0);
    }

    #[test]
    fn test_small_range_uses_floor_ceil() {
        let hist = vol_of(vec![2.3, 4.7, 3.0]).compute_histogram(None).unwrap();
        assert_eq!(hist.bin_count(), 101);
        assert_eq!(hist.low, 2.0);
        assert_eq!(hist.high, 5.0);
    }

    #[test]
    fn test_exact_integer_bounds_not_pushed_outward() {
        let hist = vol_of(vec![2.0, 5.0]).compute_histogram(None).unwrap();
        assert_eq!(hist.low, 2.0);
        assert_eq!(hist.high, 5.0);
    }

    #[test]
    fn test_mid_range_rounds_to_ten_and_forces_zero() {
        // Range u = 60, xmin = 24 rounds to 20 which is > 0, forced to 0
        let hist = vol_of(vec![24.0, 84.0]).compute_histogram(None).unwrap();
        assert_eq!(hist.bin_count(), 201);
        assert_eq!(hist.low, 0.0);
        assert_eq!(hist.high, 80.0);
    }

    #[test]
    fn test_mid_range_negative_min_kept() {
        // Rounded xmin is negative, so it is not forced to 0
        let hist = vol_of(vec![-24.0, 84.0]).compute_histogram(None).unwrap();
        assert_eq!(hist.bin_count(), 201);
        assert_eq!(hist.low, -20.0);
        assert_eq!(hist.high, 80.0);
    }

    #[test]
    fn test_wide_range_rounds_to_hundred() {
        // u = 760
        let hist = vol_of(vec![-151.0, 609.0]).compute_histogram(None).unwrap();
        assert_eq!(hist.bin_count(), 201);
        assert_eq!(hist.low, -200.0);
        assert_eq!(hist.high, 600.0);
    }

    #[test]
    fn test_huge_range_rounds_to_two_hundred() {
        // u = 1950, xmin = 50 is in (0, 100) so low is forced to 0
        let hist = vol_of(vec![50.0, 2000.0]).compute_histogram(None).unwrap();
        assert_eq!(hist.bin_count(), 401);
        assert_eq!(hist.low, 0.0);
        assert_eq!(hist.high, 2000.0);
    }

    #[test]
    fn test_u8_fixed_binning() {
        let vol = Volume::from_u8_data(1, 1, 4, vec![0, 10, 10, 200]).unwrap();
        let hist = vol.compute_histogram(None).unwrap();
        assert_eq!(hist.bin_count(), 256);
        assert_eq!(hist.low, 0.0);
        assert_eq!(hist.high, 255.0);
        // Zero is near-zero-excluded; the rest land in their own value bin
        assert_eq!(hist.counts[10], 2);
        assert_eq!(hist.counts[200], 1);
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn test_near_zero_values_excluded() {
        let hist = vol_of(vec![0.0, 5e-6, -5e-6, 1.0, 2.0, 3.0])
            .compute_histogram(None)
            .unwrap();
        assert_eq!(hist.total(), 3);
        assert!((hist.mean - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_range_fails() {
        let err = vol_of(vec![7.0, 7.0, 7.000001]).compute_histogram(None).unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { .. }));
    }

    #[test]
    fn test_all_background_fails() {
        let err = vol_of(vec![0.0, 0.0, 1e-9]).compute_histogram(None).unwrap_err();
        assert!(matches!(err, Error::NoSamples(0)));
    }

    #[test]
    fn test_mean_std_reference_values() {
        let hist = vol_of(vec![1.0, 2.0, 3.0, 4.0, 5.0]).compute_histogram(None).unwrap();
        assert!((hist.mean - 3.0).abs() < 1e-12);
        assert!((hist.std - 2.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_ignore_bin_excluded_from_counts_and_moments() {
        // low=1, high=5, bins=101; v=1 lands in bin 0
        let full = vol_of(vec![1.0, 2.0, 3.0, 4.0, 5.0]).compute_histogram(None).unwrap();
        let ignored = vol_of(vec![1.0, 2.0, 3.0, 4.0, 5.0]).compute_histogram(Some(0)).unwrap();
        assert_eq!(full.total() - 1, ignored.total());
        assert!((ignored.mean - 3.5).abs() < 1e-12);
        // Remaining samples {2,3,4,5}: sum2 = 54, var = (54 - 4*3.5^2)/3
        assert!((ignored.std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(ignored.counts[0], 0);
    }

    #[test]
    fn test_ignore_bin_can_leave_too_few_samples() {
        // Both surviving values land in bin 0 after binning [1, 2] -> one
        // at bin 0, one at bin 100; ignoring bin 0 leaves one sample.
        let err = vol_of(vec![1.0, 1.0, 2.0]).compute_histogram(Some(0)).unwrap_err();
        assert!(matches!(err, Error::NoSamples(1)));
    }
}
