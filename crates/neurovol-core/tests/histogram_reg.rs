//! Adaptive histogram regression tests
//!
//! Covers the observable contract of `Volume::compute_histogram`:
//! mass conservation, the reference mean/std values, and the tiered
//! binning bounds at each range tier.

use neurovol_core::{Error, NEAR_ZERO_TOL, Volume};

/// Build a 2x4x4 f64 volume from a flat value list.
fn volume_from(values: &[f64]) -> Volume {
    assert_eq!(values.len(), 32);
    Volume::from_f64_data(2, 4, 4, values.to_vec()).unwrap()
}

#[test]
fn histogram_mass_conservation() {
    // Mixed background (zeros) and signal; with no ignored bin, the
    // histogram mass must equal the number of non-near-zero voxels.
    let mut values = vec![0.0; 32];
    for (i, v) in [3.5, 7.25, 1.0, 9.0, 4.0, 4.0, 8.5].iter().enumerate() {
        values[i * 4] = *v;
    }
    let vol = volume_from(&values);

    let expected = values.iter().filter(|v| v.abs() >= NEAR_ZERO_TOL).count() as u64;
    let hist = vol.compute_histogram(None).unwrap();
    assert_eq!(hist.total(), expected);
}

#[test]
fn histogram_reference_mean_and_std() {
    // {1, 2, 3, 4, 5} as the only non-zero values: mean 3, std sqrt(2.5)
    let mut values = vec![0.0; 32];
    for (i, v) in [1.0, 2.0, 3.0, 4.0, 5.0].iter().enumerate() {
        values[i] = *v;
    }
    let vol = volume_from(&values);

    let hist = vol.compute_histogram(None).unwrap();
    assert!((hist.mean - 3.0).abs() < 1e-9);
    assert!((hist.std - 2.5f64.sqrt()).abs() < 1e-9);
}

#[test]
fn histogram_tier_bounds() {
    // (values, expected low, expected high, expected bins)
    let cases: &[(f64, f64, f64, f64, usize)] = &[
        // u < 1: floor/ceil, 101 bins
        (2.25, 2.75, 2.0, 3.0, 101),
        // 1 <= u < 11: floor/ceil, 101 bins
        (1.5, 9.5, 1.0, 10.0, 101),
        // 11 <= u < 501: nearest 10, positive low forced to 0, 201 bins
        (37.0, 148.0, 0.0, 150.0, 201),
        // 501 <= u < 1010: nearest 100, 201 bins
        (-260.0, 450.0, -300.0, 500.0, 201),
        // u >= 1010: nearest 200, 401 bins
        (-400.0, 1400.0, -400.0, 1400.0, 401),
    ];
    for &(lo_val, hi_val, low, high, bins) in cases {
        let mut values = vec![0.0; 32];
        values[0] = lo_val;
        values[31] = hi_val;
        let hist = volume_from(&values).compute_histogram(None).unwrap();
        assert_eq!(hist.low, low, "low bound for input [{lo_val}, {hi_val}]");
        assert_eq!(hist.high, high, "high bound for input [{lo_val}, {hi_val}]");
        assert_eq!(hist.bin_count(), bins, "bins for input [{lo_val}, {hi_val}]");
    }
}

#[test]
fn histogram_u8_source_uses_fixed_bins() {
    let mut values = vec![0u8; 32];
    values[0] = 17;
    values[1] = 17;
    values[2] = 255;
    let vol = Volume::from_u8_data(2, 4, 4, values).unwrap();

    let hist = vol.compute_histogram(None).unwrap();
    assert_eq!(hist.bin_count(), 256);
    assert_eq!((hist.low, hist.high), (0.0, 255.0));
    assert_eq!(hist.counts[17], 2);
    assert_eq!(hist.counts[255], 1);
    assert_eq!(hist.total(), 3);
}

#[test]
fn histogram_degenerate_range_is_fatal() {
    let values = vec![42.0; 32];
    let err = volume_from(&values).compute_histogram(None).unwrap_err();
    assert!(matches!(err, Error::DegenerateRange { .. }));
}

#[test]
fn histogram_ignore_bin_reduces_sample_size() {
    // 6 copies of 1.0 land in bin 0; {2, 3} land elsewhere. Ignoring
    // bin 0 must remove all six from both counts and statistics.
    let mut values = vec![0.0; 32];
    for v in values.iter_mut().take(6) {
        *v = 1.0;
    }
    values[6] = 2.0;
    values[7] = 3.0;
    let vol = volume_from(&values);

    let full = vol.compute_histogram(None).unwrap();
    assert_eq!(full.total(), 8);

    let pruned = vol.compute_histogram(Some(0)).unwrap();
    assert_eq!(pruned.total(), 2);
    assert_eq!(pruned.counts[0], 0);
    assert!((pruned.mean - 2.5).abs() < 1e-9);
}

#[test]
fn histogram_preserves_source() {
    let mut values = vec![0.0; 32];
    values[3] = 6.0;
    values[9] = 2.0;
    let vol = volume_from(&values);
    let before: Vec<f64> = vol.values().collect();
    let _ = vol.compute_histogram(None).unwrap();
    let after: Vec<f64> = vol.values().collect();
    assert_eq!(before, after);
}
