//! Z-level generation

/// Generate the ascending Z values to slice at
///
/// The interval is rounded to the nearest whole unit. Levels start at the
/// smallest multiple of the rounded interval that is >= `z_min` and step by
/// it while <= `z_max`. A non-positive interval, one that rounds to zero, or
/// a non-finite range yields no levels.
pub fn z_levels(z_min: f64, z_max: f64, interval: f64) -> Vec<f64> {
    if interval.is_nan() || interval <= 0.0 || !z_min.is_finite() || !z_max.is_finite() {
        return Vec::new();
    }

    let step = interval.round();
    if step <= 0.0 {
        log::warn!("Contour interval {} rounds to zero, no levels generated", interval);
        return Vec::new();
    }

    let start = (z_min / step).ceil() * step;
    let count = ((z_max - start) / step).floor();
    if count.is_nan() || count < 0.0 {
        return Vec::new();
    }

    // Each level is computed from its index; at large magnitudes adjacent
    // indices can land on the same f64, so repeats are dropped
    let mut levels: Vec<f64> = Vec::new();
    for k in 0..=count as usize {
        let z = start + k as f64 * step;
        if z > z_max {
            break;
        }
        if levels.last().map_or(true, |&last| z > last) {
            levels.push(z);
        }
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_snap_to_multiples() {
        assert_eq!(z_levels(2.3, 10.7, 3.0), vec![3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_interval_is_rounded() {
        assert_eq!(z_levels(0.0, 10.0, 2.6), vec![0.0, 3.0, 6.0, 9.0]);
        assert_eq!(z_levels(0.0, 5.0, 2.4), vec![0.0, 2.0, 4.0]);
    }

    #[test]
    fn test_negative_range() {
        assert_eq!(z_levels(-7.5, -1.0, 2.0), vec![-6.0, -4.0, -2.0]);
    }

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(z_levels(5.0, 15.0, 5.0), vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_non_positive_interval_is_empty() {
        assert!(z_levels(0.0, 10.0, 0.0).is_empty());
        assert!(z_levels(0.0, 10.0, -2.0).is_empty());
        assert!(z_levels(0.0, 10.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_interval_rounding_to_zero_is_empty() {
        assert!(z_levels(0.0, 10.0, 0.4).is_empty());
    }

    #[test]
    fn test_inverted_sentinel_range_is_empty() {
        assert!(z_levels(f64::INFINITY, f64::NEG_INFINITY, 1.0).is_empty());
        assert!(z_levels(3.0, 2.0, 1.0).is_empty());
    }

    #[test]
    fn test_range_between_levels() {
        assert!(z_levels(1.2, 1.8, 1.0).is_empty());
    }

    #[test]
    fn test_large_magnitude_range_terminates() {
        // 1e16 + 1.0 is not representable, so stepping by 1 stalls
        let z_min = 1e16;
        let z_max = 1e16 + 4.0;
        let levels = z_levels(z_min, z_max, 1.0);

        assert!(!levels.is_empty());
        assert!(levels.len() <= 5);
        assert_eq!(levels[0], z_min);
        assert_eq!(levels[levels.len() - 1], z_max);
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_infinite_interval_is_empty() {
        assert!(z_levels(0.0, 10.0, f64::INFINITY).is_empty());
    }
}
