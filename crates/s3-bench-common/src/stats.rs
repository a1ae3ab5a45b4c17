//! Elapsed time statistics
//!
//! Provides `ElapsedStats` for computing min/avg/max statistics from
//! a collection of elapsed-time measurements.

/// Statistics for a non-empty collection of elapsed times
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElapsedStats {
    /// Minimum elapsed time in seconds
    pub min: f64,
    /// Maximum elapsed time in seconds
    pub max: f64,
    /// Average elapsed time in seconds
    pub avg: f64,
    /// Number of measurements
    pub count: usize,
}

impl ElapsedStats {
    /// Compute statistics from a slice of elapsed times (in seconds).
    ///
    /// Returns `None` for an empty slice, since there is no meaningful
    /// average of zero measurements.
    ///
    /// # Example
    /// ```
    /// use s3_bench_common::stats::ElapsedStats;
    ///
    /// let stats = ElapsedStats::from_secs(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.avg, 3.0);
    /// assert_eq!(stats.count, 5);
    ///
    /// assert!(ElapsedStats::from_secs(&[]).is_none());
    /// ```
    pub fn from_secs(elapsed: &[f64]) -> Option<Self> {
        let (&first, rest) = elapsed.split_first()?;

        let (min, max, sum) = rest
            .iter()
            .fold((first, first, first), |(min, max, sum), &x| {
                (min.min(x), max.max(x), sum + x)
            });

        Some(Self {
            min,
            max,
            avg: sum / elapsed.len() as f64,
            count: elapsed.len(),
        })
    }
}

/// Arithmetic mean of a slice, `None` when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value() {
        let stats = ElapsedStats::from_secs(&[2.5]).unwrap();
        assert_eq!(stats.min, 2.5);
        assert_eq!(stats.max, 2.5);
        assert_eq!(stats.avg, 2.5);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_unordered_values() {
        let stats = ElapsedStats::from_secs(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.avg, 2.0);
    }

    #[test]
    fn test_empty() {
        assert!(ElapsedStats::from_secs(&[]).is_none());
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[50.0, 100.0, 150.0]), Some(100.0));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// avg is the arithmetic mean, min/max are the true extremes
            #[test]
            fn stats_match_naive_computation(
                values in prop::collection::vec(0.001f64..10_000.0, 1..64)
            ) {
                let stats = ElapsedStats::from_secs(&values).unwrap();

                let naive_min = values.iter().copied().fold(f64::INFINITY, f64::min);
                let naive_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                let naive_avg = values.iter().sum::<f64>() / values.len() as f64;

                prop_assert_eq!(stats.min, naive_min);
                prop_assert_eq!(stats.max, naive_max);
                prop_assert!((stats.avg - naive_avg).abs() <= 1e-9 * naive_avg.max(1.0));
                prop_assert_eq!(stats.count, values.len());
                prop_assert!(stats.min <= stats.avg + 1e-9 && stats.avg <= stats.max + 1e-9);
            }
        }
    }
}
