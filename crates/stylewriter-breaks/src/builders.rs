//! Break computation strategies

use crate::traits::BreaksBuilder;
use crate::types::{BreakMethod, BreakSequence};
use stylewriter_core::{validate, Error, Numeric, Result};
use tracing::{debug, instrument};

/// Equal-interval breaks builder
///
/// Produces exactly `n` boundaries: `min + i * step` for `i in 0..n - 1`,
/// then the maximum, with `step = (max - min) / (n - 1)`. Points are
/// computed from their index rather than by accumulating the step, so the
/// maximum is never preceded by a near-duplicate of itself. Each point is
/// evaluated as `min * (1 - t) + max * t` with `t = i / (n - 1)`, which
/// stays finite for any finite `min` and `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EqualBreaks {
    count: usize,
}

impl EqualBreaks {
    /// Create a new equal-interval builder producing `count` breaks
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Breaks spanning `[min, max]`, with `min <= max` already established
    pub(crate) fn span(&self, min: f64, max: f64) -> Vec<f64> {
        let intervals = self.count - 1;
        let k = intervals as f64;

        let mut values = Vec::with_capacity(self.count);
        let mut prev = min;
        for i in 0..intervals {
            let t = i as f64 / k;
            // Weighted form stays finite when `max - min` would overflow
            let v = (min * (1.0 - t) + max * t).clamp(prev, max);
            values.push(v);
            prev = v;
        }
        values.push(max);
        values
    }
}

impl<T: Numeric> BreaksBuilder<T> for EqualBreaks {
    #[instrument(level = "debug", skip(self, sample), fields(n = self.count, len = sample.len()))]
    fn breaks(&self, sample: &[T]) -> Result<BreakSequence> {
        validate::bin_count(self.count)?;
        let values = validate::dataset(sample)?;
        let (min, max) = validate::min_max(&values)?;

        let breaks = self.span(min, max);
        debug!(min, max, count = breaks.len(), "computed equal breaks");
        Ok(BreakSequence::from_computed(breaks, BreakMethod::Equal))
    }

    fn target_count(&self) -> Option<usize> {
        Some(self.count)
    }

    fn method(&self) -> BreakMethod {
        BreakMethod::Equal
    }
}

/// Quantile breaks builder
///
/// Picks boundaries by position within the sorted sample. With stride
/// `s = len / (n - 1)`, every element whose index `i` satisfies
/// `i % s == 0` (real-valued remainder) is selected, and the maximum is
/// appended. When `s` is not a whole number fewer than `n` positions
/// qualify, and the maximum may appear twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantileBreaks {
    count: usize,
}

impl QuantileBreaks {
    /// Create a new quantile builder producing up to `count` breaks
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    fn select(&self, sorted: &[f64]) -> Vec<f64> {
        let stride = sorted.len() as f64 / (self.count - 1) as f64;

        let mut values: Vec<f64> = sorted
            .iter()
            .enumerate()
            .filter(|(i, _)| *i as f64 % stride == 0.0)
            .map(|(_, &v)| v)
            .collect();
        values.push(sorted[sorted.len() - 1]);

        debug!(stride, count = values.len(), "computed quantile breaks");
        values
    }
}

impl<T: Numeric> BreaksBuilder<T> for QuantileBreaks {
    #[instrument(level = "debug", skip(self, sample), fields(n = self.count, len = sample.len()))]
    fn breaks(&self, sample: &[T]) -> Result<BreakSequence> {
        validate::bin_count(self.count)?;
        let values = validate::dataset(sample)?;

        // Sort a private copy; the caller's data is left untouched
        let sorted = validate::sorted(&values);
        Ok(BreakSequence::from_computed(self.select(&sorted), BreakMethod::Quantile))
    }

    #[instrument(level = "debug", skip(self, sorted_sample), fields(n = self.count, len = sorted_sample.len()))]
    fn breaks_sorted(&self, sorted_sample: &[T]) -> Result<BreakSequence> {
        validate::bin_count(self.count)?;
        let values = validate::dataset(sorted_sample)?;

        if values.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidParameter(
                "breaks_sorted requires data sorted ascending".to_string(),
            ));
        }
        Ok(BreakSequence::from_computed(self.select(&values), BreakMethod::Quantile))
    }

    fn target_count(&self) -> Option<usize> {
        Some(self.count)
    }

    fn method(&self) -> BreakMethod {
        BreakMethod::Quantile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equal_span() {
        let builder = EqualBreaks::new(5);
        assert_eq!(builder.span(0.0, 100.0), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(builder.span(3.0, 3.0), vec![3.0; 5]);
    }

    #[test]
    fn test_equal_thirds_has_exact_count() {
        let breaks = EqualBreaks::new(4).breaks(&[0.0, 1.0]).unwrap();
        assert_eq!(breaks.len(), 4);
        assert_relative_eq!(breaks.values()[1], 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(breaks.values()[2], 2.0 / 3.0, epsilon = 1e-12);
        assert_eq!(breaks.max(), 1.0);
    }

    #[test]
    fn test_equal_range_wider_than_f64_max() {
        let breaks = EqualBreaks::new(3).breaks(&[-1e308, 1e308]).unwrap();
        assert_eq!(breaks.values(), &[-1e308, 0.0, 1e308]);

        let wide = EqualBreaks::new(100).span(-f64::MAX, f64::MAX);
        assert_eq!(wide.len(), 100);
        assert_eq!(wide[0], -f64::MAX);
        assert_eq!(wide[99], f64::MAX);
        assert!(wide.iter().all(|v| v.is_finite()));
        assert!(wide.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_quantile_even_stride() {
        // 12 values, 4 breaks: stride 4 selects indices 0, 4, 8
        let data: Vec<f64> = (0..12).map(|v| v as f64).collect();
        let breaks = QuantileBreaks::new(4).breaks(&data).unwrap();
        assert_eq!(breaks.values(), &[0.0, 4.0, 8.0, 11.0]);
    }

    #[test]
    fn test_quantile_irregular_stride() {
        // 10 values, 5 breaks: stride 2.5 only matches indices 0 and 5
        let data: Vec<f64> = (0..10).map(|v| v as f64).collect();
        let breaks = QuantileBreaks::new(5).breaks(&data).unwrap();
        assert_eq!(breaks.values(), &[0.0, 5.0, 9.0]);
    }

    #[test]
    fn test_quantile_duplicate_max() {
        // Single value: index 0 is selected and the maximum appended again
        let breaks = QuantileBreaks::new(2).breaks(&[7.0]).unwrap();
        assert_eq!(breaks.values(), &[7.0, 7.0]);
    }

    #[test]
    fn test_quantile_sorted_path() {
        let builder = QuantileBreaks::new(3);
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            builder.breaks_sorted(&sorted).unwrap(),
            builder.breaks(&[4.0, 2.0, 3.0, 1.0]).unwrap()
        );
        assert!(builder.breaks_sorted(&[2.0, 1.0]).is_err());
    }

    #[test]
    fn test_invalid_bin_count() {
        for n in [0, 1] {
            assert_eq!(
                BreaksBuilder::<f64>::breaks(&EqualBreaks::new(n), &[1.0, 2.0]),
                Err(Error::InvalidBinCount { requested: n })
            );
            assert_eq!(
                BreaksBuilder::<f64>::breaks(&QuantileBreaks::new(n), &[1.0, 2.0]),
                Err(Error::InvalidBinCount { requested: n })
            );
        }
    }

    #[test]
    fn test_target_count() {
        assert_eq!(BreaksBuilder::<f64>::target_count(&EqualBreaks::new(6)), Some(6));
        assert_eq!(
            BreaksBuilder::<i32>::method(&QuantileBreaks::new(6)),
            BreakMethod::Quantile
        );
    }
}
