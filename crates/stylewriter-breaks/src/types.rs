//! Core types for break sequence representation

use serde::{Deserialize, Serialize};
use std::fmt;
use stylewriter_core::{validate, Error, Numeric, Result};

use crate::builders::{EqualBreaks, QuantileBreaks};
use crate::traits::BreaksBuilder;

/// Classification method used to place class boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakMethod {
    /// Boundaries picked by position within the sorted data
    Quantile,
    /// Boundaries spaced evenly across the data range
    #[default]
    Equal,
}

impl BreakMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quantile => "quantile",
            Self::Equal => "equal",
        }
    }

    /// Compute `n` breaks over `data` with this method
    pub fn compute<T: Numeric>(&self, data: &[T], n: usize) -> Result<BreakSequence> {
        match self {
            Self::Quantile => QuantileBreaks::new(n).breaks(data),
            Self::Equal => EqualBreaks::new(n).breaks(data),
        }
    }
}

impl fmt::Display for BreakMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered class boundaries computed from a dataset
///
/// The first value is the dataset minimum (for quantile breaks, the smallest
/// selected value, which is always the minimum), the last value is the
/// dataset maximum. Class `i` spans `values[i]..values[i + 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakSequence {
    values: Vec<f64>,
    method: BreakMethod,
}

impl BreakSequence {
    /// Create a break sequence from explicit boundaries
    ///
    /// Requires at least two finite, non-decreasing values.
    pub fn new(values: Vec<f64>, method: BreakMethod) -> Result<Self> {
        validate::bin_count(values.len())?;
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("break sequence", index));
        }
        if values.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidParameter(
                "break sequence must be non-decreasing".to_string(),
            ));
        }
        Ok(Self { values, method })
    }

    /// Build from values the algorithms already guarantee to be well formed
    pub(crate) fn from_computed(values: Vec<f64>, method: BreakMethod) -> Self {
        debug_assert!(values.len() >= validate::MIN_BREAKS);
        debug_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        Self { values, method }
    }

    /// Get the boundaries
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consume the sequence and return the boundaries
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Method that produced the boundaries
    pub fn method(&self) -> BreakMethod {
        self.method
    }

    /// Get the number of boundaries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lowest boundary
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Highest boundary
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Number of classes the boundaries delimit
    pub fn class_count(&self) -> usize {
        self.values.len().saturating_sub(1).max(1)
    }

    /// Lower and upper boundary of class `index`
    pub fn class_bounds(&self, index: usize) -> Option<(f64, f64)> {
        match (self.values.get(index), self.values.get(index + 1)) {
            (Some(&lower), Some(&upper)) => Some((lower, upper)),
            _ => None,
        }
    }

    /// Find which class contains a given value
    ///
    /// Classes are half-open `[lower, upper)`, except that the maximum
    /// belongs to the first class whose upper boundary equals it. Values
    /// outside `[min, max]` and NaN have no class.
    pub fn classify(&self, value: f64) -> Option<usize> {
        if value.is_nan() || value < self.min() || value > self.max() {
            return None;
        }

        let max = self.max();
        self.values.windows(2).position(|w| {
            (w[0] <= value && value < w[1]) || (value == max && w[1] == max)
        })
    }

    /// Classify every value of a dataset
    pub fn classify_all<T: Numeric>(&self, data: &[T]) -> Vec<Option<usize>> {
        data.iter().map(|&v| self.classify(v.to_float())).collect()
    }
}

impl fmt::Display for BreakSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Breaks({}, [", self.method)?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v:.3}")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[f64]) -> BreakSequence {
        BreakSequence::new(values.to_vec(), BreakMethod::Equal).unwrap()
    }

    #[test]
    fn test_break_sequence() {
        let breaks = seq(&[0.0, 1.0, 2.0, 3.0]);

        assert_eq!(breaks.len(), 4);
        assert_eq!(breaks.class_count(), 3);
        assert_eq!(breaks.min(), 0.0);
        assert_eq!(breaks.max(), 3.0);
        assert_eq!(breaks.class_bounds(1), Some((1.0, 2.0)));
        assert_eq!(breaks.class_bounds(3), None);
        assert_eq!(breaks.classify(1.5), Some(1));
        assert_eq!(breaks.classify(1.0), Some(1)); // Lower edge is inclusive
        assert_eq!(breaks.classify(3.0), Some(2)); // Top class includes max
        assert_eq!(breaks.classify(-0.1), None);
        assert_eq!(breaks.classify(3.1), None);
        assert_eq!(breaks.classify(f64::NAN), None);
    }

    #[test]
    fn test_classify_with_duplicate_max() {
        // Quantile breaks can repeat the maximum
        let breaks = seq(&[0.0, 5.0, 9.0, 9.0]);
        assert_eq!(breaks.classify(9.0), Some(1));
        assert_eq!(breaks.classify(8.9), Some(1));
    }

    #[test]
    fn test_classify_degenerate() {
        let breaks = seq(&[4.0, 4.0, 4.0]);
        assert_eq!(breaks.class_count(), 2);
        assert_eq!(breaks.classify(4.0), Some(0));
        assert_eq!(breaks.classify(4.5), None);
    }

    #[test]
    fn test_classify_all() {
        let breaks = seq(&[0.0, 10.0, 20.0]);
        assert_eq!(
            breaks.classify_all(&[5_i32, 10, 20, 25]),
            vec![Some(0), Some(1), Some(1), None]
        );
    }

    #[test]
    fn test_new_rejects_malformed() {
        assert_eq!(
            BreakSequence::new(vec![1.0], BreakMethod::Equal),
            Err(Error::InvalidBinCount { requested: 1 })
        );
        assert!(BreakSequence::new(vec![2.0, 1.0], BreakMethod::Equal).is_err());
        assert!(BreakSequence::new(vec![0.0, f64::NAN], BreakMethod::Quantile).is_err());
    }

    #[test]
    fn test_display() {
        let breaks = BreakSequence::new(vec![0.0, 2.5], BreakMethod::Quantile).unwrap();
        assert_eq!(breaks.to_string(), "Breaks(quantile, [0.000, 2.500])");
        assert_eq!(BreakMethod::Equal.to_string(), "equal");
    }

    #[test]
    fn test_method_serde_names() {
        let json = serde_json::to_string(&BreakMethod::Quantile).unwrap();
        assert_eq!(json, "\"quantile\"");
        let method: BreakMethod = serde_json::from_str("\"equal\"").unwrap();
        assert_eq!(method, BreakMethod::Equal);
    }
}
