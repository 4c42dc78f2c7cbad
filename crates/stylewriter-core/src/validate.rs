//! Input checks shared by every public entry point

use crate::{Error, Numeric, Result};
use tracing::trace;

/// Smallest number of boundaries any breaks algorithm can produce
pub const MIN_BREAKS: usize = 2;

/// Validate a dataset and widen it to `f64`
///
/// Fails on empty input and on any NaN or infinite value. The returned
/// vector keeps the caller's ordering.
///
/// # Examples
///
/// ```rust
/// use stylewriter_core::validate::dataset;
///
/// assert_eq!(dataset(&[2_i32, -1]).unwrap(), vec![2.0, -1.0]);
/// assert!(dataset::<f64>(&[]).is_err());
/// assert!(dataset(&[1.0, f64::NAN]).is_err());
/// ```
pub fn dataset<T: Numeric>(data: &[T]) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(Error::empty_input());
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(Error::non_finite("dataset", index));
    }
    trace!(len = data.len(), "dataset validated");
    Ok(data.iter().map(|&v| v.to_float()).collect())
}

/// Validate the requested number of breaks
pub fn bin_count(n: usize) -> Result<()> {
    if n < MIN_BREAKS {
        return Err(Error::InvalidBinCount { requested: n });
    }
    Ok(())
}

/// Validate a blend fraction
pub fn fraction(fraction: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(Error::InvalidBlendFraction(fraction));
    }
    Ok(fraction)
}

/// Sort finite values ascending into a new vector
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Minimum and maximum of a non-empty slice of finite values
pub fn min_max(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        }))
}
