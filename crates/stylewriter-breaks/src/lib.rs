//! Class breaks for numeric datasets
//!
//! This crate splits a dataset into ordered classes by computing class
//! boundaries ("breaks"). Two strategies are provided:
//!
//! - **Equal breaks**: boundaries evenly spaced between the minimum and the
//!   maximum of the data
//! - **Quantile breaks**: boundaries picked by position within the sorted
//!   data, so classes hold roughly the same number of values
//!
//! Every strategy returns a [`BreakSequence`] whose first value is the data
//! minimum and whose last value is the data maximum. Input slices are never
//! mutated.
//!
//! # Examples
//!
//! ## Equal Breaks
//!
//! ```rust
//! use stylewriter_breaks::equal;
//!
//! let breaks = equal(&[0.0, 100.0], 5).unwrap();
//! assert_eq!(breaks.values(), &[0.0, 25.0, 50.0, 75.0, 100.0]);
//! ```
//!
//! ## Quantile Breaks
//!
//! ```rust
//! use stylewriter_breaks::quantile;
//!
//! let data = vec![9.0, 1.0, 4.0, 7.0, 2.0, 8.0];
//! let breaks = quantile(&data, 4).unwrap();
//!
//! assert_eq!(breaks.values(), &[1.0, 4.0, 8.0, 9.0]);
//! assert_eq!(data[0], 9.0); // caller's data is not sorted in place
//! ```
//!
//! ## Classifying Values
//!
//! ```rust
//! use stylewriter_breaks::{BreakMethod, BreaksBuilder, EqualBreaks};
//!
//! let breaks = EqualBreaks::new(3).breaks(&[0_u32, 10, 20]).unwrap();
//! assert_eq!(breaks.method(), BreakMethod::Equal);
//! assert_eq!(breaks.classify(15.0), Some(1));
//! assert_eq!(breaks.classify(20.0), Some(1));
//! assert_eq!(breaks.classify(21.0), None);
//! ```

pub mod builders;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{EqualBreaks, QuantileBreaks};
pub use traits::BreaksBuilder;
pub use types::{BreakMethod, BreakSequence};

pub use stylewriter_core::{Error, Numeric, Result};

// Convenience functions
/// Compute up to `n` quantile breaks over `data`
///
/// Fails with [`Error::InvalidBinCount`] when `n < 2`, and on empty or
/// non-finite data.
pub fn quantile<T: Numeric>(data: &[T], n: usize) -> Result<BreakSequence> {
    QuantileBreaks::new(n).breaks(data)
}

/// Compute exactly `n` equal-interval breaks over `data`
///
/// Fails with [`Error::InvalidBinCount`] when `n < 2`, and on empty or
/// non-finite data.
pub fn equal<T: Numeric>(data: &[T], n: usize) -> Result<BreakSequence> {
    EqualBreaks::new(n).breaks(data)
}
