//! Numeric element types accepted as dataset values
//!
//! Datasets handed to the breaks algorithms may be floats or integers. Every
//! value is widened to `f64` before any arithmetic, so break sequences are
//! always `f64` regardless of the input type.

use num_traits::ToPrimitive;
use std::fmt::Debug;

/// A value that can appear in a dataset
pub trait Numeric: ToPrimitive + Copy + PartialOrd + Debug + Send + Sync {
    /// Widen to `f64` for classification arithmetic
    fn to_float(self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool {
        self.to_float().is_finite()
    }
}

impl Numeric for f64 {
    fn to_float(self) -> f64 {
        self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn to_float(self) -> f64 {
        self as f64
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}

macro_rules! impl_numeric_for_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_float(self) -> f64 {
                    // Loses precision above 2^53, never fails
                    self as f64
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_for_int!(u8, u16, u32, u64, i8, i16, i32, i64);
