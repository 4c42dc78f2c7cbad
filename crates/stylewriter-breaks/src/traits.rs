//! Core traits for break computation

use crate::types::{BreakMethod, BreakSequence};
use stylewriter_core::{Numeric, Result};

/// Trait for computing class boundaries from sample data
pub trait BreaksBuilder<T: Numeric = f64> {
    /// Compute the break sequence for the given sample
    ///
    /// The sample is never mutated.
    fn breaks(&self, sample: &[T]) -> Result<BreakSequence>;

    /// Compute the break sequence from pre-sorted data
    ///
    /// This can be more efficient for builders that need sorted data.
    /// Default implementation just calls breaks().
    fn breaks_sorted(&self, sorted_sample: &[T]) -> Result<BreakSequence> {
        self.breaks(sorted_sample)
    }

    /// Get the requested number of breaks (if known)
    fn target_count(&self) -> Option<usize> {
        None
    }

    /// Method implemented by this builder
    fn method(&self) -> BreakMethod;
}
