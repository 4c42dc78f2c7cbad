//! Evenly spaced color ramps

use stylewriter_breaks::equal;
use stylewriter_core::{validate, Result};
use tracing::{debug, instrument};

use crate::color::Color;

/// `n` rounded values from `from` to `to`, both included
///
/// Equal breaks are always ascending, so a descending channel is reversed
/// to keep `from` first.
fn channel_steps(from: f64, to: f64, n: usize) -> Result<Vec<f64>> {
    let mut steps = equal(&[from, to], n)?.into_vec();
    if from > to {
        steps.reverse();
    }
    Ok(steps.into_iter().map(f64::round).collect())
}

impl Color {
    /// Build a ramp of `n` colors from `self` to `other`, endpoints included
    ///
    /// Each channel is split with equal breaks and rounded to the nearest
    /// integer, then the channels are zipped back into colors. Fails with
    /// [`stylewriter_core::Error::InvalidBinCount`] when `n < 2`.
    #[instrument(level = "debug", skip(self, other), fields(from = %self, to = %other))]
    pub fn to(&self, other: &Color, n: usize) -> Result<Vec<Color>> {
        validate::bin_count(n)?;
        let (a, b) = (self.rgb(), other.rgb());

        let red = channel_steps(a[0], b[0], n)?;
        let green = channel_steps(a[1], b[1], n)?;
        let blue = channel_steps(a[2], b[2], n)?;

        let ramp: Vec<Color> = red
            .into_iter()
            .zip(green)
            .zip(blue)
            .map(|((r, g), b)| Color::new(r, g, b))
            .collect();
        debug!(len = ramp.len(), "built color ramp");
        Ok(ramp)
    }
}
