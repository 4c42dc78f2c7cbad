//! Blending two colors at a fraction

use serde::{Deserialize, Serialize};
use stylewriter_core::{validate, Result};
use tracing::trace;

use crate::color::Color;

/// Per-channel interpolation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// `a + (b - a) * t`: moves from `self` toward `other` as `t` grows
    #[default]
    Linear,
    /// `min(a, b) + |a - b| * t`: always moves from the darker channel
    /// toward the lighter one, whichever color it belongs to
    MinSpan,
}

impl BlendMode {
    /// Interpolate one channel
    pub fn channel(self, a: f64, b: f64, t: f64) -> f64 {
        match self {
            Self::Linear => a + (b - a) * t,
            Self::MinSpan => a.min(b) + (a - b).abs() * t,
        }
    }
}

impl Color {
    /// Blend toward `other` and return the result as a color
    ///
    /// Channels are rounded to the nearest integer. `fraction` must lie in
    /// `[0, 1]`, otherwise [`stylewriter_core::Error::InvalidBlendFraction`]
    /// is returned.
    pub fn mix(&self, other: &Color, fraction: f64, mode: BlendMode) -> Result<Color> {
        let t = validate::fraction(fraction)?;
        let (a, b) = (self.rgb(), other.rgb());
        let mixed = Color::new(
            mode.channel(a[0], b[0], t).round(),
            mode.channel(a[1], b[1], t).round(),
            mode.channel(a[2], b[2], t).round(),
        );
        trace!(from = %self, to = %other, fraction, ?mode, result = %mixed, "blended colors");
        Ok(mixed)
    }

    /// Blend toward `other` linearly and return the hex encoding
    pub fn blend(&self, other: &Color, fraction: f64) -> Result<String> {
        self.blend_with(other, fraction, BlendMode::Linear)
    }

    /// Blend toward `other` with the given formula and return the hex encoding
    pub fn blend_with(&self, other: &Color, fraction: f64, mode: BlendMode) -> Result<String> {
        Ok(self.mix(other, fraction, mode)?.hex())
    }
}
