//! Configuration types for choropleth classification

use serde::{Deserialize, Serialize};
use stylewriter_breaks::BreakMethod;
use stylewriter_color::{Color, ColorInput};
use stylewriter_core::{validate, Error, Result};

/// How a dataset is split into classes and colored
///
/// Every field has a default, so a configuration file only needs to name
/// what it changes:
///
/// ```rust
/// use stylewriter::{BreakMethod, ClassificationConfig};
///
/// let config: ClassificationConfig =
///     serde_json::from_str(r#"{ "method": "quantile", "to": [0, 0, 255] }"#).unwrap();
/// assert_eq!(config.method, BreakMethod::Quantile);
/// assert_eq!(config.classes, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Classification method
    pub method: BreakMethod,
    /// Number of classes (one color per class)
    pub classes: usize,
    /// Color of the lowest class
    pub from: ColorInput,
    /// Color of the highest class
    pub to: ColorInput,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            method: BreakMethod::Equal,
            classes: 5,
            from: ColorInput::Hex("ffffcc".to_string()),
            to: ColorInput::Hex("800026".to_string()),
        }
    }
}

impl ClassificationConfig {
    /// Create a configuration with the default colors
    pub fn new(method: BreakMethod, classes: usize) -> Self {
        Self {
            method,
            classes,
            ..Default::default()
        }
    }

    /// Replace the ramp endpoints
    pub fn with_colors(mut self, from: impl Into<ColorInput>, to: impl Into<ColorInput>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    /// Number of boundaries needed for the configured classes
    pub fn break_count(&self) -> Result<usize> {
        let count = self.classes.checked_add(1).ok_or_else(|| {
            Error::InvalidParameter(format!("{} classes is too many", self.classes))
        })?;
        validate::bin_count(count)?;
        Ok(count)
    }

    /// Resolve the ramp endpoints
    pub fn colors(&self) -> Result<(Color, Color)> {
        Ok((
            Color::try_from(self.from.clone())?,
            Color::try_from(self.to.clone())?,
        ))
    }

    /// Check the whole configuration without computing anything
    pub fn validate(&self) -> Result<()> {
        self.break_count()?;
        self.colors()?;
        Ok(())
    }
}
