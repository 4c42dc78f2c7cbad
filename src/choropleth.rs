//! Classified datasets paired with a color ramp

use stylewriter_breaks::BreakSequence;
use stylewriter_color::Color;
use stylewriter_core::{Numeric, Result};
use tracing::{debug, instrument};

use crate::config::ClassificationConfig;

/// Class boundaries with one color per class
#[derive(Debug, Clone, PartialEq)]
pub struct Choropleth {
    breaks: BreakSequence,
    ramp: Vec<Color>,
}

impl Choropleth {
    /// Classify `data` and build the matching ramp
    ///
    /// The ramp always has one color per class the breaks actually
    /// delimit, which for quantile breaks can be fewer than configured.
    /// A single class takes the `from` color.
    #[instrument(level = "debug", skip(data, config), fields(len = data.len(), method = %config.method, classes = config.classes))]
    pub fn build<T: Numeric>(data: &[T], config: &ClassificationConfig) -> Result<Self> {
        let (from, to) = config.colors()?;
        let breaks = config.method.compute(data, config.break_count()?)?;

        let classes = breaks.class_count();
        let ramp = if classes < 2 {
            vec![from]
        } else {
            from.to(&to, classes)?
        };
        debug!(%breaks, classes, "built choropleth");

        Ok(Self { breaks, ramp })
    }

    /// Class boundaries
    pub fn breaks(&self) -> &BreakSequence {
        &self.breaks
    }

    /// One color per class, lowest class first
    pub fn ramp(&self) -> &[Color] {
        &self.ramp
    }

    /// Color of the class containing `value`
    pub fn color_for(&self, value: f64) -> Option<&Color> {
        self.breaks.classify(value).and_then(|i| self.ramp.get(i))
    }

    /// Every class as `(lower, upper, color)`
    pub fn classes(&self) -> impl Iterator<Item = (f64, f64, &Color)> + '_ {
        self.ramp.iter().enumerate().filter_map(|(i, color)| {
            self.breaks
                .class_bounds(i)
                .map(|(lower, upper)| (lower, upper, color))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylewriter_breaks::BreakMethod;

    #[test]
    fn test_equal_choropleth() {
        let config = ClassificationConfig::new(BreakMethod::Equal, 2).with_colors("000000", "ffffff");
        let map = Choropleth::build(&[0.0, 50.0, 100.0], &config).unwrap();

        assert_eq!(map.breaks().values(), &[0.0, 50.0, 100.0]);
        assert_eq!(map.ramp().len(), 2);
        assert_eq!(map.color_for(10.0).map(Color::hex).as_deref(), Some("000000"));
        assert_eq!(map.color_for(50.0).map(Color::hex).as_deref(), Some("ffffff"));
        assert_eq!(map.color_for(100.0).map(Color::hex).as_deref(), Some("ffffff"));
        assert_eq!(map.color_for(101.0), None);

        let classes: Vec<_> = map.classes().map(|(lo, hi, c)| (lo, hi, c.hex())).collect();
        assert_eq!(
            classes,
            vec![
                (0.0, 50.0, "000000".to_string()),
                (50.0, 100.0, "ffffff".to_string())
            ]
        );
    }

    #[test]
    fn test_single_class_uses_from() {
        // One value, one class
        let config = ClassificationConfig::new(BreakMethod::Quantile, 1).with_colors("112233", "ffffff");
        let map = Choropleth::build(&[5_u8], &config).unwrap();
        assert_eq!(map.breaks().values(), &[5.0, 5.0]);
        assert_eq!(map.ramp(), &[Color::from_hex("112233").unwrap()]);
        assert_eq!(map.color_for(5.0), map.ramp().first());
    }
}
