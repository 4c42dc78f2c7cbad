//! Data classification and color ramps for choropleth styling
//!
//! This crate re-exports the stylewriter workspace and adds a small layer
//! that ties its two halves together:
//!
//! - [`breaks`]: quantile and equal-interval class boundaries
//! - [`color`]: RGB colors with hex encoding, ramps and blending
//! - [`Choropleth`]: a classified dataset with one color per class
//!
//! # Example
//!
//! ```rust
//! use stylewriter::{choropleth, BreakMethod, ClassificationConfig};
//!
//! let population = vec![120.0, 4_500.0, 830.0, 15_000.0, 2_200.0, 60.0];
//! let config = ClassificationConfig::new(BreakMethod::Equal, 3)
//!     .with_colors("ffffff", "ff0000");
//!
//! let map = choropleth(&population, &config).unwrap();
//! assert_eq!(map.ramp().len(), 3);
//!
//! for (lower, upper, color) in map.classes() {
//!     println!("{lower:>8.0} .. {upper:>8.0}  #{color}");
//! }
//! assert_eq!(map.color_for(15_000.0).unwrap().hex(), "ff0000");
//! ```

pub mod choropleth;
pub mod config;

pub use choropleth::Choropleth;
pub use config::ClassificationConfig;

pub use stylewriter_breaks as breaks;
pub use stylewriter_color as color;

pub use stylewriter_breaks::{equal, quantile, BreakMethod, BreakSequence, BreaksBuilder};
pub use stylewriter_color::{BlendMode, Color, ColorInput};
pub use stylewriter_core::{Error, Numeric, Result};

/// Classify `data` and color each class according to `config`
pub fn choropleth<T: Numeric>(data: &[T], config: &ClassificationConfig) -> Result<Choropleth> {
    Choropleth::build(data, config)
}
