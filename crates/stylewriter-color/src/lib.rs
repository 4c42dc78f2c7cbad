//! RGB colors for gradient and choropleth styling
//!
//! [`Color`] is a plain value holding red, green and blue channels. It can be
//! built from a six digit hex string or from a numeric triple, encoded back
//! to hex, stretched into an evenly spaced ramp with [`Color::to`], and
//! blended with another color with [`Color::blend`].
//!
//! # Examples
//!
//! ## Hex Round Trip
//!
//! ```rust
//! use stylewriter_color::Color;
//!
//! let color = Color::from_hex("1F8a3c").unwrap();
//! assert_eq!(color.rgb(), [31.0, 138.0, 60.0]);
//! assert_eq!(color.hex(), "1f8a3c");
//! ```
//!
//! ## Ramps
//!
//! ```rust
//! use stylewriter_color::Color;
//!
//! let red = Color::from_hex("ff0000").unwrap();
//! let blue = Color::from_hex("0000ff").unwrap();
//!
//! let ramp: Vec<String> = red.to(&blue, 3).unwrap().iter().map(Color::hex).collect();
//! assert_eq!(ramp, ["ff0000", "800080", "0000ff"]);
//! ```
//!
//! ## Blending
//!
//! ```rust
//! use stylewriter_color::{BlendMode, Color};
//!
//! let black = Color::from_hex("000000").unwrap();
//! let white = Color::from_hex("ffffff").unwrap();
//!
//! assert_eq!(black.blend(&white, 0.5).unwrap(), "808080");
//! assert_eq!(white.blend_with(&black, 0.25, BlendMode::MinSpan).unwrap(), "404040");
//! assert!(black.blend(&white, 1.5).is_err());
//! ```

pub mod blend;
pub mod color;
pub mod hex;
pub mod ramp;

// Re-export main types
pub use blend::BlendMode;
pub use color::{Color, ColorInput};

pub use stylewriter_core::{Error, Result};
