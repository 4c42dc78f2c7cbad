//! The RGB color value type

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use stylewriter_core::{Error, Result};

use crate::hex;

/// Source a color can be built from
///
/// Deserializes from either a hex string or a three element number array,
/// so configuration files can use whichever form is at hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// Six hex digits, `rrggbb`, optionally prefixed with `#`
    Hex(String),
    /// Red, green and blue channel values
    Rgb([f64; 3]),
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<[f64; 3]> for ColorInput {
    fn from(rgb: [f64; 3]) -> Self {
        Self::Rgb(rgb)
    }
}

/// An RGB color
///
/// Channels are nominally in `[0, 255]` but are stored as given; rounding
/// and range handling happen when the color is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorInput", into = "String")]
pub struct Color {
    rgb: [f64; 3],
}

impl Color {
    /// Create a color from individual channel values
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self {
            rgb: [red, green, blue],
        }
    }

    /// Create a color from a channel triple, used verbatim
    pub fn from_rgb(rgb: [f64; 3]) -> Self {
        Self { rgb }
    }

    /// Parse a color from six hex digits
    ///
    /// Accepts upper or lower case digits and an optional leading `#`.
    /// Anything else fails with [`Error::InvalidColorEncoding`].
    pub fn from_hex(input: &str) -> Result<Self> {
        Ok(Self::from(hex::parse(input)?))
    }

    /// Channel values as `[red, green, blue]`
    pub fn rgb(&self) -> [f64; 3] {
        self.rgb
    }

    /// Red channel value
    pub fn red(&self) -> f64 {
        self.rgb[0]
    }

    /// Green channel value
    pub fn green(&self) -> f64 {
        self.rgb[1]
    }

    /// Blue channel value
    pub fn blue(&self) -> f64 {
        self.rgb[2]
    }

    /// Encode as six lowercase hex digits
    ///
    /// Each channel is rounded to the nearest integer and saturated to
    /// `[0, 255]` first, so the output is always well formed. Use
    /// [`Color::try_hex`] to reject out-of-range channels instead.
    pub fn hex(&self) -> String {
        hex::encode(self.rgb.map(hex::saturate))
    }

    /// Encode as six lowercase hex digits, failing on out-of-range channels
    pub fn try_hex(&self) -> Result<String> {
        let mut bytes = [0u8; 3];
        for (i, &name) in hex::CHANNELS.iter().enumerate() {
            bytes[i] = hex::checked(name, self.rgb[i])?;
        }
        Ok(hex::encode(bytes))
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_rgb(rgb.map(f64::from))
    }
}

impl From<[f64; 3]> for Color {
    fn from(rgb: [f64; 3]) -> Self {
        Self::from_rgb(rgb)
    }
}

impl TryFrom<ColorInput> for Color {
    type Error = Error;

    fn try_from(input: ColorInput) -> Result<Self> {
        match input {
            ColorInput::Hex(hex) => Self::from_hex(&hex),
            ColorInput::Rgb(rgb) => Ok(Self::from_rgb(rgb)),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.hex()
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
