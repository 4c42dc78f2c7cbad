//! Six digit hex encoding of RGB channels

use stylewriter_core::{Error, Result};
use tracing::debug;

/// Number of hex digits in an encoded color
pub const HEX_DIGITS: usize = 6;

/// Channel names in encoding order
pub const CHANNELS: [&str; 3] = ["red", "green", "blue"];

/// Parse `rrggbb` (case-insensitive, optional leading `#`) into channel bytes
pub fn parse(input: &str) -> Result<[u8; 3]> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    if digits.len() != HEX_DIGITS {
        debug!(input, "rejected hex color with wrong length");
        return Err(Error::invalid_hex(input, "must be exactly 6 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        debug!(input, "rejected hex color with non-hex characters");
        return Err(Error::invalid_hex(input, "contains non-hex characters"));
    }

    // All digits are ASCII, so byte offsets are char boundaries
    let byte = |i: usize| {
        u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| Error::invalid_hex(input, "contains non-hex characters"))
    };
    Ok([byte(0)?, byte(1)?, byte(2)?])
}

/// Encode channel bytes as six lowercase hex digits
pub fn encode(bytes: [u8; 3]) -> String {
    format!("{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
}

/// Round and saturate a channel into a byte
///
/// NaN saturates to 0.
pub fn saturate(channel: f64) -> u8 {
    channel.round().clamp(0.0, 255.0) as u8
}

/// Round a channel into a byte, failing when it does not fit
pub fn checked(name: &'static str, channel: f64) -> Result<u8> {
    let rounded = channel.round();
    if !(0.0..=255.0).contains(&rounded) {
        return Err(Error::ChannelOutOfRange {
            channel: name,
            value: channel,
        });
    }
    Ok(rounded as u8)
}
