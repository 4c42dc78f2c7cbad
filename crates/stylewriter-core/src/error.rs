//! Error types for classification and color operations
//!
//! Provides a unified error type for all stylewriter crates.

use thiserror::Error;

/// Core error type for stylewriter operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Fewer than two boundaries requested from a breaks algorithm or color ramp
    #[error("Invalid bin count: at least 2 breaks are required, got {requested}")]
    InvalidBinCount { requested: usize },

    /// Hex string that is not exactly six hex digits
    #[error("Invalid color encoding: {0}")]
    InvalidColorEncoding(String),

    /// Blend fraction outside [0, 1]
    #[error("Invalid blend fraction: {0} must be in [0, 1]")]
    InvalidBlendFraction(f64),

    /// Channel that cannot be encoded as a byte
    #[error("Channel out of range: {channel} = {value} does not fit in [0, 255]")]
    ChannelOutOfRange { channel: &'static str, value: f64 },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// NaN or infinite input
    #[error("Non-finite input: {0}")]
    NonFinite(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a malformed hex color
    pub fn invalid_hex(input: &str, reason: &str) -> Self {
        Self::InvalidColorEncoding(format!("{input:?} {reason}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::NonFinite(format!("{context} contains NaN or infinite value at index {index}"))
    }
}
