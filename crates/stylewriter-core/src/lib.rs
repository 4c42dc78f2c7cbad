//! Core types shared by the stylewriter crates
//!
//! This crate holds the pieces every other crate in the workspace leans on:
//!
//! - [`Error`] / [`Result`]: one error taxonomy for breaks, colors and
//!   choropleth configuration
//! - [`Numeric`]: the element types a dataset may be made of
//! - [`validate`]: dataset and parameter checks applied at every public
//!   entry point
//!
//! # Example
//!
//! ```rust
//! use stylewriter_core::{validate, Error};
//!
//! let values = validate::dataset(&[3_u32, 1, 2]).unwrap();
//! assert_eq!(values, vec![3.0, 1.0, 2.0]);
//!
//! assert!(matches!(
//!     validate::bin_count(1),
//!     Err(Error::InvalidBinCount { requested: 1 })
//! ));
//! ```

pub mod error;
pub mod numeric;
pub mod validate;

// Re-export core types
pub use error::{Error, Result};
pub use numeric::Numeric;
