//! Error types for huekit.
//!
//! The conversion functions themselves are total and never fail; errors only
//! arise at the edges where colors are built from untrusted input.

use thiserror::Error;

/// Errors produced when constructing colors from external data.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A component slice had the wrong number of elements.
    #[error("wrong number of color components: expected {expected}, got {got}")]
    WrongArity { expected: &'static str, got: usize },
}
