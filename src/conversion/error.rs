//! Conversion error types

use thiserror::Error;

/// Errors raised by a conversion request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: String, unit: String },

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Converting {value} {from} to {to} overflows")]
    OutOfRange {
        value: String,
        from: String,
        to: String,
    },
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

impl ConversionError {
    pub(crate) fn unknown_unit(category: impl ToString, unit: &str) -> Self {
        ConversionError::UnknownUnit {
            category: category.to_string(),
            unit: unit.to_string(),
        }
    }
}
