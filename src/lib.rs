//! Unit Converter Library
//!
//! Converts values between units of length, weight, time, speed,
//! temperature, and currency.

pub mod build_info;
pub mod config;
pub mod conversion;
pub mod mcp;
pub mod tools;

pub use conversion::{convert, unit_categories, units_for, ConversionError, UnitCategory};
