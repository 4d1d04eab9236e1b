//! Converter Tools module
//!
//! MCP tool implementations for the unit converter.

pub mod conversions;
pub mod status;
