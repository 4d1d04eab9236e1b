//! Unit conversion module
//!
//! Static unit tables, the conversion dispatch, exchange-rate sourcing and
//! display helpers.

pub mod converter;
pub mod error;
pub mod format;
pub mod rates;
pub mod units;

pub use converter::{
    affine_convert, convert, default_converter, default_selection, default_units,
    resolve_category, unit_categories, units_for, Converter,
};
pub use error::{ConversionError, ConversionResult};
pub use format::{format_result, parse_value, round_to, ParseMode, DEFAULT_DECIMALS, MAX_DECIMALS};
pub use rates::{FixedRates, RateProvider};
pub use units::{Scale, TemperatureUnit, UnitCategory};
