//! Conversion dispatch
//!
//! Resolves a category and converts a value between two of its units.
//! Linear categories go through the category's base unit:
//! `value * factor(from) / factor(to)`. Temperature goes through Celsius.

use tracing::debug;

use super::error::{ConversionError, ConversionResult};
use super::rates::{FixedRates, RateProvider};
use super::units::{table_factor, table_units, Scale, TemperatureUnit, UnitCategory};

/// Category the UI starts on
pub const DEFAULT_CATEGORY: UnitCategory = UnitCategory::Length;
/// Unit preselected on both sides at startup
pub const DEFAULT_UNIT: &str = "Meter";

/// Converter over the built-in tables and a rate provider for currency
#[derive(Debug, Clone, Default)]
pub struct Converter<R = FixedRates> {
    rates: R,
}

impl Converter<FixedRates> {
    pub const fn new() -> Self {
        Self { rates: FixedRates }
    }
}

impl<R: RateProvider> Converter<R> {
    /// Use a different exchange-rate source for currency conversions
    pub fn with_rates(rates: R) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &R {
        &self.rates
    }

    /// Selectable units of a category in display order. Currencies the
    /// provider lists without a usable rate are left out.
    pub fn units(&self, category: UnitCategory) -> Vec<&str> {
        match category.scale() {
            Scale::Linear(table) => table_units(table),
            Scale::Rates => self
                .rates
                .currencies()
                .into_iter()
                .filter(|code| self.rates.factor(code).is_some())
                .collect(),
            Scale::Temperature => TemperatureUnit::ALL.iter().map(|u| u.as_str()).collect(),
        }
    }

    /// String-keyed variant of [`Converter::units`]
    pub fn units_for(&self, category: &str) -> ConversionResult<Vec<&str>> {
        Ok(self.units(resolve_category(category)?))
    }

    /// Base units per one `unit`. Temperature has no factor and always fails.
    pub fn factor(&self, category: UnitCategory, unit: &str) -> ConversionResult<f64> {
        let factor = match category.scale() {
            Scale::Linear(table) => table_factor(table, unit),
            Scale::Rates => self.rates.factor(unit),
            Scale::Temperature => None,
        };
        factor.ok_or_else(|| ConversionError::unknown_unit(category, unit))
    }

    /// Convert `value` from one unit to another within `category`
    pub fn convert_in(
        &self,
        category: UnitCategory,
        value: f64,
        from: &str,
        to: &str,
    ) -> ConversionResult<f64> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidNumber(value.to_string()));
        }

        let result = match category.scale() {
            Scale::Temperature => affine_convert(value, from, to)?,
            Scale::Linear(_) | Scale::Rates => {
                let from_factor = self.factor(category, from)?;
                let to_factor = self.factor(category, to)?;
                if from == to {
                    value
                } else {
                    value * from_factor / to_factor
                }
            }
        };

        if !result.is_finite() {
            return Err(ConversionError::OutOfRange {
                value: value.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        debug!(%category, value, from, to, result, "converted");
        Ok(result)
    }

    /// String-keyed variant of [`Converter::convert_in`]
    pub fn convert(&self, category: &str, value: f64, from: &str, to: &str) -> ConversionResult<f64> {
        self.convert_in(resolve_category(category)?, value, from, to)
    }

    /// Units preselected when the user switches to `category`: the first unit
    /// on the "from" side and the second (or first, if alone) on the "to" side
    pub fn default_units(&self, category: UnitCategory) -> Option<(&str, &str)> {
        let units = self.units(category);
        let from = *units.first()?;
        let to = units.get(1).copied().unwrap_or(from);
        Some((from, to))
    }
}

static DEFAULT_CONVERTER: Converter = Converter::new();

/// The process-wide converter backed by the fixed rate table
pub fn default_converter() -> &'static Converter {
    &DEFAULT_CONVERTER
}

/// Category names in display order
pub fn unit_categories() -> Vec<&'static str> {
    UnitCategory::ALL.iter().map(|c| c.as_str()).collect()
}

/// Selectable unit names for a category in display order
pub fn units_for(category: &str) -> ConversionResult<Vec<&'static str>> {
    DEFAULT_CONVERTER.units_for(category)
}

/// Convert `value` between two units of the named category
pub fn convert(category: &str, value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    DEFAULT_CONVERTER.convert(category, value, from, to)
}

/// Default "from" and "to" units for a category
pub fn default_units(category: UnitCategory) -> Option<(&'static str, &'static str)> {
    DEFAULT_CONVERTER.default_units(category)
}

/// Category and units selected before the user touches anything
pub fn default_selection() -> (UnitCategory, &'static str, &'static str) {
    (DEFAULT_CATEGORY, DEFAULT_UNIT, DEFAULT_UNIT)
}

/// Temperature conversion through Celsius
pub fn affine_convert(value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    let from = temperature_unit(from)?;
    let to = temperature_unit(to)?;
    Ok(to.from_celsius(from.to_celsius(value)))
}

/// Parse a category name, failing with `UnknownCategory`
pub fn resolve_category(name: &str) -> ConversionResult<UnitCategory> {
    UnitCategory::from_name(name).ok_or_else(|| ConversionError::UnknownCategory(name.to_string()))
}

fn temperature_unit(name: &str) -> ConversionResult<TemperatureUnit> {
    TemperatureUnit::from_name(name)
        .ok_or_else(|| ConversionError::unknown_unit(UnitCategory::Temperature, name))
}
