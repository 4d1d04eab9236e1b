//! Unit categories and conversion tables
//!
//! Every table lists `(unit name, factor)` pairs in display order, where the
//! factor is how many base units of the category equal one of that unit.

use serde::{Deserialize, Serialize};

/// Category of units the converter understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitCategory {
    Length,
    Weight,
    Time,
    Speed,
    Temperature,
    Currency,
}

/// How values inside a category are scaled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// Pure multiplication by a per-unit factor
    Linear(&'static [(&'static str, f64)]),
    /// Factors come from the active rate provider
    Rates,
    /// Offset and scale through Celsius
    Temperature,
}

impl UnitCategory {
    /// All categories in display order
    pub const ALL: [UnitCategory; 6] = [
        UnitCategory::Length,
        UnitCategory::Weight,
        UnitCategory::Time,
        UnitCategory::Speed,
        UnitCategory::Temperature,
        UnitCategory::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Length",
            UnitCategory::Weight => "Weight",
            UnitCategory::Time => "Time",
            UnitCategory::Speed => "Speed",
            UnitCategory::Temperature => "Temperature",
            UnitCategory::Currency => "Currency",
        }
    }

    /// Exact-name lookup; no case folding or aliases
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// The unit every factor in this category is expressed against
    pub fn base_unit(&self) -> &'static str {
        match self {
            UnitCategory::Length => "Meter",
            UnitCategory::Weight => "Kilogram",
            UnitCategory::Time => "Second",
            UnitCategory::Speed => "Meters/Second",
            UnitCategory::Temperature => "Celsius",
            UnitCategory::Currency => BASE_CURRENCY,
        }
    }

    pub fn scale(&self) -> Scale {
        match self {
            UnitCategory::Length => Scale::Linear(LENGTH_UNITS),
            UnitCategory::Weight => Scale::Linear(WEIGHT_UNITS),
            UnitCategory::Time => Scale::Linear(TIME_UNITS),
            UnitCategory::Speed => Scale::Linear(SPEED_UNITS),
            UnitCategory::Currency => Scale::Rates,
            UnitCategory::Temperature => Scale::Temperature,
        }
    }

    /// Whether conversion is a pure scaling (everything but temperature)
    pub fn is_linear(&self) -> bool {
        !matches!(self.scale(), Scale::Temperature)
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Offset between Celsius and Kelvin
pub const KELVIN_OFFSET: f64 = 273.15;
/// Fahrenheit reading at the freezing point of water
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == name)
    }

    /// Normalize a reading in this scale to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Express a Celsius reading in this scale
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => (celsius * 9.0 / 5.0) + FAHRENHEIT_OFFSET,
            TemperatureUnit::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

// ============================================================================
// Linear Tables
// ============================================================================

/// Length units, base Meter
pub const LENGTH_UNITS: &[(&str, f64)] = &[
    ("Kilometer", 1000.0),
    ("Meter", 1.0),
    ("Centimeter", 0.01),
    ("Millimeter", 0.001),
    ("Feet", 0.3048),
    ("Inches", 0.0254),
];

/// Weight units, base Kilogram
pub const WEIGHT_UNITS: &[(&str, f64)] = &[
    ("Ton", 1000.0),
    ("Kilogram", 1.0),
    ("Gram", 0.001),
    ("Milligram", 0.000001),
    ("Pound", 0.453592),
];

/// Time units, base Second
pub const TIME_UNITS: &[(&str, f64)] = &[
    ("Day", 86400.0),
    ("Hour", 3600.0),
    ("Minute", 60.0),
    ("Second", 1.0),
];

/// Speed units, base Meters/Second
pub const SPEED_UNITS: &[(&str, f64)] = &[
    ("Meters/Second", 1.0),
    ("Kilometers/Hour", 0.277778),
    ("Miles/Hour", 0.44704),
];

// ============================================================================
// Currency
// ============================================================================

/// Currency every rate is quoted against
pub const BASE_CURRENCY: &str = "INR";

/// Fixed exchange rates: units of each currency bought by one INR
pub const CURRENCY_RATES: &[(&str, f64)] = &[
    ("INR", 1.0),
    ("USD", 0.012),
    ("EUR", 0.011),
    ("JPY", 1.80),
    ("GBP", 0.0095),
];

/// Look up a unit's factor in a linear table
pub fn table_factor(table: &[(&'static str, f64)], unit: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

/// Unit names of a linear table in display order
pub fn table_units(table: &[(&'static str, f64)]) -> Vec<&'static str> {
    table.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_TABLES: [&[(&str, f64)]; 5] = [
        LENGTH_UNITS,
        WEIGHT_UNITS,
        TIME_UNITS,
        SPEED_UNITS,
        CURRENCY_RATES,
    ];

    #[test]
    fn test_factors_positive_and_finite() {
        for table in ALL_TABLES {
            for (name, factor) in table {
                assert!(factor.is_finite() && *factor > 0.0, "bad factor for {}", name);
            }
        }
    }

    #[test]
    fn test_unit_names_unique() {
        for table in ALL_TABLES {
            let names: HashSet<_> = table.iter().map(|(n, _)| *n).collect();
            assert_eq!(names.len(), table.len());
        }
    }

    #[test]
    fn test_base_unit_has_factor_one() {
        for category in UnitCategory::ALL {
            match category.scale() {
                Scale::Linear(table) => {
                    assert_eq!(table_factor(table, category.base_unit()), Some(1.0));
                }
                Scale::Rates => {
                    assert_eq!(table_factor(CURRENCY_RATES, category.base_unit()), Some(1.0));
                }
                Scale::Temperature => {
                    assert_eq!(
                        TemperatureUnit::from_name(category.base_unit()),
                        Some(TemperatureUnit::Celsius)
                    );
                }
            }
        }
    }

    #[test]
    fn test_category_from_name_is_exact() {
        assert_eq!(UnitCategory::from_name("Length"), Some(UnitCategory::Length));
        assert_eq!(UnitCategory::from_name("Currency"), Some(UnitCategory::Currency));
        assert_eq!(UnitCategory::from_name("length"), None);
        assert_eq!(UnitCategory::from_name("Volume"), None);
    }

    #[test]
    fn test_only_temperature_is_affine() {
        let affine: Vec<_> = UnitCategory::ALL
            .into_iter()
            .filter(|c| !c.is_linear())
            .collect();
        assert_eq!(affine, vec![UnitCategory::Temperature]);
    }

    #[test]
    fn test_temperature_stages() {
        assert_eq!(TemperatureUnit::Fahrenheit.to_celsius(212.0), 100.0);
        assert_eq!(TemperatureUnit::Kelvin.to_celsius(273.15), 0.0);
        assert_eq!(TemperatureUnit::Fahrenheit.from_celsius(-40.0), -40.0);
        assert_eq!(TemperatureUnit::Kelvin.from_celsius(0.0), 273.15);
        assert_eq!(TemperatureUnit::from_name("kelvin"), None);
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(table_factor(LENGTH_UNITS, "Feet"), Some(0.3048));
        assert_eq!(table_factor(LENGTH_UNITS, "Parsec"), None);
        assert_eq!(
            table_units(TIME_UNITS),
            vec!["Day", "Hour", "Minute", "Second"]
        );
    }
}
