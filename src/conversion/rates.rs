//! Exchange-rate sourcing
//!
//! Currency conversion asks a [`RateProvider`] for rates instead of reading a
//! table directly, so a live source can replace the built-in constants.

use super::units::{table_factor, table_units, BASE_CURRENCY, CURRENCY_RATES};

/// Source of exchange rates quoted against a single base currency
pub trait RateProvider: Send + Sync {
    /// Code of the currency every rate is quoted against
    fn base_currency(&self) -> &str;

    /// Supported currency codes in display order
    fn currencies(&self) -> Vec<&str>;

    /// Units of `code` bought by one unit of the base currency
    fn rate(&self, code: &str) -> Option<f64>;

    /// How many base-currency units one unit of `code` is worth
    fn factor(&self, code: &str) -> Option<f64> {
        self.rate(code)
            .filter(|r| r.is_finite() && *r > 0.0)
            .map(|r| 1.0 / r)
    }
}

/// The compiled-in rate table
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRates;

impl RateProvider for FixedRates {
    fn base_currency(&self) -> &str {
        BASE_CURRENCY
    }

    fn currencies(&self) -> Vec<&str> {
        table_units(CURRENCY_RATES)
    }

    fn rate(&self, code: &str) -> Option<f64> {
        table_factor(CURRENCY_RATES, code)
    }
}
