//! Conversion MCP Tools
//!
//! Tools for listing categories and units and converting values.

use serde::Serialize;

use crate::config::Config;
use crate::conversion::{
    format_result, parse_value, resolve_category, ConversionResult, Converter, RateProvider,
    UnitCategory, MAX_DECIMALS,
};

/// Category entry for list_categories
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub base_unit: &'static str,
    pub linear: bool,
    pub unit_count: usize,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
    pub default_category: &'static str,
}

/// Response for list_units
#[derive(Debug, Serialize)]
pub struct ListUnitsResponse {
    pub category: &'static str,
    pub base_unit: &'static str,
    pub units: Vec<String>,
    pub default_from: Option<String>,
    pub default_to: Option<String>,
}

/// Input for convert
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub category: String,
    /// Raw input text, parsed according to the configured mode
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
    /// Overrides the configured display precision
    pub decimals: Option<u32>,
}

/// Response for convert
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub category: &'static str,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    /// Full-precision result
    pub result: f64,
    /// Result rounded for display
    pub display: String,
}

/// One target unit in a convert_all response
#[derive(Debug, Serialize)]
pub struct UnitResult {
    pub unit: String,
    pub result: f64,
    pub display: String,
}

/// Response for convert_all
#[derive(Debug, Serialize)]
pub struct ConvertAllResponse {
    pub category: &'static str,
    pub value: f64,
    pub from_unit: String,
    pub results: Vec<UnitResult>,
}

/// List every category with its base unit
pub fn list_categories<R: RateProvider>(converter: &Converter<R>) -> ListCategoriesResponse {
    let categories = UnitCategory::ALL
        .into_iter()
        .map(|category| CategorySummary {
            name: category.as_str(),
            base_unit: category.base_unit(),
            linear: category.is_linear(),
            unit_count: converter.units(category).len(),
        })
        .collect();

    let (default_category, _, _) = crate::conversion::default_selection();

    ListCategoriesResponse {
        categories,
        default_category: default_category.as_str(),
    }
}

/// List the selectable units of a category
pub fn list_units<R: RateProvider>(
    converter: &Converter<R>,
    category: &str,
) -> ConversionResult<ListUnitsResponse> {
    let category = resolve_category(category)?;
    let defaults = converter.default_units(category);

    Ok(ListUnitsResponse {
        category: category.as_str(),
        base_unit: category.base_unit(),
        units: converter
            .units(category)
            .into_iter()
            .map(String::from)
            .collect(),
        default_from: defaults.map(|(from, _)| from.to_string()),
        default_to: defaults.map(|(_, to)| to.to_string()),
    })
}

/// Convert a single value
pub fn convert<R: RateProvider>(
    converter: &Converter<R>,
    config: &Config,
    request: &ConvertRequest,
) -> ConversionResult<ConvertResponse> {
    let category = resolve_category(&request.category)?;
    let value = parse_value(&request.value, config.parse_mode)?;
    let decimals = display_decimals(config, request.decimals);

    let result = converter.convert_in(category, value, &request.from_unit, &request.to_unit)?;

    Ok(ConvertResponse {
        category: category.as_str(),
        value,
        from_unit: request.from_unit.clone(),
        to_unit: request.to_unit.clone(),
        result,
        display: format_result(result, decimals),
    })
}

/// Convert a value into every unit of its category
pub fn convert_all<R: RateProvider>(
    converter: &Converter<R>,
    config: &Config,
    category: &str,
    value: &str,
    from_unit: &str,
    decimals: Option<u32>,
) -> ConversionResult<ConvertAllResponse> {
    let category = resolve_category(category)?;
    let value = parse_value(value, config.parse_mode)?;
    let decimals = display_decimals(config, decimals);

    let results = converter
        .units(category)
        .into_iter()
        .map(|unit| {
            let result = converter.convert_in(category, value, from_unit, unit)?;
            Ok(UnitResult {
                unit: unit.to_string(),
                result,
                display: format_result(result, decimals),
            })
        })
        .collect::<ConversionResult<Vec<_>>>()?;

    Ok(ConvertAllResponse {
        category: category.as_str(),
        value,
        from_unit: from_unit.to_string(),
        results,
    })
}

fn display_decimals(config: &Config, requested: Option<u32>) -> u32 {
    requested.unwrap_or(config.decimals).min(MAX_DECIMALS)
}
