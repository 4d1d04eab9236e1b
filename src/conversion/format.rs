//! Input parsing and result display
//!
//! The converter works on full-precision `f64`; callers use these helpers to
//! turn user text into a value and to round the answer for display.

use serde::{Deserialize, Serialize};

use super::error::{ConversionError, ConversionResult};

/// Decimal places shown when nothing else is configured
pub const DEFAULT_DECIMALS: u32 = 2;
/// Largest precision accepted for display rounding
pub const MAX_DECIMALS: u32 = 10;

/// How to treat input text that is not a number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Reject with `InvalidNumber`
    #[default]
    Strict,
    /// Substitute `0.0`
    Tolerant,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Strict => "strict",
            ParseMode::Tolerant => "tolerant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Some(ParseMode::Strict),
            "tolerant" | "lenient" => Some(ParseMode::Tolerant),
            _ => None,
        }
    }
}

/// Parse a value typed by the user
pub fn parse_value(text: &str, mode: ParseMode) -> ConversionResult<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => match mode {
            ParseMode::Strict => Err(ConversionError::InvalidNumber(trimmed.to_string())),
            ParseMode::Tolerant => {
                tracing::warn!("Could not parse '{}' as a number, using 0.0", trimmed);
                Ok(0.0)
            }
        },
    }
}

/// Largest magnitude at which an `f64` still carries a fractional part
const FRACTION_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round to `decimals` places (capped at [`MAX_DECIMALS`]).
///
/// Ties round half away from zero, so `-0.125` becomes `-0.13`. Values too
/// large to have digits at that precision are returned unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals.min(MAX_DECIMALS) as i32);
    if !value.is_finite() || value.abs() >= FRACTION_LIMIT / scale {
        return value;
    }
    let rounded = (value * scale).round() / scale;
    // Avoid printing "-0.00"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounded value rendered with exactly `decimals` places
pub fn format_result(value: f64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_strict() {
        assert_eq!(parse_value("42", ParseMode::Strict), Ok(42.0));
        assert_eq!(parse_value("  -3.5 ", ParseMode::Strict), Ok(-3.5));
        assert_eq!(parse_value("1e3", ParseMode::Strict), Ok(1000.0));
        assert_eq!(
            parse_value("abc", ParseMode::Strict),
            Err(ConversionError::InvalidNumber("abc".to_string()))
        );
        assert!(parse_value("", ParseMode::Strict).is_err());
        assert!(parse_value("NaN", ParseMode::Strict).is_err());
        assert!(parse_value("inf", ParseMode::Strict).is_err());
    }

    #[test]
    fn test_parse_value_tolerant() {
        assert_eq!(parse_value("", ParseMode::Tolerant), Ok(0.0));
        assert_eq!(parse_value("12,5", ParseMode::Tolerant), Ok(0.0));
        assert_eq!(parse_value("7", ParseMode::Tolerant), Ok(7.0));
    }

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!(ParseMode::from_str("Strict"), Some(ParseMode::Strict));
        assert_eq!(ParseMode::from_str("tolerant"), Some(ParseMode::Tolerant));
        assert_eq!(ParseMode::from_str("sloppy"), None);
        assert_eq!(ParseMode::default(), ParseMode::Strict);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(27.77778, 2), 27.78);
        assert_eq!(round_to(8333.3333, 2), 8333.33);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(-0.001, 2), 0.0);
        assert_eq!(round_to(-0.125, 2), -0.13);
    }

    #[test]
    fn test_round_large_values_unchanged() {
        assert_eq!(round_to(1e300, 10), 1e300);
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(-f64::MAX, 0), -f64::MAX);
        assert_eq!(round_to(1e15 + 0.5, 2), 1e15 + 0.5);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(1000.0, 2), "1000.00");
        assert_eq!(format_result(27.777_78, 2), "27.78");
        assert_eq!(format_result(-0.001, 2), "0.00");
        assert_eq!(format_result(1.0 / 3.0, 4), "0.3333");
        assert_eq!(format_result(5.0, 0), "5");
    }

    #[test]
    fn test_format_large_result_is_finite() {
        let text = format_result(1e300, 10);
        assert!(text.starts_with("1000000000"), "got {}", text);
        assert!(!text.contains("inf"));
        assert!(text.ends_with(".0000000000"));
        assert!(!format_result(1e307, 2).contains("inf"));
    }
}
