//! Converter Status Tool
//!
//! Provides runtime status information about the converter service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::config::Config;
use crate::conversion::ParseMode;

/// Usage guide returned by the converter_instructions tool
pub const CONVERTER_INSTRUCTIONS: &str = r#"
# Unit Converter Instructions

Converts a number between two units of the same category.

## Workflow

1. Call `list_categories` to see the available categories.
2. Call `list_units` with a category to get its units, in display order,
   plus the default "from" and "to" units.
3. Call `convert` with `category`, `value`, `from_unit` and `to_unit`.
   Use `convert_all` to convert into every unit of the category at once.

## Categories

| Category | Base unit | Units |
|----------|-----------|-------|
| Length | Meter | Kilometer, Meter, Centimeter, Millimeter, Feet, Inches |
| Weight | Kilogram | Ton, Kilogram, Gram, Milligram, Pound |
| Time | Second | Day, Hour, Minute, Second |
| Speed | Meters/Second | Meters/Second, Kilometers/Hour, Miles/Hour |
| Temperature | Celsius | Celsius, Fahrenheit, Kelvin |
| Currency | INR | INR, USD, EUR, JPY, GBP |

## Rules

- Category and unit names are matched exactly, including case.
  "kilometer" or "km" will be rejected; use "Kilometer".
- A unit from one category cannot be used in another.
- Currency rates are fixed constants, not live market rates.
- `result` is full precision; `display` is rounded (2 decimals by default,
  override with `decimals`).
- Values that are not numbers are rejected unless the server runs in
  tolerant mode, where they are treated as 0.

## Examples

```
convert(category: "Length", value: "1", from_unit: "Kilometer", to_unit: "Meter")
  -> result 1000, display "1000.00"

convert(category: "Temperature", value: "100", from_unit: "Celsius", to_unit: "Fahrenheit")
  -> result 212, display "212.00"

convert(category: "Currency", value: "100", from_unit: "USD", to_unit: "INR")
  -> display "8333.33"
```
"#;

/// Runtime status of the converter service
#[derive(Debug, Clone, Serialize)]
pub struct ConverterStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub build_profile: &'static str,
    /// Active configuration
    pub parse_mode: ParseMode,
    pub decimals: u32,
    /// Usage counters
    pub conversions_performed: u64,
    pub conversions_failed: u64,
    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    config: Config,
    conversions_performed: u64,
    conversions_failed: u64,
}

impl StatusTracker {
    pub fn new(config: Config) -> Self {
        Self {
            start_time: Instant::now(),
            config,
            conversions_performed: 0,
            conversions_failed: 0,
        }
    }

    /// Count a finished conversion request
    pub fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.conversions_performed += 1;
        } else {
            self.conversions_failed += 1;
        }
    }

    pub fn get_status(&self) -> ConverterStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        ConverterStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            build_profile: build_info.profile,
            parse_mode: self.config.parse_mode,
            decimals: self.config.decimals,
            conversions_performed: self.conversions_performed,
            conversions_failed: self.conversions_failed,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_counts_conversions() {
        let mut tracker = StatusTracker::new(Config::default());
        tracker.record(true);
        tracker.record(true);
        tracker.record(false);

        let status = tracker.get_status();
        assert_eq!(status.conversions_performed, 2);
        assert_eq!(status.conversions_failed, 1);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.decimals, 2);
        assert_eq!(status.build_profile, crate::build_info::BUILD_PROFILE);
    }

    #[test]
    fn test_instructions_list_every_category() {
        for category in crate::conversion::unit_categories() {
            assert!(CONVERTER_INSTRUCTIONS.contains(category));
        }
    }
}
