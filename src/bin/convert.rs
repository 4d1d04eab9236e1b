//! Command-line unit conversion
//! Usage: convert --category Length --value 1 --from Kilometer --to Meter

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unitconv::config::Config;
use unitconv::conversion::{
    default_converter, format_result, parse_value, resolve_category, unit_categories,
    ParseMode, MAX_DECIMALS,
};

#[derive(Parser)]
#[command(name = "convert")]
#[command(about = "Convert a value between units of the same category", long_about = None)]
#[command(version)]
struct Cli {
    /// Category: Length, Weight, Time, Speed, Temperature, or Currency
    #[arg(short, long, required_unless_present = "list")]
    category: Option<String>,

    /// Value to convert
    #[arg(short, long, allow_hyphen_values = true, required_unless_present = "list")]
    value: Option<String>,

    /// Unit to convert from
    #[arg(short, long, required_unless_present = "list")]
    from: Option<String>,

    /// Unit to convert to
    #[arg(short, long, required_unless_present = "list")]
    to: Option<String>,

    /// Decimal places in the printed result, 0 to 10 (overrides UNITCONV_DECIMALS)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=MAX_DECIMALS as i64))]
    decimals: Option<u32>,

    /// Treat an unparsable value as 0 instead of failing
    #[arg(long)]
    tolerant: bool,

    /// List categories, or the units of --category
    #[arg(short, long)]
    list: bool,
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = Config::from_env()?;
    if cli.tolerant {
        config.parse_mode = ParseMode::Tolerant;
    }
    if let Some(decimals) = cli.decimals {
        config.decimals = decimals;
    }

    if cli.list {
        let names = match cli.category.as_deref() {
            Some(category) => default_converter().units_for(category)?,
            None => unit_categories(),
        };
        return Ok(names.join("\n"));
    }

    let (Some(category), Some(value), Some(from), Some(to)) =
        (cli.category, cli.value, cli.from, cli.to)
    else {
        return Err("--category, --value, --from and --to are required".into());
    };

    let category = resolve_category(&category)?;
    let value = parse_value(&value, config.parse_mode)?;
    let result = default_converter().convert_in(category, value, &from, &to)?;

    Ok(format_result(result, config.decimals))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unitconv=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv::conversion::ConversionError;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("convert").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_converts_and_rounds() {
        let out = run(cli(&["-c", "Currency", "-v", "100", "-f", "USD", "-t", "INR"])).unwrap();
        assert_eq!(out, "8333.33");
    }

    #[test]
    fn test_negative_value() {
        let out = run(cli(&[
            "--category", "Temperature", "--value", "-40", "--from", "Celsius", "--to", "Fahrenheit",
        ]))
        .unwrap();
        assert_eq!(out, "-40.00");
    }

    #[test]
    fn test_unknown_unit_fails() {
        let err = run(cli(&["-c", "Length", "-v", "5", "-f", "Meter", "-t", "Parsec"])).unwrap_err();
        assert!(err.to_string().contains("Parsec"));
    }

    fn run_err(args: &[&str]) -> ConversionError {
        let err = run(cli(args)).unwrap_err();
        err.downcast_ref::<ConversionError>()
            .cloned()
            .unwrap_or_else(|| panic!("unexpected error: {}", err))
    }

    #[test]
    fn test_unknown_category_fails() {
        let err = run_err(&["-c", "Volume", "-v", "5", "-f", "Liter", "-t", "Gallon"]);
        assert_eq!(err, ConversionError::UnknownCategory("Volume".to_string()));
        assert!(err.to_string().contains("Volume"));
    }

    #[test]
    fn test_invalid_number_fails() {
        let err = run_err(&["-c", "Length", "-v", "abc", "-f", "Meter", "-t", "Feet"]);
        assert_eq!(err, ConversionError::InvalidNumber("abc".to_string()));
    }

    #[test]
    fn test_tolerant_treats_bad_value_as_zero() {
        let out = run(cli(&[
            "--tolerant", "-c", "Length", "-v", "abc", "-f", "Meter", "-t", "Feet",
        ]))
        .unwrap();
        assert_eq!(out, "0.00");
    }

    #[test]
    fn test_decimals_flag() {
        let out = run(cli(&["-c", "Length", "-v", "1", "-f", "Feet", "-t", "Meter", "-d", "4"])).unwrap();
        assert_eq!(out, "0.3048");

        let args = ["convert", "-c", "Length", "-v", "1", "-f", "Feet", "-t", "Meter", "-d", "50"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_list_units() {
        let out = run(cli(&["--list", "-c", "Speed"])).unwrap();
        assert_eq!(out, "Meters/Second\nKilometers/Hour\nMiles/Hour");
    }

    #[test]
    fn test_missing_arguments_rejected_by_parser() {
        assert!(Cli::try_parse_from(["convert", "-c", "Length"]).is_err());
    }
}
