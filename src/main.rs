//! GreenRoute CLI - eco-friendly travel recommendations from the terminal.
//!
//! Usage:
//!   greenroute <origin> <destination> [OPTIONS]
//!
//! Credentials are read from the environment (or a `.env` file); run with
//! `--help` for the variable names.

use std::process::ExitCode;

use greenroute::TravelPreferences;

#[tokio::main]
async fn main() -> ExitCode {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let (origin, destination, preferences) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };

    let output =
        greenroute::get_eco_travel_recommendations(origin, destination, preferences).await;

    println!("{}", output.recommendation_text);

    if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn parse_args(args: Vec<String>) -> Result<(String, String, Option<TravelPreferences>), String> {
    let mut positional = Vec::new();
    let mut preferences = TravelPreferences::new();
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--walk" => {
                let km = parse_flag_value(iter.next(), "--walk")?;
                preferences = preferences.with_max_walking_distance(km);
            }
            "--time" => {
                let minutes = parse_flag_value(iter.next(), "--time")?;
                preferences = preferences.with_max_travel_time(minutes);
            }
            "--weather" => preferences = preferences.with_weather_priority(),
            "--air-quality" => preferences = preferences.with_air_quality_priority(),
            other if other.starts_with("--") => {
                return Err(format!("unknown option: {}", other));
            }
            _ => positional.push(arg),
        }
    }

    if positional.len() != 2 {
        return Err(format!(
            "expected <origin> and <destination>, got {} positional arguments",
            positional.len()
        ));
    }

    let [origin, destination]: [String; 2] = positional
        .try_into()
        .map_err(|_| "expected exactly two positional arguments".to_string())?;

    let preferences = if preferences.is_empty() {
        None
    } else {
        Some(preferences)
    };

    Ok((origin, destination, preferences))
}

fn parse_flag_value(value: Option<String>, flag: &str) -> Result<f64, String> {
    let raw = value.ok_or_else(|| format!("{} requires a value", flag))?;
    raw.parse()
        .map_err(|_| format!("{} must be a number, got '{}'", flag, raw))
}

fn print_usage() {
    println!(
        r#"greenroute - eco-friendly travel recommendations

USAGE:
    greenroute <origin> <destination> [OPTIONS]

OPTIONS:
    --walk <km>          Maximum walking distance in kilometers
    --time <minutes>     Maximum total travel time in minutes
    --weather            Prioritize weather comfort
    --air-quality        Prioritize air quality
    -h, --help           Show this help message

ENVIRONMENT:
    GREENROUTE__ENGINE__OPENAI_API_KEY          OpenAI API key
    GREENROUTE__PROVIDERS__GOOGLE_MAPS_API_KEY  Google Maps API key
    GREENROUTE__PROVIDERS__WEATHER_API_KEY      WeatherAPI.com API key
    GREENROUTE__PROVIDERS__AIR_QUALITY_API_KEY  Google Air Quality API key
    RUST_LOG                                    Log filter (default: info)

EXAMPLE:
    greenroute "Berkeley, CA" "San Francisco, CA" --walk 2 --air-quality"#
    );
}
