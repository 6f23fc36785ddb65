//! # Surf Forecast Application Entry Point
//!
//! This binary fetches the day's wind forecast and tide extrema for each
//! configured beach, derives the per-hour surf quality metrics, and renders
//! one panel per beach to the terminal. It is designed to be run from a
//! periodic timer (cron/systemd); every run fetches fresh data and holds
//! nothing between runs.

// Test modules
#[cfg(test)]
mod tests;

use std::env;
use std::time::Duration;

use anyhow::Result;
use chrono::{NaiveDate, Timelike, Utc};
use surf_forecast_lib::{
    config::Config, forecast_data, metrics, renderer, renderer::RenderOptions, tide_data,
    WindSeries,
};

/// HTTP timeout for upstream fetches. Generous because both APIs are public
/// and occasionally slow, but bounded so a hung request cannot stall the
/// whole refresh.
const HTTP_TIMEOUT_SECS: u64 = 20;

/// Command line options for one run.
#[derive(Debug)]
struct CliArgs {
    /// Calendar day to display (defaults to today, UTC)
    date: NaiveDate,
    /// Scrubbed hour 0-23 (defaults to the current UTC hour)
    hour: u32,
    /// Disable ANSI color escapes
    no_color: bool,
}

fn parse_args() -> Result<CliArgs> {
    let now = Utc::now();
    let mut parsed = CliArgs {
        date: now.date_naive(),
        hour: now.hour(),
        no_color: false,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--no-color" => parsed.no_color = true,
            "--date" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--date requires a YYYY-MM-DD value"))?;
                parsed.date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("invalid --date {value:?}: {e}"))?;
            }
            "--hour" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--hour requires a value 0-23"))?;
                let hour: u32 = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid --hour {value:?}: {e}"))?;
                if hour > 23 {
                    return Err(anyhow::anyhow!("--hour must be 0-23, got {hour}"));
                }
                parsed.hour = hour;
            }
            other => {
                return Err(anyhow::anyhow!("unknown argument {other:?}"));
            }
        }
    }

    Ok(parsed)
}

/// Main application entry point.
fn main() -> Result<()> {
    let args = parse_args()?;
    let config = Config::load();

    let opts = RenderOptions {
        color: !args.no_color,
        chart_width: config.display.chart_width,
    };

    // The query instant for tide phase is the scrubbed hour, not "now":
    // scrubbing forward shows the phase the surfer would find at that hour
    let query_time = args
        .date
        .and_hms_opt(args.hour, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid hour {}", args.hour))?
        .and_utc();

    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new()?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    for beach in &config.beaches {
        // Fetch both sources with graceful degradation: either failure is
        // logged and replaced by its sentinel, never fatal
        let (wind, tides) = rt.block_on(async {
            let wind = forecast_data::fetch(&client, &config.sources.forecast_url, beach, args.date)
                .await
                .unwrap_or_else(|error| {
                    eprintln!("{}: wind forecast fetch failed: {}", beach.name, error);
                    WindSeries::unavailable()
                });

            let tides = tide_data::fetch(&client, &config.sources.tide_url, beach, args.date)
                .await
                .unwrap_or_else(|error| {
                    eprintln!("{}: tide fetch failed: {}", beach.name, error);
                    Vec::new()
                });

            (wind, tides)
        });

        let hourly = metrics::derive_hourly(&wind, beach.desired_bearing_deg);
        let phase = metrics::resolve_phase(query_time, &tides);

        renderer::draw(
            &beach.name,
            beach.desired_bearing_deg,
            &hourly,
            &phase,
            args.hour as usize,
            &opts,
        );
    }

    Ok(())
}
