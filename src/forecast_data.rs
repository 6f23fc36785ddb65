//! # Wind Forecast Fetching
//!
//! This module handles fetching the hourly wind forecast for a beach from an
//! Open-Meteo-style JSON API.
//!
//! ## Data Source
//!
//! The endpoint returns parallel hourly arrays for one calendar day:
//!
//! ```json
//! {
//!   "hourly": {
//!     "time": ["2026-08-29T00:00", "2026-08-29T01:00", ...],
//!     "wind_speed_10m": [12.4, 14.1, ...],
//!     "wind_direction_10m": [87.0, 92.0, ...]
//!   }
//! }
//! ```
//!
//! Timestamps are naive local-to-request strings; the request always asks for
//! UTC so they are interpreted as UTC here. Ragged arrays (one shorter than
//! the others) are truncated to the shortest length rather than rejected, so
//! a partially-delivered day still renders.
//!
//! ## Error Handling
//!
//! Network and decode failures surface as [`ForecastError`]; the caller
//! degrades to [`WindSeries::unavailable`] instead of exiting. No retries
//! here, and no caching: data is fetched fresh for the displayed day.

use crate::config::BeachConfig;
use crate::{WindSample, WindSeries};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while fetching or decoding the wind forecast.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// HTTP request failed (network, server, or protocol error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected hourly-arrays shape
    #[error("forecast decode failed: {0}")]
    Decode(String),
}

/// Hourly timestamp format used by the forecast API
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    time: Vec<String>,
    wind_speed_10m: Vec<f64>,
    wind_direction_10m: Vec<f64>,
}

/// Fetch the hourly wind forecast for one beach and one calendar day.
///
/// # Errors
/// Returns [`ForecastError`] on network failure, non-2xx status, or a
/// response body that cannot be decoded. Callers should substitute
/// [`WindSeries::unavailable`] and keep rendering.
pub async fn fetch(
    client: &reqwest::Client,
    base_url: &str,
    beach: &BeachConfig,
    date: NaiveDate,
) -> Result<WindSeries, ForecastError> {
    let day = date.format("%Y-%m-%d").to_string();
    let response = client
        .get(base_url)
        .query(&[
            ("latitude", beach.latitude.to_string()),
            ("longitude", beach.longitude.to_string()),
            ("hourly", "wind_speed_10m,wind_direction_10m".to_string()),
            ("timezone", "UTC".to_string()),
            ("start_date", day.clone()),
            ("end_date", day),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: ForecastResponse = response.json().await?;
    parse_hourly(body)
}

/// Turn the decoded hourly arrays into a [`WindSeries`].
///
/// Arrays are zipped and implicitly truncated to the shortest of the three.
fn parse_hourly(body: ForecastResponse) -> Result<WindSeries, ForecastError> {
    let HourlyBlock {
        time,
        wind_speed_10m,
        wind_direction_10m,
    } = body.hourly;
    let mut samples = Vec::with_capacity(time.len());

    for ((raw_time, speed), bearing) in time.iter().zip(wind_speed_10m).zip(wind_direction_10m) {
        let naive = NaiveDateTime::parse_from_str(raw_time, TIME_FORMAT)
            .map_err(|e| ForecastError::Decode(format!("bad timestamp {raw_time:?}: {e}")))?;
        samples.push(WindSample {
            time: naive.and_utc(),
            speed_kmh: speed,
            bearing_deg: bearing,
        });
    }

    Ok(WindSeries {
        samples,
        unavailable: false,
    })
}
