//! # Surf Forecast Core Library
//!
//! This library provides the data structures and derived-metrics logic for the
//! surf forecast dashboard. The dashboard tracks two fixed beach locations,
//! pulling hourly wind forecasts from a public weather API and tide extremum
//! predictions from a tide API, then scoring each forecast hour for surf
//! quality based on how well the predicted wind bearing matches the beach's
//! ideal bearing.
//!
//! ## Design Philosophy
//!
//! ### Pure metrics, impure edges
//! All derived values (cardinal labels, quality scores, display colors, tide
//! phases) come from pure functions in [`metrics`]. Network fetching lives in
//! [`forecast_data`] and [`tide_data`], rendering in [`renderer`]. A fetch
//! failure never crashes the pipeline: the affected series is replaced by an
//! explicit "unavailable" value and the renderer shows that state.
//!
//! ### Ephemeral data
//! Everything is fetched fresh for the displayed day and dropped afterwards.
//! No cache, no persistence, no cross-run state.
//!
//! ### Data Flow
//! 1. **Fetch**: hourly wind arrays + tide extrema for the configured day
//! 2. **Derive**: each hour → cardinal label, 0-10 score, display color
//! 3. **Resolve**: selected hour → tide phase and detail line
//! 4. **Render**: per-beach panel and hourly score chart on the terminal
//!
//! ## Core Types
//!
//! - [`WindSample`]: one forecast hour of wind speed and bearing
//! - [`WindSeries`]: a day of hourly samples plus an availability flag
//! - [`TideEvent`]: one predicted tide extremum (high or low water)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod config;
pub mod forecast_data;
pub mod metrics;
pub mod renderer;
pub mod tide_data;

/// A single hourly wind forecast sample.
///
/// Bearings follow the meteorological convention used by the upstream API:
/// degrees clockwise from true north, describing the direction the wind
/// comes *from*. Values are kept as delivered; normalization happens inside
/// the metrics functions that consume them.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Utc};
/// use surf_forecast_lib::WindSample;
///
/// let sample = WindSample {
///     time: Utc.with_ymd_and_hms(2026, 8, 29, 14, 0, 0).unwrap(),
///     speed_kmh: 18.5,
///     bearing_deg: 92.0,
/// };
/// assert!(sample.bearing_deg < 360.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    /// Forecast hour (UTC)
    pub time: DateTime<Utc>,
    /// Wind speed at 10 m, km/h
    pub speed_kmh: f64,
    /// Wind bearing in degrees clockwise from true north
    pub bearing_deg: f64,
}

/// A full day of hourly wind samples for one beach.
///
/// When the upstream fetch fails, the dashboard substitutes an empty series
/// with `unavailable = true` so the renderer can show an explicit
/// "data unavailable" state instead of crashing or hiding the beach.
///
/// # Example
/// ```
/// use surf_forecast_lib::WindSeries;
///
/// let series = WindSeries::unavailable();
/// assert!(series.unavailable);
/// assert!(series.samples.is_empty());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindSeries {
    /// Hourly samples in chronological order (typically 24 per day)
    pub samples: Vec<WindSample>,
    /// True if the upstream fetch failed and this series carries no data
    pub unavailable: bool,
}

impl WindSeries {
    /// Sentinel series used when the forecast source could not be reached.
    pub fn unavailable() -> Self {
        WindSeries {
            samples: Vec::new(),
            unavailable: true,
        }
    }
}

/// Kind of a predicted tide extremum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TideEventKind {
    /// Local maximum of tide height (high water)
    High,
    /// Local minimum of tide height (low water)
    Low,
}

/// One predicted tide extremum for the displayed day.
///
/// Batches delivered by the tide source are not guaranteed to be sorted;
/// [`metrics::resolve_phase`] sorts before use. Well-formed data never has
/// two events at the same instant, but duplicates must not cause a panic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideEvent {
    /// Instant of the extremum (UTC)
    pub time: DateTime<Utc>,
    /// Predicted tide height in meters
    pub height_m: f64,
    /// High or low water
    pub kind: TideEventKind,
}
