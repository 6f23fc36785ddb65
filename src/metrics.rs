//! # Derived Forecast Metrics
//!
//! Pure functions that turn raw forecast values into everything the dashboard
//! displays: cardinal direction labels, 0-10 surf quality scores, gradient
//! display colors, and tide phase classifications.
//!
//! ## Contracts
//!
//! Every function here is pure, deterministic, and total over its stated
//! domain. None of them touch I/O, global state, or the clock; the tide phase
//! resolver takes the query instant as an argument. Malformed input degrades
//! to explicit sentinel values ([`CardinalDirection::Undefined`],
//! [`PhaseState::Unknown`]) rather than panicking, so a partially-broken
//! upstream payload never takes down the whole pipeline.
//!
//! ## Scoring Model
//!
//! Surf quality is modeled as pure wind alignment: each beach has a desired
//! wind bearing, and quality decreases linearly with the shortest angular
//! distance between forecast and desired bearing. 0° apart scores 10.0,
//! 180° apart scores 0.0. The color gradient maps that score onto
//! red → yellow → green with yellow exactly at the midpoint.

use crate::{TideEvent, TideEventKind, WindSample, WindSeries};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-width of the "at the peak" tide window, in minutes.
///
/// A query instant closer than this to the next extremum is classified as
/// being at that extremum rather than trending toward it. The window is
/// checked against the next event only, never the previous one, so a query
/// just after a peak is classified by its trend toward the following
/// extremum.
const PEAK_WINDOW_MINS: i64 = 15;

/// One of the 8 principal compass directions, or the sentinel for input
/// that fails every sector test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardinalDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
    /// Bearing could not be classified (non-finite input)
    Undefined,
}

impl fmt::Display for CardinalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardinalDirection::N => "N",
            CardinalDirection::NE => "NE",
            CardinalDirection::E => "E",
            CardinalDirection::SE => "SE",
            CardinalDirection::S => "S",
            CardinalDirection::SW => "SW",
            CardinalDirection::W => "W",
            CardinalDirection::NW => "NW",
            CardinalDirection::Undefined => "undefined",
        };
        f.write_str(label)
    }
}

/// Tide phase at a queried instant, derived from the day's extremum events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseState {
    /// Within the peak window of a high-water event, or past the day's
    /// final event which was a high
    AtHigh,
    /// Within the peak window of a low-water event, or past the day's
    /// final event which was a low
    AtLow,
    /// Trending toward the next high water
    Rising,
    /// Trending toward the next low water
    Falling,
    /// No tide data available
    Unknown,
}

/// Resolved tide phase plus a human-readable detail line for the panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TidePhase {
    pub state: PhaseState,
    /// Next/last extremum height and time, or "no data"
    pub detail: String,
}

/// Everything the renderer needs for one forecast hour.
///
/// Immutable value object produced once per hour per beach; the renderer
/// owns all mutable presentation state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourlyMetrics {
    pub time: DateTime<Utc>,
    pub speed_kmh: f64,
    pub bearing_deg: f64,
    pub cardinal: CardinalDirection,
    pub score: f64,
    /// Display color as lowercase "#rrggbb"
    pub color: String,
}

/// Map a compass bearing to one of the 8 cardinal directions.
///
/// Sectors are 45° wide, centered on the compass points, with half-open
/// boundaries: N covers `(337.5, 360) ∪ [0, 22.5]`, then each subsequent
/// sector is `(lower, upper]` at 22.5° increments. Bearings outside
/// `[0, 360)` (negative, or ≥ 360) are folded onto the circle first, so
/// `classify(-45.0)` and `classify(315.0)` both yield NW.
///
/// Non-finite input cannot be placed on the circle and yields the explicit
/// [`CardinalDirection::Undefined`] sentinel instead of panicking.
///
/// # Example
/// ```
/// use surf_forecast_lib::metrics::{classify, CardinalDirection};
///
/// assert_eq!(classify(0.0), CardinalDirection::N);
/// assert_eq!(classify(90.0), CardinalDirection::E);
/// assert_eq!(classify(22.51), CardinalDirection::NE);
/// ```
pub fn classify(bearing_deg: f64) -> CardinalDirection {
    if !bearing_deg.is_finite() {
        return CardinalDirection::Undefined;
    }

    // Fold onto [0, 360) so the sector tests below are exhaustive
    let b = bearing_deg.rem_euclid(360.0);

    if b > 337.5 || b <= 22.5 {
        CardinalDirection::N
    } else if b <= 67.5 {
        CardinalDirection::NE
    } else if b <= 112.5 {
        CardinalDirection::E
    } else if b <= 157.5 {
        CardinalDirection::SE
    } else if b <= 202.5 {
        CardinalDirection::S
    } else if b <= 247.5 {
        CardinalDirection::SW
    } else if b <= 292.5 {
        CardinalDirection::W
    } else {
        CardinalDirection::NW
    }
}

/// Score how well an observed wind bearing matches the desired bearing.
///
/// The angular distance is the shortest way around the circle (wraparound
/// across 0°/360° handled), so `score(350.0, 10.0)` is a 20° difference,
/// not 340°. Quality decreases linearly: 10.0 at 0° apart, 0.0 at 180°
/// apart. The result is rounded to one decimal place.
///
/// Symmetric in its arguments; returns 10.0 iff the bearings are identical
/// modulo 360 and 0.0 iff they are exactly opposed.
///
/// # Example
/// ```
/// use surf_forecast_lib::metrics::score;
///
/// assert_eq!(score(90.0, 90.0), 10.0);
/// assert_eq!(score(10.0, 190.0), 0.0);
/// assert_eq!(score(350.0, 10.0), 8.9);
/// ```
pub fn score(observed_deg: f64, desired_deg: f64) -> f64 {
    let mut distance = (observed_deg - desired_deg).abs() % 360.0;
    if distance > 180.0 {
        distance = 360.0 - distance;
    }
    let raw = 10.0 - (distance / 180.0) * 10.0;

    // One decimal place, standard rounding
    (raw * 10.0).round() / 10.0
}

/// Map a 0-10 score to a display color on a red → yellow → green gradient.
///
/// The score is clamped to `[0, 10]` and normalized to `[0, 1]`. The lower
/// half of the gradient holds red at 255 and ramps green up; the upper half
/// holds green at 255 and ramps red down. Blue is always 0, which puts pure
/// yellow exactly at score 5.
///
/// Output is a lowercase `#rrggbb` string with zero-padded channels. A
/// non-finite score is treated as 0 (full red) so the renderer always gets
/// a valid color.
///
/// # Example
/// ```
/// use surf_forecast_lib::metrics::colorize;
///
/// assert_eq!(colorize(0.0), "#ff0000");
/// assert_eq!(colorize(5.0), "#ffff00");
/// assert_eq!(colorize(10.0), "#00ff00");
/// ```
pub fn colorize(score: f64) -> String {
    let clamped = if score.is_finite() {
        score.clamp(0.0, 10.0)
    } else {
        0.0
    };
    let v = clamped / 10.0;

    let (r, g) = if v <= 0.5 {
        (255u8, (255.0 * v * 2.0).round() as u8)
    } else {
        ((255.0 * (1.0 - (v - 0.5) * 2.0)).round() as u8, 255u8)
    };

    format!("#{:02x}{:02x}00", r, g)
}

/// Classify the tide phase at `query` from the day's extremum events.
///
/// Events may arrive empty, unsorted, or sparse; this sorts a copy before
/// searching. The classification looks at the first event strictly after
/// the query instant:
///
/// - no events at all → [`PhaseState::Unknown`], detail "no data"
/// - no event after the query → at the last event's extremum
///   (the day's data has run out; report its height as the last peak)
/// - next event within [`PEAK_WINDOW_MINS`] → at that extremum
/// - otherwise → [`PhaseState::Rising`] toward a high,
///   [`PhaseState::Falling`] toward a low
///
/// Times in detail strings are formatted as UTC `HH:MM`.
pub fn resolve_phase(query: DateTime<Utc>, events: &[TideEvent]) -> TidePhase {
    if events.is_empty() {
        return TidePhase {
            state: PhaseState::Unknown,
            detail: "no data".to_string(),
        };
    }

    let mut sorted = events.to_vec();
    // Stable sort; duplicate timestamps keep their relative input order
    sorted.sort_by_key(|event| event.time);

    let next = sorted.iter().find(|event| event.time > query);

    let Some(next) = next else {
        // Query is past every event for the day
        let last = sorted[sorted.len() - 1];
        let state = match last.kind {
            TideEventKind::High => PhaseState::AtHigh,
            TideEventKind::Low => PhaseState::AtLow,
        };
        return TidePhase {
            state,
            detail: format!(
                "last peak {:.2} m at {}",
                last.height_m,
                last.time.format("%H:%M")
            ),
        };
    };

    if next.time - query < Duration::minutes(PEAK_WINDOW_MINS) {
        let (state, word) = match next.kind {
            TideEventKind::High => (PhaseState::AtHigh, "high"),
            TideEventKind::Low => (PhaseState::AtLow, "low"),
        };
        return TidePhase {
            state,
            detail: format!("{} water now, {:.2} m", word, next.height_m),
        };
    }

    let (state, word) = match next.kind {
        TideEventKind::High => (PhaseState::Rising, "high"),
        TideEventKind::Low => (PhaseState::Falling, "low"),
    };
    TidePhase {
        state,
        detail: format!(
            "{} water {:.2} m at {}",
            word,
            next.height_m,
            next.time.format("%H:%M")
        ),
    }
}

/// Derive the full per-hour metric series for one beach.
///
/// Runs every sample through [`classify`], [`score`], and [`colorize`] and
/// returns immutable records for the renderer. An unavailable series yields
/// an empty vector.
pub fn derive_hourly(series: &WindSeries, desired_deg: f64) -> Vec<HourlyMetrics> {
    series
        .samples
        .iter()
        .map(|sample| derive_one(sample, desired_deg))
        .collect()
}

fn derive_one(sample: &WindSample, desired_deg: f64) -> HourlyMetrics {
    let quality = score(sample.bearing_deg, desired_deg);
    HourlyMetrics {
        time: sample.time,
        speed_kmh: sample.speed_kmh,
        bearing_deg: sample.bearing_deg,
        cardinal: classify(sample.bearing_deg),
        score: quality,
        color: colorize(quality),
    }
}
