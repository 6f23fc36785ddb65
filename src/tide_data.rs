//! # Tide Extrema Fetching
//!
//! This module fetches the day's predicted tide extrema (high and low water
//! events) for a beach from a marine-API-style JSON endpoint.
//!
//! ## Data Source
//!
//! The endpoint returns a flat list of extremum events:
//!
//! ```json
//! {
//!   "extremes": [
//!     { "time": "2026-08-29T04:12:00Z", "height": 1.42, "type": "HIGH" },
//!     { "time": "2026-08-29T10:33:00Z", "height": 0.28, "type": "LOW" }
//!   ]
//! }
//! ```
//!
//! The list is not guaranteed to be sorted; sorting is the phase resolver's
//! job, not the fetcher's. Events whose `type` is neither HIGH nor LOW
//! (case-insensitive) are skipped so one malformed entry cannot poison the
//! batch.
//!
//! ## Error Handling
//!
//! Network and decode failures surface as [`TideError`]; the caller degrades
//! to an empty event list, which the phase resolver reports as "no data".

use crate::config::BeachConfig;
use crate::{TideEvent, TideEventKind};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while fetching or decoding tide extrema.
#[derive(Error, Debug)]
pub enum TideError {
    /// HTTP request failed (network, server, or protocol error)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the expected extrema-list shape
    #[error("tide decode failed: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct TideResponse {
    extremes: Vec<RawExtreme>,
}

#[derive(Debug, Deserialize)]
struct RawExtreme {
    time: String,
    height: f64,
    #[serde(rename = "type")]
    kind: String,
}

/// Fetch the day's tide extrema for one beach.
///
/// # Errors
/// Returns [`TideError`] on network failure, non-2xx status, or an
/// undecodable body. Callers should substitute an empty event list and keep
/// rendering; [`crate::metrics::resolve_phase`] turns that into the
/// "no data" phase.
pub async fn fetch(
    client: &reqwest::Client,
    base_url: &str,
    beach: &BeachConfig,
    date: NaiveDate,
) -> Result<Vec<TideEvent>, TideError> {
    let response = client
        .get(base_url)
        .query(&[
            ("latitude", beach.latitude.to_string()),
            ("longitude", beach.longitude.to_string()),
            ("date", date.format("%Y-%m-%d").to_string()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: TideResponse = response.json().await?;
    parse_extremes(body)
}

/// Turn the decoded extrema list into [`TideEvent`]s.
///
/// Unrecognized event kinds are skipped; a bad timestamp is a decode error
/// since it means the payload format changed under us.
fn parse_extremes(body: TideResponse) -> Result<Vec<TideEvent>, TideError> {
    let mut events = Vec::with_capacity(body.extremes.len());

    for raw in body.extremes {
        let kind = match raw.kind.to_ascii_uppercase().as_str() {
            "HIGH" => TideEventKind::High,
            "LOW" => TideEventKind::Low,
            _ => continue,
        };

        let time = raw
            .time
            .parse::<DateTime<Utc>>()
            .map_err(|e| TideError::Decode(format!("bad timestamp {:?}: {e}", raw.time)))?;

        events.push(TideEvent {
            time,
            height_m: raw.height,
            kind,
        });
    }

    Ok(events)
}
