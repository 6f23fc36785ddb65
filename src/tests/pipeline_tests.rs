//! # End-to-End Pipeline Tests
//!
//! These tests exercise the full derive-and-render path over synthetic
//! series, the way the binary wires it together: raw samples and tide events
//! in, a finished terminal panel out. No network access; fetch parsing has
//! its own fixture tests in the library.

use chrono::{DateTime, TimeZone, Utc};
use surf_forecast_lib::metrics::{self, PhaseState};
use surf_forecast_lib::renderer::{self, RenderOptions};
use surf_forecast_lib::{TideEvent, TideEventKind, WindSample, WindSeries};

fn hour(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 29, h, 0, 0).unwrap()
}

/// A synthetic day: wind swinging from ideal ENE through onshore SW.
fn synthetic_day() -> WindSeries {
    let samples = (0..24)
        .map(|h| WindSample {
            time: hour(h),
            speed_kmh: 10.0 + h as f64,
            bearing_deg: (70.0 + h as f64 * 10.0) % 360.0,
        })
        .collect();
    WindSeries {
        samples,
        unavailable: false,
    }
}

fn synthetic_tides() -> Vec<TideEvent> {
    vec![
        TideEvent {
            time: hour(4),
            height_m: 1.42,
            kind: TideEventKind::High,
        },
        TideEvent {
            time: hour(10),
            height_m: 0.28,
            kind: TideEventKind::Low,
        },
        TideEvent {
            time: hour(16),
            height_m: 1.51,
            kind: TideEventKind::High,
        },
        TideEvent {
            time: hour(22),
            height_m: 0.33,
            kind: TideEventKind::Low,
        },
    ]
}

/// Full happy path: derive a day, resolve the phase, render the panel.
#[test]
fn full_day_derives_and_renders() {
    let series = synthetic_day();
    let hourly = metrics::derive_hourly(&series, 70.0);
    assert_eq!(hourly.len(), 24);

    // Hour 0 blows exactly from the ideal bearing
    assert_eq!(hourly[0].score, 10.0);
    assert_eq!(hourly[0].color, "#00ff00");

    // Hour 18 blows from 250°, exactly opposed to 70°
    assert_eq!(hourly[18].score, 0.0);
    assert_eq!(hourly[18].color, "#ff0000");

    let phase = metrics::resolve_phase(hour(12), &synthetic_tides());
    assert_eq!(phase.state, PhaseState::Rising);

    let opts = RenderOptions {
        color: false,
        chart_width: 30,
    };
    let panel = renderer::render_beach("Praia do Norte", 70.0, &hourly, &phase, 12, &opts);

    assert!(panel.contains("=== Praia do Norte ==="));
    assert!(panel.contains("12:00 UTC"));
    assert!(panel.contains("rising"));
    assert!(panel.contains("16:00"));
    // One chart row per forecast hour
    assert!(panel.matches('\n').count() >= 24);
}

/// A failed wind fetch must still produce a usable panel with tide info.
#[test]
fn unavailable_wind_still_renders_tide_phase() {
    let hourly = metrics::derive_hourly(&WindSeries::unavailable(), 70.0);
    let phase = metrics::resolve_phase(hour(12), &synthetic_tides());

    let opts = RenderOptions {
        color: false,
        chart_width: 30,
    };
    let panel = renderer::render_beach("Praia da Barra", 130.0, &hourly, &phase, 12, &opts);

    assert!(panel.contains("wind data unavailable for this hour"));
    assert!(panel.contains("rising"));
}

/// A failed tide fetch degrades to the unknown phase, not a crash.
#[test]
fn missing_tides_degrade_to_unknown() {
    let series = synthetic_day();
    let hourly = metrics::derive_hourly(&series, 70.0);
    let phase = metrics::resolve_phase(hour(12), &[]);

    assert_eq!(phase.state, PhaseState::Unknown);

    let opts = RenderOptions {
        color: false,
        chart_width: 30,
    };
    let panel = renderer::render_beach("Praia do Norte", 70.0, &hourly, &phase, 12, &opts);
    assert!(panel.contains("tide unknown (no data)"));
}

/// Scrubbing past the day's last tide event reports the last peak.
#[test]
fn late_scrub_reports_last_peak() {
    let phase = metrics::resolve_phase(hour(23), &synthetic_tides());
    assert_eq!(phase.state, PhaseState::AtLow);
    assert!(phase.detail.contains("last peak"));
    assert!(phase.detail.contains("0.33"));
}

/// Derived metrics are value objects: deriving twice gives equal output.
#[test]
fn derivation_is_repeatable() {
    let series = synthetic_day();
    let first = metrics::derive_hourly(&series, 70.0);
    let second = metrics::derive_hourly(&series, 70.0);
    assert_eq!(first, second);
}
