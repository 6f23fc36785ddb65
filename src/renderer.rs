//! # Dashboard Rendering
//!
//! This module renders the per-beach forecast panel and hourly score chart to
//! the terminal. It is a pure sink: all values arrive pre-computed from
//! [`crate::metrics`], and all presentation state (colors on/off, chart
//! width, selected hour) lives here.
//!
//! ## Color Handling
//!
//! Scores carry their display color as a `#rrggbb` string from
//! [`crate::metrics::colorize`]. When color output is enabled the hex string
//! is translated to a 24-bit ANSI foreground escape; with `--no-color` the
//! same layout renders in plain text, which keeps output diffable in tests.
//!
//! ## Bearing Arrows
//!
//! Arrow glyphs point in the compass direction of the bearing (the original
//! drafts disagreed between `bearing - 90°` and `bearing + 180°` rotation;
//! this renderer standardizes on `bearing - 90°` applied to an
//! east-pointing glyph, which is equivalent to "arrow points along the
//! bearing"). With only 8 terminal glyphs available the rotation is
//! quantized through the same sector logic as the cardinal labels.

use crate::metrics::{classify, CardinalDirection, HourlyMetrics, PhaseState, TidePhase};

/// Presentation options owned by the rendering layer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit 24-bit ANSI color escapes
    pub color: bool,
    /// Width of the hourly score bar chart in characters
    pub chart_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            color: true,
            chart_width: 40,
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Translate a `#rrggbb` color string into a 24-bit ANSI foreground escape.
///
/// Returns `None` for anything that is not exactly 6 lowercase-hex digits
/// behind a `#`, so a malformed color degrades to uncolored text instead of
/// corrupting the terminal.
fn ansi_fg(hex: &str) -> Option<String> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(format!("\x1b[38;2;{};{};{}m", r, g, b))
}

/// Wrap `text` in the color escape for `hex` when color output is enabled.
fn paint(text: &str, hex: &str, opts: &RenderOptions) -> String {
    if !opts.color {
        return text.to_string();
    }
    match ansi_fg(hex) {
        Some(escape) => format!("{escape}{text}{ANSI_RESET}"),
        None => text.to_string(),
    }
}

/// Pick the arrow glyph for a bearing.
///
/// Quantized to the 8 cardinal sectors; unclassifiable bearings render as
/// `?` so the panel stays aligned.
pub fn arrow_for_bearing(bearing_deg: f64) -> char {
    match classify(bearing_deg) {
        CardinalDirection::N => '↑',
        CardinalDirection::NE => '↗',
        CardinalDirection::E => '→',
        CardinalDirection::SE => '↘',
        CardinalDirection::S => '↓',
        CardinalDirection::SW => '↙',
        CardinalDirection::W => '←',
        CardinalDirection::NW => '↖',
        CardinalDirection::Undefined => '?',
    }
}

fn phase_label(state: PhaseState) -> &'static str {
    match state {
        PhaseState::AtHigh => "at high tide",
        PhaseState::AtLow => "at low tide",
        PhaseState::Rising => "rising",
        PhaseState::Falling => "falling",
        PhaseState::Unknown => "tide unknown",
    }
}

/// Render the complete panel for one beach.
///
/// `selected` is the scrubbed hour index into `metrics`. An index past the
/// end of the series (or an empty series from a failed fetch) renders the
/// explicit unavailable line rather than panicking.
pub fn render_beach(
    name: &str,
    desired_bearing_deg: f64,
    metrics: &[HourlyMetrics],
    phase: &TidePhase,
    selected: usize,
    opts: &RenderOptions,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n", name));

    match metrics.get(selected) {
        None => {
            out.push_str("wind data unavailable for this hour\n");
        }
        Some(hour) => {
            let score_text = format!("{:.1}", hour.score);
            out.push_str(&format!(
                "{} UTC  score {} / 10\n",
                hour.time.format("%H:%M"),
                paint(&score_text, &hour.color, opts)
            ));
            out.push_str(&format!(
                "wind     {} {} ({:.0}°) at {:.0} km/h\n",
                arrow_for_bearing(hour.bearing_deg),
                hour.cardinal,
                hour.bearing_deg,
                hour.speed_kmh
            ));
            out.push_str(&format!(
                "ideal    {} {} ({:.0}°)\n",
                arrow_for_bearing(desired_bearing_deg),
                classify(desired_bearing_deg),
                desired_bearing_deg
            ));
        }
    }

    out.push_str(&format!(
        "tide     {} ({})\n",
        phase_label(phase.state),
        phase.detail
    ));

    if !metrics.is_empty() {
        out.push('\n');
        out.push_str(&render_chart(metrics, selected, opts));
    }

    out.push('\n');
    out
}

/// Render the hourly score bar chart, one row per forecast hour.
fn render_chart(metrics: &[HourlyMetrics], selected: usize, opts: &RenderOptions) -> String {
    let mut out = String::new();

    for (index, hour) in metrics.iter().enumerate() {
        let clamped = hour.score.clamp(0.0, 10.0);
        let bar_len = ((clamped / 10.0) * opts.chart_width as f64).round() as usize;
        let bar: String = "█".repeat(bar_len);

        let marker = if index == selected { '▶' } else { ' ' };
        out.push_str(&format!(
            "{} {} {:>4.1} {}\n",
            marker,
            hour.time.format("%H:%M"),
            clamped,
            paint(&bar, &hour.color, opts)
        ));
    }

    out
}

/// Render one beach panel to stdout.
pub fn draw(
    name: &str,
    desired_bearing_deg: f64,
    metrics: &[HourlyMetrics],
    phase: &TidePhase,
    selected: usize,
    opts: &RenderOptions,
) {
    print!(
        "{}",
        render_beach(name, desired_bearing_deg, metrics, phase, selected, opts)
    );
}
