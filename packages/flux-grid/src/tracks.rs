//! Track resolution: `columns` / `rows` props to `grid-template-*` values
//!
//! A number has two distinct roles. As the whole value of `columns` / `rows` it
//! is a track *count* ([`track_count`]), everywhere else it is a *size* in
//! pixels ([`track_length`]). Both clamp out-of-range input instead of emitting
//! invalid CSS, and an empty result means "no override".

use crate::types::{AutoTracks, GridAxis, GridTracks, LayoutProps, TrackSize};

/// Largest repeat count accepted by layout engines (taffy stores it as `u16`)
pub const MAX_TRACK_COUNT: u16 = u16::MAX;

const DEFAULT_AUTO_MIN: &str = "0";
const DEFAULT_AUTO_MAX: &str = "1fr";

/// Resolve a `columns` / `rows` value into a `grid-template-*` string.
///
/// `fallback_min` / `fallback_max` are the axis bounds used by auto-tracks
/// descriptors that omit their own `min` / `max`.
pub fn resolve_tracks(
    value: Option<&GridTracks>,
    axis: GridAxis,
    fallback_min: Option<&TrackSize>,
    fallback_max: Option<&TrackSize>,
) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let resolved = match value {
        GridTracks::Size(TrackSize::Number(count)) => match track_count(*count) {
            Some(count) => format!("repeat({count}, 1fr)"),
            None => String::new(),
        },
        GridTracks::Size(TrackSize::Css(template)) => {
            if template.trim().is_empty() {
                String::new()
            } else {
                template.clone()
            }
        }
        // One entry per element. An element is one track, so it is a single
        // token unless it is a function such as `minmax(100px, 1fr)`.
        GridTracks::List(tracks) => tracks
            .iter()
            .map(|track| track_length(track).unwrap_or_else(|| "auto".to_string()))
            .collect::<Vec<_>>()
            .join(" "),
        GridTracks::Auto(auto) => auto_tracks(auto, fallback_min, fallback_max),
    };

    if resolved.is_empty() {
        tracing::debug!("No {axis} template resolved from {value:?}, using engine default");
    }
    resolved
}

/// Resolve the template of one axis of `props`, with that axis' min/max as fallbacks.
pub fn resolve_axis(props: &LayoutProps, axis: GridAxis) -> String {
    match axis {
        GridAxis::Columns => resolve_tracks(
            props.columns.as_ref(),
            axis,
            props.column_min.as_ref(),
            props.column_max.as_ref(),
        ),
        GridAxis::Rows => resolve_tracks(
            props.rows.as_ref(),
            axis,
            props.row_min.as_ref(),
            props.row_max.as_ref(),
        ),
    }
}

/// Interpret a number as a track count: truncated and clamped to `1..=MAX_TRACK_COUNT`.
///
/// Returns `None` for NaN and infinities.
pub fn track_count(count: f64) -> Option<u16> {
    if !count.is_finite() {
        return None;
    }
    let count = count.trunc().clamp(1.0, MAX_TRACK_COUNT as f64);
    Some(count as u16)
}

/// Interpret a size as a single CSS length.
///
/// Numbers become pixels (negative clamps to `0px`), strings pass through.
/// Returns `None` for NaN, infinities and blank strings.
pub fn track_length(size: &TrackSize) -> Option<String> {
    match size {
        TrackSize::Number(px) => pixels(*px),
        TrackSize::Css(css) => {
            if css.trim().is_empty() {
                None
            } else {
                Some(css.clone())
            }
        }
    }
}

fn pixels(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    if value <= 0.0 {
        return Some("0px".to_string());
    }
    Some(format!("{value}px"))
}

fn auto_tracks(
    auto: &AutoTracks,
    fallback_min: Option<&TrackSize>,
    fallback_max: Option<&TrackSize>,
) -> String {
    let min = bound(auto.min.as_ref(), fallback_min, DEFAULT_AUTO_MIN);
    let max = bound(auto.max.as_ref(), fallback_max, DEFAULT_AUTO_MAX);
    format!("repeat({}, minmax({min}, {max}))", auto.mode.as_css())
}

/// First of `own`, `fallback`, `default` that resolves to a length
fn bound(own: Option<&TrackSize>, fallback: Option<&TrackSize>, default: &str) -> String {
    own.and_then(track_length)
        .or_else(|| fallback.and_then(track_length))
        .unwrap_or_else(|| default.to_string())
}
