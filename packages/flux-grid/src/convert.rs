//! Conversion of resolved grid props into [`taffy::Style`]
//!
//! Typed props convert directly. Raw CSS strings go through the grammar in
//! [`crate::parse`]; anything it does not understand falls back to the taffy
//! default for that property, the same way an invalid declaration is dropped
//! by a browser.

use taffy::prelude::{FromFr, TaffyAuto, TaffyFitContent, TaffyMaxContent, TaffyMinContent, TaffyZero};

use crate::parse::{self, Breadth, Component, RepeatCount, Track};
use crate::placement::clamp_line;
use crate::tracks::track_count;
use crate::types::{
    AspectRatio, AutoFlow, AutoTracks, GridAxis, GridTracks, ItemProps, LayoutProps, RepeatMode,
    TrackSize,
};

/// Taffy style of a grid container for already-merged layout props
pub fn to_taffy_style(layout: &LayoutProps) -> taffy::Style {
    taffy::Style {
        display: taffy::Display::Grid,
        grid_template_columns: grid_template_tracks(
            layout.columns.as_ref(),
            GridAxis::Columns,
            layout.column_min.as_ref(),
            layout.column_max.as_ref(),
        ),
        grid_template_rows: grid_template_tracks(
            layout.rows.as_ref(),
            GridAxis::Rows,
            layout.row_min.as_ref(),
            layout.row_max.as_ref(),
        ),
        grid_auto_rows: layout
            .row_height
            .as_ref()
            .map(grid_auto_tracks)
            .unwrap_or_default(),
        grid_auto_flow: layout
            .auto_flow
            .map(grid_auto_flow)
            .unwrap_or(taffy::GridAutoFlow::Row),
        gap: layout.gap.as_ref().map(gap).unwrap_or(taffy::Size {
            width: taffy::LengthPercentage::ZERO,
            height: taffy::LengthPercentage::ZERO,
        }),
        ..Default::default()
    }
}

/// Taffy style of a grid item
pub fn item_taffy_style(item: &ItemProps) -> taffy::Style {
    taffy::Style {
        grid_column: grid_line(item.col, item.col_span),
        grid_row: grid_line(item.row, item.row_span),
        aspect_ratio: item.aspect_ratio.as_ref().and_then(aspect_ratio),
        ..Default::default()
    }
}

#[inline]
pub fn grid_auto_flow(input: AutoFlow) -> taffy::GridAutoFlow {
    match input {
        AutoFlow::Row => taffy::GridAutoFlow::Row,
        AutoFlow::Column => taffy::GridAutoFlow::Column,
        AutoFlow::Dense | AutoFlow::RowDense => taffy::GridAutoFlow::RowDense,
        AutoFlow::ColumnDense => taffy::GridAutoFlow::ColumnDense,
    }
}

/// Same placement rules as the inline style: start line plus span, or span alone.
#[inline]
pub fn grid_line(start: Option<i32>, span: Option<i32>) -> taffy::Line<taffy::GridPlacement> {
    let span_of = |span: i32| -> taffy::GridPlacement {
        let span = u16::try_from(clamp_line(span)).unwrap_or(u16::MAX);
        taffy::style_helpers::span(span)
    };

    match (start, span) {
        (Some(start), span) => {
            let start = i16::try_from(clamp_line(start)).unwrap_or(i16::MAX);
            taffy::Line {
                start: taffy::style_helpers::line(start),
                end: span_of(span.unwrap_or(1)),
            }
        }
        (None, Some(span)) => taffy::Line {
            start: span_of(span),
            end: taffy::GridPlacement::Auto,
        },
        (None, None) => taffy::Line {
            start: taffy::GridPlacement::Auto,
            end: taffy::GridPlacement::Auto,
        },
    }
}

pub fn grid_template_tracks(
    input: Option<&GridTracks>,
    axis: GridAxis,
    fallback_min: Option<&TrackSize>,
    fallback_max: Option<&TrackSize>,
) -> Vec<taffy::GridTemplateComponent<String>> {
    let Some(input) = input else {
        return Vec::new();
    };

    match input {
        GridTracks::Size(TrackSize::Number(count)) => match track_count(*count) {
            Some(count) => vec![taffy::GridTemplateComponent::Repeat(
                taffy::GridTemplateRepetition {
                    count: taffy::RepetitionCount::Count(count),
                    tracks: vec![track_size(&Track::Single(Breadth::Fr(1.0)))],
                    line_names: Vec::new(),
                },
            )],
            None => Vec::new(),
        },
        GridTracks::Size(TrackSize::Css(css)) => match parse::template(css) {
            Some(components) => components.iter().map(template_component).collect(),
            None => {
                tracing::debug!("Unsupported {axis} template \"{css}\", using taffy default");
                Vec::new()
            }
        },
        GridTracks::List(list) => list
            .iter()
            .map(|size| {
                let track = list_track(size).unwrap_or(Track::Single(Breadth::Auto));
                taffy::GridTemplateComponent::Single(track_size(&track))
            })
            .collect(),
        GridTracks::Auto(auto) => vec![auto_repeat(auto, fallback_min, fallback_max)],
    }
}

fn list_track(size: &TrackSize) -> Option<Track> {
    match size {
        TrackSize::Number(px) => pixels(*px).map(Track::Single),
        TrackSize::Css(css) => {
            let track = parse::single_track(css);
            if track.is_none() {
                tracing::debug!("Unsupported track size \"{css}\", using auto");
            }
            track
        }
    }
}

fn auto_repeat(
    auto: &AutoTracks,
    fallback_min: Option<&TrackSize>,
    fallback_max: Option<&TrackSize>,
) -> taffy::GridTemplateComponent<String> {
    let min = bound(auto.min.as_ref(), fallback_min).unwrap_or(Breadth::Length(0.0));
    let max = bound(auto.max.as_ref(), fallback_max).unwrap_or(Breadth::Fr(1.0));
    let count = match auto.mode {
        RepeatMode::AutoFit => taffy::RepetitionCount::AutoFit,
        RepeatMode::AutoFill => taffy::RepetitionCount::AutoFill,
    };
    taffy::GridTemplateComponent::Repeat(taffy::GridTemplateRepetition {
        count,
        tracks: vec![track_size(&Track::MinMax(min, max))],
        line_names: Vec::new(),
    })
}

fn bound(own: Option<&TrackSize>, fallback: Option<&TrackSize>) -> Option<Breadth> {
    own.and_then(breadth).or_else(|| fallback.and_then(breadth))
}

fn breadth(size: &TrackSize) -> Option<Breadth> {
    match size {
        TrackSize::Number(px) => pixels(*px),
        TrackSize::Css(css) => parse::single_breadth(css),
    }
}

fn pixels(px: f64) -> Option<Breadth> {
    px.is_finite().then(|| Breadth::Length(px.max(0.0) as f32))
}

#[inline]
pub fn grid_auto_tracks(input: &TrackSize) -> Vec<taffy::TrackSizingFunction> {
    let tracks = match input {
        TrackSize::Number(px) => pixels(*px).map(|breadth| vec![Track::Single(breadth)]),
        TrackSize::Css(css) => parse::track_list(css),
    };
    match tracks {
        Some(tracks) => tracks.iter().map(track_size).collect(),
        None => {
            tracing::debug!("Unsupported row height {input:?}, using taffy default");
            Vec::new()
        }
    }
}

#[inline]
pub fn gap(input: &TrackSize) -> taffy::Size<taffy::LengthPercentage> {
    let (row, column) = match input {
        TrackSize::Number(px) => match pixels(*px) {
            Some(breadth) => (breadth, breadth),
            None => (Breadth::Length(0.0), Breadth::Length(0.0)),
        },
        TrackSize::Css(css) => parse::gap(css).unwrap_or_else(|| {
            tracing::debug!("Unsupported gap \"{css}\", using 0");
            (Breadth::Length(0.0), Breadth::Length(0.0))
        }),
    };
    taffy::Size {
        width: length_percentage(&column),
        height: length_percentage(&row),
    }
}

#[inline]
pub fn aspect_ratio(input: &AspectRatio) -> Option<f32> {
    match input {
        AspectRatio::Number(value) if value.is_finite() && *value > 0.0 => Some(*value as f32),
        AspectRatio::Number(_) => None,
        AspectRatio::Css(css) => parse::ratio(css),
    }
}

fn template_component(input: &Component) -> taffy::GridTemplateComponent<String> {
    match input {
        Component::Track(track) => taffy::GridTemplateComponent::Single(track_size(track)),
        Component::Repeat(count, tracks) => {
            taffy::GridTemplateComponent::Repeat(taffy::GridTemplateRepetition {
                count: track_repeat(*count),
                tracks: tracks.iter().map(track_size).collect(),
                line_names: Vec::new(),
            })
        }
    }
}

#[inline]
fn track_repeat(input: RepeatCount) -> taffy::RepetitionCount {
    match input {
        RepeatCount::Count(count) => taffy::RepetitionCount::Count(count),
        RepeatCount::AutoFill => taffy::RepetitionCount::AutoFill,
        RepeatCount::AutoFit => taffy::RepetitionCount::AutoFit,
    }
}

#[inline]
fn track_size(input: &Track) -> taffy::TrackSizingFunction {
    match input {
        Track::Single(breadth) => taffy::MinMax {
            min: min_track(breadth),
            max: max_track(breadth),
        },
        Track::MinMax(min, max) => taffy::MinMax {
            min: min_track(min),
            max: max_track(max),
        },
        Track::FitContent(limit) => taffy::MinMax {
            min: taffy::MinTrackSizingFunction::AUTO,
            max: match limit {
                Breadth::Length(_) | Breadth::Percent(_) => {
                    taffy::MaxTrackSizingFunction::fit_content(length_percentage(limit))
                }
                // rejected by the grammar
                _ => taffy::MaxTrackSizingFunction::AUTO,
            },
        },
    }
}

#[inline]
fn min_track(input: &Breadth) -> taffy::MinTrackSizingFunction {
    match input {
        Breadth::Length(_) | Breadth::Percent(_) => {
            taffy::MinTrackSizingFunction::from(length_percentage(input))
        }
        // `fr` is not a valid minimum
        Breadth::Fr(_) => taffy::MinTrackSizingFunction::AUTO,
        Breadth::Auto => taffy::MinTrackSizingFunction::AUTO,
        Breadth::MinContent => taffy::MinTrackSizingFunction::MIN_CONTENT,
        Breadth::MaxContent => taffy::MinTrackSizingFunction::MAX_CONTENT,
    }
}

#[inline]
fn max_track(input: &Breadth) -> taffy::MaxTrackSizingFunction {
    match input {
        Breadth::Length(_) | Breadth::Percent(_) => {
            taffy::MaxTrackSizingFunction::from(length_percentage(input))
        }
        Breadth::Fr(value) => taffy::MaxTrackSizingFunction::from_fr(value.max(0.0)),
        Breadth::Auto => taffy::MaxTrackSizingFunction::AUTO,
        Breadth::MinContent => taffy::MaxTrackSizingFunction::MIN_CONTENT,
        Breadth::MaxContent => taffy::MaxTrackSizingFunction::MAX_CONTENT,
    }
}

#[inline]
fn length_percentage(input: &Breadth) -> taffy::LengthPercentage {
    match input {
        Breadth::Length(px) => taffy::style_helpers::length(px.max(0.0)),
        Breadth::Percent(fraction) => taffy::style_helpers::percent(fraction.max(0.0)),
        _ => taffy::LengthPercentage::ZERO,
    }
}
