//! Non-fatal configuration checks
//!
//! These mirror the clamping done during resolution and report it. Running
//! them is optional and does not change what gets resolved.

use crate::error::{LayoutIssue, LayoutIssues};
use crate::placement::clamp_line;
use crate::tracks::track_count;
use crate::types::{FluxGridProps, GridAxis, GridTracks, ItemProps, LayoutProps, TrackSize};

/// Check the base layout and every breakpoint of a grid
pub fn validate(props: &FluxGridProps) -> LayoutIssues {
    let mut issues = LayoutIssues::new();
    validate_layout_into(&props.layout, "", &mut issues);

    for (index, breakpoint) in props.breakpoints.iter().enumerate() {
        let name = breakpoint.label(index);
        if breakpoint.is_dead() {
            tracing::warn!("Breakpoint {name} has an empty width range and will never apply");
            issues.push(LayoutIssue::DeadBreakpoint {
                name: name.clone(),
                min_width: breakpoint.min_width.unwrap_or(f64::NEG_INFINITY),
                max_width: breakpoint.max_width.unwrap_or(f64::INFINITY),
            });
        }
        validate_layout_into(&breakpoint.layout, &format!("{name}."), &mut issues);
    }
    issues
}

pub fn validate_layout(layout: &LayoutProps) -> LayoutIssues {
    let mut issues = LayoutIssues::new();
    validate_layout_into(layout, "", &mut issues);
    issues
}

pub fn validate_item(item: &ItemProps) -> LayoutIssues {
    [
        ("col", item.col),
        ("row", item.row),
        ("colSpan", item.col_span),
        ("rowSpan", item.row_span),
    ]
    .into_iter()
    .filter_map(|(prop, value)| {
        let value = value?;
        (clamp_line(value) != value).then_some(LayoutIssue::ClampedLine { prop, value })
    })
    .collect()
}

fn validate_layout_into(layout: &LayoutProps, prefix: &str, issues: &mut LayoutIssues) {
    check_tracks(layout.columns.as_ref(), GridAxis::Columns, prefix, issues);
    check_tracks(layout.rows.as_ref(), GridAxis::Rows, prefix, issues);

    let sizes = [
        ("gap", &layout.gap),
        ("rowHeight", &layout.row_height),
        ("columnMin", &layout.column_min),
        ("columnMax", &layout.column_max),
        ("rowMin", &layout.row_min),
        ("rowMax", &layout.row_max),
    ];
    for (prop, size) in sizes {
        if let Some(size) = size {
            check_size(size, &format!("{prefix}{prop}"), issues);
        }
    }
}

fn check_tracks(
    tracks: Option<&GridTracks>,
    axis: GridAxis,
    prefix: &str,
    issues: &mut LayoutIssues,
) {
    let Some(tracks) = tracks else {
        return;
    };
    match tracks {
        GridTracks::Size(TrackSize::Number(count)) => match track_count(*count) {
            None => issues.push(LayoutIssue::NonFiniteTrackCount { axis }),
            Some(clamped) if clamped as f64 != count.trunc() => {
                issues.push(LayoutIssue::ClampedTrackCount {
                    axis,
                    count: *count,
                    clamped,
                })
            }
            Some(_) => {}
        },
        GridTracks::Size(size @ TrackSize::Css(_)) => {
            check_size(size, &format!("{prefix}{axis}"), issues)
        }
        GridTracks::List(list) => {
            for (index, size) in list.iter().enumerate() {
                check_size(size, &format!("{prefix}{axis}[{index}]"), issues);
            }
        }
        GridTracks::Auto(auto) => {
            for (bound, size) in [("min", &auto.min), ("max", &auto.max)] {
                if let Some(size) = size {
                    check_size(size, &format!("{prefix}{axis}.{bound}"), issues);
                }
            }
        }
    }
}

fn check_size(size: &TrackSize, prop: &str, issues: &mut LayoutIssues) {
    match size {
        TrackSize::Number(value) if *value < 0.0 => issues.push(LayoutIssue::NegativeSize {
            prop: prop.to_string(),
            value: *value,
        }),
        TrackSize::Css(css) if css.trim().is_empty() => issues.push(LayoutIssue::EmptyValue {
            prop: prop.to_string(),
        }),
        _ => {}
    }
}
