//! Tests for converting resolved grid props into taffy styles
#![cfg(feature = "taffy")]

use flux_grid::{AspectRatio, AutoTracks, GridTracks, ItemProps, LayoutProps, RepeatMode, TrackSize};
use taffy::prelude::*;
use taffy::{
    GridAutoFlow, GridTemplateComponent, MaxTrackSizingFunction, MinTrackSizingFunction,
    RepetitionCount,
};

fn layout_with_columns(columns: GridTracks) -> LayoutProps {
    LayoutProps {
        columns: Some(columns),
        ..Default::default()
    }
}

#[test]
fn test_container_is_a_grid() {
    let style = flux_grid::to_taffy_style(&LayoutProps::default());
    assert_eq!(style.display, Display::Grid);
    assert!(style.grid_template_columns.is_empty());
    assert!(style.grid_template_rows.is_empty());
    assert!(style.grid_auto_rows.is_empty());
}

#[test]
fn test_numeric_count_becomes_repeat() {
    let style = flux_grid::to_taffy_style(&layout_with_columns(3u32.into()));
    match &style.grid_template_columns[..] {
        [GridTemplateComponent::Repeat(repetition)] => {
            assert_eq!(repetition.count, RepetitionCount::Count(3));
            assert_eq!(repetition.tracks.len(), 1);
            assert_eq!(repetition.tracks[0].min, MinTrackSizingFunction::AUTO);
            assert_eq!(repetition.tracks[0].max, MaxTrackSizingFunction::from_fr(1.0));
        }
        other => panic!("unexpected tracks {other:?}"),
    }
}

#[test]
fn test_auto_tracks_become_auto_repeat() {
    let auto = AutoTracks {
        mode: RepeatMode::AutoFill,
        min: Some("100px".into()),
        max: None,
    };
    let style = flux_grid::to_taffy_style(&layout_with_columns(auto.into()));
    match &style.grid_template_columns[..] {
        [GridTemplateComponent::Repeat(repetition)] => {
            assert_eq!(repetition.count, RepetitionCount::AutoFill);
            assert_eq!(
                repetition.tracks[0].min,
                MinTrackSizingFunction::from_length(100.0)
            );
            assert_eq!(repetition.tracks[0].max, MaxTrackSizingFunction::from_fr(1.0));
        }
        other => panic!("unexpected tracks {other:?}"),
    }
}

#[test]
fn test_list_converts_each_track() {
    let columns = GridTracks::List(vec![
        TrackSize::from(200),
        "1fr".into(),
        "minmax(min-content, 40%)".into(),
        "10rem".into(),
    ]);
    let style = flux_grid::to_taffy_style(&layout_with_columns(columns));
    assert_eq!(style.grid_template_columns.len(), 4);

    let singles: Vec<_> = style
        .grid_template_columns
        .iter()
        .map(|component| match component {
            GridTemplateComponent::Single(track) => *track,
            other => panic!("unexpected component {other:?}"),
        })
        .collect();
    assert_eq!(singles[0].min, MinTrackSizingFunction::from_length(200.0));
    assert_eq!(singles[0].max, MaxTrackSizingFunction::from_length(200.0));
    assert_eq!(singles[1].max, MaxTrackSizingFunction::from_fr(1.0));
    assert_eq!(singles[2].min, MinTrackSizingFunction::MIN_CONTENT);
    assert_eq!(singles[2].max, MaxTrackSizingFunction::from_percent(0.4));
    // `rem` is not understood by the bridge and degrades to auto
    assert_eq!(singles[3].min, MinTrackSizingFunction::AUTO);
    assert_eq!(singles[3].max, MaxTrackSizingFunction::AUTO);
}

#[test]
fn test_css_template_is_parsed() {
    let style = flux_grid::to_taffy_style(&layout_with_columns(
        "240px repeat(auto-fit, minmax(120px, 1fr))".into(),
    ));
    assert_eq!(style.grid_template_columns.len(), 2);
    assert!(matches!(
        style.grid_template_columns[0],
        GridTemplateComponent::Single(_)
    ));
    match &style.grid_template_columns[1] {
        GridTemplateComponent::Repeat(repetition) => {
            assert_eq!(repetition.count, RepetitionCount::AutoFit)
        }
        other => panic!("unexpected component {other:?}"),
    }
}

#[test]
fn test_unsupported_template_falls_back_to_default() {
    let style = flux_grid::to_taffy_style(&layout_with_columns("[a] 1fr [b]".into()));
    assert!(style.grid_template_columns.is_empty());
}

#[test]
fn test_gap_row_height_and_flow() {
    let layout = LayoutProps {
        gap: Some("8px 5%".into()),
        row_height: Some(TrackSize::from(96)),
        auto_flow: Some(flux_grid::AutoFlow::ColumnDense),
        ..Default::default()
    };
    let style = flux_grid::to_taffy_style(&layout);

    assert_eq!(style.gap.height, LengthPercentage::from_length(8.0));
    assert_eq!(style.gap.width, LengthPercentage::from_percent(0.05));
    assert_eq!(style.grid_auto_rows.len(), 1);
    assert_eq!(
        style.grid_auto_rows[0].max,
        MaxTrackSizingFunction::from_length(96.0)
    );
    assert_eq!(style.grid_auto_flow, GridAutoFlow::ColumnDense);
}

#[test]
fn test_numeric_gap_applies_to_both_axes() {
    let layout = LayoutProps {
        gap: Some(TrackSize::from(12)),
        ..Default::default()
    };
    let style = flux_grid::to_taffy_style(&layout);
    assert_eq!(style.gap.width, LengthPercentage::from_length(12.0));
    assert_eq!(style.gap.height, LengthPercentage::from_length(12.0));
}

#[test]
fn test_item_placement() {
    let style = flux_grid::item_taffy_style(&ItemProps {
        col: Some(2),
        col_span: Some(3),
        row_span: Some(-4),
        aspect_ratio: Some(AspectRatio::from("16 / 9")),
        ..Default::default()
    });

    let expected_start: GridPlacement = line(2);
    assert_eq!(style.grid_column.start, expected_start);
    assert!(matches!(style.grid_column.end, GridPlacement::Span(3)));
    assert!(matches!(style.grid_row.start, GridPlacement::Span(1)));
    assert!(matches!(style.grid_row.end, GridPlacement::Auto));
    assert_eq!(style.aspect_ratio, Some(16.0 / 9.0));
}

#[test]
fn test_unplaced_item_is_auto() {
    let style = flux_grid::item_taffy_style(&ItemProps::default());
    assert!(matches!(style.grid_column.start, GridPlacement::Auto));
    assert!(matches!(style.grid_column.end, GridPlacement::Auto));
    assert_eq!(style.aspect_ratio, None);
}

#[test]
fn test_component_exposes_taffy_style() {
    let mut grid = flux_grid::FluxGrid::new(flux_grid::GridConfig::new(flux_grid::FluxGridProps {
        layout: layout_with_columns(2u32.into()),
        ..Default::default()
    }));
    grid.set_viewport_width(1024.0);
    assert_eq!(grid.taffy_style().display, Display::Grid);
    assert_eq!(grid.taffy_style().grid_template_columns.len(), 1);
}

#[test]
fn test_content_keywords_and_fit_content() {
    let style = flux_grid::to_taffy_style(&layout_with_columns(
        "fit-content(200px) max-content minmax(min-content, auto)".into(),
    ));
    let tracks: Vec<_> = style
        .grid_template_columns
        .iter()
        .map(|component| match component {
            GridTemplateComponent::Single(track) => *track,
            other => panic!("unexpected component {other:?}"),
        })
        .collect();
    assert_eq!(tracks.len(), 3);

    assert_eq!(tracks[0].min, MinTrackSizingFunction::AUTO);
    assert_eq!(
        tracks[0].max,
        MaxTrackSizingFunction::fit_content(LengthPercentage::from_length(200.0))
    );
    assert_eq!(tracks[1].min, MinTrackSizingFunction::MAX_CONTENT);
    assert_eq!(tracks[1].max, MaxTrackSizingFunction::MAX_CONTENT);
    assert_eq!(tracks[2].min, MinTrackSizingFunction::MIN_CONTENT);
    assert_eq!(tracks[2].max, MaxTrackSizingFunction::AUTO);

    assert_eq!(style.gap.width, LengthPercentage::ZERO);
    assert_eq!(style.gap.height, LengthPercentage::ZERO);
}
