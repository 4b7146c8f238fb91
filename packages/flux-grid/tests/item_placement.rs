//! Tests for grid item placement and the inline styles built from it

use flux_grid::placement::line_placement;
use flux_grid::{
    AspectRatio, AutoFlow, ItemProps, LayoutProps, StyleMap, StyleValue, TrackSize,
    container_style, item_style, resolve_placement,
};

#[test]
fn test_start_and_span() {
    let placement = resolve_placement(&ItemProps {
        col: Some(2),
        col_span: Some(3),
        ..Default::default()
    });
    assert_eq!(placement.grid_column.as_deref(), Some("2 / span 3"));
    assert_eq!(placement.grid_row, None);
}

#[test]
fn test_span_defaults_to_one_with_start() {
    assert_eq!(line_placement(Some(4), None).as_deref(), Some("4 / span 1"));
}

#[test]
fn test_span_without_start() {
    assert_eq!(line_placement(None, Some(2)).as_deref(), Some("span 2"));
    assert_eq!(line_placement(None, None), None);
}

#[test]
fn test_negative_values_clamp_to_one() {
    let placement = resolve_placement(&ItemProps {
        col: Some(2),
        col_span: Some(-1),
        row: Some(-3),
        row_span: Some(0),
        ..Default::default()
    });
    assert_eq!(placement.grid_column.as_deref(), Some("2 / span 1"));
    assert_eq!(placement.grid_row.as_deref(), Some("1 / span 1"));
    assert_eq!(line_placement(None, Some(-7)).as_deref(), Some("span 1"));
}

#[test]
fn test_aspect_ratio_forms() {
    let ratio = |aspect_ratio: AspectRatio| {
        resolve_placement(&ItemProps {
            aspect_ratio: Some(aspect_ratio),
            ..Default::default()
        })
        .aspect_ratio
    };
    assert_eq!(ratio(1.5.into()).as_deref(), Some("1.5"));
    assert_eq!(ratio(2.0.into()).as_deref(), Some("2"));
    assert_eq!(ratio("16 / 9".into()).as_deref(), Some("16 / 9"));
    assert_eq!(ratio(0.0.into()), None);
    assert_eq!(ratio(f64::NAN.into()), None);
    assert_eq!(ratio("".into()), None);
}

#[test]
fn test_item_style_output() {
    let placement = resolve_placement(&ItemProps {
        col: Some(1),
        col_span: Some(2),
        row_span: Some(3),
        z_index: Some(5),
        aspect_ratio: Some("1".into()),
        ..Default::default()
    });
    let style = item_style(&placement);

    assert_eq!(style.get("z-index"), Some(&StyleValue::Integer(5)));
    assert_eq!(
        style.to_string(),
        "grid-column: 1 / span 2; grid-row: span 3; z-index: 5; aspect-ratio: 1"
    );
}

#[test]
fn test_empty_item_has_no_style() {
    let style = item_style(&resolve_placement(&ItemProps::default()));
    assert!(style.is_empty());
    assert_eq!(style.to_string(), "");
}

#[test]
fn test_container_style_output() {
    let layout = LayoutProps {
        columns: Some(3u32.into()),
        rows: Some("auto 1fr".into()),
        gap: Some(TrackSize::from(16)),
        row_height: Some(TrackSize::from(120)),
        auto_flow: Some(AutoFlow::RowDense),
        column_min: Some(TrackSize::from(100)),
        ..Default::default()
    };
    let style = container_style(&layout);

    assert_eq!(style.len(), 5);
    assert_eq!(
        style.get_str("grid-template-columns").as_deref(),
        Some("repeat(3, 1fr)")
    );
    assert_eq!(
        style.to_string(),
        "grid-template-columns: repeat(3, 1fr); grid-template-rows: auto 1fr; gap: 16px; \
         grid-auto-rows: 120px; grid-auto-flow: row dense"
    );
}

#[test]
fn test_container_style_skips_unset_and_blank_values() {
    let layout = LayoutProps {
        columns: Some("".into()),
        gap: Some(TrackSize::from(f64::NAN)),
        ..Default::default()
    };
    assert!(container_style(&layout).is_empty());
    assert!(container_style(&LayoutProps::default()).is_empty());
}

#[test]
fn test_style_map_replaces_in_place() {
    let mut style = StyleMap::new();
    style.set_text("gap", "4px");
    style.set_text("grid-auto-flow", "column");
    style.set_text("gap", "8px");
    style.set_text("grid-template-rows", "");

    let entries: Vec<_> = style.iter().map(|(name, value)| (name, value.to_string())).collect();
    assert_eq!(
        entries,
        vec![
            ("gap", "8px".to_string()),
            ("grid-auto-flow", "column".to_string())
        ]
    );
}
