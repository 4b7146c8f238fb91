//! Grid item placement: item props to `grid-column`, `grid-row`, `z-index`, `aspect-ratio`

use crate::types::{AspectRatio, ItemProps};

/// Resolved placement of one grid item. `None` fields are left to the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPlacement {
    pub grid_column: Option<String>,
    pub grid_row: Option<String>,
    pub z_index: Option<i32>,
    pub aspect_ratio: Option<String>,
}

pub fn resolve_placement(item: &ItemProps) -> ItemPlacement {
    ItemPlacement {
        grid_column: line_placement(item.col, item.col_span),
        grid_row: line_placement(item.row, item.row_span),
        z_index: item.z_index,
        aspect_ratio: item.aspect_ratio.as_ref().and_then(aspect_ratio),
    }
}

/// `<start> / span <span>` when a start line is given, `span <span>` otherwise.
///
/// Lines and spans below 1 clamp to 1.
pub fn line_placement(start: Option<i32>, span: Option<i32>) -> Option<String> {
    match (start, span) {
        (Some(start), span) => Some(format!(
            "{} / span {}",
            clamp_line(start),
            clamp_line(span.unwrap_or(1))
        )),
        (None, Some(span)) => Some(format!("span {}", clamp_line(span))),
        (None, None) => None,
    }
}

pub(crate) fn clamp_line(value: i32) -> i32 {
    value.max(1)
}

fn aspect_ratio(ratio: &AspectRatio) -> Option<String> {
    match ratio {
        AspectRatio::Number(value) if value.is_finite() && *value > 0.0 => Some(value.to_string()),
        AspectRatio::Number(value) => {
            tracing::debug!("Dropping aspect-ratio {value}: must be a positive number");
            None
        }
        AspectRatio::Css(css) if css.trim().is_empty() => None,
        AspectRatio::Css(css) => Some(css.clone()),
    }
}
