//! Inline style output for the grid container and grid items

use std::fmt;

use crate::placement::ItemPlacement;
use crate::tracks::{resolve_axis, track_length};
use crate::types::{GridAxis, LayoutProps};

/// Value of one inline CSS declaration
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Integer(i32),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// CSS property name to value, in insertion order.
///
/// `Display` renders it as the content of a `style` attribute:
/// `grid-template-columns: repeat(3, 1fr); gap: 16px`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(&'static str, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `property`, replacing an earlier value. Empty text values are skipped.
    pub fn set(&mut self, property: &'static str, value: StyleValue) {
        if matches!(&value, StyleValue::Text(text) if text.is_empty()) {
            return;
        }
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    pub fn set_text(&mut self, property: &'static str, value: impl Into<String>) {
        self.set(property, StyleValue::Text(value.into()));
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    /// Text value of `property`, or the integer rendered as text
    pub fn get_str(&self, property: &str) -> Option<String> {
        self.get(property).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}

/// Inline style of the grid container for already-merged layout props
pub fn container_style(layout: &LayoutProps) -> StyleMap {
    let mut style = StyleMap::new();
    style.set_text("grid-template-columns", resolve_axis(layout, GridAxis::Columns));
    style.set_text("grid-template-rows", resolve_axis(layout, GridAxis::Rows));
    if let Some(gap) = layout.gap.as_ref().and_then(track_length) {
        style.set_text("gap", gap);
    }
    if let Some(row_height) = layout.row_height.as_ref().and_then(track_length) {
        style.set_text("grid-auto-rows", row_height);
    }
    if let Some(flow) = layout.auto_flow {
        style.set_text("grid-auto-flow", flow.as_css());
    }
    style
}

/// Inline style of a grid item
pub fn item_style(placement: &ItemPlacement) -> StyleMap {
    let mut style = StyleMap::new();
    if let Some(column) = &placement.grid_column {
        style.set_text("grid-column", column.clone());
    }
    if let Some(row) = &placement.grid_row {
        style.set_text("grid-row", row.clone());
    }
    if let Some(z_index) = placement.z_index {
        style.set("z-index", StyleValue::Integer(z_index));
    }
    if let Some(ratio) = &placement.aspect_ratio {
        style.set_text("aspect-ratio", ratio.clone());
    }
    style
}
