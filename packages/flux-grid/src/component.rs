//! Grid container and grid item instances
//!
//! A component owns its props and its last resolved style. The host calls a
//! `set_*` method whenever an input changes (props update, viewport resize) and
//! re-renders when it returns `true`. Nothing is shared between instances.

use crate::breakpoints::resolve_breakpoints;
use crate::config::GridConfig;
use crate::placement::{ItemPlacement, resolve_placement};
use crate::style::{StyleMap, container_style, item_style};
use crate::stylesheet::{GRID_CLASS, GRID_LOCKED_CLASS, ITEM_CLASS};
use crate::types::{
    Breakpoint, DEFAULT_TAG, FluxGridItemProps, FluxGridProps, ItemProps, LayoutProps,
};

/// A CSS grid container
#[derive(Debug, Clone)]
pub struct FluxGrid {
    props: FluxGridProps,
    viewport_width: Option<f64>,
    /// Base layout with the active breakpoints merged in
    layout: LayoutProps,
    style: StyleMap,
}

impl FluxGrid {
    pub fn new(config: GridConfig) -> Self {
        let mut grid = Self {
            props: config.props,
            viewport_width: config.viewport_width,
            layout: LayoutProps::default(),
            style: StyleMap::new(),
        };
        grid.recompute();
        grid
    }

    pub fn props(&self) -> &FluxGridProps {
        &self.props
    }

    /// Replace all props. Returns whether the rendered output (element tag,
    /// classes or style) changed.
    pub fn set_props(&mut self, props: FluxGridProps) -> bool {
        let retagged = props.tag != self.props.tag;
        self.props = props;
        let restyled = self.recompute();
        retagged || restyled
    }

    /// Replace the base layout, keeping tag and breakpoints
    pub fn set_layout(&mut self, layout: LayoutProps) -> bool {
        self.props.layout = layout;
        self.recompute()
    }

    pub fn set_breakpoints(&mut self, breakpoints: Vec<Breakpoint>) -> bool {
        self.props.breakpoints = breakpoints;
        self.recompute()
    }

    /// Report a new viewport width (a resize). Only the latest width matters,
    /// so the host may coalesce resize events before calling this.
    pub fn set_viewport_width(&mut self, viewport_width: f64) -> bool {
        self.viewport_width = Some(viewport_width);
        self.recompute()
    }

    pub fn viewport_width(&self) -> Option<f64> {
        self.viewport_width
    }

    /// Layout props in effect after breakpoint resolution
    pub fn layout(&self) -> &LayoutProps {
        &self.layout
    }

    /// Inline style of the root element
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn tag(&self) -> &str {
        self.props.tag.as_deref().unwrap_or(DEFAULT_TAG)
    }

    pub fn class_list(&self) -> Vec<&'static str> {
        let mut classes = vec![GRID_CLASS];
        if self.layout.is_locked() {
            classes.push(GRID_LOCKED_CLASS);
        }
        classes
    }

    /// Labels of the breakpoints currently applied, in declaration order
    pub fn active_breakpoints(&self) -> Vec<String> {
        let Some(width) = self.viewport_width else {
            return Vec::new();
        };
        self.props
            .breakpoints
            .iter()
            .enumerate()
            .filter(|(_, breakpoint)| breakpoint.is_active(width))
            .map(|(index, breakpoint)| breakpoint.label(index))
            .collect()
    }

    /// Resolved layout as a taffy style for native layout hosts
    #[cfg(feature = "taffy")]
    pub fn taffy_style(&self) -> taffy::Style {
        crate::convert::to_taffy_style(&self.layout)
    }

    fn recompute(&mut self) -> bool {
        let layout = match self.viewport_width {
            Some(width) => resolve_breakpoints(&self.props.layout, &self.props.breakpoints, width),
            None => self.props.layout.clone(),
        };
        let style = container_style(&layout);

        let changed = style != self.style || layout.is_locked() != self.layout.is_locked();
        if changed {
            tracing::debug!("Grid style resolved to \"{style}\"");
        }
        self.layout = layout;
        self.style = style;
        changed
    }
}

/// A grid item. Placement is computed from its own props only.
#[derive(Debug, Clone)]
pub struct FluxGridItem {
    props: FluxGridItemProps,
    placement: ItemPlacement,
    style: StyleMap,
}

impl FluxGridItem {
    pub fn new(props: FluxGridItemProps) -> Self {
        let placement = resolve_placement(&props.item);
        let style = item_style(&placement);
        Self {
            props,
            placement,
            style,
        }
    }

    pub fn props(&self) -> &FluxGridItemProps {
        &self.props
    }

    /// Replace all props. Returns whether the element tag or style changed.
    pub fn set_props(&mut self, props: FluxGridItemProps) -> bool {
        let retagged = props.tag != self.props.tag;
        self.props = props;
        let restyled = self.recompute();
        retagged || restyled
    }

    pub fn set_item(&mut self, item: ItemProps) -> bool {
        self.props.item = item;
        self.recompute()
    }

    pub fn placement(&self) -> &ItemPlacement {
        &self.placement
    }

    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn tag(&self) -> &str {
        self.props.tag.as_deref().unwrap_or(DEFAULT_TAG)
    }

    pub fn class_list(&self) -> Vec<&'static str> {
        vec![ITEM_CLASS]
    }

    #[cfg(feature = "taffy")]
    pub fn taffy_style(&self) -> taffy::Style {
        crate::convert::item_taffy_style(&self.props.item)
    }

    fn recompute(&mut self) -> bool {
        let placement = resolve_placement(&self.props.item);
        let style = item_style(&placement);
        let changed = style != self.style;
        self.placement = placement;
        self.style = style;
        changed
    }
}
