//! Responsive overrides selected by viewport width

use crate::types::{Breakpoint, LayoutProps};

impl Breakpoint {
    /// Whether the breakpoint applies at `viewport_width`. Both bounds are inclusive.
    ///
    /// A NaN width or bound never matches.
    pub fn is_active(&self, viewport_width: f64) -> bool {
        let min = self.min_width.unwrap_or(f64::NEG_INFINITY);
        let max = self.max_width.unwrap_or(f64::INFINITY);
        viewport_width >= min && viewport_width <= max
    }

    /// A breakpoint whose range is empty can never become active.
    pub fn is_dead(&self) -> bool {
        let min = self.min_width.unwrap_or(f64::NEG_INFINITY);
        let max = self.max_width.unwrap_or(f64::INFINITY);
        min.is_nan() || max.is_nan() || min > max
    }

    /// Name used in logs and diagnostics
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{index}"),
        }
    }
}

/// Breakpoints active at `viewport_width`, in declaration order
pub fn active_breakpoints(
    breakpoints: &[Breakpoint],
    viewport_width: f64,
) -> impl Iterator<Item = &Breakpoint> {
    breakpoints
        .iter()
        .filter(move |breakpoint| breakpoint.is_active(viewport_width))
}

/// Merge every breakpoint active at `viewport_width` over `base`.
///
/// Active breakpoints are applied in declaration order with a shallow
/// field-level override, so for each field the last active breakpoint that
/// defines it wins.
pub fn resolve_breakpoints(
    base: &LayoutProps,
    breakpoints: &[Breakpoint],
    viewport_width: f64,
) -> LayoutProps {
    let mut merged = base.clone();
    for (index, breakpoint) in breakpoints.iter().enumerate() {
        if breakpoint.is_active(viewport_width) {
            tracing::debug!(
                "Breakpoint {} active at viewport width {viewport_width}",
                breakpoint.label(index)
            );
            merged.merge_from(&breakpoint.layout);
        }
    }
    merged
}
