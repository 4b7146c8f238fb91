//! Declarative CSS grid layout for component frameworks
//!
//! Grid props (columns, rows, gaps, auto-flow, responsive breakpoints) are
//! resolved into inline style declarations for a grid container and its items.
//! The browser's grid algorithm, or taffy for native hosts, does the layout.
//!
//! Resolution is pure: [`resolve_breakpoints`] merges the breakpoints active at
//! the current viewport width over the base props, [`resolve_tracks`] turns each
//! axis into a `grid-template-*` value and [`resolve_placement`] maps item props
//! to `grid-column` / `grid-row`. [`FluxGrid`] and [`FluxGridItem`] wrap this for
//! hosts that want an instance to poke on every props change or resize.

pub mod breakpoints;
pub mod component;
pub mod config;
pub mod error;
pub mod placement;
pub mod style;
pub mod stylesheet;
pub mod tracks;
pub mod types;
pub mod validate;

#[cfg(feature = "taffy")]
pub mod convert;
#[cfg(feature = "taffy")]
mod parse;

pub use breakpoints::{active_breakpoints, resolve_breakpoints};
pub use component::{FluxGrid, FluxGridItem};
pub use config::GridConfig;
pub use error::{ConfigError, LayoutIssue, LayoutIssues};
pub use placement::{ItemPlacement, resolve_placement};
pub use style::{StyleMap, StyleValue, container_style, item_style};
pub use tracks::{resolve_axis, resolve_tracks, track_count, track_length};
pub use types::{
    AspectRatio, AutoFlow, AutoTracks, Breakpoint, FluxGridItemProps, FluxGridProps, GridAxis,
    GridTracks, ItemProps, LayoutProps, RepeatMode, TrackSize,
};
pub use validate::{validate, validate_item, validate_layout};

#[doc(inline)]
#[cfg(feature = "taffy")]
pub use convert::{item_taffy_style, to_taffy_style};
