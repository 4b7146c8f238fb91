//! Static defaults shipped alongside the components

/// Class on every grid container
pub const GRID_CLASS: &str = "flux-grid";
/// Modifier added to the container while `locked` is set
pub const GRID_LOCKED_CLASS: &str = "flux-grid--locked";
/// Class on every grid item
pub const ITEM_CLASS: &str = "flux-grid-item";

/// Default rules for the classes above.
///
/// Inline styles produced by the resolvers override these. A locked grid keeps
/// its track geometry: items may not stretch tracks past their resolved sizes.
pub const DEFAULT_STYLESHEET: &str = "\
.flux-grid {
  display: grid;
  box-sizing: border-box;
  width: 100%;
}
.flux-grid-item {
  box-sizing: border-box;
  min-width: 0;
}
.flux-grid--locked {
  overflow: hidden;
}
.flux-grid--locked > .flux-grid-item {
  min-height: 0;
  overflow: hidden;
}
";
