//! Props accepted from the host: container layout, breakpoints and grid items
//!
//! Every field is optional. An absent field means "leave it to the grid engine".
//! Values of an unrecognized shape decode as absent (with a warning) rather than
//! failing the whole props object, since props arrive on every render.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer, IgnoredAny};

/// A single size: a number or a raw CSS value.
///
/// Numbers mean pixels wherever a length is expected. For `columns`/`rows` a
/// bare number is a track count instead (see [`crate::tracks`]).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TrackSize {
    Number(f64),
    Css(String),
}

impl From<f64> for TrackSize {
    fn from(value: f64) -> Self {
        TrackSize::Number(value)
    }
}

impl From<i32> for TrackSize {
    fn from(value: i32) -> Self {
        TrackSize::Number(value as f64)
    }
}

impl From<&str> for TrackSize {
    fn from(value: &str) -> Self {
        TrackSize::Css(value.to_string())
    }
}

impl From<String> for TrackSize {
    fn from(value: String) -> Self {
        TrackSize::Css(value)
    }
}

/// Repeat mode of an auto-tracks descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatMode {
    #[default]
    AutoFit,
    AutoFill,
}

impl RepeatMode {
    pub fn as_css(self) -> &'static str {
        match self {
            RepeatMode::AutoFit => "auto-fit",
            RepeatMode::AutoFill => "auto-fill",
        }
    }
}

/// `{ type: "auto-fit" | "auto-fill", min, max }`
///
/// Missing bounds fall back to the axis bounds of the grid (`columnMin`,
/// `rowMax`, ...) and then to `0` / `1fr`. Only a JSON object with these keys
/// decodes; an unknown `type` or key rejects the whole descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AutoTracks {
    pub mode: RepeatMode,
    pub min: Option<TrackSize>,
    pub max: Option<TrackSize>,
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AutoTracksFields {
    #[serde(rename = "type")]
    mode: RepeatMode,
    #[serde(deserialize_with = "lenient")]
    min: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    max: Option<TrackSize>,
}

impl<'de> Deserialize<'de> for AutoTracks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // objects only, a derived struct would also take a sequence
        let object = serde_json::Map::deserialize(deserializer)?;
        let fields = AutoTracksFields::deserialize(serde_json::Value::Object(object))
            .map_err(<D::Error as de::Error>::custom)?;
        Ok(AutoTracks {
            mode: fields.mode,
            min: fields.min,
            max: fields.max,
        })
    }
}

/// Value of the `columns` / `rows` props
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GridTracks {
    /// A track count (number) or a raw `grid-template-*` value (string)
    Size(TrackSize),
    /// One size per explicit track
    List(Vec<TrackSize>),
    /// `repeat(auto-fit|auto-fill, minmax(min, max))`
    Auto(AutoTracks),
}

impl From<u32> for GridTracks {
    fn from(count: u32) -> Self {
        GridTracks::Size(TrackSize::Number(count as f64))
    }
}

impl From<&str> for GridTracks {
    fn from(template: &str) -> Self {
        GridTracks::Size(TrackSize::Css(template.to_string()))
    }
}

impl From<Vec<TrackSize>> for GridTracks {
    fn from(tracks: Vec<TrackSize>) -> Self {
        GridTracks::List(tracks)
    }
}

impl From<AutoTracks> for GridTracks {
    fn from(auto: AutoTracks) -> Self {
        GridTracks::Auto(auto)
    }
}

/// `grid-auto-flow` keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AutoFlow {
    #[serde(rename = "row")]
    Row,
    #[serde(rename = "column")]
    Column,
    #[serde(rename = "dense")]
    Dense,
    #[serde(rename = "row dense")]
    RowDense,
    #[serde(rename = "column dense")]
    ColumnDense,
}

impl AutoFlow {
    pub fn as_css(self) -> &'static str {
        match self {
            AutoFlow::Row => "row",
            AutoFlow::Column => "column",
            AutoFlow::Dense => "dense",
            AutoFlow::RowDense => "row dense",
            AutoFlow::ColumnDense => "column dense",
        }
    }
}

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// grid-template-columns
    Columns,
    /// grid-template-rows
    Rows,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::Columns => f.write_str("columns"),
            GridAxis::Rows => f.write_str("rows"),
        }
    }
}

/// Layout props shared by the grid container and its breakpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutProps {
    #[serde(deserialize_with = "lenient")]
    pub columns: Option<GridTracks>,
    #[serde(deserialize_with = "lenient")]
    pub rows: Option<GridTracks>,
    #[serde(deserialize_with = "lenient")]
    pub gap: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    pub row_height: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    pub column_min: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    pub column_max: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    pub row_min: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    pub row_max: Option<TrackSize>,
    #[serde(deserialize_with = "lenient")]
    pub locked: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub auto_flow: Option<AutoFlow>,
}

impl LayoutProps {
    /// Shallow field-level override: every field defined in `other` replaces ours.
    pub fn merge_from(&mut self, other: &LayoutProps) {
        overlay(&mut self.columns, &other.columns);
        overlay(&mut self.rows, &other.rows);
        overlay(&mut self.gap, &other.gap);
        overlay(&mut self.row_height, &other.row_height);
        overlay(&mut self.column_min, &other.column_min);
        overlay(&mut self.column_max, &other.column_max);
        overlay(&mut self.row_min, &other.row_min);
        overlay(&mut self.row_max, &other.row_max);
        overlay(&mut self.locked, &other.locked);
        overlay(&mut self.auto_flow, &other.auto_flow);
    }

    pub fn is_empty(&self) -> bool {
        *self == LayoutProps::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }
}

fn overlay<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}

/// A viewport-width-conditioned override of [`LayoutProps`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Breakpoint {
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Inclusive lower bound in CSS pixels
    #[serde(deserialize_with = "lenient")]
    pub min_width: Option<f64>,
    /// Inclusive upper bound in CSS pixels
    #[serde(deserialize_with = "lenient")]
    pub max_width: Option<f64>,
    #[serde(flatten)]
    pub layout: LayoutProps,
}

/// `aspect-ratio` of a grid item
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AspectRatio {
    Number(f64),
    Css(String),
}

impl From<f64> for AspectRatio {
    fn from(value: f64) -> Self {
        AspectRatio::Number(value)
    }
}

impl From<&str> for AspectRatio {
    fn from(value: &str) -> Self {
        AspectRatio::Css(value.to_string())
    }
}

/// Placement props of a single grid item. Lines and spans are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemProps {
    #[serde(deserialize_with = "lenient_integer")]
    pub col: Option<i32>,
    #[serde(deserialize_with = "lenient_integer")]
    pub row: Option<i32>,
    #[serde(deserialize_with = "lenient_integer")]
    pub col_span: Option<i32>,
    #[serde(deserialize_with = "lenient_integer")]
    pub row_span: Option<i32>,
    #[serde(deserialize_with = "lenient_integer")]
    pub z_index: Option<i32>,
    #[serde(deserialize_with = "lenient")]
    pub aspect_ratio: Option<AspectRatio>,
}

/// Props of the `FluxGrid` container component
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluxGridProps {
    #[serde(flatten)]
    pub layout: LayoutProps,
    /// Element tag of the root, `div` when absent
    #[serde(deserialize_with = "lenient")]
    pub tag: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub breakpoints: Vec<Breakpoint>,
}

/// Props of the `FluxGridItem` component
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FluxGridItemProps {
    #[serde(flatten)]
    pub item: ItemProps,
    #[serde(deserialize_with = "lenient")]
    pub tag: Option<String>,
}

pub(crate) const DEFAULT_TAG: &str = "div";

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

/// Decode an optional prop, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<Lenient<T>>::deserialize(deserializer)? {
        Some(Lenient::Valid(value)) => Ok(Some(value)),
        Some(Lenient::Invalid(_)) => {
            tracing::warn!(
                "Ignoring prop of unrecognized shape (expected {})",
                std::any::type_name::<T>()
            );
            Ok(None)
        }
        None => Ok(None),
    }
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Decode a list prop entry by entry, dropping only the entries of the wrong shape.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Vec<Lenient<T>> = lenient_or_default(deserializer)?;
    let entries = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => {
                tracing::warn!(
                    "Ignoring list entry {index} of unrecognized shape (expected {})",
                    std::any::type_name::<T>()
                );
                None
            }
        })
        .collect();
    Ok(entries)
}

/// Decode an integer prop from any number, truncated toward zero and saturated
/// to the `i32` range.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = lenient(deserializer)?;
    Ok(value
        .filter(|value| value.is_finite())
        .map(|value| value.trunc() as i32))
}
