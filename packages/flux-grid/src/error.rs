//! Error and diagnostic types
//!
//! Resolution itself never fails: bad values degrade to the engine default.
//! [`ConfigError`] covers props that cannot be decoded at all, [`LayoutIssue`]
//! describes a value that was ignored or clamped so hosts can surface it.

use thiserror::Error;

use crate::types::GridAxis;

/// Props could not be decoded
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid props JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A configuration mistake that resolution silently works around
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutIssue {
    #[error("Breakpoint {name} can never be active: minWidth {min_width} exceeds maxWidth {max_width}")]
    DeadBreakpoint {
        name: String,
        min_width: f64,
        max_width: f64,
    },

    #[error("Track count {count} for {axis} is out of range, clamped to {clamped}")]
    ClampedTrackCount {
        axis: GridAxis,
        count: f64,
        clamped: u16,
    },

    #[error("Track value for {axis} is not a finite number, engine default used")]
    NonFiniteTrackCount { axis: GridAxis },

    #[error("Negative size {value} for {prop} clamped to 0px")]
    NegativeSize { prop: String, value: f64 },

    #[error("Empty value for {prop} ignored")]
    EmptyValue { prop: String },

    #[error("Item {prop} {value} is below 1, clamped to 1")]
    ClampedLine { prop: &'static str, value: i32 },
}

pub type LayoutIssues = Vec<LayoutIssue>;
