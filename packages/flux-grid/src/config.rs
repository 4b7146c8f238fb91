use crate::error::ConfigError;
use crate::types::{FluxGridItemProps, FluxGridProps};

/// Options used when constructing a [`FluxGrid`](crate::FluxGrid)
#[derive(Debug, Clone, Default)]
pub struct GridConfig {
    /// Container props, including breakpoints
    pub props: FluxGridProps,
    /// The initial viewport width in CSS pixels. Breakpoints stay inactive
    /// until the host reports one.
    pub viewport_width: Option<f64>,
}

impl GridConfig {
    pub fn new(props: FluxGridProps) -> Self {
        Self {
            props,
            viewport_width: None,
        }
    }

    pub fn with_viewport_width(mut self, viewport_width: f64) -> Self {
        self.viewport_width = Some(viewport_width);
        self
    }

    /// Decode container props from the JSON object the host hands over.
    ///
    /// Fields of an unrecognized shape are dropped; only input that is not a
    /// JSON object is an error.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(FluxGridProps::from_json(json)?))
    }
}

impl FluxGridProps {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FluxGridItemProps {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
