/// Cube configuration, loadable from TOML
use serde::Deserialize;

use crate::cube::{CubeModel, DEFAULT_LABELS, FACE_COUNT, HALF_EDGE};
use crate::drag::{DragController, DEFAULT_SENSITIVITY};
use crate::error::CubeError;

/// Id of the element the cube is mounted into
pub const DEFAULT_CONTAINER_ID: &str = "cube-container";

/// Every field is optional in TOML and falls back to the reference value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub container_id: String,
    pub labels: Vec<String>,
    pub half_edge: f64,
    pub sensitivity: f64,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            labels: DEFAULT_LABELS.iter().map(|label| label.to_string()).collect(),
            half_edge: HALF_EDGE,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl CubeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(input: &str) -> Result<Self, CubeError> {
        let config: CubeConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CubeError> {
        if self.labels.len() != FACE_COUNT {
            return Err(CubeError::FaceCount {
                expected: FACE_COUNT,
                found: self.labels.len(),
            });
        }
        if !self.half_edge.is_finite() || self.half_edge <= 0.0 {
            return Err(CubeError::InvalidConfig(format!(
                "half_edge must be a positive number, got {}",
                self.half_edge
            )));
        }
        if !self.sensitivity.is_finite() {
            return Err(CubeError::InvalidConfig(format!(
                "sensitivity must be finite, got {}",
                self.sensitivity
            )));
        }
        if self.container_id.is_empty() {
            return Err(CubeError::InvalidConfig("container_id must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn build_cube(&self) -> Result<CubeModel, CubeError> {
        CubeModel::build(self.labels.as_slice(), self.half_edge)
    }

    pub fn drag_controller(&self) -> DragController {
        DragController::with_sensitivity(self.sensitivity)
    }
}
