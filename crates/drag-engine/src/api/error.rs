use thiserror::Error;

use crate::api::types::EntityId;

/// Everything that can go wrong inside the engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A position, size or world dimension that cannot be rendered.
    #[error("invalid geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f32 },

    #[error("unknown entity {0}")]
    UnknownEntity(EntityId),

    /// The environment refused a visual operation.
    #[error("render backend error: {0}")]
    Render(String),

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl EngineError {
    pub fn render(msg: impl Into<String>) -> Self {
        EngineError::Render(msg.into())
    }
}

/// Reject NaN and infinities.
pub fn ensure_finite(field: &'static str, value: f32) -> Result<f32, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::InvalidGeometry { field, value })
    }
}

/// Reject anything that is not a finite, strictly positive extent.
pub fn ensure_extent(field: &'static str, value: f32) -> Result<f32, EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidGeometry { field, value })
    }
}
