use serde::{Deserialize, Serialize};

use crate::api::error::{ensure_extent, EngineError};
use crate::components::sprite::SpriteDesc;

/// Configuration for the demo world.
/// Every field has a default, so a partial JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play area width in screen pixels.
    pub world_width: f32,
    /// Play area height in screen pixels.
    pub world_height: f32,
    /// Stacking order = round(y * stacking_scale).
    pub stacking_scale: f32,
    /// Largest frame delta (ms) handed to behaviors. Longer gaps, e.g. a
    /// backgrounded tab, are clamped to this.
    pub max_frame_ms: f64,
    /// Outline color given to obstacles on every collision re-check.
    pub highlight_color: String,
    /// The draggable sprite.
    pub player: SpriteDesc,
    /// Static sprites the player is tested against.
    pub obstacles: Vec<SpriteDesc>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let world_width = 640.0;
        let world_height = 400.0;
        Self {
            world_width,
            world_height,
            stacking_scale: 10.0,
            max_frame_ms: 250.0,
            highlight_color: "white".into(),
            player: SpriteDesc::at(world_width * 0.5, world_height * 0.5)
                .with_color("cornflowerblue")
                .with_outline_color("white"),
            obstacles: vec![
                SpriteDesc::at(150.0, 150.0).with_color("orangered"),
                SpriteDesc::at(450.0, 300.0).with_color("crimson"),
                SpriteDesc::at(450.0, 50.0).with_color("red"),
            ],
        }
    }
}

impl GameConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_extent("world_width", self.world_width)?;
        ensure_extent("world_height", self.world_height)?;
        ensure_extent("stacking_scale", self.stacking_scale)?;
        ensure_extent("max_frame_ms", self.max_frame_ms as f32)?;
        self.player.validate()?;
        for obstacle in &self.obstacles {
            obstacle.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_matches_demo() {
        let config = GameConfig::default();
        assert_eq!(config.world_width, 640.0);
        assert_eq!(config.world_height, 400.0);
        assert_eq!(config.player.x, 320.0);
        assert_eq!(config.player.y, 200.0);
        assert_eq!(config.player.outline_color, "white");
        assert_eq!(config.obstacles.len(), 3);
        assert_eq!(config.obstacles[0].color, "orangered");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "world_width": 800,
            "obstacles": [ { "x": 10, "y": 20, "color": "gold" } ]
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.world_width, 800.0);
        assert_eq!(config.world_height, 400.0);
        assert_eq!(config.obstacles.len(), 1);
        let obstacle = &config.obstacles[0];
        assert_eq!(obstacle.width, 32.0);
        assert_eq!(obstacle.outline_color, "red");
        assert_eq!(obstacle.color, "gold");
    }

    #[test]
    fn rejects_bad_dimensions() {
        let err = GameConfig::from_json(r#"{ "world_height": 0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidGeometry { field: "world_height", .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }
}
