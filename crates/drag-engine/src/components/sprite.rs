use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::{ensure_extent, ensure_finite, EngineError};
use crate::api::types::Cursor;
use crate::core::collision::Aabb;
use crate::renderer::traits::Visual;

/// Default sprite edge length in pixels.
pub const DEFAULT_SPRITE_SIZE: f32 = 32.0;

fn default_size() -> f32 {
    DEFAULT_SPRITE_SIZE
}

fn default_color() -> String {
    "white".into()
}

fn default_outline_color() -> String {
    "red".into()
}

/// Everything needed to create a sprite. Also the config file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDesc {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_size")]
    pub width: f32,
    #[serde(default = "default_size")]
    pub height: f32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_outline_color")]
    pub outline_color: String,
    /// Constant drift in pixels per second. Zero means static.
    #[serde(default)]
    pub velocity: [f32; 2],
}

impl SpriteDesc {
    /// A 32x32 white sprite with its top-left corner at (x, y).
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: DEFAULT_SPRITE_SIZE,
            height: DEFAULT_SPRITE_SIZE,
            color: default_color(),
            outline_color: default_outline_color(),
            velocity: [0.0, 0.0],
        }
    }

    // -- Builder pattern --

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_outline_color(mut self, color: impl Into<String>) -> Self {
        self.outline_color = color.into();
        self
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = [vx, vy];
        self
    }

    pub fn velocity(&self) -> Vec2 {
        Vec2::from(self.velocity)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)?;
        ensure_extent("width", self.width)?;
        ensure_extent("height", self.height)?;
        ensure_finite("velocity.x", self.velocity[0])?;
        ensure_finite("velocity.y", self.velocity[1])?;
        Ok(())
    }
}

/// A colored rectangle bound to one visual.
///
/// Fields are private so that every change goes through a mutator, and
/// every mutator re-syncs the visual before returning.
#[derive(Debug)]
pub struct Sprite<V: Visual> {
    pos: Vec2,
    size: Vec2,
    color: String,
    outline_color: String,
    /// Outline visibility.
    debug: bool,
    visual: V,
}

impl<V: Visual> Sprite<V> {
    /// Take ownership of `visual` and push the initial state to it.
    /// The outline starts hidden.
    pub fn create(visual: V, desc: &SpriteDesc) -> Result<Self, EngineError> {
        desc.validate()?;
        let mut sprite = Self {
            pos: Vec2::new(desc.x, desc.y),
            size: Vec2::new(desc.width, desc.height),
            color: desc.color.clone(),
            outline_color: desc.outline_color.clone(),
            debug: false,
            visual,
        };
        sprite.sync()?;
        Ok(sprite)
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn outline_color(&self) -> &str {
        &self.outline_color
    }

    pub fn is_outlined(&self) -> bool {
        self.debug
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.left(), self.top(), self.right(), self.bottom())
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut V {
        &mut self.visual
    }

    /// Move the sprite. Non-finite coordinates are rejected and leave the
    /// sprite where it was.
    pub fn set_position(&mut self, pos: Vec2) -> Result<(), EngineError> {
        ensure_finite("x", pos.x)?;
        ensure_finite("y", pos.y)?;
        self.pos = pos;
        self.sync()
    }

    pub fn set_outline(&mut self, visible: bool) -> Result<(), EngineError> {
        self.debug = visible;
        self.sync()
    }

    pub fn set_outline_color(&mut self, color: impl Into<String>) -> Result<(), EngineError> {
        self.outline_color = color.into();
        self.sync()
    }

    pub fn set_stacking_order(&mut self, z: i32) -> Result<(), EngineError> {
        self.visual.set_stacking_order(z)
    }

    pub fn set_cursor(&mut self, cursor: Cursor) -> Result<(), EngineError> {
        self.visual.set_cursor(cursor)
    }

    /// Push position, size, color and outline to the visual.
    pub fn sync(&mut self) -> Result<(), EngineError> {
        self.visual.set_position(self.pos.x, self.pos.y)?;
        self.visual.set_size(self.size.x, self.size.y)?;
        self.visual.set_background(&self.color)?;
        let outline = self.debug.then_some(self.outline_color.as_str());
        self.visual.set_outline(outline)
    }
}
