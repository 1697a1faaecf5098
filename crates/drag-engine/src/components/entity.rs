use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::sprite::Sprite;
use crate::renderer::traits::Visual;

/// Optional per-frame update capability.
///
/// Receives the entity's current position and may move it; the world
/// applies the new position through `Sprite::set_position`.
pub trait Behavior {
    fn update(&mut self, pos: &mut Vec2, dt: f32);
}

/// Constant-velocity motion, in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub velocity: Vec2,
}

impl Behavior for Drift {
    fn update(&mut self, pos: &mut Vec2, dt: f32) {
        *pos += self.velocity * dt;
    }
}

/// Fat Entity: a sprite plus optional capabilities.
pub struct Entity<V: Visual> {
    pub id: EntityId,
    /// String tag for finding entities by role ("player", "obstacle").
    pub tag: String,
    pub sprite: Sprite<V>,
    /// Entities without a behavior skip the update step.
    pub behavior: Option<Box<dyn Behavior>>,
}

impl<V: Visual> Entity<V> {
    pub fn new(id: EntityId, sprite: Sprite<V>) -> Self {
        Self {
            id,
            tag: String::new(),
            sprite,
            behavior: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behavior = Some(Box::new(behavior));
        self
    }

    /// Vertical position, the render-order key.
    pub fn y(&self) -> f32 {
        self.sprite.y()
    }
}
