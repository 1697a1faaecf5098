//! Rendering boundary.
//!
//! The engine never draws anything itself. Each sprite and guide owns one
//! `Visual` created by the environment's `Surface`; mutators push their
//! state through these calls. In the browser a visual is a positioned
//! `<div>` (see the `drag-web` crate); tests use the headless surface.

use crate::api::error::EngineError;
use crate::api::types::{Axis, Cursor, EntityId};

/// What a visual is created for. Lets the surface pick markup or reuse
/// elements that already exist in the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualKind {
    /// A sprite rectangle owned by the given entity.
    Sprite(EntityId),
    /// An axis alignment guide line.
    Guide(Axis),
}

/// One on-screen element. All coordinates are screen pixels.
pub trait Visual {
    fn set_left(&mut self, x: f32) -> Result<(), EngineError>;

    fn set_top(&mut self, y: f32) -> Result<(), EngineError>;

    fn set_size(&mut self, width: f32, height: f32) -> Result<(), EngineError>;

    /// Fill color as a CSS color token.
    fn set_background(&mut self, color: &str) -> Result<(), EngineError>;

    /// `Some(color)` draws a 1px solid outline, `None` removes it.
    fn set_outline(&mut self, color: Option<&str>) -> Result<(), EngineError>;

    fn set_stacking_order(&mut self, z: i32) -> Result<(), EngineError>;

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), EngineError>;

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError>;

    fn set_position(&mut self, x: f32, y: f32) -> Result<(), EngineError> {
        self.set_left(x)?;
        self.set_top(y)
    }
}

/// The display root visuals are created in and attached to.
pub trait Surface {
    type Visual: Visual;

    fn create_visual(&mut self, kind: VisualKind) -> Result<Self::Visual, EngineError>;

    /// Make a sprite visual part of the play area.
    fn attach(&mut self, visual: &Self::Visual) -> Result<(), EngineError>;
}
