//! Axis alignment guides shown while the player is dragged.

use glam::Vec2;

use crate::api::error::EngineError;
use crate::api::types::Axis;
use crate::renderer::traits::{Surface, Visual, VisualKind};

/// A full-width or full-height line. Its coordinate is write-only.
#[derive(Debug)]
pub struct AxisGuide<V: Visual> {
    axis: Axis,
    visible: bool,
    visual: V,
}

impl<V: Visual> AxisGuide<V> {
    /// Wrap a visual. The guide starts hidden.
    pub fn new(axis: Axis, mut visual: V) -> Result<Self, EngineError> {
        visual.set_visible(false)?;
        Ok(Self { axis, visible: false, visual })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn show(&mut self) -> Result<(), EngineError> {
        self.visible = true;
        self.visual.set_visible(true)
    }

    pub fn hide(&mut self) -> Result<(), EngineError> {
        self.visible = false;
        self.visual.set_visible(false)
    }

    /// Offset along the perpendicular axis: the `X` guide's top, the `Y`
    /// guide's left.
    pub fn set_position(&mut self, coord: f32) -> Result<(), EngineError> {
        match self.axis {
            Axis::X => self.visual.set_top(coord),
            Axis::Y => self.visual.set_left(coord),
        }
    }
}

/// The pair of guides, created once at startup.
#[derive(Debug)]
pub struct AxisGuides<V: Visual> {
    pub x: AxisGuide<V>,
    pub y: AxisGuide<V>,
}

impl<V: Visual> AxisGuides<V> {
    pub fn create<S>(surface: &mut S) -> Result<Self, EngineError>
    where
        S: Surface<Visual = V>,
    {
        let x = AxisGuide::new(Axis::X, surface.create_visual(VisualKind::Guide(Axis::X))?)?;
        let y = AxisGuide::new(Axis::Y, surface.create_visual(VisualKind::Guide(Axis::Y))?)?;
        Ok(Self { x, y })
    }

    /// Line both guides up with a point.
    pub fn move_to(&mut self, pos: Vec2) -> Result<(), EngineError> {
        self.x.set_position(pos.y)?;
        self.y.set_position(pos.x)
    }

    pub fn show_at(&mut self, pos: Vec2) -> Result<(), EngineError> {
        self.move_to(pos)?;
        self.x.show()?;
        self.y.show()
    }

    pub fn hide(&mut self) -> Result<(), EngineError> {
        self.x.hide()?;
        self.y.hide()
    }

    pub fn is_visible(&self) -> bool {
        self.x.is_visible() && self.y.is_visible()
    }
}
