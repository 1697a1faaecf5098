//! In-memory surface. Records the last value written for every visual
//! property so hosts without a display (and tests) can inspect it.

use crate::api::error::EngineError;
use crate::api::types::Cursor;
use crate::renderer::traits::{Surface, Visual, VisualKind};

/// Snapshot of everything a visual has been told to display.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualState {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub outline: Option<String>,
    pub stacking_order: i32,
    pub cursor: Cursor,
    pub visible: bool,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            background: String::new(),
            outline: None,
            stacking_order: 0,
            cursor: Cursor::Default,
            visible: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessVisual {
    kind: VisualKind,
    state: VisualState,
    writes: usize,
    failing: bool,
}

impl HeadlessVisual {
    pub fn new(kind: VisualKind) -> Self {
        Self {
            kind,
            state: VisualState::default(),
            writes: 0,
            failing: false,
        }
    }

    pub fn kind(&self) -> VisualKind {
        self.kind
    }

    pub fn state(&self) -> &VisualState {
        &self.state
    }

    /// Number of property writes received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every following write fail, simulating a detached element.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    fn write(&mut self, apply: impl FnOnce(&mut VisualState)) -> Result<(), EngineError> {
        if self.failing {
            return Err(EngineError::render(format!("{:?} rejected write", self.kind)));
        }
        apply(&mut self.state);
        self.writes += 1;
        Ok(())
    }
}

impl Visual for HeadlessVisual {
    fn set_left(&mut self, x: f32) -> Result<(), EngineError> {
        self.write(|s| s.left = x)
    }

    fn set_top(&mut self, y: f32) -> Result<(), EngineError> {
        self.write(|s| s.top = y)
    }

    fn set_size(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        self.write(|s| {
            s.width = width;
            s.height = height;
        })
    }

    fn set_background(&mut self, color: &str) -> Result<(), EngineError> {
        self.write(|s| s.background = color.to_string())
    }

    fn set_outline(&mut self, color: Option<&str>) -> Result<(), EngineError> {
        self.write(|s| s.outline = color.map(str::to_string))
    }

    fn set_stacking_order(&mut self, z: i32) -> Result<(), EngineError> {
        self.write(|s| s.stacking_order = z)
    }

    fn set_cursor(&mut self, cursor: Cursor) -> Result<(), EngineError> {
        self.write(|s| s.cursor = cursor)
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), EngineError> {
        self.write(|s| s.visible = visible)
    }
}

/// Surface that hands out `HeadlessVisual`s.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    created: usize,
    attached: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn attached(&self) -> usize {
        self.attached
    }
}

impl Surface for HeadlessSurface {
    type Visual = HeadlessVisual;

    fn create_visual(&mut self, kind: VisualKind) -> Result<HeadlessVisual, EngineError> {
        self.created += 1;
        Ok(HeadlessVisual::new(kind))
    }

    fn attach(&mut self, _visual: &HeadlessVisual) -> Result<(), EngineError> {
        self.attached += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Axis;

    #[test]
    fn records_last_written_values() {
        let mut visual = HeadlessVisual::new(VisualKind::Guide(Axis::X));
        visual.set_position(10.0, 20.0).unwrap();
        visual.set_outline(Some("red")).unwrap();
        visual.set_outline(None).unwrap();
        assert_eq!(visual.state().left, 10.0);
        assert_eq!(visual.state().top, 20.0);
        assert_eq!(visual.state().outline, None);
        assert_eq!(visual.writes(), 4);
    }

    #[test]
    fn failing_visual_rejects_writes() {
        let mut visual = HeadlessVisual::new(VisualKind::Guide(Axis::Y));
        visual.set_failing(true);
        assert!(matches!(visual.set_left(1.0), Err(EngineError::Render(_))));
        assert_eq!(visual.state().left, 0.0);
        assert_eq!(visual.writes(), 0);
    }

    #[test]
    fn surface_counts_created_and_attached() {
        let mut surface = HeadlessSurface::new();
        let visual = surface.create_visual(VisualKind::Guide(Axis::X)).unwrap();
        surface.attach(&visual).unwrap();
        assert_eq!(surface.created(), 1);
        assert_eq!(surface.attached(), 1);
    }
}
