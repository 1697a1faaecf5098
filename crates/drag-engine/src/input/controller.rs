//! Drag state machine.
//!
//! ```text
//! Idle --pointer-down on player--> Dragging
//! Dragging --pointer-move--> Dragging   (move player, re-check collisions)
//! Dragging --pointer-up--> Idle
//! ```
//!
//! Everything else is ignored. There is no cancel or timeout: pointer-up
//! is the only way out of `Dragging`.

use glam::Vec2;

use crate::api::error::EngineError;
use crate::api::types::Cursor;
use crate::components::axis_guide::AxisGuides;
use crate::core::world::GameWorld;
use crate::input::event::InputEvent;
use crate::renderer::traits::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Default)]
pub struct InputController {
    phase: DragPhase,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Apply one event to the world. Runs to completion before returning.
    pub fn handle<S: Surface>(
        &mut self,
        event: InputEvent,
        world: &mut GameWorld<S>,
        guides: &mut AxisGuides<S::Visual>,
    ) -> Result<(), EngineError> {
        match event {
            InputEvent::PointerDown { x, y, target } => {
                let pointer = Vec2::new(x, y);
                let Some(player) = world.player_id() else {
                    return Ok(());
                };
                if target.or_else(|| world.pick(pointer)) != Some(player) {
                    return Ok(());
                }
                self.start_drag(pointer, world, guides)
            }
            InputEvent::PointerMove { x, y } if self.is_dragging() => {
                self.drag_to(Vec2::new(x, y), world, guides)
            }
            InputEvent::PointerUp { .. } if self.is_dragging() => self.end_drag(world, guides),
            InputEvent::PointerMove { .. } | InputEvent::PointerUp { .. } => Ok(()),
        }
    }

    fn start_drag<S: Surface>(
        &mut self,
        pointer: Vec2,
        world: &mut GameWorld<S>,
        guides: &mut AxisGuides<S::Visual>,
    ) -> Result<(), EngineError> {
        let Some(player) = world.player_id() else {
            return Ok(());
        };
        let player_pos = world.sprite(player)?.pos();
        let offset = player_pos - pointer;

        let state = world.pointer_mut();
        state.pos = pointer;
        state.button = true;
        state.offset = offset;
        self.phase = DragPhase::Dragging;
        log::debug!("drag start at {pointer}, offset {offset}");

        world.sprite_mut(player)?.set_cursor(Cursor::Move)?;
        guides.show_at(player_pos)
    }

    fn drag_to<S: Surface>(
        &mut self,
        pointer: Vec2,
        world: &mut GameWorld<S>,
        guides: &mut AxisGuides<S::Visual>,
    ) -> Result<(), EngineError> {
        let Some(player) = world.player_id() else {
            return Ok(());
        };
        world.pointer_mut().pos = pointer;
        let target = pointer + world.pointer().offset;
        world.sprite_mut(player)?.set_position(target)?;

        world.check_collisions()?;
        guides.move_to(world.sprite(player)?.pos())
    }

    fn end_drag<S: Surface>(
        &mut self,
        world: &mut GameWorld<S>,
        guides: &mut AxisGuides<S::Visual>,
    ) -> Result<(), EngineError> {
        self.phase = DragPhase::Idle;
        world.pointer_mut().button = false;
        log::debug!("drag end at {}", world.pointer().pos);

        guides.hide()?;
        if let Some(player) = world.player_id() {
            world.sprite_mut(player)?.set_cursor(Cursor::Pointer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::GameConfig;
    use crate::api::types::EntityId;
    use crate::renderer::headless::{HeadlessSurface, HeadlessVisual};

    struct Fixture {
        world: GameWorld<HeadlessSurface>,
        guides: AxisGuides<HeadlessVisual>,
        input: InputController,
    }

    impl Fixture {
        fn new() -> Self {
            let mut surface = HeadlessSurface::new();
            let guides = AxisGuides::create(&mut surface).unwrap();
            let world = GameWorld::from_config(surface, GameConfig::default()).unwrap();
            Self { world, guides, input: InputController::new() }
        }

        fn send(&mut self, event: InputEvent) -> Result<(), EngineError> {
            self.input.handle(event, &mut self.world, &mut self.guides)
        }

        fn player(&self) -> EntityId {
            self.world.player_id().unwrap()
        }

        fn player_pos(&self) -> Vec2 {
            self.world.player().unwrap().pos()
        }
    }

    fn down(x: f32, y: f32, target: Option<EntityId>) -> InputEvent {
        InputEvent::PointerDown { x, y, target }
    }

    #[test]
    fn drag_follows_pointer_with_offset() {
        let mut f = Fixture::new();
        assert_eq!(f.player_pos(), Vec2::new(320.0, 200.0));

        let player = f.player();
        f.send(down(330.0, 210.0, Some(player))).unwrap();
        assert!(f.input.is_dragging());
        assert_eq!(f.world.pointer().offset, Vec2::new(-10.0, -10.0));
        assert!(f.world.pointer().button);

        f.send(InputEvent::PointerMove { x: 400.0, y: 250.0 }).unwrap();
        assert_eq!(f.player_pos(), Vec2::new(390.0, 240.0));
        assert_eq!(f.world.pointer().pos, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn guides_track_player_while_dragging() {
        let mut f = Fixture::new();
        let player = f.player();
        f.send(down(330.0, 210.0, Some(player))).unwrap();
        assert!(f.guides.is_visible());
        assert_eq!(f.guides.x.visual().state().top, 200.0);
        assert_eq!(f.guides.y.visual().state().left, 320.0);

        f.send(InputEvent::PointerMove { x: 400.0, y: 250.0 }).unwrap();
        assert_eq!(f.guides.x.visual().state().top, 240.0);
        assert_eq!(f.guides.y.visual().state().left, 390.0);
    }

    #[test]
    fn pointer_up_ends_drag() {
        let mut f = Fixture::new();
        let player = f.player();
        f.send(down(330.0, 210.0, Some(player))).unwrap();
        assert_eq!(f.world.player().unwrap().visual().state().cursor, Cursor::Move);

        f.send(InputEvent::PointerUp { x: 0.0, y: 0.0 }).unwrap();
        assert_eq!(f.input.phase(), DragPhase::Idle);
        assert!(!f.world.pointer().button);
        assert!(!f.guides.is_visible());
        assert_eq!(f.world.player().unwrap().visual().state().cursor, Cursor::Pointer);

        // Moves after release leave the player alone.
        f.send(InputEvent::PointerMove { x: 10.0, y: 10.0 }).unwrap();
        assert_eq!(f.player_pos(), Vec2::new(320.0, 200.0));
    }

    #[test]
    fn idle_moves_and_ups_are_ignored() {
        let mut f = Fixture::new();
        f.send(InputEvent::PointerMove { x: 10.0, y: 10.0 }).unwrap();
        f.send(InputEvent::PointerUp { x: 10.0, y: 10.0 }).unwrap();
        assert_eq!(f.input.phase(), DragPhase::Idle);
        assert_eq!(f.player_pos(), Vec2::new(320.0, 200.0));
        assert!(!f.guides.is_visible());
    }

    #[test]
    fn pointer_down_elsewhere_does_not_drag() {
        let mut f = Fixture::new();
        let obstacle = f.world.obstacles()[0];
        f.send(down(155.0, 155.0, Some(obstacle))).unwrap();
        assert!(!f.input.is_dragging());

        // Empty space, resolved by hit-testing.
        f.send(down(5.0, 5.0, None)).unwrap();
        assert!(!f.input.is_dragging());
        assert!(!f.guides.is_visible());
    }

    #[test]
    fn pointer_down_without_target_hit_tests() {
        let mut f = Fixture::new();
        f.send(down(330.0, 210.0, None)).unwrap();
        assert!(f.input.is_dragging());
        assert_eq!(f.world.pointer().offset, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn hit_test_uses_play_area_coordinates() {
        let mut f = Fixture::new();
        // (330, 210) inside the play area, seen by a page whose play area
        // starts at (40, 40) and not translated back.
        f.send(down(370.0, 250.0, None)).unwrap();
        assert!(!f.input.is_dragging());

        f.send(down(330.0, 210.0, None)).unwrap();
        assert!(f.input.is_dragging());
    }

    #[test]
    fn dragging_onto_obstacle_outlines_both() {
        let mut f = Fixture::new();
        let player = f.player();
        let obstacle = f.world.obstacles()[0];
        f.send(down(320.0, 200.0, Some(player))).unwrap();

        f.send(InputEvent::PointerMove { x: 160.0, y: 160.0 }).unwrap();
        assert!(f.world.sprite(player).unwrap().is_outlined());
        assert!(f.world.sprite(obstacle).unwrap().is_outlined());

        f.send(InputEvent::PointerMove { x: 320.0, y: 200.0 }).unwrap();
        assert!(!f.world.sprite(player).unwrap().is_outlined());
        assert!(!f.world.sprite(obstacle).unwrap().is_outlined());
    }

    #[test]
    fn non_finite_move_is_rejected_but_drag_continues() {
        let mut f = Fixture::new();
        let player = f.player();
        f.send(down(320.0, 200.0, Some(player))).unwrap();

        let err = f.send(InputEvent::PointerMove { x: f32::NAN, y: 0.0 }).unwrap_err();
        assert!(matches!(err, EngineError::InvalidGeometry { .. }));
        assert!(f.input.is_dragging());
        assert_eq!(f.player_pos(), Vec2::new(320.0, 200.0));

        f.send(InputEvent::PointerMove { x: 100.0, y: 100.0 }).unwrap();
        assert_eq!(f.player_pos(), Vec2::new(100.0, 100.0));
    }

    #[test]
    fn dragging_outside_play_area_is_allowed() {
        let mut f = Fixture::new();
        let player = f.player();
        f.send(down(320.0, 200.0, Some(player))).unwrap();
        f.send(InputEvent::PointerMove { x: -50.0, y: 900.0 }).unwrap();
        assert_eq!(f.player_pos(), Vec2::new(-50.0, 900.0));
    }
}
