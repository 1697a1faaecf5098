use glam::Vec2;

use crate::api::config::GameConfig;
use crate::api::error::EngineError;
use crate::api::types::{Cursor, EntityId, LoopControl};
use crate::components::entity::{Drift, Entity};
use crate::components::sprite::{Sprite, SpriteDesc};
use crate::core::collision::overlaps;
use crate::core::scene::Scene;
use crate::core::time::{ms_to_seconds, FrameClock};
use crate::renderer::traits::{Surface, VisualKind};

pub const PLAYER_TAG: &str = "player";
pub const OBSTACLE_TAG: &str = "obstacle";

/// Last known pointer state, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    /// Button held since a pointer-down on the player.
    pub button: bool,
    /// Player position minus pointer position at drag start.
    pub offset: Vec2,
}

/// Stacking order for a vertical position: lower on screen draws on top.
pub fn stacking_order(y: f32, scale: f32) -> i32 {
    (y * scale).round() as i32
}

/// Owns the surface, every entity and the run loop.
pub struct GameWorld<S: Surface> {
    surface: S,
    config: GameConfig,
    scene: Scene<S::Visual>,
    next_id: u32,
    player: Option<EntityId>,
    obstacles: Vec<EntityId>,
    pointer: PointerState,
    clock: FrameClock,
    running: bool,
    frames: u64,
}

impl<S: Surface> GameWorld<S> {
    /// An empty world. Use `from_config` for the demo layout.
    pub fn new(surface: S, config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let clock = FrameClock::new(config.max_frame_ms);
        Ok(Self {
            surface,
            config,
            scene: Scene::new(),
            next_id: 1,
            player: None,
            obstacles: Vec::new(),
            pointer: PointerState::default(),
            clock,
            running: true,
            frames: 0,
        })
    }

    /// Build the world described by `config`: the player first, then the
    /// obstacles in listed order.
    pub fn from_config(surface: S, config: GameConfig) -> Result<Self, EngineError> {
        let player = config.player.clone();
        let obstacles = config.obstacles.clone();

        let mut world = Self::new(surface, config)?;
        world.spawn_player(&player)?;
        for desc in &obstacles {
            world.spawn_obstacle(desc)?;
        }
        log::info!(
            "world ready: {}x{} with {} entities ({} obstacles)",
            world.config.world_width,
            world.config.world_height,
            world.scene.len(),
            world.obstacles.len()
        );
        Ok(world)
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Attach the entity's visual to the play area and insert it in
    /// render order.
    pub fn add_entity(&mut self, entity: Entity<S::Visual>) -> Result<(), EngineError> {
        self.surface.attach(entity.sprite.visual())?;
        self.scene.spawn(entity);
        Ok(())
    }

    /// Create a sprite from `desc` and add it under `tag`. A non-zero
    /// velocity gives the entity a `Drift` behavior.
    pub fn spawn(&mut self, desc: &SpriteDesc, tag: &str) -> Result<EntityId, EngineError> {
        let id = self.next_id();
        let visual = self.surface.create_visual(VisualKind::Sprite(id))?;
        let sprite = Sprite::create(visual, desc)?;
        let mut entity = Entity::new(id, sprite).with_tag(tag);
        let velocity = desc.velocity();
        if velocity != Vec2::ZERO {
            entity = entity.with_behavior(Drift { velocity });
        }
        self.add_entity(entity)?;
        Ok(id)
    }

    /// Spawn the draggable sprite. Replaces any previous player role.
    pub fn spawn_player(&mut self, desc: &SpriteDesc) -> Result<EntityId, EngineError> {
        let id = self.spawn(desc, PLAYER_TAG)?;
        self.sprite_mut(id)?.set_cursor(Cursor::Pointer)?;
        self.player = Some(id);
        Ok(id)
    }

    pub fn spawn_obstacle(&mut self, desc: &SpriteDesc) -> Result<EntityId, EngineError> {
        let id = self.spawn(desc, OBSTACLE_TAG)?;
        self.obstacles.push(id);
        Ok(id)
    }

    // -- Accessors --

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.config.world_width
    }

    pub fn height(&self) -> f32 {
        self.config.world_height
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scene(&self) -> &Scene<S::Visual> {
        &self.scene
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn obstacles(&self) -> &[EntityId] {
        &self.obstacles
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity<S::Visual>> {
        self.scene.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity<S::Visual>> {
        self.scene.get_mut(id)
    }

    pub fn sprite(&self, id: EntityId) -> Result<&Sprite<S::Visual>, EngineError> {
        self.scene
            .get(id)
            .map(|e| &e.sprite)
            .ok_or(EngineError::UnknownEntity(id))
    }

    pub fn sprite_mut(&mut self, id: EntityId) -> Result<&mut Sprite<S::Visual>, EngineError> {
        self.scene
            .get_mut(id)
            .map(|e| &mut e.sprite)
            .ok_or(EngineError::UnknownEntity(id))
    }

    pub fn player(&self) -> Option<&Sprite<S::Visual>> {
        self.player.and_then(|id| self.scene.get(id)).map(|e| &e.sprite)
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// Frontmost entity under a screen point.
    pub fn pick(&self, point: Vec2) -> Option<EntityId> {
        self.scene.pick(point)
    }

    // -- Frame loop --

    /// One frame: re-sort by y, run behaviors, set stacking order, sync.
    pub fn tick(&mut self, delta_ms: f64) -> Result<(), EngineError> {
        if self.scene.is_empty() {
            return Ok(());
        }
        let dt = ms_to_seconds(delta_ms);
        let scale = self.config.stacking_scale;
        let mut moved = false;

        self.scene.sort_by_depth();
        for entity in self.scene.iter_mut() {
            if let Some(behavior) = entity.behavior.as_mut() {
                let mut pos = entity.sprite.pos();
                behavior.update(&mut pos, dt);
                if pos != entity.sprite.pos() {
                    entity.sprite.set_position(pos)?;
                    moved = true;
                }
            }
            let z = stacking_order(entity.y(), scale);
            entity.sprite.set_stacking_order(z)?;
            entity.sprite.sync()?;
        }
        if moved {
            self.scene.sort_by_depth();
        }
        Ok(())
    }

    /// Entry point for the environment's frame callback. `now_ms` is the
    /// callback's absolute timestamp. The caller reschedules while this
    /// returns `Continue`. A failing tick halts the loop.
    pub fn frame(&mut self, now_ms: f64) -> Result<LoopControl, EngineError> {
        if !self.running {
            return Ok(LoopControl::Stop);
        }
        let delta = self.clock.advance(now_ms);
        if let Err(err) = self.tick(delta) {
            return Err(self.halt(err));
        }
        self.frames += 1;
        Ok(if self.running { LoopControl::Continue } else { LoopControl::Stop })
    }

    /// Run up to `count` ticks of `frame_ms` each without an environment.
    /// Returns how many ran before the loop stopped.
    pub fn run_frames(&mut self, count: u32, frame_ms: f64) -> Result<u32, EngineError> {
        let mut ran = 0;
        while ran < count && self.running {
            if let Err(err) = self.tick(frame_ms) {
                return Err(self.halt(err));
            }
            self.frames += 1;
            ran += 1;
        }
        Ok(ran)
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("frame loop stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.clock.reset();
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    fn halt(&mut self, err: EngineError) -> EngineError {
        log::error!("frame {} failed, halting loop: {}", self.frames, err);
        self.stop();
        err
    }

    // -- Collision policy --

    /// Clear every outline, then outline the player and each obstacle it
    /// overlaps. Returns the number of overlapping obstacles.
    pub fn check_collisions(&mut self) -> Result<usize, EngineError> {
        let Some(player_id) = self.player else {
            return Ok(0);
        };
        let player_box = {
            let player = self.sprite_mut(player_id)?;
            player.set_outline(false)?;
            player.aabb()
        };

        let mut hits = 0;
        for &id in &self.obstacles {
            let obstacle = self
                .scene
                .get_mut(id)
                .map(|e| &mut e.sprite)
                .ok_or(EngineError::UnknownEntity(id))?;
            obstacle.set_outline(false)?;
            obstacle.set_outline_color(self.config.highlight_color.as_str())?;
            if overlaps(&player_box, &obstacle.aabb()) {
                obstacle.set_outline(true)?;
                hits += 1;
            }
        }

        if hits > 0 {
            self.sprite_mut(player_id)?.set_outline(true)?;
        }
        Ok(hits)
    }
}
