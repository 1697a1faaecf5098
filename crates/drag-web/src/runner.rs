use drag_engine::{
    AxisGuides, EngineError, GameConfig, GameWorld, InputController, InputEvent, Surface,
};

/// Owns the world, the axis guides and the drag controller for one page.
///
/// Generic over the surface so the same wiring runs against the DOM in the
/// browser and the headless surface in tests. The page keeps a
/// `thread_local!` runner and drives it through the free functions in
/// `lib.rs`, because wasm-bindgen cannot export generic structs.
pub struct DemoRunner<S: Surface> {
    world: GameWorld<S>,
    guides: AxisGuides<S::Visual>,
    input: InputController,
}

impl<S: Surface> DemoRunner<S> {
    pub fn new(mut surface: S, config: GameConfig) -> Result<Self, EngineError> {
        let guides = AxisGuides::create(&mut surface)?;
        let world = GameWorld::from_config(surface, config)?;
        Ok(Self {
            world,
            guides,
            input: InputController::new(),
        })
    }

    /// Run one frame. Returns whether the page should schedule another.
    pub fn frame(&mut self, timestamp_ms: f64) -> bool {
        // The world logs and halts on failure.
        self.world
            .frame(timestamp_ms)
            .map(|control| control.should_continue())
            .unwrap_or(false)
    }

    /// Handle a pointer event immediately. Rejected events are logged and
    /// dropped; they never stop the frame loop.
    pub fn push_input(&mut self, event: InputEvent) {
        if let Err(err) = self.input.handle(event, &mut self.world, &mut self.guides) {
            log::warn!("dropped {:?}: {}", event, err);
        }
    }

    pub fn stop(&mut self) {
        self.world.stop();
    }

    pub fn world(&self) -> &GameWorld<S> {
        &self.world
    }

    pub fn guides(&self) -> &AxisGuides<S::Visual> {
        &self.guides
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }
}

/// Fill an empty runner slot. A slot that already holds a runner is left
/// alone and `build` never runs, so a repeated init creates no visuals.
/// Returns whether a runner was installed.
pub fn install_once<S: Surface>(
    slot: &mut Option<DemoRunner<S>>,
    build: impl FnOnce() -> Result<DemoRunner<S>, EngineError>,
) -> Result<bool, EngineError> {
    if slot.is_some() {
        return Ok(false);
    }
    *slot = Some(build()?);
    Ok(true)
}
