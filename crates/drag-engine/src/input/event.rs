use crate::api::types::EntityId;

/// Pointer events the engine understands.
///
/// Coordinates are relative to the play area's top-left corner, the same
/// space sprite positions live in. Hit-testing (`GameWorld::pick`) relies
/// on this, so hosts must subtract the play area's page offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Button pressed. `target` is the entity the environment saw under the
    /// pointer, if it can tell; otherwise the world hit-tests.
    PointerDown { x: f32, y: f32, target: Option<EntityId> },
    /// Pointer moved anywhere over the play area.
    PointerMove { x: f32, y: f32 },
    /// Button released anywhere over the play area.
    PointerUp { x: f32, y: f32 },
}
