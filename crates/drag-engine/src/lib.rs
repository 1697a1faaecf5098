pub mod api;
pub mod components;
pub mod core;
pub mod input;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use crate::api::config::GameConfig;
pub use crate::api::error::EngineError;
pub use crate::api::types::{Axis, Cursor, EntityId, LoopControl};
pub use crate::components::axis_guide::{AxisGuide, AxisGuides};
pub use crate::components::entity::{Behavior, Drift, Entity};
pub use crate::components::sprite::{Sprite, SpriteDesc, DEFAULT_SPRITE_SIZE};
pub use crate::core::collision::{overlaps, Aabb};
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use crate::core::world::{GameWorld, PointerState, OBSTACLE_TAG, PLAYER_TAG};
pub use crate::input::controller::{DragPhase, InputController};
pub use crate::input::event::InputEvent;
pub use crate::renderer::headless::{HeadlessSurface, HeadlessVisual, VisualState};
pub use crate::renderer::traits::{Surface, Visual, VisualKind};
