pub mod headless;
pub mod traits;

pub use headless::{HeadlessSurface, HeadlessVisual, VisualState};
pub use traits::{Surface, Visual, VisualKind};
