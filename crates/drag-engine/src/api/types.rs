use std::fmt;

/// Unique identifier for an entity in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Screen axis. Guides are named after the axis they run along:
/// the `X` guide is a horizontal line, the `Y` guide a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// Pointer affordance shown while hovering a visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Hover affordance for something that can be grabbed.
    Pointer,
    /// Shown while a drag is in progress.
    Move,
}

impl Cursor {
    /// CSS `cursor` keyword.
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::Move => "move",
        }
    }
}

/// Whether the frame loop should be rescheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

impl LoopControl {
    pub fn should_continue(self) -> bool {
        self == LoopControl::Continue
    }
}
