use glam::Vec2;

/// Axis-aligned bounding box in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Box with its top-left corner at (x, y).
    pub fn from_rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// Inclusive point test, consistent with `overlaps` counting edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right
            && point.y >= self.top
            && point.y <= self.bottom
    }
}

/// True when the boxes intersect. Touching edges count as intersecting.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    !(a.bottom < b.top || a.top > b.bottom || a.left > b.right || a.right < b.left)
}
