use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::renderer::traits::Visual;

/// Flat entity storage kept in render order (ascending y).
/// Designed for a handful of entities; every insertion re-sorts.
pub struct Scene<V: Visual> {
    entities: Vec<Entity<V>>,
}

impl<V: Visual> Scene<V> {
    /// An empty scene.
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(8),
        }
    }

    /// Add an entity and restore render order.
    pub fn spawn(&mut self, entity: Entity<V>) {
        self.entities.push(entity);
        self.sort_by_depth();
    }

    /// Stable sort by y, so entities on the same row keep insertion order.
    pub fn sort_by_depth(&mut self) {
        self.entities.sort_by(|a, b| a.y().total_cmp(&b.y()));
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity<V>> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity<V>> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Iterate in render order, back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Entity<V>> {
        self.entities.iter()
    }

    /// Iterate mutably, in render order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity<V>> {
        self.entities.iter_mut()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity<V>> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Frontmost entity whose box contains the point.
    pub fn pick(&self, point: Vec2) -> Option<EntityId> {
        self.entities
            .iter()
            .rev()
            .find(|e| e.sprite.aabb().contains(point))
            .map(|e| e.id)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<V: Visual> Default for Scene<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::{Sprite, SpriteDesc};
    use crate::renderer::headless::HeadlessVisual;
    use crate::renderer::traits::VisualKind;

    fn entity(id: u32, x: f32, y: f32) -> Entity<HeadlessVisual> {
        let id = EntityId(id);
        let sprite = Sprite::create(
            HeadlessVisual::new(VisualKind::Sprite(id)),
            &SpriteDesc::at(x, y),
        )
        .unwrap();
        Entity::new(id, sprite)
    }

    fn order(scene: &Scene<HeadlessVisual>) -> Vec<u32> {
        scene.iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn spawn_keeps_ascending_y() {
        let mut scene = Scene::new();
        scene.spawn(entity(1, 0.0, 200.0));
        scene.spawn(entity(2, 0.0, 50.0));
        scene.spawn(entity(3, 0.0, 120.0));
        assert_eq!(order(&scene), vec![2, 3, 1]);
    }

    #[test]
    fn equal_y_keeps_insertion_order() {
        let mut scene = Scene::new();
        scene.spawn(entity(1, 0.0, 10.0));
        scene.spawn(entity(2, 50.0, 10.0));
        scene.spawn(entity(3, 0.0, 5.0));
        scene.spawn(entity(4, 90.0, 10.0));
        assert_eq!(order(&scene), vec![3, 1, 2, 4]);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        assert!(scene.is_empty());
        scene.spawn(entity(1, 0.0, 0.0).with_tag("player"));
        scene.spawn(entity(2, 0.0, 0.0).with_tag("obstacle"));
        assert_eq!(scene.find_by_tag("obstacle").map(|e| e.id), Some(EntityId(2)));
        assert!(scene.find_by_tag("missing").is_none());
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn pick_prefers_frontmost() {
        let mut scene = Scene::new();
        scene.spawn(entity(1, 0.0, 0.0));
        scene.spawn(entity(2, 10.0, 10.0));
        // (15, 15) lies inside both; entity 2 is lower on screen, so in front.
        assert_eq!(scene.pick(Vec2::new(15.0, 15.0)), Some(EntityId(2)));
        assert_eq!(scene.pick(Vec2::new(2.0, 2.0)), Some(EntityId(1)));
        assert_eq!(scene.pick(Vec2::new(500.0, 500.0)), None);
    }
}
