use std::collections::HashMap;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::mesh::MeshComponent;

/// Flat entity storage with an id → slot index.
/// Sized for scenes of a few hundred entities; entities live for the whole session.
pub struct Scene {
    entities: Vec<Entity>,
    index: HashMap<EntityId, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    /// Create a scene with a specific entity capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entities: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add an entity to the scene. Returns its id.
    /// Spawning an id that already exists replaces the old entity in place.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        match self.index.get(&id) {
            Some(&slot) => self.entities[slot] = entity,
            None => {
                self.index.insert(id, self.entities.len());
                self.entities.push(entity);
            }
        }
        id
    }

    /// Get a reference to an entity by ID.
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.index.get(&id).map(|&slot| &self.entities[slot])
    }

    /// Get a mutable reference to an entity by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.index.get(&id).map(|&slot| &mut self.entities[slot])
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate over all entities in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over all entities mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Active entities that carry a mesh.
    pub fn meshes(&self) -> impl Iterator<Item = (&Entity, &MeshComponent)> {
        self.entities
            .iter()
            .filter(|e| e.active)
            .filter_map(|e| e.mesh.as_ref().map(|m| (e, m)))
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Number of entities in the scene.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Clear all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(1)).with_pos(Vec3::new(10.0, 0.0, 20.0)));
        let e = scene.get(id).unwrap();
        assert_eq!(e.pos, Vec3::new(10.0, 0.0, 20.0));
    }

    #[test]
    fn respawn_replaces_in_place() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("old"));
        scene.spawn(Entity::new(EntityId(1)).with_tag("new"));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.get(EntityId(1)).unwrap().tag, "new");
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("Sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("Earth"));
        assert_eq!(scene.find_by_tag("Earth").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("Pluto").is_none());
    }

    #[test]
    fn meshes_skips_inactive_and_meshless() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)));
        let mut hidden = Entity::new(EntityId(2)).with_mesh(MeshComponent::sphere(1.0, MeshColor::WHITE));
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(3)).with_mesh(MeshComponent::sphere(1.0, MeshColor::WHITE)));
        let ids: Vec<EntityId> = scene.meshes().map(|(e, _)| e.id).collect();
        assert_eq!(ids, vec![EntityId(3)]);
    }
}
