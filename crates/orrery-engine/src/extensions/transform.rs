// extensions/transform.rs
//
// Transform hierarchy extension: tracks parent-child relationships by EntityId.
// Decoupled from Entity/Scene internals: the graph owns local transforms and
// writes world transforms back into the scene on propagate.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.register_with(planet, LocalTransform::from_translation(pos));
//   graph.register_with(cloud, LocalTransform::new());
//   graph.set_parent(cloud, Some(planet));
//   graph.propagate(&mut scene);

use std::collections::HashMap;
use glam::{Mat4, Quat, Vec3};
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Local transform data for entities in a hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalTransform {
    /// Position relative to parent (or world if no parent).
    pub translation: Vec3,
    /// Rotation relative to parent.
    pub rotation: Quat,
    /// Scale multiplier relative to parent.
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::default() }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Node in the transform hierarchy.
#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: LocalTransform,
}

/// Transform hierarchy graph: manages parent-child relationships.
///
/// Exists separately from Scene; scenes that need hierarchy create this
/// alongside it.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent (top-level), in registration order.
    roots: Vec<EntityId>,
    /// Set when hierarchy or a local transform changes, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity in the hierarchy with default local transform.
    pub fn register(&mut self, id: EntityId) {
        self.register_with(id, LocalTransform::default());
    }

    /// Register an entity with a specific local transform.
    pub fn register_with(&mut self, id: EntityId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if node.parent.is_none() && !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    /// Requests that would create a cycle are ignored.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) {
        if let Some(p) = parent {
            if p == child || self.ancestors(p).any(|a| a == child) {
                log::warn!("TransformGraph: refusing cyclic parent {:?} -> {:?}", child, p);
                return;
            }
        }

        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
            if !self.roots.contains(&p) && self.get_parent(p).is_none() {
                self.roots.push(p);
            }
        }

        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        match parent {
            Some(p) => {
                if let Some(parent_node) = self.nodes.get_mut(&p) {
                    if !parent_node.children.contains(&child) {
                        parent_node.children.push(child);
                    }
                }
                self.roots.retain(|&r| r != child);
            }
            None => {
                if !self.roots.contains(&child) {
                    self.roots.push(child);
                }
            }
        }

        self.dirty = true;
    }

    /// Get the local transform for an entity.
    pub fn get_local(&self, id: EntityId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably. Marks the graph dirty.
    pub fn get_local_mut(&mut self, id: EntityId) -> Option<&mut LocalTransform> {
        self.dirty = true;
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of an entity.
    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of an entity.
    pub fn get_children(&self, id: EntityId) -> &[EntityId] {
        self.nodes.get(&id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Walk up the parent chain, nearest ancestor first (excludes `id`).
    pub fn ancestors(&self, id: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        std::iter::successors(self.get_parent(id), move |&cur| self.get_parent(cur))
    }

    /// `id` followed by every entity below it, depth-first.
    pub fn subtree(&self, id: EntityId) -> Vec<EntityId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.get_children(cur).iter().rev());
        }
        out
    }

    /// Top-level entities in registration order.
    pub fn roots(&self) -> &[EntityId] {
        &self.roots
    }

    /// Propagate transforms from roots down through the hierarchy.
    /// Updates Entity.pos/rotation/scale from composed local transforms.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }

        for &root in &self.roots {
            self.propagate_recursive(root, Mat4::IDENTITY, scene);
        }

        self.dirty = false;
    }

    fn propagate_recursive(&self, id: EntityId, parent_world: Mat4, scene: &mut Scene) {
        let Some(node) = self.nodes.get(&id) else { return };
        let world = parent_world * node.local.matrix();

        if let Some(entity) = scene.get_mut(id) {
            let (scale, rotation, pos) = world.to_scale_rotation_translation();
            entity.pos = pos;
            entity.rotation = rotation;
            entity.scale = scale;
        }

        for &child in &node.children {
            self.propagate_recursive(child, world, scene);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the hierarchy as needing propagation.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all hierarchy data.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Entity;

    #[test]
    fn parent_child_relationship() {
        let mut graph = TransformGraph::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        graph.register(parent);
        graph.register(child);
        graph.set_parent(child, Some(parent));

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_children(parent), [child].as_slice());
        assert_eq!(graph.roots(), [parent].as_slice());
    }

    #[test]
    fn propagate_composes_translation_and_rotation() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        let planet = EntityId(1);
        let moon = EntityId(2);
        scene.spawn(Entity::new(planet));
        scene.spawn(Entity::new(moon));

        // Planet at x=10, spun a quarter turn; moon offset +x locally.
        let mut planet_local = LocalTransform::from_translation(Vec3::new(10.0, 0.0, 0.0));
        planet_local.rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        graph.register_with(planet, planet_local);
        graph.register_with(moon, LocalTransform::from_translation(Vec3::new(2.0, 0.0, 0.0)));
        graph.set_parent(moon, Some(planet));

        graph.propagate(&mut scene);

        // Quarter turn about +Y maps local +X to world -Z.
        let moon_pos = scene.get(moon).unwrap().pos;
        assert!((moon_pos - Vec3::new(10.0, 0.0, -2.0)).length() < 1e-5, "{moon_pos:?}");
        assert!(!graph.is_dirty());
    }

    #[test]
    fn ancestors_walk_to_root() {
        let mut graph = TransformGraph::new();
        graph.register(EntityId(1));
        graph.register(EntityId(2));
        graph.register(EntityId(3));
        graph.set_parent(EntityId(2), Some(EntityId(1)));
        graph.set_parent(EntityId(3), Some(EntityId(2)));

        let chain: Vec<EntityId> = graph.ancestors(EntityId(3)).collect();
        assert_eq!(chain, vec![EntityId(2), EntityId(1)]);
        assert_eq!(graph.ancestors(EntityId(1)).count(), 0);
    }

    #[test]
    fn subtree_includes_all_descendants() {
        let mut graph = TransformGraph::new();
        for i in 1..=4 {
            graph.register(EntityId(i));
        }
        graph.set_parent(EntityId(2), Some(EntityId(1)));
        graph.set_parent(EntityId(3), Some(EntityId(1)));
        graph.set_parent(EntityId(4), Some(EntityId(3)));

        let mut ids = graph.subtree(EntityId(1));
        ids.sort();
        assert_eq!(ids, vec![EntityId(1), EntityId(2), EntityId(3), EntityId(4)]);
    }

    #[test]
    fn cyclic_parent_is_rejected() {
        let mut graph = TransformGraph::new();
        graph.register(EntityId(1));
        graph.register(EntityId(2));
        graph.set_parent(EntityId(2), Some(EntityId(1)));
        graph.set_parent(EntityId(1), Some(EntityId(2)));
        assert_eq!(graph.get_parent(EntityId(1)), None);
    }
}
