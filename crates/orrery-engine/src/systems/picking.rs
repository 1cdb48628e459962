//! Ray casting against scene meshes.
//!
//! Shapes are intersected analytically in world space from the entity's
//! world transform, so results are only meaningful after the transform
//! graph has been propagated for the current frame.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::core::scene::Scene;
use crate::extensions::transform::TransformGraph;

/// Hits closer than this along the ray are ignored (ray starting on a surface).
const RAY_EPSILON: f32 = 1e-4;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// `direction` is normalized; a zero direction falls back to -Z.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.try_normalize().unwrap_or(Vec3::NEG_Z),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Nearest intersection found by a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub entity: EntityId,
    /// Distance along the ray.
    pub distance: f32,
    pub point: Vec3,
}

/// Distance along `ray` to the nearest point on a sphere, if any.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let root = disc.sqrt();
    let near = -b - root;
    let far = -b + root;
    if near > RAY_EPSILON {
        Some(near)
    } else if far > RAY_EPSILON {
        Some(far)
    } else {
        None
    }
}

/// Distance along `ray` to a flat annulus centered at `center` with plane
/// normal `normal`, if the plane hit lies between the two radii.
pub fn intersect_ring(
    ray: &Ray,
    center: Vec3,
    normal: Vec3,
    inner_radius: f32,
    outer_radius: f32,
) -> Option<f32> {
    let denom = ray.direction.dot(normal);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < RAY_EPSILON {
        return None;
    }
    let dist = (ray.at(t) - center).length();
    (dist >= inner_radius && dist <= outer_radius).then_some(t)
}

/// Intersect a single entity's mesh in world space.
pub fn intersect_entity(ray: &Ray, entity: &Entity) -> Option<f32> {
    if !entity.active {
        return None;
    }
    let mesh = entity.mesh.as_ref()?;
    let scale = entity.scale.abs().max_element();
    match mesh.shape {
        MeshShape::Sphere { radius } => intersect_sphere(ray, entity.pos, radius * scale),
        MeshShape::Ring { inner_radius, outer_radius } => intersect_ring(
            ray,
            entity.pos,
            entity.rotation * Vec3::Y,
            inner_radius * scale,
            outer_radius * scale,
        ),
    }
}

/// Cast `ray` against each root and, recursively, everything parented below
/// it. Returns the nearest hit.
pub fn raycast(
    scene: &Scene,
    graph: &TransformGraph,
    roots: &[EntityId],
    ray: &Ray,
) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for &root in roots {
        for id in graph.subtree(root) {
            let Some(entity) = scene.get(id) else { continue };
            let Some(t) = intersect_entity(ray, entity) else { continue };
            if best.map_or(true, |b| t < b.distance) {
                best = Some(RayHit { entity: id, distance: t, point: ray.at(t) });
            }
        }
    }
    best
}

/// Resolve a hit to the nearest entity (itself or an ancestor) that carries
/// a display name.
pub fn resolve_named(scene: &Scene, graph: &TransformGraph, id: EntityId) -> Option<EntityId> {
    std::iter::once(id)
        .chain(graph.ancestors(id))
        .find(|&candidate| scene.get(candidate).is_some_and(Entity::is_named))
}
