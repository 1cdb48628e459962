/// Per-body decorations, attached as unnamed children of the body root so a
/// pick on any of them resolves to the body.

use std::f32::consts::TAU;
use glam::Vec3;
use orrery_engine::{EngineContext, Entity, EntityId, LocalTransform, MeshColor, MeshComponent};

use crate::bodies::{BodyDescriptor, BodyKind};

pub const GLOW_SCALE: f32 = 1.05;
pub const GLOW_OPACITY: f32 = 0.25;

const CLOUD_SCALE: f32 = 1.03;
const CLOUD_OPACITY: f32 = 0.4;

const SPOT_SCALE: f32 = 0.2;
const SPOT_COLOR: MeshColor = MeshColor::new(0.8, 0.35, 0.25);

pub const RING_INNER: f32 = 1.4;
pub const RING_OUTER: f32 = 2.3;
const RING_OPACITY: f32 = 0.7;
pub const DUST_COUNT: usize = 50;
pub const DUST_BAND: (f32, f32) = (1.5, 2.2);
const DUST_SCALE: f32 = 0.04;

pub const SPARKLE_COUNT: usize = 10;
pub const SPARKLE_EXTENT: f32 = 1.5;
const SPARKLE_SCALE: f32 = 0.06;

/// Handles the frame updater needs back from decoration.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Attached {
    /// Cloud shell that spins independently of its planet.
    pub cloud: Option<EntityId>,
}

/// Spawn `mesh` as a child of `parent` at local `offset`.
pub fn spawn_child(ctx: &mut EngineContext, parent: EntityId, offset: Vec3, mesh: MeshComponent) -> EntityId {
    let id = ctx.next_id();
    ctx.scene.spawn(Entity::new(id).with_mesh(mesh));
    ctx.graph.register_with(id, LocalTransform::from_translation(offset));
    ctx.graph.set_parent(id, Some(parent));
    id
}

/// Translucent halo shared by every body, sun included.
pub fn attach_glow(ctx: &mut EngineContext, parent: EntityId, size: f32, color: MeshColor, emissive: f32) -> EntityId {
    let mesh = MeshComponent::sphere(size * GLOW_SCALE, color.lighten(0.3))
        .with_opacity(GLOW_OPACITY)
        .with_emissive(emissive);
    spawn_child(ctx, parent, Vec3::ZERO, mesh)
}

/// Attach the decorations for `body.kind` under `parent`.
pub fn attach(ctx: &mut EngineContext, parent: EntityId, body: &BodyDescriptor) -> Attached {
    match body.kind {
        BodyKind::Plain => Attached::default(),
        BodyKind::Clouded => Attached { cloud: Some(clouds(ctx, parent, body.size)) },
        BodyKind::Spotted => {
            storm_spot(ctx, parent, body.size);
            Attached::default()
        }
        BodyKind::Ringed => {
            ring_and_dust(ctx, parent, body);
            Attached::default()
        }
        BodyKind::Sparkling => {
            sparkles(ctx, parent, body);
            Attached::default()
        }
    }
}

fn clouds(ctx: &mut EngineContext, parent: EntityId, size: f32) -> EntityId {
    let mesh = MeshComponent::sphere(size * CLOUD_SCALE, MeshColor::WHITE)
        .with_opacity(CLOUD_OPACITY)
        .with_shininess(4.0);
    spawn_child(ctx, parent, Vec3::ZERO, mesh)
}

fn storm_spot(ctx: &mut EngineContext, parent: EntityId, size: f32) {
    let offset = Vec3::new(0.0, -0.3, 0.95).normalize() * size;
    spawn_child(ctx, parent, offset, MeshComponent::sphere(size * SPOT_SCALE, SPOT_COLOR));
}

fn ring_and_dust(ctx: &mut EngineContext, parent: EntityId, body: &BodyDescriptor) {
    let ring = MeshComponent::ring(body.size * RING_INNER, body.size * RING_OUTER, body.color.lighten(0.2))
        .with_opacity(RING_OPACITY);
    spawn_child(ctx, parent, Vec3::ZERO, ring);

    let dust_color = body.color.lighten(0.4);
    for _ in 0..DUST_COUNT {
        let theta = ctx.rng.next_f32() * TAU;
        let radius = ctx.rng.range(DUST_BAND.0, DUST_BAND.1) * body.size;
        let offset = Vec3::new(radius * theta.cos(), 0.0, radius * theta.sin());
        spawn_child(ctx, parent, offset, MeshComponent::sphere(body.size * DUST_SCALE, dust_color));
    }
}

fn sparkles(ctx: &mut EngineContext, parent: EntityId, body: &BodyDescriptor) {
    let extent = body.size * SPARKLE_EXTENT;
    for _ in 0..SPARKLE_COUNT {
        let offset = Vec3::new(
            ctx.rng.symmetric(extent),
            ctx.rng.symmetric(extent),
            ctx.rng.symmetric(extent),
        );
        let mesh = MeshComponent::sphere(body.size * SPARKLE_SCALE, MeshColor::WHITE).with_emissive(1.5);
        spawn_child(ctx, parent, offset, mesh);
    }
}
