/// Click → body resolution.
///
/// Casts against every body root (decorations included through the
/// hierarchy), takes the nearest hit, then walks up to the named body.

use glam::Vec2;
use orrery_engine::{raycast, resolve_named, EngineContext, Ray};

use crate::bodies::Celestial;
use crate::scene_builder::SolarScene;

/// Resolve a world-space ray to the body it hits, if any.
pub fn pick_ray(ctx: &EngineContext, solar: &SolarScene, ray: &Ray) -> Option<Celestial> {
    let hit = raycast(&ctx.scene, &ctx.graph, &solar.pick_roots(), ray)?;
    let named = resolve_named(&ctx.scene, &ctx.graph, hit.entity)?;
    let celestial = solar.celestial_of(named);
    if celestial.is_none() {
        log::debug!("pick hit {:?} but no body owns it", named);
    }
    celestial
}

/// Resolve a point in normalized device coordinates.
pub fn pick_ndc(ctx: &EngineContext, solar: &SolarScene, ndc: Vec2) -> Option<Celestial> {
    pick_ray(ctx, solar, &ctx.camera.ray_from_ndc(ndc))
}

/// Resolve a pointer position in CSS pixels.
pub fn pick_screen(ctx: &EngineContext, solar: &SolarScene, x: f32, y: f32) -> Option<Celestial> {
    pick_ndc(ctx, solar, ctx.camera.screen_to_ndc(x, y))
}
