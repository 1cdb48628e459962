/// Builds the initial scene: sun, planets with decorations, orbit guides, starfield.

use std::f32::consts::TAU;
use glam::Vec3;
use orrery_engine::{EngineContext, Entity, EntityId, LineColor, LocalTransform, MeshComponent};

use crate::bodies::{self, BodyDescriptor, Celestial, PLANETS, SUN};
use crate::config::OrreryConfig;
use crate::decorations;
use crate::orbit;
use crate::starfield::Starfield;

const GUIDE_ALPHA: f32 = 0.25;
const SUN_GLOW_EMISSIVE: f32 = 1.2;

/// The central body.
#[derive(Debug, Clone)]
pub struct SunInstance {
    pub root: EntityId,
    pub spin: f32,
}

/// One orbiting body and its per-frame state.
#[derive(Debug, Clone)]
pub struct PlanetInstance {
    pub body: &'static BodyDescriptor,
    pub root: EntityId,
    /// Orbital angle (radians). Never wrapped; trig handles it.
    pub angle: f32,
    pub spin: f32,
    pub cloud: Option<EntityId>,
    pub cloud_spin: f32,
}

impl PlanetInstance {
    pub fn position(&self) -> Vec3 {
        orbit::circular_position(self.body.distance, self.angle)
    }
}

/// Everything the frame updater and pick dispatcher need to find again.
pub struct SolarScene {
    pub sun: SunInstance,
    pub planets: Vec<PlanetInstance>,
    pub starfield: Starfield,
}

impl SolarScene {
    pub fn build(ctx: &mut EngineContext, config: &OrreryConfig) -> Self {
        let sun = spawn_sun(ctx);

        let mut planets = Vec::with_capacity(PLANETS.len());
        for body in &PLANETS {
            let angle = ctx.rng.next_f32() * TAU;
            planets.push(spawn_planet(ctx, body, angle));
            let c = body.color;
            ctx.lines.add_loop(
                &orbit::guide_points(body.distance),
                LineColor::new(c.r, c.g, c.b, GUIDE_ALPHA),
            );
        }

        let min_radius = bodies::farthest_distance() + config.star_margin;
        let starfield = Starfield::generate(&mut ctx.points, &mut ctx.rng, config, min_radius);

        log::info!(
            "scene built: {} planets, {} entities, {} stars",
            planets.len(),
            ctx.scene.len(),
            starfield.len()
        );

        Self { sun, planets, starfield }
    }

    /// Root entities a pick ray is tested against (children are included by the cast).
    pub fn pick_roots(&self) -> Vec<EntityId> {
        std::iter::once(self.sun.root)
            .chain(self.planets.iter().map(|p| p.root))
            .collect()
    }

    /// Which body a root entity belongs to.
    pub fn celestial_of(&self, root: EntityId) -> Option<Celestial> {
        if root == self.sun.root {
            return Some(Celestial::Sun);
        }
        self.planets
            .iter()
            .find(|p| p.root == root)
            .map(|p| p.body.celestial)
    }

    pub fn planet(&self, celestial: Celestial) -> Option<&PlanetInstance> {
        self.planets.iter().find(|p| p.body.celestial == celestial)
    }

    pub fn root_of(&self, celestial: Celestial) -> Option<EntityId> {
        match celestial {
            Celestial::Sun => Some(self.sun.root),
            other => self.planet(other).map(|p| p.root),
        }
    }

    /// Apply manifest textures to bodies. Missing names render untextured.
    pub fn apply_textures(&self, ctx: &mut EngineContext) {
        let mut assignments = vec![(self.sun.root, ctx.textures.resolve(SUN.texture))];
        for p in &self.planets {
            assignments.push((p.root, ctx.textures.resolve(p.body.texture)));
        }
        for (id, texture) in assignments {
            if let Some(mesh) = ctx.scene.get_mut(id).and_then(|e| e.mesh.as_mut()) {
                mesh.texture = texture;
            }
        }
    }
}

fn spawn_sun(ctx: &mut EngineContext) -> SunInstance {
    let root = ctx.next_id();
    let mesh = MeshComponent::sphere(SUN.size, SUN.color)
        .with_emissive(SUN.emissive)
        .with_shininess(8.0);
    ctx.scene.spawn(Entity::new(root).with_tag(Celestial::Sun.name()).with_mesh(mesh));
    ctx.graph.register(root);
    decorations::attach_glow(ctx, root, SUN.size, SUN.color, SUN_GLOW_EMISSIVE);
    SunInstance { root, spin: 0.0 }
}

fn spawn_planet(ctx: &mut EngineContext, body: &'static BodyDescriptor, angle: f32) -> PlanetInstance {
    let root = ctx.next_id();
    let position = orbit::circular_position(body.distance, angle);
    ctx.scene.spawn(
        Entity::new(root)
            .with_tag(body.celestial.name())
            .with_pos(position)
            .with_mesh(MeshComponent::sphere(body.size, body.color)),
    );
    ctx.graph.register_with(root, LocalTransform::from_translation(position));

    decorations::attach_glow(ctx, root, body.size, body.color, 0.0);
    let attached = decorations::attach(ctx, root, body);

    PlanetInstance {
        body,
        root,
        angle,
        spin: 0.0,
        cloud: attached.cloud,
        cloud_spin: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorations::{DUST_COUNT, SPARKLE_COUNT};

    fn built() -> (EngineContext, SolarScene) {
        let mut ctx = EngineContext::new();
        let config = OrreryConfig { star_count: 100, ..Default::default() };
        let solar = SolarScene::build(&mut ctx, &config);
        ctx.graph.propagate(&mut ctx.scene);
        (ctx, solar)
    }

    #[test]
    fn one_named_root_per_body() {
        let (ctx, solar) = built();
        assert_eq!(solar.planets.len(), 7);
        let roots = solar.pick_roots();
        assert_eq!(roots.len(), 8);
        for (root, celestial) in roots.iter().zip(Celestial::ALL) {
            assert_eq!(ctx.scene.get(*root).unwrap().tag, celestial.name());
            assert_eq!(solar.celestial_of(*root), Some(celestial));
        }
    }

    #[test]
    fn entity_count_covers_decorations() {
        let (ctx, _) = built();
        // 8 bodies + 8 glows + cloud + spot + ring + dust + sparkles
        let expected = 8 + 8 + 1 + 1 + 1 + DUST_COUNT + SPARKLE_COUNT;
        assert_eq!(ctx.scene.len(), expected);
    }

    #[test]
    fn planets_start_on_their_orbits() {
        let (ctx, solar) = built();
        for p in &solar.planets {
            let pos = ctx.scene.get(p.root).unwrap().pos;
            assert!((pos.length() - p.body.distance).abs() < 1e-3);
            assert_eq!(pos.y, 0.0);
        }
    }

    #[test]
    fn one_guide_loop_per_planet() {
        let (mut ctx, _) = built();
        assert_eq!(ctx.lines.line_count(), 7);
        ctx.lines.rebuild();
        assert_eq!(ctx.lines.vertex_count() as usize, 7 * orbit::GUIDE_POINTS * 2);
    }

    #[test]
    fn starfield_sits_beyond_outer_orbit() {
        let (ctx, solar) = built();
        assert_eq!(solar.starfield.min_radius(), 142.0 + 60.0);
        assert_eq!(ctx.points.len(), 100);
    }

    #[test]
    fn textures_fall_back_to_untextured() {
        let (mut ctx, solar) = built();
        let manifest = orrery_engine::AssetManifest::from_json(
            r#"{ "textures": { "earth": "earth.jpg" } }"#,
        )
        .unwrap();
        ctx.set_manifest(manifest);
        solar.apply_textures(&mut ctx);

        let earth = solar.root_of(Celestial::Earth).unwrap();
        let mars = solar.root_of(Celestial::Mars).unwrap();
        assert!(ctx.scene.get(earth).unwrap().mesh.unwrap().texture.is_some());
        assert!(ctx.scene.get(mars).unwrap().mesh.unwrap().texture.is_none());
    }
}
