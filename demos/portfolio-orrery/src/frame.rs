/// Per-frame motion: sun spin, orbits, planet and cloud spin, star drift.
///
/// Writes local transforms only; the runner propagates and rebuilds buffers.

use glam::Quat;
use orrery_engine::EngineContext;

use crate::config::OrreryConfig;
use crate::scene_builder::SolarScene;

pub fn advance(solar: &mut SolarScene, ctx: &mut EngineContext, config: &OrreryConfig) {
    solar.sun.spin += config.sun_spin;
    if let Some(local) = ctx.graph.get_local_mut(solar.sun.root) {
        local.rotation = Quat::from_rotation_y(solar.sun.spin);
    }

    for planet in &mut solar.planets {
        planet.angle += planet.body.angular_speed;
        planet.spin += planet.body.rotation_speed.unwrap_or(config.default_rotation_speed);

        if let Some(local) = ctx.graph.get_local_mut(planet.root) {
            local.translation = planet.position();
            local.rotation = Quat::from_rotation_y(planet.spin);
        }

        if let Some(cloud) = planet.cloud {
            planet.cloud_spin += config.cloud_spin;
            if let Some(local) = ctx.graph.get_local_mut(cloud) {
                local.rotation = Quat::from_rotation_y(planet.cloud_spin);
            }
        }
    }

    let respawned = solar.starfield.advance(&mut ctx.points, &mut ctx.rng);
    if respawned > 0 {
        log::trace!("{} stars respawned", respawned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Celestial;
    use crate::orbit;

    fn scene() -> (EngineContext, SolarScene, OrreryConfig) {
        let mut ctx = EngineContext::new();
        let config = OrreryConfig { star_count: 50, ..Default::default() };
        let solar = SolarScene::build(&mut ctx, &config);
        (ctx, solar, config)
    }

    #[test]
    fn angle_advances_by_speed_each_frame() {
        let (mut ctx, mut solar, config) = scene();
        let initial: Vec<f32> = solar.planets.iter().map(|p| p.angle).collect();
        const N: usize = 240;
        for _ in 0..N {
            advance(&mut solar, &mut ctx, &config);
        }
        for (p, start) in solar.planets.iter().zip(initial) {
            let expected = start + N as f32 * p.body.angular_speed;
            assert!((p.angle - expected).abs() < 1e-3, "{}: {} vs {}", p.body.celestial.name(), p.angle, expected);
        }
    }

    #[test]
    fn world_position_follows_circular_orbit() {
        let (mut ctx, mut solar, config) = scene();
        for _ in 0..10 {
            advance(&mut solar, &mut ctx, &config);
        }
        ctx.graph.propagate(&mut ctx.scene);
        for p in &solar.planets {
            let world = ctx.scene.get(p.root).unwrap().pos;
            let expected = orbit::circular_position(p.body.distance, p.angle);
            assert!((world - expected).length() < 1e-3);
        }
    }

    #[test]
    fn unset_rotation_uses_default() {
        let (mut ctx, mut solar, config) = scene();
        advance(&mut solar, &mut ctx, &config);
        let uranus = solar.planet(Celestial::Uranus).unwrap();
        assert!((uranus.spin - config.default_rotation_speed).abs() < 1e-6);
        let earth = solar.planet(Celestial::Earth).unwrap();
        assert!((earth.spin - 0.020).abs() < 1e-6);
    }

    #[test]
    fn clouds_spin_on_their_own() {
        let (mut ctx, mut solar, config) = scene();
        for _ in 0..3 {
            advance(&mut solar, &mut ctx, &config);
        }
        let earth = solar.planet(Celestial::Earth).unwrap();
        assert!((earth.cloud_spin - 3.0 * config.cloud_spin).abs() < 1e-6);
        let cloud = earth.cloud.unwrap();
        let expected = Quat::from_rotation_y(earth.cloud_spin);
        assert!(ctx.graph.get_local(cloud).unwrap().rotation.abs_diff_eq(expected, 1e-6));
        // Other planets carry no cloud state.
        assert_eq!(solar.planet(Celestial::Mars).unwrap().cloud_spin, 0.0);
    }

    #[test]
    fn sun_spins() {
        let (mut ctx, mut solar, config) = scene();
        advance(&mut solar, &mut ctx, &config);
        advance(&mut solar, &mut ctx, &config);
        assert!((solar.sun.spin - 2.0 * config.sun_spin).abs() < 1e-6);
    }

    #[test]
    fn stars_stay_in_shell() {
        let (mut ctx, mut solar, config) = scene();
        for _ in 0..100 {
            advance(&mut solar, &mut ctx, &config);
        }
        let (min, max) = (solar.starfield.min_radius(), solar.starfield.max_radius());
        for star in ctx.points.as_slice() {
            let r = star.position().length();
            assert!(r >= min - 1e-2 && r <= max + 1e-2);
        }
    }
}
