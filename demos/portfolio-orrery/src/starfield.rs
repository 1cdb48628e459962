/// Background starfield: a drifting point cloud in a spherical shell.
///
/// Positions live in the engine's point buffer (what the host draws);
/// velocities live here, index-aligned with the buffer.

use glam::Vec3;
use orrery_engine::{PointBuffer, PointInstance, Rng};

use crate::config::OrreryConfig;

const STAR_SIZE: (f32, f32) = (0.8, 1.8);

pub struct Starfield {
    velocities: Vec<Vec3>,
    min_radius: f32,
    max_radius: f32,
}

impl Starfield {
    /// Fill `points` with `config.star_count` stars between `min_radius`
    /// and the configured outer radius.
    pub fn generate(points: &mut PointBuffer, rng: &mut Rng, config: &OrreryConfig, min_radius: f32) -> Self {
        let max_radius = config.star_outer_radius.max(min_radius);
        let mut velocities = Vec::with_capacity(config.star_count);

        points.clear();
        for _ in 0..config.star_count {
            let position = sample_shell(rng, min_radius, max_radius);
            let size = rng.range(STAR_SIZE.0, STAR_SIZE.1);
            let color = star_color(rng, config.star_tint_chance);
            if !points.push(PointInstance::new(position, size, color)) {
                log::warn!("point buffer full at {} stars", velocities.len());
                break;
            }
            velocities.push(Vec3::new(
                rng.symmetric(config.star_drift),
                rng.symmetric(config.star_drift),
                rng.symmetric(config.star_drift),
            ));
        }

        Self { velocities, min_radius, max_radius }
    }

    /// Drift every star by its velocity. Stars that leave the shell are
    /// resampled inside it. Returns how many respawned.
    pub fn advance(&mut self, points: &mut PointBuffer, rng: &mut Rng) -> usize {
        let mut respawned = 0;
        for (star, velocity) in points.as_mut_slice().iter_mut().zip(&self.velocities) {
            let moved = star.position() + *velocity;
            let r = moved.length();
            if r < self.min_radius || r > self.max_radius {
                star.set_position(sample_shell(rng, self.min_radius, self.max_radius));
                respawned += 1;
            } else {
                star.set_position(moved);
            }
        }
        respawned
    }

    pub fn len(&self) -> usize {
        self.velocities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    pub fn min_radius(&self) -> f32 {
        self.min_radius
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }
}

/// Uniform by solid angle, uniform in radius.
pub fn sample_shell(rng: &mut Rng, min_radius: f32, max_radius: f32) -> Vec3 {
    rng.unit_sphere() * rng.range(min_radius, max_radius)
}

/// Mostly near-white; occasionally one channel stands out.
fn star_color(rng: &mut Rng, tint_chance: f32) -> [f32; 3] {
    let base = rng.range(0.8, 1.0);
    if rng.next_f32() >= tint_chance {
        return [base, base, base];
    }
    let mut color = [base * 0.75; 3];
    color[rng.next_int(3) as usize] = 1.0;
    color
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn field(count: usize, min: f32, max: f32) -> (Starfield, PointBuffer, Rng) {
        let config = OrreryConfig {
            star_count: count,
            star_outer_radius: max,
            ..Default::default()
        };
        let mut points = PointBuffer::with_capacity(count);
        let mut rng = Rng::new(7);
        let field = Starfield::generate(&mut points, &mut rng, &config, min);
        (field, points, rng)
    }

    #[test]
    fn initial_stars_fill_the_shell() {
        let (field, points, _) = field(500, 200.0, 900.0);
        assert_eq!(field.len(), 500);
        assert_eq!(points.len(), 500);
        for p in points.as_slice() {
            let r = p.position().length();
            assert!(r >= 200.0 - EPS && r <= 900.0 + EPS, "r = {}", r);
        }
    }

    #[test]
    fn star_inside_min_radius_respawns_in_shell() {
        let (mut field, mut points, mut rng) = field(20, 200.0, 900.0);
        for p in points.as_mut_slice() {
            p.set_position(Vec3::new(1.0, 0.0, 0.0));
        }
        let respawned = field.advance(&mut points, &mut rng);
        assert_eq!(respawned, 20);
        for p in points.as_slice() {
            let r = p.position().length();
            assert!(r >= 200.0 - EPS && r <= 900.0 + EPS, "r = {}", r);
        }
    }

    #[test]
    fn star_beyond_max_radius_respawns_in_shell() {
        let (mut field, mut points, mut rng) = field(5, 200.0, 900.0);
        points.as_mut_slice()[0].set_position(Vec3::new(5000.0, 0.0, 0.0));
        assert!(field.advance(&mut points, &mut rng) >= 1);
        let r = points.as_slice()[0].position().length();
        assert!(r <= 900.0 + EPS);
    }

    #[test]
    fn stars_in_shell_just_drift() {
        let (mut field, mut points, mut rng) = field(50, 200.0, 900.0);
        for p in points.as_mut_slice() {
            p.set_position(Vec3::new(0.0, 550.0, 0.0));
        }
        assert_eq!(field.advance(&mut points, &mut rng), 0);
        for p in points.as_slice() {
            let delta = p.position() - Vec3::new(0.0, 550.0, 0.0);
            assert!(delta.abs().max_element() <= 0.02 + 1e-4);
        }
    }

    #[test]
    fn colors_are_mostly_white() {
        let mut rng = Rng::new(3);
        let neutral = (0..1000)
            .map(|_| star_color(&mut rng, 0.1))
            .filter(|c| c[0] == c[1] && c[1] == c[2])
            .count();
        assert!(neutral > 850 && neutral < 950, "neutral = {}", neutral);
    }
}
