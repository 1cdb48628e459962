//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no allocation.

use glam::Vec3;

/// Seedable pseudo-random number generator (xorshift64).
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [min, max).
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Uniform float in [-extent, extent).
    pub fn symmetric(&mut self, extent: f32) -> f32 {
        self.range(-extent, extent)
    }

    /// Unit vector distributed uniformly by solid angle.
    pub fn unit_sphere(&mut self) -> Vec3 {
        let theta = self.next_f32() * std::f32::consts::TAU;
        let phi = (1.0 - 2.0 * self.next_f32()).clamp(-1.0, 1.0).acos();
        Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = Rng::new(42);
        let mut rng2 = Rng::new(42);
        for _ in 0..10 {
            assert_eq!(rng1.next_int(1000), rng2.next_int(1000));
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = Rng::new(0);
        let _ = rng.next_int(100);
        assert_eq!(rng.next_int(0), 0);
    }

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v), "v = {v}");
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = Rng::new(99);
        for _ in 0..1000 {
            let v = rng.range(200.0, 900.0);
            assert!(v >= 200.0 && v < 900.0);
        }
    }

    #[test]
    fn unit_sphere_is_normalized_and_covers_both_hemispheres() {
        let mut rng = Rng::new(3);
        let (mut up, mut down) = (0, 0);
        for _ in 0..2000 {
            let v = rng.unit_sphere();
            assert!((v.length() - 1.0).abs() < 1e-4);
            if v.y > 0.0 { up += 1 } else { down += 1 }
        }
        // Uniform by solid angle: each hemisphere gets roughly half.
        assert!(up > 800 && down > 800, "up={up} down={down}");
    }
}
