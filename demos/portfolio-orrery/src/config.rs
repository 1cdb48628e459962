/// Scene tuning knobs. Content (bodies, popups) lives in its own tables.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Number of background stars.
    pub star_count: usize,
    /// Gap between the farthest orbit and the inner edge of the star shell.
    pub star_margin: f32,
    /// Outer radius of the star shell.
    pub star_outer_radius: f32,
    /// Max per-axis star drift per frame.
    pub star_drift: f32,
    /// Fraction of stars that get a colored tint.
    pub star_tint_chance: f32,
    /// Planet spin per frame when the body table leaves it unset.
    pub default_rotation_speed: f32,
    /// Cloud shell spin per frame, on top of the planet's own spin.
    pub cloud_spin: f32,
    /// Sun spin per frame.
    pub sun_spin: f32,
    /// Pointer travel (CSS pixels) before a press becomes a drag.
    pub drag_threshold: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            star_count: 3000,
            star_margin: 60.0,
            star_outer_radius: 900.0,
            star_drift: 0.02,
            star_tint_chance: 0.1,
            default_rotation_speed: 0.01,
            cloud_spin: 0.005,
            sun_spin: 0.004,
            drag_threshold: 5.0,
        }
    }
}
