/// Body table: sizes, orbits and looks for the sun and the seven planets.
///
/// Distances and sizes are scene units, not astronomy. Speeds are radians per frame.

use orrery_engine::MeshColor;

/// Every pickable body, in table order. The discriminant is the wire index
/// reported in `PopupChanged` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Celestial {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
}

impl Celestial {
    pub const ALL: [Celestial; 8] = [
        Celestial::Sun,
        Celestial::Mercury,
        Celestial::Venus,
        Celestial::Earth,
        Celestial::Mars,
        Celestial::Jupiter,
        Celestial::Saturn,
        Celestial::Uranus,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Celestial::Sun => "Sun",
            Celestial::Mercury => "Mercury",
            Celestial::Venus => "Venus",
            Celestial::Earth => "Earth",
            Celestial::Mars => "Mars",
            Celestial::Jupiter => "Jupiter",
            Celestial::Saturn => "Saturn",
            Celestial::Uranus => "Uranus",
        }
    }

    /// Reverse of `name`, used when resolving a picked entity's tag.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Which decoration set a planet gets. Chosen once, at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Sphere and glow only.
    Plain,
    /// Semi-transparent cloud shell that spins on its own.
    Clouded,
    /// Small tinted storm spot on the surface.
    Spotted,
    /// Flat ring plus a band of dust.
    Ringed,
    /// Sparkles scattered in a cube around the body.
    Sparkling,
}

/// Immutable per-planet parameters.
#[derive(Debug, Clone, Copy)]
pub struct BodyDescriptor {
    pub celestial: Celestial,
    pub kind: BodyKind,
    /// Sphere radius.
    pub size: f32,
    /// Orbit radius around the origin.
    pub distance: f32,
    /// Orbital advance per frame (radians).
    pub angular_speed: f32,
    /// Spin per frame (radians). `None` uses the configured default.
    pub rotation_speed: Option<f32>,
    pub color: MeshColor,
    /// Texture name looked up in the asset manifest.
    pub texture: &'static str,
}

/// Central body parameters.
#[derive(Debug, Clone, Copy)]
pub struct SunDescriptor {
    pub size: f32,
    pub color: MeshColor,
    pub emissive: f32,
    pub texture: &'static str,
}

pub const SUN: SunDescriptor = SunDescriptor {
    size: 16.0,
    color: MeshColor::new(1.0, 0.8, 0.3),
    emissive: 2.5,
    texture: "sun",
};

pub const PLANETS: [BodyDescriptor; 7] = [
    BodyDescriptor {
        celestial: Celestial::Mercury,
        kind: BodyKind::Plain,
        size: 2.0,
        distance: 28.0,
        angular_speed: 0.020,
        rotation_speed: Some(0.004),
        color: MeshColor::new(0.70, 0.65, 0.60),
        texture: "mercury",
    },
    BodyDescriptor {
        celestial: Celestial::Venus,
        kind: BodyKind::Plain,
        size: 3.2,
        distance: 38.0,
        angular_speed: 0.015,
        rotation_speed: Some(0.002),
        color: MeshColor::new(0.90, 0.70, 0.40),
        texture: "venus",
    },
    BodyDescriptor {
        celestial: Celestial::Earth,
        kind: BodyKind::Clouded,
        size: 3.6,
        distance: 52.0,
        angular_speed: 0.010,
        rotation_speed: Some(0.020),
        color: MeshColor::new(0.25, 0.50, 0.90),
        texture: "earth",
    },
    BodyDescriptor {
        celestial: Celestial::Mars,
        kind: BodyKind::Plain,
        size: 2.6,
        distance: 66.0,
        angular_speed: 0.008,
        rotation_speed: Some(0.018),
        color: MeshColor::new(0.85, 0.35, 0.20),
        texture: "mars",
    },
    BodyDescriptor {
        celestial: Celestial::Jupiter,
        kind: BodyKind::Spotted,
        size: 8.0,
        distance: 90.0,
        angular_speed: 0.004,
        rotation_speed: Some(0.040),
        color: MeshColor::new(0.85, 0.70, 0.50),
        texture: "jupiter",
    },
    BodyDescriptor {
        celestial: Celestial::Saturn,
        kind: BodyKind::Ringed,
        size: 7.0,
        distance: 118.0,
        angular_speed: 0.003,
        rotation_speed: Some(0.038),
        color: MeshColor::new(0.90, 0.80, 0.55),
        texture: "saturn",
    },
    BodyDescriptor {
        celestial: Celestial::Uranus,
        kind: BodyKind::Sparkling,
        size: 5.0,
        distance: 142.0,
        angular_speed: 0.002,
        rotation_speed: None,
        color: MeshColor::new(0.55, 0.80, 0.90),
        texture: "uranus",
    },
];

/// Largest orbit radius in the table.
pub fn farthest_distance() -> f32 {
    PLANETS.iter().map(|p| p.distance).fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_table_order() {
        for (i, c) in Celestial::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        for (i, p) in PLANETS.iter().enumerate() {
            assert_eq!(p.celestial.index(), i + 1);
        }
    }

    #[test]
    fn names_round_trip() {
        assert_eq!(Celestial::from_name("Saturn"), Some(Celestial::Saturn));
        assert_eq!(Celestial::from_name(""), None);
        assert_eq!(Celestial::from_name("Pluto"), None);
    }

    #[test]
    fn orbits_are_ordered_and_clear_the_sun() {
        let mut last = SUN.size;
        for p in &PLANETS {
            assert!(p.distance > last, "{} overlaps inner orbit", p.celestial.name());
            last = p.distance;
        }
        assert_eq!(farthest_distance(), 142.0);
    }

    #[test]
    fn decoration_kinds() {
        let kind = |c: Celestial| PLANETS.iter().find(|p| p.celestial == c).unwrap().kind;
        assert_eq!(kind(Celestial::Earth), BodyKind::Clouded);
        assert_eq!(kind(Celestial::Jupiter), BodyKind::Spotted);
        assert_eq!(kind(Celestial::Saturn), BodyKind::Ringed);
        assert_eq!(kind(Celestial::Uranus), BodyKind::Sparkling);
        assert_eq!(kind(Celestial::Mars), BodyKind::Plain);
    }
}
