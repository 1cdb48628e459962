use crate::assets::registry::TextureId;

/// RGB color for mesh rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl MeshColor {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Blend toward white by `amount` (0.0 = unchanged, 1.0 = white).
    pub fn lighten(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        Self {
            r: self.r + (1.0 - self.r) * t,
            g: self.g + (1.0 - self.g) * t,
            b: self.b + (1.0 - self.b) * t,
        }
    }
}

impl Default for MeshColor {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

impl From<(f32, f32, f32)> for MeshColor {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Self { r, g, b }
    }
}

/// Mesh shape primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    Sphere { radius: f32 },
    /// Flat annulus in the entity's local XZ plane (normal = local +Y).
    Ring { inner_radius: f32, outer_radius: f32 },
}

impl MeshShape {
    /// Wire-format discriminant.
    pub fn kind(&self) -> f32 {
        match self {
            MeshShape::Sphere { .. } => 0.0,
            MeshShape::Ring { .. } => 1.0,
        }
    }
}

/// Component for renderable, pickable meshes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub shape: MeshShape,
    pub color: MeshColor,
    /// 1.0 = opaque.
    pub opacity: f32,
    /// HDR glow multiplier (0.0 = none); the host's bloom pass keys off this.
    pub emissive: f32,
    /// Phong specular exponent (default: 32.0).
    pub shininess: f32,
    /// Texture slot; `None` renders untextured.
    pub texture: Option<TextureId>,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: MeshShape::Sphere { radius: 1.0 },
            color: MeshColor::default(),
            opacity: 1.0,
            emissive: 0.0,
            shininess: 32.0,
            texture: None,
        }
    }
}

impl MeshComponent {
    pub fn new(shape: MeshShape, color: MeshColor) -> Self {
        Self {
            shape,
            color,
            ..Default::default()
        }
    }

    pub fn sphere(radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Sphere { radius }, color)
    }

    pub fn ring(inner_radius: f32, outer_radius: f32, color: MeshColor) -> Self {
        Self::new(MeshShape::Ring { inner_radius, outer_radius }, color)
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_texture(mut self, texture: Option<TextureId>) -> Self {
        self.texture = texture;
        self
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}
