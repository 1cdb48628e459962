use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One point sprite (8 floats = 32 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Point size in world units (the host attenuates by depth).
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub alpha: f32,
}

impl PointInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(position: Vec3, size: f32, color: [f32; 3]) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            size,
            r: color[0],
            g: color[1],
            b: color[2],
            alpha: 1.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn set_position(&mut self, p: Vec3) {
        self.x = p.x;
        self.y = p.y;
        self.z = p.z;
    }
}

/// Point cloud shared with the host. Unlike the mesh buffer this is not
/// rebuilt per frame: the owner mutates positions in place.
pub struct PointBuffer {
    points: Vec<PointInstance>,
    capacity: usize,
}

impl PointBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point. Returns false (and drops the point) once full.
    pub fn push(&mut self, point: PointInstance) -> bool {
        if self.points.len() >= self.capacity {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn as_slice(&self) -> &[PointInstance] {
        &self.points
    }

    pub fn as_mut_slice(&mut self) -> &mut [PointInstance] {
        &mut self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::with_capacity(4096)
    }
}
