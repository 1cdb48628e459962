use bytemuck::{Pod, Zeroable};

/// Per-instance mesh data read by the TypeScript renderer.
/// 28 floats = 112 bytes stride.
///
/// The model matrix already folds in the shape radius, so the host draws a
/// unit sphere (or unit annulus with `ring_inner` as inner/outer ratio).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Column-major model matrix.
    pub model: [f32; 16],
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    pub emissive: f32,
    pub shininess: f32,
    /// 0 = sphere, 1 = ring.
    pub shape: f32,
    /// Ring inner radius as a fraction of the outer radius (0 for spheres).
    pub ring_inner: f32,
    /// Texture slot, or -1 when untextured.
    pub texture: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 28;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Mesh instances for one frame, opaque first then translucent.
pub struct MeshBuffer {
    instances: Vec<MeshInstance>,
    /// Index of the first translucent instance.
    pub translucent_start: u32,
}

impl MeshBuffer {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            translucent_start: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.translucent_start = 0;
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for MeshBuffer {
    fn default() -> Self {
        Self::new()
    }
}
