//! World-space line drawing (guides, paths).
//!
//! Lines are stored as closed loops and flattened into a segment list
//! (two vertices per segment) for the host's line-list pipeline.
//!
//! ```ignore
//! ctx.lines.add_loop(&orbit_points, LineColor::new(0.5, 0.5, 0.6, 0.3));
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Per-vertex data for line rendering. 7 floats = 28 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// RGBA color for line drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

impl Default for LineColor {
    fn default() -> Self {
        Self::WHITE
    }
}

#[derive(Debug, Clone)]
struct LineLoop {
    points: Vec<Vec3>,
    color: LineColor,
}

/// Persistent line set. The vertex buffer is rebuilt lazily when lines change.
pub struct LineState {
    lines: Vec<LineLoop>,
    vertices: Vec<LineVertex>,
    max_vertices: usize,
    dirty: bool,
}

impl LineState {
    pub fn new(max_vertices: usize) -> Self {
        Self {
            lines: Vec::new(),
            vertices: Vec::with_capacity(max_vertices),
            max_vertices,
            dirty: false,
        }
    }

    /// Add a closed loop (last point joins the first).
    pub fn add_loop(&mut self, points: &[Vec3], color: LineColor) {
        if points.len() < 2 {
            return;
        }
        self.lines.push(LineLoop { points: points.to_vec(), color });
        self.dirty = true;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.vertices.clear();
        self.dirty = false;
    }

    /// Flatten loops into segment vertices. Output past `max_vertices`
    /// is dropped with a warning.
    pub fn rebuild(&mut self) {
        if !self.dirty {
            return;
        }
        self.vertices.clear();
        let mut truncated = false;
        'lines: for line in &self.lines {
            let n = line.points.len();
            for i in 0..n {
                if self.vertices.len() + 2 > self.max_vertices {
                    truncated = true;
                    break 'lines;
                }
                let a = line.points[i];
                let b = line.points[(i + 1) % n];
                self.vertices.push(vertex(a, line.color));
                self.vertices.push(vertex(b, line.color));
            }
        }
        if truncated {
            log::warn!("LineState: vertex capacity {} exceeded, lines truncated", self.max_vertices);
        }
        self.dirty = false;
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

fn vertex(p: Vec3, c: LineColor) -> LineVertex {
    LineVertex { x: p.x, y: p.y, z: p.z, r: c.r, g: c.g, b: c.b, a: c.a }
}
