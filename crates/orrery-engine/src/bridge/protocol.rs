/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 24 floats]
/// [Meshes: max_meshes × 28 floats]
/// [Lines: max_line_vertices × 7 floats]
/// [Points: max_points × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;
use crate::renderer::points::PointInstance;
use crate::systems::lines::LineVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_MESHES: usize = 2;
pub const HEADER_MESH_COUNT: usize = 3;
pub const HEADER_TRANSLUCENT_START: usize = 4;
pub const HEADER_MAX_LINE_VERTICES: usize = 5;
pub const HEADER_LINE_VERTEX_COUNT: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_MAX_POINTS: usize = 9;
pub const HEADER_POINT_COUNT: usize = 10;
pub const HEADER_MAX_EVENTS: usize = 11;
pub const HEADER_EVENT_COUNT: usize = 12;
pub const HEADER_PROTOCOL_VERSION: usize = 13;
/// Bumped whenever the overlay JSON changes; the host re-reads it on change.
pub const HEADER_OVERLAY_REVISION: usize = 14;
pub const HEADER_RESERVED: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 2.0;

/// Floats in the camera section (wire format, never changes).
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per mesh instance (wire format, never changes).
pub const MESH_INSTANCE_FLOATS: usize = MeshInstance::FLOATS;

/// Floats per line vertex: x, y, z, r, g, b, a.
pub const LINE_VERTEX_FLOATS: usize = LineVertex::FLOATS;

/// Floats per point: x, y, z, size, r, g, b, alpha.
pub const POINT_FLOATS: usize = PointInstance::FLOATS;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_meshes: usize,
    pub max_line_vertices: usize,
    pub max_points: usize,
    pub max_events: usize,

    pub camera_offset: usize,
    /// Offset (in floats) where mesh data begins.
    pub mesh_data_offset: usize,
    pub line_data_offset: usize,
    pub point_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_meshes: usize, max_line_vertices: usize, max_points: usize, max_events: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let mesh_data_offset = camera_offset + CAMERA_FLOATS;
        let line_data_offset = mesh_data_offset + max_meshes * MESH_INSTANCE_FLOATS;
        let point_data_offset = line_data_offset + max_line_vertices * LINE_VERTEX_FLOATS;
        let event_data_offset = point_data_offset + max_points * POINT_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_meshes,
            max_line_vertices,
            max_points,
            max_events,
            camera_offset,
            mesh_data_offset,
            line_data_offset,
            point_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_meshes,
            config.max_line_vertices,
            config.max_points,
            config.max_events,
        )
    }

    /// Static header fields. Per-frame counts are filled in by the runner.
    pub fn header(&self, config: &GameConfig) -> [f32; HEADER_FLOATS] {
        let mut h = [0.0; HEADER_FLOATS];
        h[HEADER_MAX_MESHES] = self.max_meshes as f32;
        h[HEADER_MAX_LINE_VERTICES] = self.max_line_vertices as f32;
        h[HEADER_MAX_POINTS] = self.max_points as f32;
        h[HEADER_MAX_EVENTS] = self.max_events as f32;
        h[HEADER_VIEWPORT_WIDTH] = config.viewport_width;
        h[HEADER_VIEWPORT_HEIGHT] = config.viewport_height;
        h[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        h
    }
}
