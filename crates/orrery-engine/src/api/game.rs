use crate::api::types::{EntityId, GameEvent};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::TextureRegistry;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::extensions::transform::TransformGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::points::PointBuffer;
use crate::systems::lines::LineState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport size in CSS pixels (replaced by the first resize).
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Maximum number of mesh instances (default: 128).
    pub max_meshes: usize,
    /// Maximum number of line vertices (default: 4096).
    pub max_line_vertices: usize,
    /// Maximum number of points (default: 4096).
    pub max_points: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the shared RNG.
    pub seed: u64,
    /// Camera home placement: azimuth and elevation in radians, distance in world units.
    pub camera_azimuth: f32,
    pub camera_elevation: f32,
    pub camera_distance: f32,
    pub camera_min_distance: f32,
    pub camera_max_distance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            max_meshes: 128,
            max_line_vertices: 4096,
            max_points: 4096,
            max_events: 32,
            seed: 42,
            camera_azimuth: 0.0,
            camera_elevation: 0.35,
            camera_distance: 300.0,
            camera_min_distance: 20.0,
            camera_max_distance: 1500.0,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The frame tick. Runs once per display refresh.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Called after a new asset manifest has been loaded into `ctx`.
    fn on_manifest(&mut self, _ctx: &mut EngineContext) {}

    /// JSON for the host's DOM overlay, if the game has one.
    fn overlay_json(&self) -> Option<String> {
        None
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub graph: TransformGraph,
    pub camera: Camera3D,
    pub lines: LineState,
    pub points: PointBuffer,
    pub events: Vec<GameEvent>,
    pub rng: Rng,
    pub manifest: AssetManifest,
    pub textures: TextureRegistry,
    max_events: usize,
    overlay_revision: u32,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let mut camera = Camera3D::new(config.viewport_width, config.viewport_height);
        camera.min_distance = config.camera_min_distance;
        camera.max_distance = config.camera_max_distance;
        camera.set_home(config.camera_azimuth, config.camera_elevation, config.camera_distance);

        Self {
            scene: Scene::with_capacity(config.max_meshes),
            graph: TransformGraph::new(),
            camera,
            lines: LineState::new(config.max_line_vertices),
            points: PointBuffer::with_capacity(config.max_points),
            events: Vec::with_capacity(config.max_events),
            rng: Rng::new(config.seed),
            manifest: AssetManifest::default(),
            textures: TextureRegistry::new(),
            max_events: config.max_events,
            overlay_revision: 0,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to TypeScript.
    /// Events past the per-frame capacity are dropped with a warning.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event queue full, dropping event kind {}", event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Mark the overlay as changed so the host re-reads its JSON.
    pub fn touch_overlay(&mut self) {
        self.overlay_revision = self.overlay_revision.wrapping_add(1);
    }

    pub fn overlay_revision(&self) -> u32 {
        self.overlay_revision
    }

    /// Replace the manifest and rebuild texture slots from it.
    pub fn set_manifest(&mut self, manifest: AssetManifest) {
        self.textures = TextureRegistry::from_manifest(&manifest);
        self.manifest = manifest;
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), EntityId(1));
        assert_eq!(ctx.next_id(), EntityId(2));
    }

    #[test]
    fn events_respect_capacity() {
        let config = GameConfig { max_events: 2, ..Default::default() };
        let mut ctx = EngineContext::from_config(&config);
        for i in 0..3 {
            ctx.emit_event(GameEvent::new(1.0, i as f32, 0.0, 0.0));
        }
        assert_eq!(ctx.events.len(), 2);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn camera_uses_configured_home() {
        let config = GameConfig { camera_distance: 400.0, ..Default::default() };
        let ctx = EngineContext::from_config(&config);
        assert_eq!(ctx.camera.distance, 400.0);
    }

    #[test]
    fn set_manifest_assigns_texture_slots() {
        let mut ctx = EngineContext::new();
        let manifest = AssetManifest::from_json(r#"{ "textures": { "earth": "earth.jpg" } }"#).unwrap();
        ctx.set_manifest(manifest);
        assert!(ctx.textures.get("earth").is_some());
    }
}
