use orrery_engine::{
    Game, GameConfig, EngineContext, AssetManifest,
    InputEvent, InputQueue, MeshBuffer, CameraUniform, ProtocolLayout, TextureId,
};
use orrery_engine::bridge::protocol::{
    HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_MESH_COUNT, HEADER_TRANSLUCENT_START,
    HEADER_LINE_VERTEX_COUNT, HEADER_POINT_COUNT, HEADER_EVENT_COUNT,
    HEADER_VIEWPORT_WIDTH, HEADER_VIEWPORT_HEIGHT, HEADER_OVERLAY_REVISION,
};
use orrery_engine::systems::render::build_mesh_buffer;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner via `export_game!`
/// and exports free functions through `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    mesh_buffer: MeshBuffer,
    camera_uniform: CameraUniform,
    header: [f32; HEADER_FLOATS],
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    frame: u32,
    overlay_json: String,
    overlay_seen: Option<u32>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::from_config(&config),
            mesh_buffer: MeshBuffer::with_capacity(config.max_meshes),
            camera_uniform: CameraUniform::default(),
            header: layout.header(&config),
            game,
            input: InputQueue::new(),
            layout,
            config,
            initialized: false,
            frame: 0,
            overlay_json: String::from("{}"),
            overlay_seen: None,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.publish();
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: apply input, update the game once, rebuild buffers.
    /// `dt` is informational only; motion advances by a fixed amount per tick.
    pub fn tick(&mut self, _dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        if let Some((width, height)) = self.input.last_resize() {
            self.ctx.camera.resize(width, height);
        }

        self.game.update(&mut self.ctx, &self.input);

        // Drain input after update
        self.input.drain();

        self.frame = self.frame.wrapping_add(1);
        self.publish();
    }

    /// Rebuild everything the host reads between ticks.
    fn publish(&mut self) {
        self.ctx.camera.update();
        self.ctx.graph.propagate(&mut self.ctx.scene);
        build_mesh_buffer(&self.ctx.scene, &mut self.mesh_buffer);
        if self.mesh_buffer.instance_count() as usize > self.layout.max_meshes {
            log::warn!(
                "{} meshes exceed capacity {}, host will truncate",
                self.mesh_buffer.instance_count(),
                self.layout.max_meshes
            );
        }
        self.ctx.lines.rebuild();
        self.camera_uniform = self.ctx.camera.uniform();

        let revision = self.ctx.overlay_revision();
        if self.overlay_seen != Some(revision) {
            if let Some(json) = self.game.overlay_json() {
                self.overlay_json = json;
            }
            self.overlay_seen = Some(revision);
        }

        let h = &mut self.header;
        h[HEADER_FRAME_COUNTER] = self.frame as f32;
        h[HEADER_MESH_COUNT] = self.mesh_buffer.instance_count().min(self.layout.max_meshes as u32) as f32;
        h[HEADER_TRANSLUCENT_START] = self.mesh_buffer.translucent_start as f32;
        h[HEADER_LINE_VERTEX_COUNT] = self.ctx.lines.vertex_count() as f32;
        h[HEADER_POINT_COUNT] = self.ctx.points.len() as f32;
        h[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        h[HEADER_VIEWPORT_WIDTH] = self.ctx.camera.viewport_width;
        h[HEADER_VIEWPORT_HEIGHT] = self.ctx.camera.viewport_height;
        h[HEADER_OVERLAY_REVISION] = revision as f32;
    }

    /// Parse and install an asset manifest. A malformed manifest is logged
    /// and the previous one stays in place.
    pub fn load_manifest(&mut self, json: &str) {
        match AssetManifest::from_json(json) {
            Ok(manifest) => {
                log::info!(
                    "manifest loaded: {} textures, {} images, {} documents",
                    manifest.textures.len(),
                    manifest.images.len(),
                    manifest.documents.len()
                );
                self.ctx.set_manifest(manifest);
                self.game.on_manifest(&mut self.ctx);
            }
            Err(e) => log::error!("failed to parse asset manifest: {}", e),
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        (&self.camera_uniform as *const CameraUniform).cast::<f32>()
    }

    pub fn mesh_instances_ptr(&self) -> *const f32 {
        self.mesh_buffer.instances_ptr()
    }

    pub fn mesh_instance_count(&self) -> u32 {
        self.mesh_buffer.instance_count().min(self.layout.max_meshes as u32)
    }

    pub fn translucent_start(&self) -> u32 {
        self.mesh_buffer.translucent_start
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.ctx.lines.vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.ctx.lines.vertex_count()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.ctx.points.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.ctx.points.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.camera.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.camera.viewport_height
    }

    // ---- Overlay / assets ----

    pub fn overlay_json(&self) -> String {
        self.overlay_json.clone()
    }

    pub fn overlay_revision(&self) -> u32 {
        self.ctx.overlay_revision()
    }

    pub fn texture_count(&self) -> u32 {
        self.ctx.textures.len() as u32
    }

    pub fn texture_path(&self, slot: u32) -> Option<String> {
        self.ctx.textures.path(TextureId(slot)).map(str::to_owned)
    }

    pub fn image_path(&self, name: &str) -> Option<String> {
        self.ctx.manifest.image_path(name).map(str::to_owned)
    }

    pub fn document_path(&self, name: &str) -> Option<String> {
        self.ctx.manifest.document_path(name).map(str::to_owned)
    }

    /// Resolve the document id carried by a `DownloadRequested` event.
    pub fn document_path_at(&self, index: u32) -> Option<String> {
        self.ctx.manifest.document_path_at(index as usize).map(str::to_owned)
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_meshes(&self) -> u32 {
        self.layout.max_meshes as u32
    }

    pub fn max_line_vertices(&self) -> u32 {
        self.layout.max_line_vertices as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn game(&self) -> &G {
        &self.game
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Entity, GameEvent, MeshColor, MeshComponent};
    use orrery_engine::extensions::LocalTransform;
    use glam::Vec3;

    struct Spinner {
        updates: u32,
        manifests: u32,
    }

    impl Game for Spinner {
        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Entity::new(id).with_tag("ball").with_mesh(MeshComponent::sphere(2.0, MeshColor::WHITE)));
            ctx.graph.register_with(id, LocalTransform::from_translation(Vec3::new(5.0, 0.0, 0.0)));
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            if input.iter().any(|e| matches!(e, InputEvent::Custom { .. })) {
                ctx.emit_event(GameEvent::new(9.0, 0.0, 0.0, 0.0));
                ctx.touch_overlay();
            }
        }

        fn on_manifest(&mut self, _ctx: &mut EngineContext) {
            self.manifests += 1;
        }

        fn overlay_json(&self) -> Option<String> {
            Some(format!("{{\"updates\":{}}}", self.updates))
        }
    }

    fn runner() -> GameRunner<Spinner> {
        let mut r = GameRunner::new(Spinner { updates: 0, manifests: 0 });
        r.init();
        r
    }

    #[test]
    fn init_publishes_first_frame() {
        let r = runner();
        assert_eq!(r.mesh_instance_count(), 1);
        assert_eq!(r.context().scene.find_by_tag("ball").unwrap().pos, Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn one_update_per_tick_regardless_of_dt() {
        let mut r = runner();
        r.tick(0.5);
        r.tick(0.001);
        assert_eq!(r.game().updates, 2);
    }

    #[test]
    fn resize_reaches_camera() {
        let mut r = runner();
        r.push_input(InputEvent::Resize { width: 1024.0, height: 512.0 });
        r.tick(0.016);
        assert_eq!(r.viewport_width(), 1024.0);
        assert_eq!(r.context().camera.aspect(), 2.0);
    }

    #[test]
    fn events_live_for_one_frame_and_overlay_refreshes() {
        let mut r = runner();
        r.push_input(InputEvent::Custom { kind: 1, a: 0.0, b: 0.0, c: 0.0 });
        r.tick(0.016);
        assert_eq!(r.game_events_len(), 1);
        assert_eq!(r.overlay_json(), "{\"updates\":1}");
        r.tick(0.016);
        assert_eq!(r.game_events_len(), 0);
        // Unchanged revision keeps the cached JSON.
        assert_eq!(r.overlay_json(), "{\"updates\":1}");
    }

    #[test]
    fn bad_manifest_keeps_previous() {
        let mut r = runner();
        r.load_manifest(r#"{ "textures": { "earth": "earth.jpg" } }"#);
        r.load_manifest("not json");
        assert_eq!(r.texture_count(), 1);
        assert_eq!(r.texture_path(0).as_deref(), Some("earth.jpg"));
        assert_eq!(r.game().manifests, 1);
    }

    #[test]
    fn document_ids_resolve_to_paths() {
        let mut r = runner();
        r.load_manifest(r#"{ "documents": { "resume": "docs/resume.pdf" } }"#);
        assert_eq!(r.document_path_at(0).as_deref(), Some("docs/resume.pdf"));
        assert_eq!(r.document_path_at(1), None);
    }
}
