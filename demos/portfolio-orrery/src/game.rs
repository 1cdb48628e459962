/// Portfolio Orrery: a 3D solar system where each planet is a project.
///
/// Drag to orbit the camera, scroll to zoom, click a body to open its popup.
/// DOM controls (info, close, download, reset view) arrive as custom events.

use glam::Vec2;
use orrery_engine::{EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue};

use crate::bodies::Celestial;
use crate::config::OrreryConfig;
use crate::frame;
use crate::pick;
use crate::popup::{PopupState, EVENT_DOWNLOAD_REQUESTED};
use crate::scene_builder::SolarScene;

// ── Custom event kinds from the DOM overlay ─────────────────────────

const CUSTOM_INFO: u32 = 1;
const CUSTOM_CLOSE: u32 = 2;
const CUSTOM_DOWNLOAD: u32 = 3;
const CUSTOM_RESET_VIEW: u32 = 4;

const KEY_ESCAPE: u32 = 27;

/// Pointer press being tracked for click-vs-drag.
#[derive(Debug, Clone, Copy)]
struct Press {
    start: Vec2,
    last: Vec2,
    dragged: bool,
}

pub struct PortfolioOrrery {
    config: OrreryConfig,
    solar: Option<SolarScene>,
    popup: PopupState,
    press: Option<Press>,
}

impl PortfolioOrrery {
    pub fn new() -> Self {
        Self::with_config(OrreryConfig::default())
    }

    pub fn with_config(config: OrreryConfig) -> Self {
        Self {
            config,
            solar: None,
            popup: PopupState::new(),
            press: None,
        }
    }

    pub fn popup(&self) -> &PopupState {
        &self.popup
    }

    pub fn solar(&self) -> Option<&SolarScene> {
        self.solar.as_ref()
    }

    /// Resolve a click in NDC and open the body's popup. Misses change nothing.
    pub fn click_ndc(&mut self, ctx: &mut EngineContext, ndc: Vec2) -> Option<Celestial> {
        let solar = self.solar.as_ref()?;
        let picked = pick::pick_ndc(ctx, solar, ndc)?;
        log::info!("selected {}", picked.name());
        self.popup.show(picked);
        self.popup_changed(ctx);
        Some(picked)
    }

    fn click(&mut self, ctx: &mut EngineContext, x: f32, y: f32) {
        let ndc = ctx.camera.screen_to_ndc(x, y);
        self.click_ndc(ctx, ndc);
    }

    fn popup_changed(&self, ctx: &mut EngineContext) {
        ctx.emit_event(self.popup.changed_event());
        ctx.touch_overlay();
    }

    fn handle_custom(&mut self, ctx: &mut EngineContext, kind: u32) {
        match kind {
            CUSTOM_INFO => {
                self.popup.show_welcome();
                self.popup_changed(ctx);
            }
            CUSTOM_CLOSE => {
                if self.popup.close() {
                    self.popup_changed(ctx);
                }
            }
            CUSTOM_DOWNLOAD => match self.popup.download_target() {
                Some(document) => match ctx.manifest.document_index(document) {
                    Some(index) => {
                        log::info!("download requested: {} (document {})", document, index);
                        ctx.emit_event(GameEvent::new(EVENT_DOWNLOAD_REQUESTED, index as f32, 0.0, 0.0));
                    }
                    None => log::warn!("document '{}' is not in the asset manifest", document),
                },
                None => log::warn!("download control used with no downloadable popup open"),
            },
            CUSTOM_RESET_VIEW => ctx.camera.reset(),
            other => log::warn!("unknown custom event kind {}", other),
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => {
                    let p = Vec2::new(x, y);
                    self.press = Some(Press { start: p, last: p, dragged: false });
                }
                InputEvent::PointerMove { x, y } => {
                    let threshold = self.config.drag_threshold;
                    if let Some(press) = self.press.as_mut() {
                        let p = Vec2::new(x, y);
                        if p.distance(press.start) > threshold {
                            press.dragged = true;
                        }
                        if press.dragged {
                            let delta = p - press.last;
                            ctx.camera.orbit(delta.x, delta.y);
                        }
                        press.last = p;
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    if let Some(press) = self.press.take() {
                        let moved = Vec2::new(x, y).distance(press.start) > self.config.drag_threshold;
                        if !press.dragged && !moved {
                            self.click(ctx, x, y);
                        }
                    }
                }
                InputEvent::Wheel { delta_y } => ctx.camera.zoom(delta_y),
                InputEvent::KeyDown { key_code: KEY_ESCAPE } => {
                    if self.popup.close() {
                        self.popup_changed(ctx);
                    }
                }
                InputEvent::Custom { kind, .. } => self.handle_custom(ctx, kind),
                _ => {}
            }
        }
    }
}

impl Default for PortfolioOrrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for PortfolioOrrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_meshes: 128,
            max_line_vertices: 4096,
            max_points: self.config.star_count,
            camera_elevation: 0.35,
            camera_distance: 300.0,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.solar = Some(SolarScene::build(ctx, &self.config));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        self.handle_input(ctx, input);
        if let Some(solar) = self.solar.as_mut() {
            frame::advance(solar, ctx, &self.config);
        }
    }

    fn on_manifest(&mut self, ctx: &mut EngineContext) {
        if let Some(solar) = self.solar.as_ref() {
            solar.apply_textures(ctx);
        }
    }

    fn overlay_json(&self) -> Option<String> {
        match self.popup.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("failed to serialize popup: {}", e);
                None
            }
        }
    }
}
