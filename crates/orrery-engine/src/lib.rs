pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape, MeshColor};
pub use core::scene::Scene;
pub use core::rng::Rng;
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{MeshInstance, MeshBuffer};
pub use renderer::points::{PointInstance, PointBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{TextureId, TextureRegistry};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lines::{LineState, LineVertex, LineColor};
pub use systems::picking::{Ray, RayHit, raycast, resolve_named};
pub use systems::render::build_mesh_buffer;

// Extensions: decoupled optional systems
pub use extensions::{TransformGraph, LocalTransform};
