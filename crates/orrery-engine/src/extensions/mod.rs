// extensions/mod.rs
//
// Optional extension modules for the engine.
// Decoupled from core Entity/Scene: games opt in by registering entities here.

pub mod transform;

pub use transform::{TransformGraph, LocalTransform};
